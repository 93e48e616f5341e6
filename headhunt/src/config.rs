// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Settings for board generation.
use std::time::Duration;

use enumflags2::BitFlags;
use thiserror::Error;

use crate::aircraft::Orientation;

/// Error returned for settings that can never produce a board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// No orientation was allowed, so no aircraft can be drawn.
    #[error("at least one aircraft orientation must be allowed")]
    NoOrientations,
}

/// Controls how boards are generated.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GenerationConfig {
    /// Longest time a single assembly attempt may run before it is abandoned.
    pub max_duration: Duration,

    /// Orientations aircraft may be drawn with.
    pub orientations: BitFlags<Orientation>,

    /// Seed for reproducible boards. Drawn from the OS when `None`.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// Default time limit for one assembly attempt.
    pub const DEFAULT_MAX_DURATION: Duration = Duration::from_secs(3);
}

impl Default for GenerationConfig {
    /// Three second attempts, all orientations, unseeded.
    fn default() -> Self {
        Self {
            max_duration: Self::DEFAULT_MAX_DURATION,
            orientations: BitFlags::all(),
            seed: None,
        }
    }
}
