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
//! Bounds the time spent assembling a board.
//!
//! Assembly retries random draws without limit, which is almost always quick but can run
//! for a very long time when a board is nearly full or cannot fit its layout at all. The
//! [`Supervisor`] runs each attempt on its own worker thread and gives up on it after a
//! fixed duration. The worker owns the RNG and the grid, so nothing it built is ever seen
//! by the caller after a timeout.
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, RecvTimeoutError},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    aircraft::{Orientation, Tier},
    board::{Assembler, Board, BoardLayout, Dimensions},
    config::{ConfigError, GenerationConfig},
};

/// Reason an assembly attempt produced no board. Either way the caller should simply try
/// again.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GenerationError {
    /// The attempt ran past its time limit and was abandoned.
    #[error("board assembly did not finish within {limit:?}")]
    Timeout { limit: Duration },

    /// The worker thread went away without producing a board.
    #[error("board assembly worker exited without a board")]
    WorkerLost,
}

/// Runs assembly attempts under a time limit.
#[derive(Debug, Clone)]
pub struct Supervisor {
    max_duration: Duration,

    /// Orientations handed to every assembly. Never empty.
    orientations: Vec<Orientation>,
}

impl Supervisor {
    /// Construct a [`Supervisor`] from the time limit and orientations in `config`.
    pub fn new(config: &GenerationConfig) -> Result<Self, ConfigError> {
        let orientations = Orientation::in_set(config.orientations);
        if orientations.is_empty() {
            return Err(ConfigError::NoOrientations);
        }
        Ok(Self {
            max_duration: config.max_duration,
            orientations,
        })
    }

    /// Time limit for each attempt.
    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }

    /// Run one assembly attempt for `layout` on a worker thread, using `rng` for every
    /// draw. Blocks until the board is ready or the time limit passes.
    pub fn try_generate<R>(&self, layout: BoardLayout, rng: R) -> Result<Board, GenerationError>
    where
        R: Rng + Send + 'static,
    {
        let assembler = Assembler::from_orientations(layout, self.orientations.clone());
        let cancelled = Arc::new(AtomicBool::new(false));
        let (tx, rx) = mpsc::sync_channel(1);

        let worker_cancelled = Arc::clone(&cancelled);
        let worker = thread::spawn(move || {
            let mut rng = rng;
            let stop = || worker_cancelled.load(Ordering::Relaxed);
            if let Some(board) = assembler.assemble_until(&mut rng, stop) {
                // The receiver is gone if the supervisor already gave up.
                let _ = tx.send(board);
            }
        });

        let started = Instant::now();
        match rx.recv_timeout(self.max_duration) {
            Ok(board) => {
                debug!(elapsed = ?started.elapsed(), "board assembled");
                // The worker has nothing left to do after sending.
                let _ = worker.join();
                Ok(board)
            }
            Err(RecvTimeoutError::Timeout) => {
                cancelled.store(true, Ordering::Relaxed);
                warn!(limit = ?self.max_duration, "board assembly timed out, abandoning attempt");
                Err(GenerationError::Timeout {
                    limit: self.max_duration,
                })
            }
            Err(RecvTimeoutError::Disconnected) => {
                warn!("board assembly worker exited without a board");
                Err(GenerationError::WorkerLost)
            }
        }
    }

    /// Run one assembly attempt, returning `None` if it did not finish in time.
    pub fn generate<R>(&self, layout: BoardLayout, rng: R) -> Option<Board>
    where
        R: Rng + Send + 'static,
    {
        self.try_generate(layout, rng).ok()
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self {
            max_duration: GenerationConfig::DEFAULT_MAX_DURATION,
            orientations: Orientation::ALL.to_vec(),
        }
    }
}

/// Run one assembly attempt with a fresh random seed, giving up after `max_duration`.
pub fn generate_board_with_timeout(
    tier: Tier,
    dimensions: Dimensions,
    required_count: usize,
    max_duration: Duration,
) -> Option<Board> {
    let supervisor = Supervisor {
        max_duration,
        ..Supervisor::default()
    };
    supervisor.generate(
        BoardLayout::new(tier, dimensions, required_count),
        StdRng::from_entropy(),
    )
}

#[cfg(test)]
mod tests {
    use enumflags2::BitFlags;

    use super::*;

    #[test]
    fn empty_orientations_rejected() {
        let config = GenerationConfig {
            orientations: BitFlags::empty(),
            ..GenerationConfig::default()
        };
        assert_eq!(Supervisor::new(&config).unwrap_err(), ConfigError::NoOrientations);
    }

    #[test]
    fn default_limit_is_three_seconds() {
        assert_eq!(Supervisor::default().max_duration(), Duration::from_secs(3));
    }

    #[test]
    fn finishes_within_limit() {
        let supervisor = Supervisor::default();
        let layout = BoardLayout::new(Tier::Simple, Dimensions::new(10), 3);
        let board = supervisor
            .try_generate(layout, StdRng::seed_from_u64(17))
            .unwrap();
        assert_eq!(board.heads().count(), 3);
        assert_eq!(board.occupied(), 30);
    }

    #[test]
    fn configured_orientations_reach_the_worker() {
        let supervisor = Supervisor::new(&GenerationConfig {
            orientations: Orientation::East | Orientation::West,
            ..GenerationConfig::default()
        })
        .unwrap();
        let layout = BoardLayout::new(Tier::Simple, Dimensions::new(10), 3);
        for seed in 0..5 {
            let board = supervisor
                .try_generate(layout, StdRng::seed_from_u64(seed))
                .unwrap();
            assert!(board.aircraft().iter().all(|a| {
                a.orientation() == Orientation::East || a.orientation() == Orientation::West
            }));
        }
    }

    #[test]
    fn dead_end_times_out() {
        let supervisor = Supervisor::new(&GenerationConfig {
            max_duration: Duration::from_millis(200),
            ..GenerationConfig::default()
        })
        .unwrap();
        // With this seed the fourth complex aircraft never finds room on 12x12.
        let layout = BoardLayout::new(Tier::Complex, Dimensions::new(12), 4);
        let result = supervisor.try_generate(layout, StdRng::seed_from_u64(14));
        assert_eq!(
            result.unwrap_err(),
            GenerationError::Timeout {
                limit: Duration::from_millis(200)
            }
        );
    }

    #[test]
    fn impossible_layout_times_out() {
        let supervisor = Supervisor::new(&GenerationConfig {
            max_duration: Duration::from_millis(50),
            ..GenerationConfig::default()
        })
        .unwrap();
        // Nothing fits on a 4x4 board.
        let layout = BoardLayout::new(Tier::Simple, Dimensions::new(4), 1);
        let started = Instant::now();
        let result = supervisor.try_generate(layout, StdRng::seed_from_u64(1));
        assert_eq!(
            result.unwrap_err(),
            GenerationError::Timeout {
                limit: Duration::from_millis(50)
            }
        );
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
