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
//! Implements the assembly of a board: placing the required number of random aircraft.
use enumflags2::BitFlags;
use rand::Rng;
use tracing::{debug, trace};

use crate::{
    aircraft::{generate, Orientation, Tier},
    board::{Board, Dimensions, Grid},
    config::ConfigError,
};

/// What a board should contain.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoardLayout {
    /// Tier of every aircraft on the board.
    pub tier: Tier,
    /// Size of the board.
    pub dimensions: Dimensions,
    /// Number of aircraft to place.
    pub required_count: usize,
}

impl BoardLayout {
    /// Construct a layout of `required_count` aircraft of `tier` on a board of
    /// `dimensions`.
    pub fn new(tier: Tier, dimensions: Dimensions, required_count: usize) -> Self {
        Self {
            tier,
            dimensions,
            required_count,
        }
    }
}

/// Places random, non-overlapping aircraft until a layout is satisfied.
#[derive(Debug, Clone)]
pub struct Assembler {
    layout: BoardLayout,

    /// Orientations to draw from. Never empty.
    orientations: Vec<Orientation>,
}

impl Assembler {
    /// Construct an [`Assembler`] that draws from all four orientations.
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            orientations: Orientation::ALL.to_vec(),
        }
    }

    /// Construct an [`Assembler`] from an orientation list that is already known to be
    /// non-empty.
    pub(crate) fn from_orientations(layout: BoardLayout, orientations: Vec<Orientation>) -> Self {
        debug_assert!(!orientations.is_empty());
        Self {
            layout,
            orientations,
        }
    }

    /// Construct an [`Assembler`] that only draws orientations in `allowed`.
    pub fn with_orientations(
        layout: BoardLayout,
        allowed: BitFlags<Orientation>,
    ) -> Result<Self, ConfigError> {
        let orientations = Orientation::in_set(allowed);
        if orientations.is_empty() {
            Err(ConfigError::NoOrientations)
        } else {
            Ok(Self::from_orientations(layout, orientations))
        }
    }

    /// Get the layout being assembled.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Build a board. There is no limit on the number of draws, so this never returns if
    /// the layout cannot fit. It can also hang on a layout that does fit: placed aircraft
    /// are never moved, and on a crowded board (such as 4 complex aircraft on 12x12) the
    /// first few placements can leave no room for the rest. Use a
    /// [`Supervisor`][crate::Supervisor] or [`assemble_until`][Self::assemble_until] to
    /// bound the work.
    pub fn assemble<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        match self.assemble_until(rng, || false) {
            Some(board) => board,
            None => unreachable!(),
        }
    }

    /// Build a board, checking `stop` before every draw. Returns `None` as soon as `stop`
    /// returns true; the partial board is dropped.
    pub fn assemble_until<R, F>(&self, rng: &mut R, mut stop: F) -> Option<Board>
    where
        R: Rng + ?Sized,
        F: FnMut() -> bool,
    {
        let BoardLayout {
            tier,
            dimensions,
            required_count,
        } = self.layout;
        let mut grid = Grid::new(dimensions);
        let mut placed = Vec::with_capacity(required_count);
        let mut draws: u64 = 0;

        while placed.len() < required_count {
            if stop() {
                debug!(draws, placed = placed.len(), "assembly stopped");
                return None;
            }
            draws += 1;
            let orientation = self.orientations[rng.gen_range(0, self.orientations.len())];
            let aircraft = match generate(tier, orientation, dimensions, rng) {
                Ok(aircraft) => aircraft,
                Err(err) => {
                    trace!(draws, %err, "discarded draw");
                    continue;
                }
            };
            // The first placement can't overlap anything.
            match grid.place(aircraft.clone()) {
                Ok(()) => {
                    debug!(
                        head = %aircraft.head(),
                        %orientation,
                        draws,
                        "placed aircraft {} of {}",
                        placed.len() + 1,
                        required_count
                    );
                    placed.push(aircraft);
                }
                Err(err) => trace!(draws, %err, "discarded draw"),
            }
        }

        debug!(draws, occupied = grid.occupied(), "assembly finished");
        Some(Board::new(grid, tier, placed))
    }
}

/// Build a board for the layout, drawing from all orientations. Never returns if the
/// draws reach a dead end; see [`Assembler::assemble`].
pub fn assemble<R: Rng + ?Sized>(layout: BoardLayout, rng: &mut R) -> Board {
    Assembler::new(layout).assemble(rng)
}
