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
//! Types that make up the game board.

use std::fmt;

use crate::aircraft::{Aircraft, CellState, Tier};

pub use self::{
    assembly::{assemble, Assembler, BoardLayout},
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{CannotPlaceReason, InvalidDimension, OutOfBounds, PlaceError},
    grid::Grid,
};

pub mod assembly;
mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// A fully populated player's board. Read-only once assembled.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Grid holding every placed aircraft.
    grid: Grid,

    /// Tier of every aircraft on this board.
    tier: Tier,

    /// Aircraft in the order they were placed.
    aircraft: Vec<Aircraft>,
}

impl Board {
    pub(crate) fn new(grid: Grid, tier: Tier, aircraft: Vec<Aircraft>) -> Self {
        Self {
            grid,
            tier,
            aircraft,
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        self.grid.dimensions()
    }

    /// Tier of the aircraft on this board.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Get the state of the cell at the given coordinate.
    pub fn get(&self, coord: Coordinate) -> Result<CellState, OutOfBounds> {
        self.grid.get(coord)
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Every aircraft on the board, in placement order.
    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    /// Coordinates of every head, in placement order.
    pub fn heads<'a>(&'a self) -> impl 'a + Iterator<Item = Coordinate> {
        self.aircraft.iter().map(Aircraft::head)
    }

    /// Number of cells covered by aircraft.
    pub fn occupied(&self) -> usize {
        self.grid.occupied()
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over the
    /// coordinates and states of that row's cells.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = (Coordinate, CellState)>> {
        let grid = &self.grid;
        grid.dimensions()
            .iter_coordinates()
            .map(move |row| row.map(move |coord| (coord, grid[coord])))
    }
}

impl fmt::Display for Board {
    /// Draw the solution: `X` for heads, `*` for bodies and `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.dimensions().size() {
            let label = Coordinate::new(col, 0).column_label().unwrap_or('?');
            write!(f, " {}", label)?;
        }
        writeln!(f)?;
        for (i, row) in self.iter_rows().enumerate() {
            write!(f, "{:>2} ", i)?;
            for (_, cell) in row {
                let symbol = match cell {
                    CellState::Empty => '.',
                    CellState::Head => 'X',
                    CellState::Body => '*',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
