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
//! Types used for defining aircraft and their shapes.
use std::fmt;

use enumflags2::BitFlags;

use crate::board::Coordinate;

pub use self::placement::{generate, project, random_head, GeometryError};

pub mod catalog;
pub mod placement;

/// Offset of a cell from an aircraft's head, as `(dcol, drow)`.
pub type Offset = (isize, isize);

/// State of a single cell on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// No aircraft occupies this cell.
    Empty,
    /// The head of an aircraft. Finding every head wins the game.
    Head,
    /// Any other part of an aircraft.
    Body,
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// Role of one cell within an aircraft.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Part {
    /// The single cell players are hunting for.
    Head,
    /// Any other cell of the aircraft.
    Body,
}

impl From<Part> for CellState {
    fn from(part: Part) -> Self {
        match part {
            Part::Head => CellState::Head,
            Part::Body => CellState::Body,
        }
    }
}

/// Complexity of an aircraft's shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Tier {
    /// Ten cells: head, wings, fuselage and a three cell tail.
    Simple,
    /// Eleven cells: head, two three cell bars, a spaced bar and a fuselage cell.
    Complex,
}

impl Tier {
    /// Both tiers.
    pub const ALL: &'static [Tier] = &[Tier::Simple, Tier::Complex];

    /// Number of cells (head included) in an aircraft of this tier.
    pub fn cell_count(self) -> usize {
        match self {
            Tier::Simple => 10,
            Tier::Complex => 11,
        }
    }
}

/// Direction the nose of an aircraft points. The body extends the opposite way.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// Nose at the top, body extends down the rows.
    North = 0b0001,
    /// Nose at the bottom, body extends up the rows.
    South = 0b0010,
    /// Nose at the right, body extends left along the columns.
    East = 0b0100,
    /// Nose at the left, body extends right along the columns.
    West = 0b1000,
}

impl Orientation {
    /// All four orientations.
    pub const ALL: &'static [Orientation] = &[
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    /// Orientations contained in the given set, in [`Orientation::ALL`] order.
    pub fn in_set(set: BitFlags<Orientation>) -> Vec<Orientation> {
        Self::ALL
            .iter()
            .copied()
            .filter(|&o| set.contains(o))
            .collect()
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Orientation::North => "north",
            Orientation::South => "south",
            Orientation::East => "east",
            Orientation::West => "west",
        })
    }
}

/// An aircraft instantiated at a particular position. Immutable once built; the head is
/// always the first cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Aircraft {
    tier: Tier,
    orientation: Orientation,
    cells: Vec<(Coordinate, Part)>,
}

impl Aircraft {
    /// Only [`placement`] builds aircraft, so `cells` always comes from a catalog template.
    pub(crate) fn from_cells(
        tier: Tier,
        orientation: Orientation,
        cells: Vec<(Coordinate, Part)>,
    ) -> Self {
        debug_assert_eq!(cells.len(), tier.cell_count());
        debug_assert_eq!(cells.first().map(|&(_, part)| part), Some(Part::Head));
        Self {
            tier,
            orientation,
            cells,
        }
    }

    /// Get the shape tier of this aircraft.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Get the direction the nose points in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Coordinate of the head cell.
    pub fn head(&self) -> Coordinate {
        self.cells[0].0
    }

    /// All cells with their role, head first.
    pub fn cells(&self) -> &[(Coordinate, Part)] {
        &self.cells
    }

    /// Get an iterator over the coordinates of this aircraft, head first.
    pub fn coords(&self) -> impl '_ + Iterator<Item = &Coordinate> {
        self.cells.iter().map(|(coord, _)| coord)
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
}
