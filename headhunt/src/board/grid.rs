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
//! Defines the grid of cells that aircraft are placed into.

use std::ops::Index;

use crate::{
    aircraft::{Aircraft, CellState},
    board::{
        CannotPlaceReason, Coordinate, Dimensions, InvalidDimension, OutOfBounds, PlaceError,
    },
};

/// Bounded square map of cells. Every cell starts [`CellState::Empty`] and only changes
/// through [`Grid::place`]; cells are never cleared.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    /// Dimensions of this grid.
    dim: Dimensions,
    /// Cells that make up this grid, row major.
    cells: Box<[CellState]>,
}

impl Grid {
    /// Construct an empty grid with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        let cells = vec![CellState::Empty; dim.total_size()].into_boxed_slice();
        Self { dim, cells }
    }

    /// Construct an empty `size` x `size` grid.
    pub fn with_size(size: usize) -> Result<Self, InvalidDimension> {
        Dimensions::try_new(size).map(Self::new)
    }

    /// Get the [`Dimensions`] of this grid.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dim
    }

    /// Get the state of the cell at the given [`Coordinate`].
    pub fn get(&self, coord: Coordinate) -> Result<CellState, OutOfBounds> {
        self.dim
            .try_linearize(&coord)
            .map(|i| self.cells[i])
            .ok_or_else(|| OutOfBounds::new(coord, self.dim.size()))
    }

    /// Write every cell of the aircraft into the grid. If any cell is off the grid or
    /// already occupied, nothing is written and the aircraft is returned in the error.
    pub fn place(&mut self, aircraft: Aircraft) -> Result<(), PlaceError<Aircraft>> {
        let checked: Result<Vec<usize>, CannotPlaceReason> = aircraft
            .coords()
            .map(|coord| match self.dim.try_linearize(coord) {
                None => Err(CannotPlaceReason::OutOfBounds),
                Some(i) if self.cells[i] != CellState::Empty => Err(CannotPlaceReason::Overlap),
                Some(i) => Ok(i),
            })
            .collect();
        let indexes = match checked {
            Ok(indexes) => indexes,
            Err(reason) => return Err(PlaceError::new(reason, aircraft)),
        };
        // Every index is valid and currently empty.
        for (i, (_, part)) in indexes.into_iter().zip(aircraft.cells()) {
            self.cells[i] = (*part).into();
        }
        Ok(())
    }

    /// Number of cells that are not empty.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell != CellState::Empty)
            .count()
    }

    /// Iterate the coordinates of every head cell, row by row.
    pub fn heads<'a>(&'a self) -> impl 'a + Iterator<Item = Coordinate> {
        let dim = self.dim;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == CellState::Head)
            .map(move |(i, _)| dim.un_linearize(i))
    }
}

impl Index<Coordinate> for Grid {
    type Output = CellState;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        match self.dim.try_linearize(&coord) {
            Some(i) => &self.cells[i],
            None => panic!("{} is out of bounds for {:?}", coord, self.dim),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::{placement::project, Orientation, Tier};

    fn plane(head: (usize, usize), orientation: Orientation) -> Aircraft {
        project(Tier::Simple, orientation, head.into(), Dimensions::new(10)).unwrap()
    }

    #[test]
    fn with_size_rejects_zero() {
        assert_eq!(Grid::with_size(0).unwrap_err().size(), 0);
        assert!(Grid::with_size(1).is_ok());
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::with_size(8).unwrap();
        for coord in grid.dimensions().iter_coordinates().flatten() {
            assert_eq!(grid.get(coord), Ok(CellState::Empty));
        }
        assert_eq!(grid.occupied(), 0);
    }

    #[test]
    fn get_out_of_bounds() {
        let grid = Grid::with_size(8).unwrap();
        let err = grid.get(Coordinate::new(8, 0)).unwrap_err();
        assert_eq!(err.coord(), Coordinate::new(8, 0));
        assert_eq!(err.size(), 8);
        assert!(grid.get(Coordinate::new(0, 8)).is_err());
    }

    #[test]
    fn place_writes_head_and_body() {
        let mut grid = Grid::with_size(10).unwrap();
        grid.place(plane((0, 4), Orientation::West)).unwrap();
        assert_eq!(grid[Coordinate::new(0, 4)], CellState::Head);
        assert_eq!(grid[Coordinate::new(1, 2)], CellState::Body);
        assert_eq!(grid[Coordinate::new(3, 5)], CellState::Body);
        assert_eq!(grid[Coordinate::new(2, 5)], CellState::Empty);
        assert_eq!(grid.occupied(), 10);
        assert_eq!(grid.heads().collect::<Vec<_>>(), vec![Coordinate::new(0, 4)]);
    }

    #[test]
    fn overlapping_place_is_rejected_without_writes() {
        let mut grid = Grid::with_size(10).unwrap();
        grid.place(plane((0, 4), Orientation::West)).unwrap();
        let before = grid.clone();

        // Tails meet in column D.
        let other = plane((6, 4), Orientation::East);
        let err = grid.place(other.clone()).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::Overlap);
        assert_eq!(err.into_placement(), other);
        assert_eq!(grid, before);
    }

    #[test]
    fn place_rejects_cells_off_a_smaller_grid() {
        let mut grid = Grid::with_size(5).unwrap();
        let err = grid.place(plane((6, 4), Orientation::East)).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(grid.occupied(), 0);
    }
}
