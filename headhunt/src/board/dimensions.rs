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
//! Implements the square board dimensions.
use std::borrow::Borrow;

use crate::{
    aircraft::Offset,
    board::{coordinate::COLUMN_LABELS, Coordinate, InvalidDimension},
};

/// Square dimensions of a board. The width is limited by the number of column labels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Number of rows and columns on the board.
    size: usize,
}

impl Dimensions {
    /// Largest supported board size, one column per label letter.
    pub const MAX_SIZE: usize = COLUMN_LABELS.len();

    /// Create new [`Dimensions`] with the given size.
    /// Panics if `size` is 0 or larger than [`Dimensions::MAX_SIZE`].
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(dim) => dim,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create new [`Dimensions`] with the given size. Returns an error if `size` is 0 or
    /// larger than [`Dimensions::MAX_SIZE`].
    pub fn try_new(size: usize) -> Result<Self, InvalidDimension> {
        if size == 0 || size > Self::MAX_SIZE {
            Err(InvalidDimension::new(size))
        } else {
            Ok(Self { size })
        }
    }

    /// Number of rows and columns.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Compute the total number of cells. Used to allocate storage for the grid.
    pub fn total_size(&self) -> usize {
        self.size * self.size
    }

    /// Check if the given [`Coordinate`] is in bounds for these [`Dimensions`].
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.check_bounds(coord).is_some()
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        self.check_bounds(coord)
            .map(|coord| coord.row * self.size + coord.col)
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate {
            col: idx % self.size,
            row: idx / self.size,
        }
    }

    /// Move `coord` by `(dcol, drow)`. Returns `None` if the result leaves the board.
    pub fn offset(&self, coord: Coordinate, (dcol, drow): Offset) -> Option<Coordinate> {
        let col = shift(coord.col, dcol)?;
        let row = shift(coord.row, drow)?;
        self.check_bounds(Coordinate { col, row })
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let size = self.size;
        (0..size).map(move |row| (0..size).map(move |col| Coordinate { col, row }))
    }

    #[inline]
    fn check_bounds<B: Borrow<Coordinate>>(&self, coord: B) -> Option<B> {
        let c = coord.borrow();
        if c.col < self.size && c.row < self.size {
            Some(coord)
        } else {
            None
        }
    }
}

#[inline]
fn shift(base: usize, delta: isize) -> Option<usize> {
    if delta < 0 {
        base.checked_sub(delta.wrapping_neg() as usize)
    } else {
        base.checked_add(delta as usize)
    }
}
