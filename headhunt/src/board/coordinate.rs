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
use std::fmt;

/// Labels used for the columns of the board. The board can be at most as wide as this
/// label set.
pub(crate) const COLUMN_LABELS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The coordinates of a cell in the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell. Displayed as a letter.
    pub col: usize,
    /// Vertical position of the cell. Displayed as a number starting at 0.
    pub row: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `col` and `row`.
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Get the letter labelling this coordinate's column, or `None` if the column is past
    /// the end of the label set.
    pub fn column_label(&self) -> Option<char> {
        COLUMN_LABELS.get(self.col).map(|&b| b as char)
    }

    /// Find the column index for the given label letter. Accepts either case.
    pub fn column_from_label(label: char) -> Option<usize> {
        let upper = label.to_ascii_uppercase();
        COLUMN_LABELS.iter().position(|&b| b as char == upper)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(col, row)` pair.
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(col, row)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.col, coord.row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.column_label() {
            Some(label) => write!(f, "{}{}", label, self.row),
            // Never stored in a grid, but still printable in error messages.
            None => write!(f, "#{}:{}", self.col, self.row),
        }
    }
}
