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
//! Errors used by the [`Grid`][crate::board::Grid] and [`Board`][crate::board::Board].

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::Coordinate;

/// Error returned when a board size is zero or wider than the column label set.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid board dimension {0}, must be between 1 and 26")]
pub struct InvalidDimension(usize);

impl InvalidDimension {
    pub(crate) fn new(size: usize) -> Self {
        Self(size)
    }

    /// The size that was requested.
    pub fn size(&self) -> usize {
        self.0
    }
}

/// Error returned when reading a cell outside the board.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("coordinate {coord} is out of bounds for a {size}x{size} board")]
pub struct OutOfBounds {
    /// The coordinate that was requested.
    coord: Coordinate,
    /// Size of the board that was read.
    size: usize,
}

impl OutOfBounds {
    pub(crate) fn new(coord: Coordinate, size: usize) -> Self {
        Self { coord, size }
    }

    /// The coordinate that was requested.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Size of the board that was read.
    pub fn size(&self) -> usize {
        self.size
    }
}

/// Reason why an aircraft could not be placed on the grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the cells was already occupied by another aircraft.
    #[error("the requested position overlaps another aircraft")]
    Overlap,
    /// One or more of the cells was not on the grid.
    #[error("the requested position is not on the grid")]
    OutOfBounds,
}

/// Error caused when attempting to place an aircraft in an invalid position. The grid is
/// untouched and the rejected placement is handed back.
#[derive(Error)]
#[error("could not place aircraft: {reason}")]
pub struct PlaceError<P> {
    #[source]
    reason: CannotPlaceReason,
    placement: P,
}

impl<P> Debug for PlaceError<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<P> PlaceError<P> {
    /// Construct a placement error from a reason and placement.
    pub(crate) fn new(reason: CannotPlaceReason, placement: P) -> Self {
        Self { reason, placement }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get a reference to the placement that was rejected.
    pub fn placement(&self) -> &P {
        &self.placement
    }

    /// Extract the placement from this error.
    pub fn into_placement(self) -> P {
        self.placement
    }
}
