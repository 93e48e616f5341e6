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
//! Instantiates catalog shapes at positions on the board.
use rand::Rng;
use thiserror::Error;

use crate::{
    aircraft::{catalog::template_for, Aircraft, Orientation, Part, Tier},
    board::{Coordinate, Dimensions},
};

/// Reason a shape could not be instantiated at a position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GeometryError {
    /// Some cell of the shape fell off the board. Draw a new head and try again.
    #[error("{orientation} aircraft with head at {head} does not fit on the board")]
    OutOfBounds {
        head: Coordinate,
        orientation: Orientation,
    },
}

/// Place the shape for `tier` and `orientation` with its head at `head`. Does not in any
/// way account for other aircraft.
pub fn project(
    tier: Tier,
    orientation: Orientation,
    head: Coordinate,
    dim: Dimensions,
) -> Result<Aircraft, GeometryError> {
    let cells = template_for(tier, orientation)
        .iter()
        .enumerate()
        .map(|(i, &offset)| {
            let part = if i == 0 { Part::Head } else { Part::Body };
            dim.offset(head, offset).map(|coord| (coord, part))
        })
        .collect::<Option<Vec<_>>>()
        .ok_or(GeometryError::OutOfBounds { head, orientation })?;
    Ok(Aircraft::from_cells(tier, orientation, cells))
}

/// Draw a head position. The last column is never drawn, since no shape can point away
/// from it, unless the board is only one column wide.
pub fn random_head<R: Rng + ?Sized>(dim: Dimensions, rng: &mut R) -> Coordinate {
    let cols = if dim.size() > 1 { dim.size() - 1 } else { 1 };
    Coordinate::new(rng.gen_range(0, cols), rng.gen_range(0, dim.size()))
}

/// Draw a random head and place the shape for `tier` and `orientation` there. Errors are
/// expected near the edges; the caller draws again.
pub fn generate<R: Rng + ?Sized>(
    tier: Tier,
    orientation: Orientation,
    dim: Dimensions,
    rng: &mut R,
) -> Result<Aircraft, GeometryError> {
    project(tier, orientation, random_head(dim, rng), dim)
}
