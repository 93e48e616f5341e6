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
//! Fixed aircraft shapes, one per tier and orientation, as offsets from the head.
//!
//! ```text
//! Simple:
//!     West:          East:          North:         South:
//!       *                *              X            * * *
//!       *   *        *   *          * * * * *          *
//!     X * * *        * * * X            *          * * * * *
//!       *   *        *   *            * * *            X
//!       *                *
//!
//! Complex:
//!     West:          East:          North:         South:
//!         *              *              X            * * *
//!       *     *      *     *          * * *            *
//!     X * * * *      * * * * X      *   *   *      *   *   *
//!       *     *      *     *            *            * * *
//!         *              *            * * *            X
//! ```
use crate::aircraft::{Offset, Orientation, Tier};

const SIMPLE_WEST: [Offset; 10] = [
    (0, 0),
    (1, -2),
    (1, -1),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (3, -1),
    (3, 0),
    (3, 1),
];

const SIMPLE_EAST: [Offset; 10] = [
    (0, 0),
    (-1, -2),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (-1, 2),
    (-2, 0),
    (-3, -1),
    (-3, 0),
    (-3, 1),
];

const SIMPLE_NORTH: [Offset; 10] = [
    (0, 0),
    (-2, 1),
    (-1, 1),
    (0, 1),
    (1, 1),
    (2, 1),
    (0, 2),
    (-1, 3),
    (0, 3),
    (1, 3),
];

const SIMPLE_SOUTH: [Offset; 10] = [
    (0, 0),
    (-2, -1),
    (-1, -1),
    (0, -1),
    (1, -1),
    (2, -1),
    (0, -2),
    (-1, -3),
    (0, -3),
    (1, -3),
];

const COMPLEX_WEST: [Offset; 11] = [
    (0, 0),
    (1, -1),
    (1, 0),
    (1, 1),
    (2, -2),
    (2, 0),
    (2, 2),
    (3, 0),
    (4, -1),
    (4, 0),
    (4, 1),
];

const COMPLEX_EAST: [Offset; 11] = [
    (0, 0),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (-2, -2),
    (-2, 0),
    (-2, 2),
    (-3, 0),
    (-4, -1),
    (-4, 0),
    (-4, 1),
];

const COMPLEX_NORTH: [Offset; 11] = [
    (0, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (-2, 2),
    (0, 2),
    (2, 2),
    (0, 3),
    (-1, 4),
    (0, 4),
    (1, 4),
];

const COMPLEX_SOUTH: [Offset; 11] = [
    (0, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (-2, -2),
    (0, -2),
    (2, -2),
    (0, -3),
    (-1, -4),
    (0, -4),
    (1, -4),
];

/// Get the shape of an aircraft with the given tier and orientation. The first offset is
/// always the head at `(0, 0)`.
pub fn template_for(tier: Tier, orientation: Orientation) -> &'static [Offset] {
    match (tier, orientation) {
        (Tier::Simple, Orientation::West) => &SIMPLE_WEST,
        (Tier::Simple, Orientation::East) => &SIMPLE_EAST,
        (Tier::Simple, Orientation::North) => &SIMPLE_NORTH,
        (Tier::Simple, Orientation::South) => &SIMPLE_SOUTH,
        (Tier::Complex, Orientation::West) => &COMPLEX_WEST,
        (Tier::Complex, Orientation::East) => &COMPLEX_EAST,
        (Tier::Complex, Orientation::North) => &COMPLEX_NORTH,
        (Tier::Complex, Orientation::South) => &COMPLEX_SOUTH,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Draw a template the same way as the module docs, one line per row.
    fn render(template: &[Offset]) -> Vec<String> {
        let min_col = template.iter().map(|o| o.0).min().unwrap();
        let max_col = template.iter().map(|o| o.0).max().unwrap();
        let min_row = template.iter().map(|o| o.1).min().unwrap();
        let max_row = template.iter().map(|o| o.1).max().unwrap();
        (min_row..=max_row)
            .map(|row| {
                let line: Vec<&str> = (min_col..=max_col)
                    .map(|col| match template.iter().position(|&o| o == (col, row)) {
                        Some(0) => "X",
                        Some(_) => "*",
                        None => " ",
                    })
                    .collect();
                line.join(" ").trim_end().to_string()
            })
            .collect()
    }

    #[test]
    fn cell_counts_and_distinct_offsets() {
        for &tier in Tier::ALL {
            for &orientation in Orientation::ALL {
                let template = template_for(tier, orientation);
                assert_eq!(template.len(), tier.cell_count(), "{:?} {}", tier, orientation);
                assert_eq!(template[0], (0, 0));
                let unique: HashSet<_> = template.iter().collect();
                assert_eq!(unique.len(), template.len(), "{:?} {}", tier, orientation);
            }
        }
    }

    #[test]
    fn orientations_are_reflections_of_west() {
        let sorted = |offsets: Vec<Offset>| {
            let mut offsets = offsets;
            offsets.sort();
            offsets
        };
        for &tier in Tier::ALL {
            let west = template_for(tier, Orientation::West);
            let mapped = |f: fn(Offset) -> Offset| sorted(west.iter().copied().map(f).collect());
            let of = |o| sorted(template_for(tier, o).to_vec());
            assert_eq!(of(Orientation::East), mapped(|(c, r)| (-c, r)));
            assert_eq!(of(Orientation::North), mapped(|(c, r)| (r, c)));
            assert_eq!(of(Orientation::South), mapped(|(c, r)| (r, -c)));
        }
    }

    #[test]
    fn simple_shapes_match_diagrams() {
        assert_eq!(
            render(template_for(Tier::Simple, Orientation::West)),
            ["  *", "  *   *", "X * * *", "  *   *", "  *"]
        );
        assert_eq!(
            render(template_for(Tier::Simple, Orientation::East)),
            ["    *", "*   *", "* * * X", "*   *", "    *"]
        );
        assert_eq!(
            render(template_for(Tier::Simple, Orientation::North)),
            ["    X", "* * * * *", "    *", "  * * *"]
        );
        assert_eq!(
            render(template_for(Tier::Simple, Orientation::South)),
            ["  * * *", "    *", "* * * * *", "    X"]
        );
    }

    #[test]
    fn complex_shapes_match_diagrams() {
        assert_eq!(
            render(template_for(Tier::Complex, Orientation::West)),
            ["    *", "  *     *", "X * * * *", "  *     *", "    *"]
        );
        assert_eq!(
            render(template_for(Tier::Complex, Orientation::East)),
            ["    *", "*     *", "* * * * X", "*     *", "    *"]
        );
        assert_eq!(
            render(template_for(Tier::Complex, Orientation::North)),
            ["    X", "  * * *", "*   *   *", "    *", "  * * *"]
        );
        assert_eq!(
            render(template_for(Tier::Complex, Orientation::South)),
            ["  * * *", "    *", "*   *   *", "  * * *", "    X"]
        );
    }
}
