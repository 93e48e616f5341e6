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
//! Board generation for the two-player Aircraft Head Hunting game.
//!
//! Each player's board hides a number of aircraft. Every aircraft has a single head cell
//! and a fixed body shape; the first player to find all of their opponent's heads wins.
//! This crate only builds the boards: it places non-overlapping aircraft at random
//! positions and orientations and hands back a read-only [`Board`].
//!
//! [`aircraft`] defines the shapes and how they are instantiated on a board.
//!
//! [`board`] provides the grid, the finished [`Board`] and the [`Assembler`] that fills
//! a board by retrying random draws until every aircraft fits.
//!
//! [`supervisor`] runs an assembly on a worker thread under a time limit, since retrying
//! random draws has no upper bound on a crowded board.
//!
//! [`game`] maps each [`Difficulty`] to a layout and keeps requesting boards until one is
//! produced.
//!
//! ```no_run
//! use headhunt::{request_board, CellState, Coordinate, Difficulty};
//!
//! let board = request_board(Difficulty::Medium);
//! assert_eq!(board.heads().count(), 3);
//! match board.get(Coordinate::new(2, 4)) {
//!     Ok(CellState::Head) => println!("found a head"),
//!     Ok(_) => println!("keep looking"),
//!     Err(err) => println!("{}", err),
//! }
//! ```

pub mod aircraft;
pub mod board;
pub mod config;
pub mod game;
pub mod supervisor;

pub use crate::{
    aircraft::{Aircraft, CellState, Orientation, Part, Tier},
    board::{assemble, Assembler, Board, BoardLayout, Coordinate, Dimensions, Grid},
    config::{ConfigError, GenerationConfig},
    game::{request_board, Difficulty, Player, PlayerBoards, Requester},
    supervisor::{generate_board_with_timeout, GenerationError, Supervisor},
};
