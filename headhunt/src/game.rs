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
//! Difficulty levels and the board requests made when a game starts.
//!
//! Each of the two players gets their own board with the same layout. Boards are
//! requested through a [`Supervisor`] until one is produced; attempts that time out are
//! discarded and retried from scratch.
use std::{fmt, ops::Index, str::FromStr};

use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    aircraft::Tier,
    board::{Board, BoardLayout, Dimensions},
    config::{ConfigError, GenerationConfig},
    supervisor::Supervisor,
};

/// Game difficulty. Controls the board size and the number and shape of aircraft.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Difficulty {
    /// 8x8 board with 2 simple aircraft.
    Easy,
    /// 10x10 board with 3 simple aircraft.
    Medium,
    /// 12x12 board with 4 complex aircraft.
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: &'static [Difficulty] =
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of rows and columns on the board.
    pub fn board_size(self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 10,
            Difficulty::Hard => 12,
        }
    }

    /// Number of aircraft on each board, which is also the number of heads to find.
    pub fn aircraft_count(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Shape tier of the aircraft.
    pub fn tier(self) -> Tier {
        match self {
            Difficulty::Easy | Difficulty::Medium => Tier::Simple,
            Difficulty::Hard => Tier::Complex,
        }
    }

    /// The board layout for this difficulty.
    pub fn layout(self) -> BoardLayout {
        BoardLayout::new(
            self.tier(),
            Dimensions::new(self.board_size()),
            self.aircraft_count(),
        )
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown difficulty {0:?}, expected easy, medium or hard")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

/// Player ID. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    /// The first player, who moves first.
    P1,
    /// The second player.
    P2,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: &'static [Player] = &[Player::P1, Player::P2];

    /// Get the opponent of this player.
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Player::P1 => "Player 1",
            Player::P2 => "Player 2",
        })
    }
}

/// One board per player, generated independently.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayerBoards {
    difficulty: Difficulty,
    boards: [Board; 2],
}

impl PlayerBoards {
    /// Difficulty both boards were generated for.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Get the board hiding the given player's aircraft.
    pub fn get(&self, player: Player) -> &Board {
        match player {
            Player::P1 => &self.boards[0],
            Player::P2 => &self.boards[1],
        }
    }

    /// Extract both boards, player 1's first.
    pub fn into_inner(self) -> [Board; 2] {
        self.boards
    }
}

impl Index<Player> for PlayerBoards {
    type Output = Board;

    fn index(&self, player: Player) -> &Board {
        self.get(player)
    }
}

/// Requests complete boards, retrying attempts that time out.
#[derive(Debug)]
pub struct Requester {
    supervisor: Supervisor,

    /// Source of the seed for each attempt.
    seeds: StdRng,
}

impl Requester {
    /// Construct a [`Requester`] from `config`. If `config.seed` is set every board it
    /// produces is reproducible.
    pub fn new(config: &GenerationConfig) -> Result<Self, ConfigError> {
        let seeds = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            supervisor: Supervisor::new(config)?,
            seeds,
        })
    }

    /// Get the supervisor used for each attempt.
    pub fn supervisor(&self) -> &Supervisor {
        &self.supervisor
    }

    /// Produce a board for `difficulty`. Keeps trying until an attempt succeeds; every
    /// attempt starts from an empty grid with fresh random draws.
    pub fn request(&mut self, difficulty: Difficulty) -> Board {
        let layout = difficulty.layout();
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            let rng = StdRng::seed_from_u64(self.seeds.gen());
            match self.supervisor.try_generate(layout, rng) {
                Ok(board) => {
                    info!(%difficulty, attempts, "board ready");
                    return board;
                }
                Err(err) => debug!(%difficulty, attempts, %err, "discarding board attempt"),
            }
        }
    }

    /// Produce one board for each player.
    pub fn request_pair(&mut self, difficulty: Difficulty) -> PlayerBoards {
        let first = self.request(difficulty);
        let second = self.request(difficulty);
        PlayerBoards {
            difficulty,
            boards: [first, second],
        }
    }
}

impl Default for Requester {
    /// Default settings, seeded from the OS.
    fn default() -> Self {
        Self {
            supervisor: Supervisor::default(),
            seeds: StdRng::from_entropy(),
        }
    }
}

/// Produce a board for `difficulty` with default settings.
pub fn request_board(difficulty: Difficulty) -> Board {
    Requester::default().request(difficulty)
}
