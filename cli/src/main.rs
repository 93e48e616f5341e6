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
use std::{fmt, time::Duration};

use anyhow::{bail, Context};
use clap::{App, Arg, ArgMatches};
use enumflags2::BitFlags;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use tracing_subscriber::{prelude::*, EnvFilter};

use headhunt::{
    CellState, Coordinate, Difficulty, GenerationConfig, Orientation, Player, PlayerBoards,
    Requester,
};

fn main() -> anyhow::Result<()> {
    let matches = App::new("Aircraft Head Hunting")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Generates the hidden boards for a game of Aircraft Head Hunting.")
        .arg(
            Arg::with_name("level")
                .short("l")
                .long("level")
                .value_name("LEVEL")
                .help("difficulty of the game")
                .takes_value(true)
                .possible_values(&["easy", "medium", "hard"])
                .case_insensitive(true)
                .default_value("easy"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for reproducible boards")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .value_name("MILLIS")
                .help("time limit for a single board attempt, in milliseconds")
                .takes_value(true)
                .default_value("3000"),
        )
        .arg(
            Arg::with_name("orientations")
                .short("o")
                .long("orientations")
                .value_name("DIRS")
                .help("orientations aircraft may point in, e.g. \"n,s\" (default all)")
                .takes_value(true)
                .multiple(true)
                .use_delimiter(true)
                .possible_values(&["n", "s", "e", "w", "north", "south", "east", "west"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("probe")
                .short("p")
                .long("probe")
                .value_name("COORD")
                .help("report what is at a cell on each board, e.g. \"C4\"")
                .takes_value(true)
                .multiple(true),
        )
        .get_matches();

    init_logging();

    let difficulty: Difficulty = matches
        .value_of("level")
        .unwrap_or("easy")
        .parse()?;
    let config = generation_config(&matches)?;
    let probes = matches
        .values_of("probe")
        .into_iter()
        .flatten()
        .map(parse_coordinate)
        .collect::<anyhow::Result<Vec<_>>>()?;
    debug!(%difficulty, ?config, "requesting boards");

    let mut requester = Requester::new(&config)?;
    let boards = requester.request_pair(difficulty);
    show_boards(&boards);

    if !probes.is_empty() {
        println!();
    }
    for coord in probes {
        for &player in Player::ALL {
            match boards[player].get(coord) {
                Ok(cell) => println!("{} {}: {}", player, coord, CellName(cell)),
                Err(err) => println!("{} {}: {}", player, coord, err),
            }
        }
    }
    Ok(())
}

/// Install the log subscriber. Verbosity comes from `RUST_LOG`, defaulting to warnings.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the [`GenerationConfig`] from the command line.
fn generation_config(matches: &ArgMatches) -> anyhow::Result<GenerationConfig> {
    let mut config = GenerationConfig::default();
    if let Some(seed) = matches.value_of("seed") {
        config.seed = Some(
            seed.parse()
                .with_context(|| format!("invalid seed {:?}", seed))?,
        );
    }
    if let Some(timeout) = matches.value_of("timeout") {
        let millis: u64 = timeout
            .parse()
            .with_context(|| format!("invalid timeout {:?}", timeout))?;
        config.max_duration = Duration::from_millis(millis);
    }
    if let Some(dirs) = matches.values_of("orientations") {
        let mut allowed = BitFlags::empty();
        for dir in dirs {
            allowed |= match dir.to_ascii_lowercase().as_str() {
                "n" | "north" => Orientation::North,
                "s" | "south" => Orientation::South,
                "e" | "east" => Orientation::East,
                "w" | "west" => Orientation::West,
                // clap already restricts the values.
                _ => unreachable!(),
            };
        }
        config.orientations = allowed;
    }
    Ok(config)
}

/// Parse a cell name such as `C4` or `c,4`.
fn parse_coordinate(input: &str) -> anyhow::Result<Coordinate> {
    static COORD: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\s*(?P<col>[A-Za-z])\s*(?:,\s*)?(?P<row>[0-9]+)\s*$").unwrap()
    });
    let captures = match COORD.captures(input) {
        Some(captures) => captures,
        None => bail!("invalid coordinate {:?}, expected a letter and a row like C4", input),
    };
    let label = captures["col"].chars().next().unwrap_or('?');
    let col = match Coordinate::column_from_label(label) {
        Some(col) => col,
        None => bail!("invalid column {:?}", label),
    };
    let row = captures["row"]
        .parse()
        .with_context(|| format!("invalid row in {:?}", input))?;
    Ok(Coordinate::new(col, row))
}

/// Print both players' boards side by side.
fn show_boards(boards: &PlayerBoards) {
    let size = boards[Player::P1].dimensions().size();
    let width = 3 + 2 * size;
    println!(
        "{}: {} aircraft each",
        boards.difficulty(),
        boards[Player::P1].aircraft().len()
    );
    println!();
    for &player in Player::ALL {
        print!("{:<w$}    ", player.to_string(), w = width);
    }
    println!();
    for _ in Player::ALL {
        print!("   ");
        for col in 0..size {
            let label = Coordinate::new(col, 0).column_label().unwrap_or('?');
            print!(" {}", label);
        }
        print!("    ");
    }
    println!();
    let mut p1 = boards[Player::P1].iter_rows();
    let mut p2 = boards[Player::P2].iter_rows();
    let mut row = 0;
    while let (Some(left), Some(right)) = (p1.next(), p2.next()) {
        print!("{:>2} ", row);
        for (_, cell) in left {
            print!(" {}", CellSymbol(cell));
        }
        print!("    {:>2} ", row);
        for (_, cell) in right {
            print!(" {}", CellSymbol(cell));
        }
        println!();
        row += 1;
    }
}

/// Display helper that prints a cell as a single character.
struct CellSymbol(CellState);

impl fmt::Display for CellSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            CellState::Empty => ".",
            CellState::Head => "X",
            CellState::Body => "*",
        })
    }
}

/// Display helper that prints a cell's full name.
struct CellName(CellState);

impl fmt::Display for CellName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            CellState::Empty => "empty",
            CellState::Head => "aircraft head",
            CellState::Body => "aircraft body",
        })
    }
}
