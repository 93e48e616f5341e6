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
//! End to end board generation through the public API.

use std::{
    collections::HashSet,
    time::{Duration, Instant},
};

use headhunt::{
    aircraft::{catalog::template_for, project, GeometryError},
    generate_board_with_timeout, request_board, Board, CellState, Coordinate, Difficulty,
    Dimensions, GenerationConfig, Orientation, Player, Requester, Tier,
};

fn count(board: &Board, state: CellState) -> usize {
    board
        .iter_rows()
        .flatten()
        .filter(|&(_, cell)| cell == state)
        .count()
}

fn assert_complete(board: &Board, difficulty: Difficulty) {
    let size = difficulty.board_size();
    let cells = difficulty.tier().cell_count();
    let planes = difficulty.aircraft_count();
    assert_eq!(board.dimensions().size(), size);
    assert_eq!(board.tier(), difficulty.tier());
    assert_eq!(count(board, CellState::Head), planes);
    assert_eq!(count(board, CellState::Body), planes * (cells - 1));

    let mut seen = HashSet::new();
    for aircraft in board.aircraft() {
        assert_eq!(aircraft.len(), cells);
        for &coord in aircraft.coords() {
            assert!(board.dimensions().contains(&coord));
            assert!(seen.insert(coord), "{} is covered twice", coord);
        }
    }
}

#[test]
fn request_board_for_every_difficulty() {
    for &difficulty in Difficulty::ALL {
        let board = request_board(difficulty);
        assert_complete(&board, difficulty);
    }
}

#[test]
fn seeded_requests_are_reproducible() {
    let config = GenerationConfig {
        seed: Some(0xfeed),
        ..GenerationConfig::default()
    };
    let a = Requester::new(&config).unwrap().request_pair(Difficulty::Hard);
    let b = Requester::new(&config).unwrap().request_pair(Difficulty::Hard);
    assert_eq!(a, b);
    assert_eq!(a.difficulty(), Difficulty::Hard);
    for &player in Player::ALL {
        assert_complete(&a[player], Difficulty::Hard);
    }
}

#[test]
fn hard_requests_recover_from_dead_ends() {
    // Roughly one hard attempt in ten leaves no room for the last aircraft; those
    // attempts must time out and be retried rather than hang the request.
    for seed in 0..10 {
        let config = GenerationConfig {
            max_duration: Duration::from_millis(250),
            seed: Some(seed),
            ..GenerationConfig::default()
        };
        let board = Requester::new(&config).unwrap().request(Difficulty::Hard);
        assert_complete(&board, Difficulty::Hard);
    }
}

#[test]
fn player_boards_use_independent_draws() {
    let config = GenerationConfig {
        seed: Some(42),
        ..GenerationConfig::default()
    };
    let boards = Requester::new(&config)
        .unwrap()
        .request_pair(Difficulty::Medium);
    // Identical placements of all three aircraft would mean shared draws.
    assert_ne!(boards[Player::P1], boards[Player::P2]);
}

#[test]
fn restricted_orientations_flow_through_requests() {
    let config = GenerationConfig {
        orientations: Orientation::North | Orientation::South,
        seed: Some(3),
        ..GenerationConfig::default()
    };
    let board = Requester::new(&config).unwrap().request(Difficulty::Easy);
    assert!(board.aircraft().iter().all(|a| {
        a.orientation() == Orientation::North || a.orientation() == Orientation::South
    }));
}

#[test]
fn reads_are_stable_after_hand_off() {
    let board = request_board(Difficulty::Easy);
    let first: Vec<_> = board.iter_rows().flatten().collect();
    let second: Vec<_> = board.iter_rows().flatten().collect();
    assert_eq!(first, second);
    for (coord, cell) in first {
        assert_eq!(board.get(coord), Ok(cell));
    }
    let outside = board.get(Coordinate::new(8, 0)).unwrap_err();
    assert_eq!(outside.size(), 8);
}

#[test]
fn supervisor_gives_up_on_boards_that_cannot_fit() {
    // A complex aircraft needs five rows and five columns.
    for &(tier, size) in &[(Tier::Simple, 4), (Tier::Complex, 4), (Tier::Simple, 1)] {
        let started = Instant::now();
        let board = generate_board_with_timeout(
            tier,
            Dimensions::new(size),
            2,
            Duration::from_millis(100),
        );
        assert!(board.is_none());
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}

#[test]
fn supervisor_gives_up_when_too_many_aircraft_are_requested() {
    // 100 cells cannot hold 11 aircraft of 10 cells each.
    let board = generate_board_with_timeout(
        Tier::Simple,
        Dimensions::new(10),
        11,
        Duration::from_millis(200),
    );
    assert!(board.is_none());
}

#[test]
fn supervisor_returns_easy_board() {
    let board = generate_board_with_timeout(
        Tier::Simple,
        Dimensions::new(8),
        2,
        Duration::from_secs(3),
    )
    .expect("an easy board assembles well within three seconds");
    assert_eq!(board.heads().count(), 2);
    assert_eq!(board.occupied(), 2 * Tier::Simple.cell_count());
}

#[test]
fn west_nose_on_the_last_column_is_rejected() {
    let dim = Dimensions::new(10);
    for row in 0..10 {
        let head = Coordinate::new(9, row);
        for &tier in Tier::ALL {
            assert_eq!(
                project(tier, Orientation::West, head, dim),
                Err(GeometryError::OutOfBounds {
                    head,
                    orientation: Orientation::West
                })
            );
        }
    }
}

#[test]
fn every_template_fits_somewhere_on_every_level() {
    for &difficulty in Difficulty::ALL {
        let dim = Dimensions::new(difficulty.board_size());
        let tier = difficulty.tier();
        for &orientation in Orientation::ALL {
            assert_eq!(template_for(tier, orientation).len(), tier.cell_count());
            let fits = dim
                .iter_coordinates()
                .flatten()
                .filter(|&head| project(tier, orientation, head, dim).is_ok())
                .count();
            assert!(fits > 0, "{:?} {} never fits", tier, orientation);
        }
    }
}
