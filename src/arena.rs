//! Batches of engine-vs-engine games, played in parallel
//!
//! Every game runs on its own board with its own engines, each search stays single-threaded.

use indicatif::*;
use log::info;
use rayon::prelude::*;

use std::time::Instant;

use crate::{
    board::{Board, GameState},
    engine::Engine,
    Player,
};

#[derive(Copy, Clone, Debug)]
pub struct ArenaSettings {
    pub games: usize,
    /// Search depth of player one and player two
    pub depths: [u32; 2],
    /// Game `i` is seeded with `seed + i`
    pub seed: u64,
    pub pruning: bool,
}

#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct ArenaReport {
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl ArenaReport {
    pub fn games(&self) -> usize {
        self.player_one_wins + self.player_two_wins + self.draws
    }

    fn record(mut self, state: GameState, moves: usize) -> Self {
        match state {
            GameState::Won(Player::One) => self.player_one_wins += 1,
            GameState::Won(Player::Two) => self.player_two_wins += 1,
            _ => self.draws += 1,
        }
        self.total_moves += moves;
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            player_one_wins: self.player_one_wins + other.player_one_wins,
            player_two_wins: self.player_two_wins + other.player_two_wins,
            draws: self.draws + other.draws,
            total_moves: self.total_moves + other.total_moves,
        }
    }
}

/// Plays one game to the end, returning the final state and the number of moves
pub fn play_match(depths: [u32; 2], seed: u64, pruning: bool) -> (GameState, usize) {
    let mut board = Board::new();
    let mut engines = [
        Engine::new(Player::One, depths[0])
            .with_seed(seed)
            .with_pruning(pruning),
        Engine::new(Player::Two, depths[1])
            .with_seed(seed.rotate_left(32))
            .with_pruning(pruning),
    ];
    let mut to_move = Player::One;

    while !board.is_over() {
        let chosen = match engines[to_move.index()].best_move(&mut board) {
            Some(chosen) => chosen,
            None => break,
        };
        if !board.place(chosen.column, to_move) {
            break;
        }
        to_move = to_move.opponent();
    }
    (board.state(), board.num_moves())
}

/// Plays `settings.games` games across all available threads
pub fn run(settings: &ArenaSettings, show_progress: bool) -> ArenaReport {
    let start = Instant::now();

    let progress = if show_progress {
        let progress = ProgressBar::new(settings.games as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("Playing games: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
                .progress_chars("█▓▒░  "),
        );
        progress
    } else {
        ProgressBar::hidden()
    };

    let report = (0..settings.games)
        .into_par_iter()
        .map(|i| {
            let result = play_match(
                settings.depths,
                settings.seed.wrapping_add(i as u64),
                settings.pruning,
            );
            progress.inc(1);
            result
        })
        .fold(ArenaReport::default, |report, (state, moves)| {
            report.record(state, moves)
        })
        .reduce(ArenaReport::default, ArenaReport::merge);

    progress.finish_and_clear();
    info!(
        "Played {} games in {:.2}s",
        report.games(),
        start.elapsed().as_secs_f64()
    );
    report
}
