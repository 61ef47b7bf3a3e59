//! A depth-limited minimax agent for playing the board game 'Connect 4'
//!
//! The board is a plain grid with gravity-fed columns. The engine explores
//! the game tree with alpha-beta pruning to a configurable depth and scores
//! the leaves with a centre-biased positional table.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, engine::Engine, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! for _ in 0..3 {
//!     board.try_place(3, Player::One)?;
//! }
//!
//! let mut engine = Engine::new(Player::Two, 4).with_jitter(false);
//! let best_move = engine.select_best_move(&mut board, Player::Two);
//!
//! assert_eq!(best_move.map(|m| m.column), Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

use std::fmt;

pub mod board;

pub mod evaluation;

pub mod engine;

pub mod game;

pub mod arena;

pub mod config;

pub mod logger;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const ALIGNMENT: usize = 4;

// a four-in-a-row has to fit on the board in both directions
const_assert!(WIDTH >= ALIGNMENT);
const_assert!(HEIGHT >= ALIGNMENT);

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index of this player for per-side arrays
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}
