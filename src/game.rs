//! A single game between two sides, either of which may be played by the engine

use anyhow::{anyhow, Result};
use log::{info, warn};

use crate::{
    board::{Board, GameState, Move, PlaceError},
    config::Controller,
    engine::Engine,
    Player, WIDTH,
};

/// A line typed at the move prompt
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Input {
    /// A 0-indexed column to drop a disc in
    Column(usize),
    /// A new search depth, typed as `d <depth>`
    Depth(u32),
}

/// Parses prompt input: a 1-indexed column, or `d <depth>` to change the search depth
pub fn parse_input(input: &str) -> Result<Input> {
    let input = input.trim();

    if let Some(depth) = input.strip_prefix('d') {
        let depth = depth.trim();
        return match depth.parse::<u32>() {
            Ok(value) if value > 0 => Ok(Input::Depth(value)),
            _ => Err(anyhow!(
                "Invalid depth: {}, depth must be a positive integer",
                depth
            )),
        };
    }

    match input.parse::<usize>() {
        Ok(column @ 1..=WIDTH) => Ok(Input::Column(column - 1)),
        _ => Err(anyhow!("Invalid column: {}", input)),
    }
}

#[derive(Copy, Clone, Debug)]
pub struct GameSettings {
    pub depth: u32,
    pub controllers: [Controller; 2],
    /// Raise the search depth by one every this many moves
    pub ramp_every: Option<usize>,
    pub seed: Option<u64>,
    pub jitter: bool,
    pub pruning: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            depth: 5,
            controllers: [Controller::Human, Controller::Ai],
            ramp_every: None,
            seed: None,
            jitter: true,
            pruning: true,
        }
    }
}

pub struct Game {
    board: Board,
    to_move: Player,
    engine: Engine,
    settings: GameSettings,
    history: String,
}

impl Game {
    pub fn new(settings: GameSettings) -> Self {
        let ai_player = if settings.controllers[Player::Two.index()] == Controller::Ai {
            Player::Two
        } else {
            Player::One
        };
        let mut engine = Engine::new(ai_player, settings.depth)
            .with_jitter(settings.jitter)
            .with_pruning(settings.pruning);
        if let Some(seed) = settings.seed {
            engine = engine.with_seed(seed);
        }

        Self {
            board: Board::new(),
            to_move: Player::One,
            engine,
            settings,
            history: String::new(),
        }
    }

    /// Starts over with an empty board and the configured depth
    pub fn reset(&mut self) {
        info!("Restarting game");
        self.board = Board::new();
        self.to_move = Player::One;
        self.history.clear();
        self.engine.set_depth(self.settings.depth);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.board.state()
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The moves played so far as 1-indexed columns, readable by `Board::from_moves`
    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.engine.set_depth(depth);
    }

    pub fn controller(&self, player: Player) -> Controller {
        self.settings.controllers[player.index()]
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.board.is_over() && self.controller(self.to_move) == Controller::Ai
    }

    /// Drops a disc for the side to move in the 0-indexed `column`
    pub fn play(&mut self, column: usize) -> Result<GameState, PlaceError> {
        let placed = self.board.try_place(column, self.to_move)?;
        self.commit(placed);
        Ok(self.board.state())
    }

    /// Lets the engine choose and play a move for the side to move
    pub fn play_ai(&mut self) -> Option<Move> {
        let chosen = self.engine.select_best_move(&mut self.board, self.to_move)?;
        match self.board.try_place(chosen.column, chosen.player) {
            Ok(placed) => {
                self.commit(placed);
                Some(placed)
            }
            Err(err) => {
                warn!("Engine chose column {}: {}", chosen.column + 1, err);
                None
            }
        }
    }

    fn commit(&mut self, placed: Move) {
        self.history.push_str(&(placed.column + 1).to_string());
        self.to_move = self.to_move.opponent();

        match self.board.state() {
            GameState::Won(player) => {
                info!("{} wins after {} moves", player, self.board.num_moves())
            }
            GameState::Draw => info!("Draw after {} moves", self.board.num_moves()),
            GameState::Playing => self.ramp_depth(),
        }
    }

    fn ramp_depth(&mut self) {
        if let Some(every) = self.settings.ramp_every {
            if every > 0 && self.board.num_moves() % every == 0 {
                let depth = self.engine.depth() + 1;
                info!("Raising search depth to {}", depth);
                self.engine.set_depth(depth);
            }
        }
    }
}
