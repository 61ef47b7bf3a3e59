//! An agent choosing Connect 4 moves with depth-limited minimax search

use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    board::{Board, GameState, Move},
    evaluation::positional_score,
    Player,
};

/// Base score of a decided game, large enough to dominate any positional score
pub const WIN_SCORE: f64 = 1000.0;

/// Upper bound of the noise added to leaf scores to vary the choice between equal moves
pub const JITTER: f64 = 0.01;

/// An agent selecting moves with minimax search and alpha-beta pruning
///
/// # Notes
/// The search explores every legal move to a fixed depth, trying columns left to
/// right, and scores the leaves with [`positional_score`]. Nothing is cached between
/// searches, so the cost grows exponentially with the depth.
///
/// # Position Scoring
/// Scores are from the point of view of the side the search is run for. A position
/// won by that side scores `WIN_SCORE` plus the remaining search depth, so quicker
/// wins are preferred. A lost position scores `-WIN_SCORE` plus the number of plies
/// already played, so a forced loss is delayed as long as possible. A drawn position
/// scores 0 whatever the remaining depth.
#[derive(Clone)]
pub struct Engine {
    player: Player,
    depth: u32,
    pruning: bool,
    jitter: bool,
    rng: StdRng,

    /// The number of nodes searched by this `Engine` so far (for diagnostics only)
    pub node_count: usize,
}

impl Engine {
    /// Creates a new `Engine` playing `player`, searching `depth` plies ahead
    pub fn new(player: Player, depth: u32) -> Self {
        Self {
            player,
            depth,
            pruning: true,
            jitter: true,
            rng: StdRng::from_os_rng(),
            node_count: 0,
        }
    }

    /// Seeds the tie-breaking noise so searches are reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Enables or disables the tie-breaking noise
    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Enables or disables alpha-beta pruning. Without it the search is plain minimax.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    // a depth of 0 still has to look at the moves themselves
    fn max_depth(&self) -> u32 {
        self.depth.max(1)
    }

    fn leaf(&mut self, score: f64) -> f64 {
        if self.jitter {
            score + self.rng.random::<f64>() * JITTER
        } else {
            score
        }
    }

    /// Performs game tree search
    ///
    /// Returns the score of the position for `perspective` (see [Position Scoring])
    ///
    /// [Position Scoring]: #position-scoring
    fn search(
        &mut self,
        board: &mut Board,
        remaining: u32,
        to_move: Player,
        perspective: Player,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.node_count += 1;

        match board.state() {
            GameState::Won(winner) if winner == perspective => {
                return self.leaf(WIN_SCORE + remaining as f64);
            }
            GameState::Won(_) => {
                let played = self.max_depth() - remaining;
                return self.leaf(-WIN_SCORE + played as f64);
            }
            GameState::Draw => return self.leaf(0.0),
            GameState::Playing => {}
        }

        if remaining == 0 {
            let score = positional_score(board, perspective) as f64;
            return self.leaf(score);
        }

        // a board still being played always has a free column
        let moves = board.legal_moves(to_move);
        debug_assert!(!moves.is_empty());

        let maximising = to_move == perspective;
        let mut best = if maximising {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for &next in moves.iter() {
            let score = board.probe(next, |board| {
                self.search(
                    board,
                    remaining - 1,
                    to_move.opponent(),
                    perspective,
                    alpha,
                    beta,
                )
            });

            if maximising {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            // a perfect opponent will never let the game reach the remaining branches
            if self.pruning && beta <= alpha {
                break;
            }
        }

        best
    }

    /// Scores every legal move of `to_move`, left to right
    ///
    /// Returns an empty list if the game is already over
    pub fn score_moves(&mut self, board: &mut Board, to_move: Player) -> Vec<(Move, f64)> {
        if board.is_over() {
            return Vec::new();
        }

        let remaining = self.max_depth() - 1;
        let moves = board.legal_moves(to_move);
        let mut scored = Vec::with_capacity(moves.len());

        for &next in moves.iter() {
            let score = board.probe(next, |board| {
                self.search(
                    board,
                    remaining,
                    to_move.opponent(),
                    to_move,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                )
            });
            scored.push((next, score));
        }
        scored
    }

    /// Calculates the best move for `to_move`, keeping the leftmost of equally scored moves
    ///
    /// The board is left exactly as it was passed in. Returns `None` if the game is over.
    pub fn select_best_move(&mut self, board: &mut Board, to_move: Player) -> Option<Move> {
        let start_count = self.node_count;

        let mut best: Option<(Move, f64)> = None;
        for (candidate, score) in self.score_moves(board, to_move) {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }

        if let Some((chosen, score)) = best {
            debug!(
                "{} searched {} nodes at depth {}, best column: {}, score: {:.3}",
                to_move,
                self.node_count - start_count,
                self.depth,
                chosen.column + 1,
                score
            );
        }
        best.map(|(chosen, _)| chosen)
    }

    /// Calculates the best move for this engine's own side
    pub fn best_move(&mut self, board: &mut Board) -> Option<Move> {
        self.select_best_move(board, self.player)
    }
}
