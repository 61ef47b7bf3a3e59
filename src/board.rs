//! Grid state, legal move bookkeeping and win/draw detection

use anyhow::{anyhow, Result};
use thiserror::Error;

use std::ops::Deref;

use crate::{Player, ALIGNMENT, HEIGHT, WIDTH};

/// Directions scanned for alignments as (column, row) steps, rows counting downwards:
/// right, down, down-right, up-right
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
            Cell::Empty => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }
}

/// Position of a single cell, row 0 is the top of the board
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Coord {
    pub column: usize,
    pub row: usize,
}

impl Coord {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// A disc placement. The row is always taken from the column's fill cursor.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// Cached result of the most recent placement
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Player),
    Draw,
}

/// Result of a full scan of the grid
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Undecided,
    Win { player: Player, line: [Coord; ALIGNMENT] },
    Draw,
}

#[derive(Error, Copy, Clone, Eq, PartialEq, Debug)]
pub enum PlaceError {
    #[error(
        "Invalid move, column {column} out of range. Columns must be between 0 and {}",
        WIDTH - 1
    )]
    ColumnOutOfRange { column: usize },
    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },
    #[error("Invalid move, the game is already over")]
    GameOver,
}

/// Legal moves of one side, left to right, without allocating
#[derive(Copy, Clone, Debug)]
pub struct MoveList {
    size: usize,
    moves: [Move; WIDTH],
}

impl MoveList {
    fn new(player: Player) -> Self {
        Self {
            size: 0,
            moves: [Move {
                column: 0,
                row: 0,
                player,
            }; WIDTH],
        }
    }

    fn push(&mut self, new_move: Move) {
        self.moves[self.size] = new_move;
        self.size += 1;
    }
}

impl Deref for MoveList {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.moves[..self.size]
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored column by column, top-to-bottom
    heights: [usize; WIDTH],
    num_moves: usize,
    state: GameState,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            num_moves: 0,
            state: GameState::Playing,
        }
    }

    /// Builds a board from a string of 1-indexed columns, players alternating from `Player::One`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board.try_place(column - 1, player).map_err(|err| match err {
                        PlaceError::ColumnFull { .. } => {
                            anyhow!("Invalid move, column {} full", column)
                        }
                        other => anyhow!(other),
                    })?;
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    fn index(column: usize, row: usize) -> usize {
        column * HEIGHT + row
    }

    pub fn cell(&self, column: usize, row: usize) -> Cell {
        self.cells[Self::index(column, row)]
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    /// The row the next disc dropped in `column` lands on
    pub fn fill_row(&self, column: usize) -> Option<usize> {
        if self.playable(column) {
            Some(HEIGHT - 1 - self.heights[column])
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        self.num_moves == WIDTH * HEIGHT
    }

    /// Drops a disc, reporting whether it was accepted
    pub fn place(&mut self, column: usize, player: Player) -> bool {
        self.try_place(column, player).is_ok()
    }

    pub fn try_place(&mut self, column: usize, player: Player) -> Result<Move, PlaceError> {
        if self.is_over() {
            return Err(PlaceError::GameOver);
        }
        if column >= WIDTH {
            return Err(PlaceError::ColumnOutOfRange { column });
        }
        let row = self
            .fill_row(column)
            .ok_or(PlaceError::ColumnFull { column })?;

        let placed = Move {
            column,
            row,
            player,
        };
        self.play(placed);
        Ok(placed)
    }

    /// Legal moves for `player`, one per non-full column
    pub fn legal_moves(&self, player: Player) -> MoveList {
        let mut moves = MoveList::new(player);
        for column in 0..WIDTH {
            if let Some(row) = self.fill_row(column) {
                moves.push(Move {
                    column,
                    row,
                    player,
                });
            }
        }
        moves
    }

    /// Plays `mv`, runs `f` on the resulting position and takes the move back
    pub fn probe<R>(&mut self, mv: Move, f: impl FnOnce(&mut Board) -> R) -> R {
        self.play(mv);
        let result = f(self);
        self.unplace(mv.column);
        result
    }

    // the move must come from the fill cursor of a position that is still being played
    fn play(&mut self, mv: Move) {
        debug_assert_eq!(self.fill_row(mv.column), Some(mv.row));
        debug_assert!(!self.is_over());

        self.cells[Self::index(mv.column, mv.row)] = mv.player.into();
        self.heights[mv.column] += 1;
        self.num_moves += 1;

        self.state = if self.check_winning_move(mv) {
            GameState::Won(mv.player)
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
    }

    /// Removes the top disc of `column`. Calls must mirror placements in reverse order.
    pub(crate) fn unplace(&mut self, column: usize) {
        debug_assert!(self.heights[column] > 0);

        let row = HEIGHT - self.heights[column];
        self.cells[Self::index(column, row)] = Cell::Empty;
        self.heights[column] -= 1;
        self.num_moves -= 1;
        // placements are only accepted while playing
        self.state = GameState::Playing;
    }

    // checks only the lines running through the disc just placed
    fn check_winning_move(&self, mv: Move) -> bool {
        let player = Cell::from(mv.player);

        for &(dx, dy) in DIRECTIONS.iter() {
            let mut run = 1;
            for sign in [-1isize, 1].iter() {
                let mut x = mv.column as isize + sign * dx;
                let mut y = mv.row as isize + sign * dy;
                while x >= 0
                    && x < WIDTH as isize
                    && y >= 0
                    && y < HEIGHT as isize
                    && self.cell(x as usize, y as usize) == player
                {
                    run += 1;
                    x += sign * dx;
                    y += sign * dy;
                }
            }
            if run >= ALIGNMENT {
                return true;
            }
        }
        false
    }

    /// Scans the whole grid, returning the first alignment found
    pub fn evaluate_outcome(&self) -> Outcome {
        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                let player = match self.cell(column, row).owner() {
                    Some(player) => player,
                    None => continue,
                };
                for &(dx, dy) in DIRECTIONS.iter() {
                    if let Some(line) = self.alignment_from(Coord::new(column, row), dx, dy) {
                        return Outcome::Win { player, line };
                    }
                }
            }
        }

        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    fn alignment_from(&self, start: Coord, dx: isize, dy: isize) -> Option<[Coord; ALIGNMENT]> {
        let first = self.cell(start.column, start.row);
        let mut line = [start; ALIGNMENT];

        for (i, coord) in line.iter_mut().enumerate().skip(1) {
            let x = start.column as isize + i as isize * dx;
            let y = start.row as isize + i as isize * dy;
            if x < 0 || x >= WIDTH as isize || y < 0 || y >= HEIGHT as isize {
                return None;
            }
            if self.cell(x as usize, y as usize) != first {
                return None;
            }
            *coord = Coord::new(x as usize, y as usize);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
