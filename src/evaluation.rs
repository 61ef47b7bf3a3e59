//! Static evaluation of a position

use crate::{board::Board, Player, ALIGNMENT, HEIGHT, WIDTH};

/// Positional weights indexed `[row][column]`, row 0 at the top
pub const WEIGHTS: [[i32; WIDTH]; HEIGHT] = weight_table();

/// Weights each cell by how many lines of `ALIGNMENT` cells pass through it,
/// which puts the largest weights in the middle of the board
pub const fn weight_table() -> [[i32; WIDTH]; HEIGHT] {
    let mut table = [[0; WIDTH]; HEIGHT];
    // (column, row) steps: horizontal, vertical and both diagonals
    let directions: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

    let mut d = 0;
    while d < directions.len() {
        let (dx, dy) = directions[d];
        let mut column = 0;
        while column < WIDTH {
            let mut row = 0;
            while row < HEIGHT {
                let end_x = column as isize + dx * (ALIGNMENT as isize - 1);
                let end_y = row as isize + dy * (ALIGNMENT as isize - 1);
                if end_x >= 0 && end_x < WIDTH as isize && end_y >= 0 && end_y < HEIGHT as isize {
                    // count every cell of the line starting here
                    let mut i = 0;
                    while i < ALIGNMENT {
                        let x = (column as isize + dx * i as isize) as usize;
                        let y = (row as isize + dy * i as isize) as usize;
                        table[y][x] += 1;
                        i += 1;
                    }
                }
                row += 1;
            }
            column += 1;
        }
        d += 1;
    }
    table
}

/// Sums the weights of `perspective`'s discs minus the weights of the opponent's discs
pub fn positional_score(board: &Board, perspective: Player) -> i32 {
    let mut total = 0;
    for column in 0..WIDTH {
        for row in 0..HEIGHT {
            match board.cell(column, row).owner() {
                Some(owner) if owner == perspective => total += WEIGHTS[row][column],
                Some(_) => total -= WEIGHTS[row][column],
                None => {}
            }
        }
    }
    total
}
