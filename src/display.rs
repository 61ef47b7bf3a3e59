use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{
    board::{Board, Cell, Coord, Outcome},
    HEIGHT, WIDTH,
};

/// Draws the board below the cursor, highlighting a winning line if there is one
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let winning_line = match board.evaluate_outcome() {
        Outcome::Win { line, .. } => Some(line),
        _ => None,
    };

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits on the line below the bottom row
    let (origin_x, origin_y) = crossterm::cursor::position()?;
    let top_y = origin_y - HEIGHT as u16;

    for column in 0..WIDTH {
        for row in 0..HEIGHT {
            let highlighted = winning_line
                .map(|line| line.contains(&Coord::new(column, row)))
                .unwrap_or(false);
            let background = if highlighted {
                Color::White
            } else {
                Color::DarkBlue
            };

            stdout
                .queue(MoveTo(origin_x + column as u16, top_y + row as u16))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(background)
                        .with(match board.cell(column, row) {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => background,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
