use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use dropfour_ai::*;

/// One-shot move recommendation: replay a move string, show the
/// position and print the column the side to move should play.
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let moves = args.next().unwrap_or_default();
    let depth = match args.next() {
        Some(arg) => arg
            .parse::<u32>()
            .map_err(|_| anyhow!("could not parse '{}' as a search depth", arg))?,
        None => DEFAULT_DEPTH,
    };

    let (board, to_move) = Board::from_moves(&moves)?;
    display(&board)?;

    if let Some(winner) = check_winner(&board) {
        let player = match winner {
            Cell::PlayerOne => 1,
            _ => 2,
        };
        println!("Game over, player {} has already won", player);
        return Ok(());
    }

    match best_move(&board, to_move, to_move.opponent(), depth)? {
        Some(column) => println!("Best move: {}", column + 1),
        None => println!("No move available, the board is full"),
    }
    Ok(())
}

fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;

    // row 0 fills first, so draw from the top of the board down
    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match board.get(row, column) {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
