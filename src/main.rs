use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    arena,
    board::GameState,
    config::{Args, Controller},
    game::{parse_input, Game, Input},
    logger::init_logger,
    Player,
};

mod display;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level())
        .map_err(|err| anyhow!("failed to set up logging: {}", err))?;

    if let Some(settings) = args.arena_settings() {
        println!(
            "Playing {} games, depth {} against depth {}",
            settings.games, settings.depths[0], settings.depths[1]
        );
        let report = arena::run(&settings, true);
        println!(
            "Player 1 wins: {}, Player 2 wins: {}, draws: {}, mean game length: {:.1} moves",
            report.player_one_wins,
            report.player_two_wins,
            report.draws,
            report.total_moves as f64 / report.games().max(1) as f64
        );
        return Ok(());
    }

    let settings = args.game_settings();
    let mut game = Game::new(settings);
    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    info!(
        "Player 1: {:?}, Player 2: {:?}, search depth: {}",
        settings.controllers[0], settings.controllers[1], settings.depth
    );

    // game loop
    loop {
        display::draw(game.board())?;

        match game.state() {
            GameState::Playing => {
                // AI player
                if game.is_ai_turn() {
                    println!("AI is thinking...");
                    stdout().flush()?;

                    // slow down play if both players are AI
                    if game.controller(Player::One) == Controller::Ai
                        && game.controller(Player::Two) == Controller::Ai
                    {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    match game.play_ai() {
                        Some(played) => println!("Best move: {}", played.column + 1),
                        None => return Err(anyhow!("the agent found no move to play")),
                    }

                // human player
                } else {
                    print!("{} move input (or d <depth>) > ", game.to_move());
                    stdout().flush()?;
                    let mut input_str = String::new();
                    if stdin.read_line(&mut input_str)? == 0 {
                        // end of input
                        return Ok(());
                    }

                    let column = match parse_input(&input_str) {
                        Ok(Input::Column(column)) => column,
                        Ok(Input::Depth(depth)) => {
                            game.set_depth(depth);
                            println!("Search depth set to {}", depth);
                            continue;
                        }
                        Err(err) => {
                            println!("{}", err);
                            continue;
                        }
                    };

                    if let Err(err) = game.play(column) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            }

            // end states
            end_state => {
                match end_state {
                    GameState::Won(player) => println!("{} wins!", player),
                    _ => println!("Draw!"),
                }
                println!("Moves: {}", game.history());

                if !ask_yes_no("Play again? y/n: ")? {
                    break;
                }
                game.reset();
            }
        }
    }
    Ok(())
}

fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        if stdin().read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
