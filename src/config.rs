//! Command line configuration

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::{arena::ArenaSettings, game::GameSettings};

/// Who chooses the moves of one side
#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum Controller {
    Human,
    Ai,
}

#[derive(Parser, Debug)]
#[command(name = "connect4", about = "Play Connect 4 against a minimax agent")]
pub struct Args {
    /// Search depth of the agent in plies
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub depth: u32,

    #[arg(long, value_enum, default_value_t = Controller::Human)]
    pub player_one: Controller,

    #[arg(long, value_enum, default_value_t = Controller::Ai)]
    pub player_two: Controller,

    /// Raise the search depth by one every N moves
    #[arg(long, value_name = "N")]
    pub ramp_every: Option<usize>,

    /// Seed for the tie-breaking noise
    #[arg(long)]
    pub seed: Option<u64>,

    /// Always pick the leftmost of equally scored moves
    #[arg(long)]
    pub no_jitter: bool,

    /// Search the full tree without alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Increase log output (-v for info, -vv for search details)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a batch of games between two agents and report the results
    Arena {
        #[arg(long, default_value_t = 100)]
        games: usize,

        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
        depth_one: u32,

        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
        depth_two: u32,
    },
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            depth: self.depth,
            controllers: [self.player_one, self.player_two],
            ramp_every: self.ramp_every,
            seed: self.seed,
            jitter: !self.no_jitter,
            pruning: !self.no_pruning,
        }
    }

    /// Settings for the `arena` subcommand, if it was given
    pub fn arena_settings(&self) -> Option<ArenaSettings> {
        match self.command {
            Some(Command::Arena {
                games,
                depth_one,
                depth_two,
            }) => Some(ArenaSettings {
                games,
                depths: [depth_one, depth_two],
                seed: self.seed.unwrap_or(0),
                pruning: !self.no_pruning,
            }),
            None => None,
        }
    }
}
