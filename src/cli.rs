use std::time::Duration;

use clap::Parser;

use crate::session::Mode;

/// Tic-tac-toe in the terminal, against a friend or a minimax opponent.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Start against the computer instead of a second human
    #[arg(long)]
    pub vs_computer: bool,

    /// How long the computer "thinks" before moving, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub think_ms: u64,

    /// Seed for the computer's taunts
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.vs_computer {
            Mode::VsComputer
        } else {
            Mode::TwoPlayer
        }
    }

    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }
}
