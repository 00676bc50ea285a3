mod cli;
mod game;
mod minimax;
mod session;
mod taunts;
mod tic_tac_toe;

use std::io::{self, BufRead};
use std::thread;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Cli;
use crate::session::{GameSession, Mode, COMPUTER};
use crate::tic_tac_toe::GameOutcome;

const HELP: &str = "Enter a cell 0-8, r to reset, m to switch mode, q to quit";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = GameSession::new(cli.mode());
    info!("starting in {:?}", session.mode());

    println!("{}", HELP);
    let mut lines = io::stdin().lock().lines();

    loop {
        println!("{}", session.board());
        println!("{}", session.turn_indicator());
        println!("{}", session.status());

        if session.is_computer_turn() {
            let taunt = taunts::random_taunt(&mut rng);
            println!("AI ({}): {}", session.current_player(), taunt);
            thread::sleep(cli.think_delay());
            let (index, _) = session.computer_move()?;
            println!("AI plays {}", index);
            announce(&mut session);
            continue;
        }

        // EOF ends the game like `q`.
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "q" => break,
            "r" => session.reset(),
            "m" => session.toggle_mode(),
            input => {
                let Ok(index) = input.parse::<usize>() else {
                    println!("{}", HELP);
                    continue;
                };
                match session.play(index) {
                    Ok(_) => announce(&mut session),
                    Err(err) => println!("{}", err),
                }
            }
        }
    }

    Ok(())
}

/// Print the result of a finished game and start the next one.
fn announce(session: &mut GameSession) {
    match session.outcome() {
        GameOutcome::InProgress => return,
        GameOutcome::Win(winner) if session.mode() == Mode::VsComputer && winner == COMPUTER => {
            println!("{}AI wins!", session.board())
        }
        GameOutcome::Win(winner) => println!("{}{} wins!", session.board(), winner),
        GameOutcome::Draw => println!("{}Draw!", session.board()),
    }
    session.reset();
}
