//! Prints every successor of each state message read from stdin.
//!
//! For each input line the output is the successor count followed by one
//! successor message per line. A finished game ends the listing without
//! printing anything for it.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use checkers_engine::checkers_errors::{CheckersError, CheckersResult};
use checkers_engine::game_state::game_state::GameState;
use checkers_engine::protocol::session_options::{SessionArgs, SessionOptions};
use checkers_engine::utils::logging::init_logging;

fn list_successors<W: Write>(state: &GameState, output: &mut W) -> CheckersResult<()> {
    let successors = state.find_possible_moves();
    writeln!(output, "{}", successors.len())?;
    for next in &successors {
        writeln!(output, "{}", next.to_message())?;
    }
    output.flush()?;
    Ok(())
}

fn run_listing<R: BufRead, W: Write>(input: R, output: &mut W, options: SessionOptions) -> CheckersResult<()> {
    if options.init {
        writeln!(output, "{}", GameState::new_game().to_message())?;
    }

    for line in input.lines() {
        let line = line?;
        let received = line.trim();
        if received.is_empty() {
            continue;
        }

        let state = GameState::from_message(received)?;
        let reencoded = state.to_message();
        if reencoded != received {
            return Err(CheckersError::RoundTripMismatch {
                received: received.to_owned(),
                reencoded,
            });
        }
        if options.verbose {
            info!("listing {received}\n{}", state.to_diagram(state.next_player()));
        }

        if state.is_eog() {
            info!(last_move = %state.last_move(), "game over, listing stopped");
            break;
        }
        list_successors(&state, output)?;
    }
    output.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let options = SessionOptions::from(SessionArgs::parse());
    init_logging(options.verbose);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match run_listing(stdin.lock(), &mut stdout, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "listing aborted");
            ExitCode::FAILURE
        }
    }
}
