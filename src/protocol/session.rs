//! Line-oriented protocol session.
//!
//! Each input line is one state message from the counterpart. The session
//! decodes it, checks that it re-encodes to the same text, stops if the game
//! is over, and otherwise answers with the message of one chosen successor.
//! Diagnostics go through `tracing`, never to the output stream.

use std::io::{self, BufRead, Write};

use tracing::{error, info};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::protocol::session_options::SessionOptions;
use crate::utils::deadline::Deadline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    GameOver,
}

/// Plays a session over stdin/stdout with a [`RandomEngine`].
pub fn run_stdio_loop(options: SessionOptions) -> CheckersResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut engine = RandomEngine::new();
    run_session(stdin.lock(), &mut stdout, options, &mut engine)
}

pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    options: SessionOptions,
    engine: &mut dyn Engine,
) -> CheckersResult<()> {
    info!(engine = engine.name(), ?options, "session started");

    if options.init {
        let message = GameState::new_game().to_message();
        info!(%message, "sending opening position");
        writeln!(output, "{message}")?;
        output.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let received = line.trim();
        if received.is_empty() {
            continue;
        }

        if handle_message(received, output, options, engine)? == Flow::GameOver {
            break;
        }
    }

    info!("session finished");
    Ok(())
}

fn handle_message<W: Write>(
    received: &str,
    output: &mut W,
    options: SessionOptions,
    engine: &mut dyn Engine,
) -> CheckersResult<Flow> {
    let deadline = Deadline::after(options.move_budget());

    let input_state = GameState::from_message(received).inspect_err(|err| {
        error!(%err, received, "rejected state message");
    })?;

    let reencoded = input_state.to_message();
    if reencoded != received {
        error!(received, %reencoded, "state message does not round-trip");
        return Err(CheckersError::RoundTripMismatch {
            received: received.to_owned(),
            reencoded,
        });
    }

    let me = input_state.next_player();
    if options.verbose {
        info!("received {received}\n{}", input_state.to_diagram(me));
    }

    if input_state.is_eog() {
        info!(last_move = %input_state.last_move(), "game over on received state");
        return Ok(Flow::GameOver);
    }

    let output_state = engine.choose_successor(&input_state, &deadline)?;
    let message = output_state.to_message();

    if options.verbose {
        info!("sending {message}\n{}", output_state.to_diagram(me));
    }

    writeln!(output, "{message}")?;
    output.flush()?;

    if output_state.is_eog() {
        info!(last_move = %output_state.last_move(), "game over on sent state");
        return Ok(Flow::GameOver);
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::run_session;
    use crate::checkers_errors::CheckersError;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::checkers_rules::STARTING_POSITION_MESSAGE;
    use crate::game_state::game_state::GameState;
    use crate::protocol::session_options::SessionOptions;

    fn run(input: &str, options: SessionOptions) -> (Result<(), CheckersError>, Vec<String>) {
        let mut output = Vec::<u8>::new();
        let mut engine = RandomEngine::with_seed(3);
        let result = run_session(Cursor::new(input.to_owned()), &mut output, options, &mut engine);
        let lines = String::from_utf8(output)
            .expect("output should be utf-8")
            .lines()
            .map(str::to_owned)
            .collect();
        (result, lines)
    }

    #[test]
    fn init_sends_the_opening_position_first() {
        let options = SessionOptions {
            init: true,
            ..SessionOptions::default()
        };
        let (result, lines) = run("", options);

        result.expect("session should end cleanly");
        assert_eq!(lines, vec![STARTING_POSITION_MESSAGE.to_owned()]);
    }

    #[test]
    fn answers_each_state_with_one_successor() {
        let input = format!("{STARTING_POSITION_MESSAGE}\n\n");
        let (result, lines) = run(&input, SessionOptions::default());

        result.expect("session should end cleanly");
        assert_eq!(lines.len(), 1);
        let reply = GameState::from_message(&lines[0]).expect("reply should decode");
        assert!(GameState::new_game().find_possible_moves().contains(&reply));
    }

    #[test]
    fn stops_on_a_finished_game_without_reading_further() {
        let input = "r............................... RW w 40\nnot a state message\n";
        let (result, lines) = run(input, SessionOptions::default());

        result.expect("terminal input should end the session");
        assert!(lines.is_empty());
    }

    #[test]
    fn stops_after_sending_a_terminal_state() {
        let input = "...r...w..w..................... 15-11 r 50\nnot a state message\n";
        let (result, lines) = run(input, SessionOptions::default());

        result.expect("terminal reply should end the session");
        assert_eq!(lines, vec!["...r...w..w..................... WW w 50".to_owned()]);
    }

    #[test]
    fn verbose_output_stays_clean() {
        let options = SessionOptions {
            verbose: true,
            ..SessionOptions::default()
        };
        let (result, lines) = run(&format!("{STARTING_POSITION_MESSAGE}\n"), options);

        result.expect("session should end cleanly");
        assert_eq!(lines.len(), 1);
        GameState::from_message(&lines[0]).expect("only protocol lines are written");
    }

    #[test]
    fn malformed_input_is_reported() {
        let (result, lines) = run("hello\n", SessionOptions::default());
        assert!(matches!(result, Err(CheckersError::WrongFieldCount { found: 1 })));
        assert!(lines.is_empty());
    }

    #[test]
    fn input_that_does_not_round_trip_is_rejected() {
        let input = "rrrrrrrrrrrr........wwwwwwwwwwww BOG r 050\n";
        let (result, _) = run(input, SessionOptions::default());
        assert!(matches!(result, Err(CheckersError::RoundTripMismatch { .. })));

        let input = "rrrrrrrrrrrr........wwwwwwwwwwww  BOG r 50\n";
        let (result, _) = run(input, SessionOptions::default());
        assert!(matches!(result, Err(CheckersError::RoundTripMismatch { .. })));
    }

    #[test]
    fn two_sessions_can_play_each_other_to_the_end() {
        let mut state = GameState::new_game();
        let mut engines = [RandomEngine::with_seed(11), RandomEngine::with_seed(12)];
        let mut plies = 0usize;

        while !state.is_eog() {
            let mut output = Vec::<u8>::new();
            let engine = &mut engines[plies % 2];
            run_session(
                Cursor::new(format!("{}\n", state.to_message())),
                &mut output,
                SessionOptions::default(),
                engine,
            )
            .expect("every reply should be valid");

            let reply = String::from_utf8(output).expect("output should be utf-8");
            state = GameState::from_message(reply.trim()).expect("reply should decode");
            plies += 1;
            assert!(plies < 2_000, "game should end through captures or the draw counter");
        }

        assert!(state.is_draw() || state.is_red_win() || state.is_white_win());
    }
}
