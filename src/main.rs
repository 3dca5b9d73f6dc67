use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use checkers_engine::protocol::session::run_stdio_loop;
use checkers_engine::protocol::session_options::{SessionArgs, SessionOptions};
use checkers_engine::utils::logging::init_logging;

fn main() -> ExitCode {
    let options = SessionOptions::from(SessionArgs::parse());
    init_logging(options.verbose);

    match run_stdio_loop(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            ExitCode::FAILURE
        }
    }
}
