//! Runtime options of a protocol session.

use chrono::TimeDelta;
use clap::{Parser, ValueEnum};

/// Reply budget per move in normal play.
pub const MOVE_BUDGET_MS: i64 = 1_000;
/// Reply budget per move with `fast`.
pub const FAST_MOVE_BUDGET_MS: i64 = 100;

/// Bare words accepted on the command line, in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SessionFlag {
    /// Send the opening position before reading anything
    #[value(alias = "i")]
    Init,
    /// Log received and sent states with diagrams to stderr
    #[value(alias = "v")]
    Verbose,
    /// Use the short per-move budget
    #[value(alias = "f")]
    Fast,
}

#[derive(Parser, Debug)]
#[command(version, about = "Plays English draughts over a line protocol on stdin/stdout")]
pub struct SessionArgs {
    /// Session flags: init|i, verbose|v, fast|f
    #[arg(value_enum)]
    pub flags: Vec<SessionFlag>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Send the opening position before reading anything.
    pub init: bool,
    /// Log every received and sent state with its diagram.
    pub verbose: bool,
    /// Use the short reply budget.
    pub fast: bool,
}

impl SessionOptions {
    pub fn from_flags(flags: &[SessionFlag]) -> Self {
        Self {
            init: flags.contains(&SessionFlag::Init),
            verbose: flags.contains(&SessionFlag::Verbose),
            fast: flags.contains(&SessionFlag::Fast),
        }
    }

    pub fn move_budget(&self) -> TimeDelta {
        TimeDelta::milliseconds(if self.fast {
            FAST_MOVE_BUDGET_MS
        } else {
            MOVE_BUDGET_MS
        })
    }
}

impl From<SessionArgs> for SessionOptions {
    fn from(args: SessionArgs) -> Self {
        Self::from_flags(&args.flags)
    }
}
