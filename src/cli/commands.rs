//! Command selection

use super::Args;
use crate::error::ErrorSeverity;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Analyze the project in the specified directory
    Analyze(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Analyze(args)
    }
}

/// Process exit code for an error of the given severity
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        // Warnings don't cause failure
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}
