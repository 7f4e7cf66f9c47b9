//! CLI commands, one module per subcommand.
//!
//! Every command is a clap `Args` struct implementing `CommandExecutor`,
//! so `main` only parses and dispatches.

mod decode;
mod encode;
mod inspect;

pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;

use anyhow::Result;

/// Executed by `main` after argument parsing.
pub trait CommandExecutor {
    /// Runs the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}
