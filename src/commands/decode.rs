//! Decode command - recover a hidden message from an emoji string.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use ghostink::decode;

use super::CommandExecutor;

/// Recover the hidden message from an emoji string.
///
/// NOTE: Decoding itself never fails - every tag character found in the
/// input is extracted, even from malformed or truncated payloads. An input
/// with no tag characters at all is reported as carrying no hidden data.
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// The emoji string to decode (reads from stdin if not provided)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Verbose output (shows payload size)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        let input = match &self.input {
            Some(text) => text.clone(),
            None => {
                eprintln!("Reading input from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read input from stdin")?;
                buffer.trim_end_matches('\n').to_string()
            }
        };

        let message = decode(&input);

        if message.is_empty() {
            eprintln!("No hidden data found in this input.");
            return Ok(());
        }

        println!("{}", message);

        if self.verbose {
            eprintln!(
                "Recovered {} hidden characters from {} code points",
                message.chars().count(),
                input.chars().count()
            );
        }

        Ok(())
    }
}
