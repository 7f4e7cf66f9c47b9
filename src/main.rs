//! Ghostink - Hide text inside an emoji
//!
//! A CLI tool for emoji steganography with invisible Unicode tag characters.
//! The encoded output renders exactly like the bare emoji.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CommandExecutor, DecodeCommand, EncodeCommand, InspectCommand};

/// Ghostink - Hide text inside an emoji
///
/// Hides short messages behind a visible emoji using the invisible Unicode
/// tag-character block (U+E0001..U+E007F). Encode, decode, and inspect
/// strings without touching the network or disk.
#[derive(Parser)]
#[command(name = "ghostink")]
#[command(version)]
#[command(about = "Hide short text messages inside an emoji using invisible Unicode tag characters")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a secret message inside an emoji
    Encode(EncodeCommand),

    /// Recover the hidden message from an emoji string
    Decode(DecodeCommand),

    /// Classify every code point of a string (visible / hidden / cancel tag)
    Inspect(InspectCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Inspect(cmd) => cmd.execute(),
    }
}
