//! Encode command - hide a message inside an emoji.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use ghostink::{analyze_codepoints, encode, normalize};

use super::CommandExecutor;

/// Hide a secret message inside an emoji.
///
/// The output looks identical to the bare emoji but carries the message as
/// invisible tag characters. Paste it anywhere that preserves Unicode;
/// anyone with ghostink (or any tag-character decoder) can read it back.
///
/// The secret is normalized to printable ASCII first - accents are
/// stripped and typographic punctuation is transliterated.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// The visible emoji to hide the message in
    #[arg(short, long, default_value = "👻")]
    pub emoji: String,

    /// The secret message (reads from stdin if not provided)
    #[arg(short, long)]
    pub secret: Option<String>,

    /// Show the code-point breakdown of the encoded result
    #[arg(long)]
    pub inspect: bool,

    /// Verbose output (shows normalization and payload size)
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        let secret = match &self.secret {
            Some(s) => s.clone(),
            None => {
                eprintln!("Reading secret from stdin (Ctrl+D to finish):");
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read secret from stdin")?;
                buffer.trim_end_matches('\n').to_string()
            }
        };

        let clean = normalize(&secret);
        if self.verbose && clean != secret {
            eprintln!("Normalized: {}", clean);
        }

        let encoded = encode(&self.emoji, &secret).context("Failed to encode message")?;

        println!("{}", encoded);

        if self.verbose {
            eprintln!(
                "Hidden {} characters behind {} ({} code points total)",
                clean.chars().count(),
                self.emoji,
                encoded.chars().count()
            );
        }

        if self.inspect {
            println!();
            super::inspect::print_codepoint_table(&analyze_codepoints(&encoded));
        }

        Ok(())
    }
}
