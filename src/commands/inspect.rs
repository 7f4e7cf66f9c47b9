//! Inspect command - classify every code point of a string.

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Args;

use ghostink::{analyze_codepoints, Category, ClassifiedCodepoint};

use super::CommandExecutor;

/// Classify every code point of a string as visible, hidden, or cancel tag.
///
/// Useful for checking whether a copied emoji actually carries a payload,
/// and for seeing exactly which code points a transport stripped.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// The string to inspect (reads from stdin if not provided)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output the classification as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl CommandExecutor for InspectCommand {
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

        let entries = analyze_codepoints(&input);

        if self.json {
            let json =
                serde_json::to_string_pretty(&entries).context("Failed to serialize analysis")?;
            println!("{}", json);
        } else {
            print_codepoint_table(&entries);
        }

        Ok(())
    }
}

/// Renders the classification as a table with a summary count line.
pub(crate) fn print_codepoint_table(entries: &[ClassifiedCodepoint]) {
    if entries.is_empty() {
        println!("(empty input)");
        return;
    }

    let visible = entries.iter().filter(|e| e.category == Category::Visible).count();
    let hidden = entries.iter().filter(|e| e.category == Category::Tag).count();
    let cancel = entries.iter().filter(|e| e.category == Category::Cancel).count();

    print!("{} visible, {} hidden", visible, hidden);
    if cancel > 0 {
        print!(", {} cancel", cancel);
    }
    println!(" ({} total)", entries.len());
    println!();

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>4}  {}  U+{:05X}  {}",
            i,
            printable_glyph(entry.display),
            entry.codepoint,
            category_label(entry.category)
        );
    }
}

/// Label shown for each category in the table.
fn category_label(category: Category) -> &'static str {
    match category {
        Category::Visible => "Visible",
        Category::Tag => "Hidden",
        Category::Cancel => "Cancel Tag",
    }
}

/// Replaces control characters so table rows stay on one line.
fn printable_glyph(c: char) -> char {
    if c.is_control() {
        '\u{FFFD}'
    } else {
        c
    }
}
