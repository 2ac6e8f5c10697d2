//! `chordsheet` - command-line front end for the chord notation engine.
//!
//! Usage:
//!   `chordsheet to-inline song.txt`
//!   `chordsheet transpose -- -2 < song.txt`
//!   `chordsheet layout --json song.txt`
//!
//! Reads the file argument, or stdin when it is absent or `-`, and writes
//! the result to stdout. Logs go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chordsheet::config::Config;
use chordsheet::notation::{
    classify_lines, count_line_kinds, inline_to_over_text_with, over_text_to_inline_with,
    render_column_layout_with, strip_chords, transpose, used_chords,
};
use chordsheet::Error;

#[derive(Parser)]
#[command(name = "chordsheet", version, about = "Convert, transpose and strip song chords")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Chords-over-text to inline `[C]` notation
    ToInline(Input),
    /// Inline notation to chords-over-text
    ToOver(Input),
    /// Shift every bracketed chord by a number of semitones
    Transpose {
        /// Semitones, negative to go down
        #[arg(allow_negative_numbers = true)]
        semitones: i32,
        #[command(flatten)]
        input: Input,
    },
    /// Remove chords, leaving plain lyrics
    Strip(Input),
    /// Render chord and lyric rows for every line
    Layout {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        input: Input,
    },
    /// Classify every line as JSON
    Classify {
        /// Print a count per line kind instead
        #[arg(long)]
        summary: bool,
        #[command(flatten)]
        input: Input,
    },
    /// List the distinct chords used, one per line
    Chords(Input),
}

#[derive(Args)]
struct Input {
    /// Song file; stdin when omitted or `-`
    file: Option<PathBuf>,
}

impl Input {
    fn read(&self) -> chordsheet::Result<String> {
        match self.file.as_deref() {
            Some(path) if path.as_os_str() != "-" => {
                std::fs::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))
            }
            _ => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load config")?;
    let layout = config.layout();
    tracing::debug!(app = config.app_name(), version = config.app_version(), ?layout, "starting");

    match cli.command {
        Command::ToInline(input) => {
            println!("{}", over_text_to_inline_with(&input.read()?, &layout));
        }
        Command::ToOver(input) => {
            println!("{}", inline_to_over_text_with(&input.read()?, &layout));
        }
        Command::Transpose { semitones, input } => {
            println!("{}", transpose(&input.read()?, semitones));
        }
        Command::Strip(input) => {
            println!("{}", strip_chords(&input.read()?));
        }
        Command::Layout { json, input } => {
            let text = input.read()?;
            let rows: Vec<_> = text
                .lines()
                .map(|line| render_column_layout_with(line, &layout))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!("{}", row.chord_row);
                    println!("{}", row.lyric_row);
                }
            }
        }
        Command::Classify { summary, input } => {
            let lines = classify_lines(&input.read()?);
            if summary {
                for (kind, count) in count_line_kinds(&lines) {
                    println!("{kind}\t{count}");
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&lines)?);
            }
        }
        Command::Chords(input) => {
            for chord in used_chords(&input.read()?) {
                println!("{chord}");
            }
        }
    }

    Ok(())
}
