//! Command-line interface for the `gomoku` and `replay` binaries.

use std::path::PathBuf;

use clap::Parser;

use crate::board::BoardSize;
use crate::config::AppConfig;
use crate::rules::Ruleset;

/// Default location of the configuration file
pub const DEFAULT_CONFIG: &str = "gomoku.toml";

/// Gomoku - Freestyle and Renju five-in-a-row
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Play Freestyle or Renju gomoku", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Resume a stopped match from a saved file
    #[arg(short = 'r', long = "resume", conflicts_with = "board_size")]
    pub resume: Option<PathBuf>,

    /// Save the match to this file on exit
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Board size (15, 17 or 19)
    #[arg(short = 'b', long = "board-size", value_parser = parse_board_size)]
    pub board_size: Option<BoardSize>,

    /// Play under Renju restrictions for Black
    #[arg(long)]
    pub renju: bool,

    /// Play in the terminal instead of the graphical window
    #[arg(long)]
    pub text: bool,

    /// Path to configuration file
    #[arg(long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

impl Cli {
    /// Fold command-line overrides into the loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(size) = self.board_size {
            config.game.board_size = size;
        }
        if self.renju {
            config.game.ruleset = Ruleset::Renju;
        }
    }
}

/// Replay a saved match move by move in the terminal
#[derive(Parser, Debug)]
#[command(name = "replay")]
#[command(about = "Replay a saved gomoku match", long_about = None)]
#[command(version)]
pub struct ReplayCli {
    /// Saved match file
    pub file: PathBuf,

    /// Pause between moves in milliseconds (overrides config)
    #[arg(short, long)]
    pub delay_ms: Option<u64>,

    /// Path to configuration file
    #[arg(long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

fn parse_board_size(text: &str) -> Result<BoardSize, String> {
    let value: u32 = text.parse().map_err(|_| format!("'{text}' is not a number"))?;
    BoardSize::try_from(value).map_err(|e| e.to_string())
}
