//! Gomoku: Freestyle and Renju in a window or a terminal
//!
//! A saved match given with `-r` must have been stopped; play continues with
//! the side to move derived from its history. With `-o` the match is written
//! back when play ends, finished or not.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::cli::Cli;
use gomoku::ui::GomokuApp;
use gomoku::{console, record, AppConfig, Match};

/// Save file the window uses when `-o` is not given
const DEFAULT_SAVE: &str = "gomoku.gmk";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    cli.apply(&mut config);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .with_writer(io::stderr)
        .init();

    let game = match &cli.resume {
        Some(path) => resume(path)?,
        None => Match::new(config.game.board_size, config.game.ruleset),
    };
    info!(size = %game.size(), ruleset = %game.ruleset(), "starting match");

    if cli.text {
        run_text(game, cli.output.as_deref())
    } else {
        run_gui(game, cli.output)
    }
}

/// Load a saved match and put it back into play
fn resume(path: &Path) -> Result<Match> {
    let saved = record::load(path).with_context(|| format!("reading {}", path.display()))?;
    let mut game = Match::from_record(&saved)
        .with_context(|| format!("replaying {}", path.display()))?;
    game.resume()
        .with_context(|| format!("cannot resume {}", path.display()))?;
    Ok(game)
}

fn run_text(mut game: Match, output: Option<&Path>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console::run(&mut game, stdin.lock(), &mut stdout).context("terminal I/O failed")?;

    if let Some(path) = output {
        record::save(path, &game.to_record())
            .with_context(|| format!("saving {}", path.display()))?;
        info!(path = %path.display(), "match saved");
    }
    Ok(())
}

fn run_gui(game: Match, output: Option<PathBuf>) -> Result<()> {
    let save_on_exit = output.is_some();
    let save_path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, game, save_path, save_on_exit)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
