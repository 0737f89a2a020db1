//! Replay a saved match in the terminal, one move per frame

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gomoku::cli::ReplayCli;
use gomoku::{console, record, AppConfig, Match};

fn main() -> Result<()> {
    let cli = ReplayCli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .with_writer(io::stderr)
        .init();

    let saved = record::load(&cli.file).with_context(|| format!("reading {}", cli.file.display()))?;
    let game = Match::from_record(&saved)
        .with_context(|| format!("replaying {}", cli.file.display()))?;
    let delay = Duration::from_millis(cli.delay_ms.unwrap_or(config.replay.delay_ms));

    let mut out = io::stdout().lock();
    let mut replay = game.replay();
    while let Some(step) = replay.step() {
        step.context("saved move could not be replayed")?;
        console::write_replay_frame(&mut out, replay.game(), replay.is_done())?;
        out.flush()?;
        if !replay.is_done() {
            thread::sleep(delay);
        }
    }
    Ok(())
}
