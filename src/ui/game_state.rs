//! Game state management for the Gomoku GUI

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::board::{BoardSize, Pos};
use crate::engine::Verdict;
use crate::error::{MoveError, RecordError};
use crate::game::{Match, MatchStatus};
use crate::record;
use crate::rules::Ruleset;

/// Step-through view of a finished or suspended match
pub struct ReplayCursor {
    source: Match,
    position: usize,
    frame: Match,
}

impl ReplayCursor {
    fn new(source: Match) -> Self {
        let frame = Match::new(source.size(), source.ruleset());
        Self {
            source,
            position: 0,
            frame,
        }
    }

    /// Rebuild the frame after `position` moves
    fn seek(&mut self, position: usize) -> Result<(), MoveError> {
        let position = position.min(self.source.moves().len());
        let mut replay = self.source.replay();
        while replay.position() < position {
            match replay.step() {
                Some(step) => {
                    step?;
                }
                None => break,
            }
        }
        self.frame = replay.into_match();
        self.position = position;
        Ok(())
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.source.moves().len()
    }

    pub fn frame(&self) -> &Match {
        &self.frame
    }
}

/// Main game state
pub struct GameState {
    pub game: Match,
    pub message: Option<String>,
    pub save_path: PathBuf,
    replay: Option<ReplayCursor>,
}

impl GameState {
    pub fn new(game: Match, save_path: PathBuf) -> Self {
        Self {
            game,
            message: None,
            save_path,
            replay: None,
        }
    }

    /// Discard the current match and start an empty one
    pub fn new_game(&mut self, size: BoardSize, ruleset: Ruleset) {
        self.game = Match::new(size, ruleset);
        self.replay = None;
        self.message = None;
        info!(%size, %ruleset, "new match");
    }

    /// Match shown on the board: the replay frame while replaying
    pub fn displayed(&self) -> &Match {
        self.replay.as_ref().map_or(&self.game, ReplayCursor::frame)
    }

    pub fn is_replaying(&self) -> bool {
        self.replay.is_some()
    }

    pub fn replay(&self) -> Option<&ReplayCursor> {
        self.replay.as_ref()
    }

    /// Attempt to place a stone for the side to move
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<Verdict, MoveError> {
        if self.is_replaying() {
            return Err(MoveError::NotPlaying(self.displayed().status()));
        }
        match self.game.place(pos) {
            Ok(verdict) => {
                self.message = None;
                Ok(verdict)
            }
            Err(err) => {
                self.message = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn stop(&mut self) {
        self.game.stop();
    }

    pub fn resume(&mut self) {
        if let Err(err) = self.game.resume() {
            self.message = Some(err.to_string());
        }
    }

    /// Write the current match to the save path
    pub fn save(&mut self) -> Result<(), RecordError> {
        let path = self.save_path.clone();
        self.save_to(&path)
    }

    pub fn save_to(&mut self, path: &Path) -> Result<(), RecordError> {
        let result = record::save(path, &self.game.to_record());
        self.message = Some(match &result {
            Ok(()) => format!("Saved to {}", path.display()),
            Err(err) => err.to_string(),
        });
        result
    }

    /// Replace the current match with the one at the save path
    pub fn load(&mut self) -> Result<(), RecordError> {
        let path = self.save_path.clone();
        let result = record::load(&path).and_then(|rec| Match::from_record(&rec));
        match result {
            Ok(game) => {
                self.game = game;
                self.replay = None;
                self.message = Some(format!("Loaded {}", path.display()));
                Ok(())
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "load failed");
                self.message = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Enter replay mode at the empty board. A match still in play is
    /// stopped first so it can be resumed afterwards.
    pub fn start_replay(&mut self) {
        self.game.stop();
        self.replay = Some(ReplayCursor::new(self.game.clone()));
        self.message = None;
    }

    pub fn exit_replay(&mut self) {
        self.replay = None;
    }

    /// Move the replay cursor by `delta` moves
    pub fn step_replay(&mut self, delta: isize) {
        let Some(cursor) = self.replay.as_mut() else {
            return;
        };
        let target = cursor.position().saturating_add_signed(delta);
        if let Err(err) = cursor.seek(target) {
            self.message = Some(err.to_string());
        }
    }

    /// One-line description of the displayed match
    pub fn status_text(&self) -> String {
        let game = self.displayed();
        match game.status() {
            MatchStatus::Playing => format!("{} to move", capitalized(game.current_turn().to_string())),
            MatchStatus::Stopped => "Stopped".to_string(),
            MatchStatus::Forbidden => match game.forbidden() {
                Some(rule) => format!("Black played a forbidden {rule}, White wins"),
                None => "Black played a forbidden move, White wins".to_string(),
            },
            MatchStatus::Finished => match game.verdict() {
                Some(Verdict::Draw) => "Board full, draw".to_string(),
                _ => format!("{} wins", capitalized(game.winner().to_string())),
            },
        }
    }
}

fn capitalized(name: String) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}
