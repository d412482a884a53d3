use std::{fs, io, path::PathBuf};

use log::{error, info, warn};

pub const HIGH_SCORE_FILE: &str = "highscore.txt";

/// A single best score kept as plain text.
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HighScoreFile { path: path.into() }
    }

    /// Reads the stored score. Anything missing or unreadable counts as 0.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents
                .split_whitespace()
                .next()
                .and_then(|token| token.parse().ok())
                .unwrap_or_else(|| {
                    warn!("Ignoring malformed high score file {}", self.path.display());
                    0
                }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No high score file at {}", self.path.display());
                0
            }
            Err(e) => {
                warn!("Error loading high score from {}: {}", self.path.display(), e);
                0
            }
        }
    }

    /// Overwrites the file with `score`. Failures are only logged.
    pub fn save(&self, score: u32) {
        match fs::write(&self.path, score.to_string()) {
            Ok(()) => info!("Saved high score {} to {}", score, self.path.display()),
            Err(e) => error!("Error saving high score to {}: {}", self.path.display(), e),
        }
    }
}
