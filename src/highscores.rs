//! Best-score persistence
//!
//! The high score is a single decimal integer in a plain text file under
//! the platform config directory. A missing or unreadable file reads as
//! zero; write failures are logged and the in-memory value plays on.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// File name inside the config directory
const HIGH_SCORE_FILE: &str = "highscore.txt";

/// Handle to the on-disk high score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store at the platform config directory, creating it if needed.
    /// Falls back to the working directory when no home is available.
    pub fn new() -> Self {
        let path = ProjectDirs::from("", "", "gapwing")
            .map(|dirs| {
                let dir = dirs.config_dir().to_path_buf();
                if let Err(err) = fs::create_dir_all(&dir) {
                    log::warn!("could not create {}: {}", dir.display(), err);
                }
                dir.join(HIGH_SCORE_FILE)
            })
            .unwrap_or_else(|| PathBuf::from(HIGH_SCORE_FILE));
        Self { path }
    }

    /// Store at an explicit path (tests, portable installs).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the saved best score. Missing or corrupt files count as zero.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(text) => match text.trim().parse() {
                Ok(score) => score,
                Err(_) => {
                    log::warn!("ignoring corrupt high score file {}", self.path.display());
                    0
                }
            },
            Err(_) => 0,
        }
    }

    /// Overwrite the saved best score wholesale. Failure is logged, never fatal.
    pub fn save(&self, score: u32) {
        match fs::write(&self.path, score.to_string()) {
            Ok(()) => log::info!("high score saved ({})", score),
            Err(err) => log::warn!("could not save high score: {}", err),
        }
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn scratch_store(name: &str) -> HighScoreStore {
        let path = env::temp_dir().join(format!("gapwing-{}-{}", name, std::process::id()));
        let _ = fs::remove_file(&path);
        HighScoreStore::at(path)
    }

    #[test]
    fn round_trips_through_disk() {
        let store = scratch_store("roundtrip");
        store.save(42);
        assert_eq!(store.load(), 42);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let store = scratch_store("missing");
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn corrupt_file_reads_as_zero() {
        let store = scratch_store("corrupt");
        fs::write(store.path(), "not a score").unwrap();
        assert_eq!(store.load(), 0);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_overwrites_the_previous_value() {
        let store = scratch_store("overwrite");
        store.save(3);
        store.save(17);
        assert_eq!(store.load(), 17);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let store = scratch_store("whitespace");
        fs::write(store.path(), " 7\n").unwrap();
        assert_eq!(store.load(), 7);
        let _ = fs::remove_file(store.path());
    }
}
