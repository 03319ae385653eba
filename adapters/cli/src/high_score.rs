//! Persistent single-slot high score storage.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while reading or writing the high score slot.
#[derive(Debug, Error)]
pub(crate) enum ScoreStoreError {
    /// The score file exists but could not be read.
    #[error("failed to read high score file: {0}")]
    Read(#[source] io::Error),
    /// The score file could not be written.
    #[error("failed to write high score file: {0}")]
    Write(#[source] io::Error),
    /// The score file holds something other than a decimal score.
    #[error("high score file is corrupt: {contents:?}")]
    Corrupt {
        /// Raw contents found in the file.
        contents: String,
    },
}

/// Stores the best score as a single decimal number in a file.
#[derive(Debug)]
pub(crate) struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Creates a store backed by the given file path.
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the best recorded score. A missing file reads as zero.
    pub(crate) fn load(&self) -> Result<u32, ScoreStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(error) => return Err(ScoreStoreError::Read(error)),
        };

        contents
            .trim()
            .parse()
            .map_err(|_| ScoreStoreError::Corrupt { contents })
    }

    /// Records the score if it beats the stored best, reporting whether it
    /// became the new record.
    pub(crate) fn record(&self, score: u32) -> Result<bool, ScoreStoreError> {
        let best = self.load()?;
        if score <= best {
            return Ok(false);
        }

        fs::write(&self.path, score.to_string()).map_err(ScoreStoreError::Write)?;
        Ok(true)
    }
}
