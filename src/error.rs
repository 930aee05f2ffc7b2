//! Error types for the wordl crate

use std::path::PathBuf;

use thiserror::Error;

use crate::feedback::FeedbackSignal;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(
        "no strategy file for initial guess '{guess}' at {}: run `wordl optimise {guess}` first",
        .path.display()
    )]
    MissingStrategy { guess: String, path: PathBuf },

    #[error("initial guess '{guess}' is not in the permitted guess list")]
    InvalidGuess { guess: String },

    #[error("malformed strategy corpus: {reason}")]
    MalformedCorpus { reason: String },

    #[error("feedback {signal} is not reachable from guess '{guess}'")]
    UnknownFeedback {
        guess: String,
        signal: FeedbackSignal,
    },

    #[error("target '{target}' is not covered by this strategy")]
    TargetNotCovered { target: String },

    #[error("optimiser binary not found at {}: build the search tool first", .path.display())]
    OptimiserMissing { path: PathBuf },

    #[error("optimiser exited with {status}: {stderr}")]
    OptimiserExit { status: String, stderr: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}
