//! Error taxonomy.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Fatal errors that abort a rehearsal session.
#[derive(Debug, Error)]
pub enum RehearsalError {
    /// The scene (or another input document) could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        /// The path that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A required field is missing or malformed.
    #[error("malformed scene: {0}")]
    SceneFormat(String),

    /// A cut-in event references an id absent from the cut-in set.
    #[error("cut-in not found: {0}")]
    Lookup(String),

    /// An automatic mapping names a choice the cut-in does not offer.
    #[error("cut-in {cutin_id} has no choice {choice_id}")]
    UnknownChoice {
        /// The cut-in being answered.
        cutin_id: String,
        /// The mapped choice id.
        choice_id: String,
    },

    /// Writing playback output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Recoverable failures while capturing an interactive answer.
///
/// These never abort a session; the player folds them into a
/// `NoSelection` outcome.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The answer was not an integer.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// The answer was outside `1..=max`.
    #[error("option {value} is outside 1-{max}")]
    OutOfRange {
        /// The number entered.
        value: i64,
        /// The number of choices on offer.
        max: usize,
    },

    /// Input reached end of stream.
    #[error("input closed")]
    Closed,

    /// No answer arrived before the cut-in timer expired.
    #[error("no answer within {0:?}")]
    TimedOut(Duration),

    /// Reading the answer failed.
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}
