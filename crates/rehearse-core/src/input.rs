//! Learner input abstraction.

use std::time::Duration;

use crate::error::SelectionError;

/// Source of raw cut-in answers.
///
/// The player writes the prompt itself; implementations only deliver the
/// next answer line, trimmed of its line terminator.
pub trait ChoiceInput {
    /// Blocks until the learner submits an answer.
    ///
    /// When `timeout` is `Some`, implementations that can wait with a
    /// deadline return `SelectionError::TimedOut` once it elapses.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::Closed` at end of input,
    /// `SelectionError::TimedOut` when the deadline passes, and
    /// `SelectionError::Io` on read failures.
    fn read_choice(&mut self, timeout: Option<Duration>) -> Result<String, SelectionError>;
}
