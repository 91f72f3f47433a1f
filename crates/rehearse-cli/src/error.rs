//! Rehearse CLI — error types.

use rehearse_core::error::RehearsalError;
use thiserror::Error;

/// Startup and runtime errors for the command-line runner.
#[derive(Debug, Error)]
pub enum AppError {
    /// An option or auxiliary input file is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Loading or playing the scene failed.
    #[error(transparent)]
    Rehearsal(#[from] RehearsalError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rehearsal_errors_display_unwrapped() {
        let err = AppError::from(RehearsalError::Lookup("CUTIN_7".into()));

        assert_eq!(err.to_string(), "cut-in not found: CUTIN_7");
    }

    #[test]
    fn test_config_errors_are_prefixed() {
        let err = AppError::Config("bad mapping".into());

        assert_eq!(err.to_string(), "configuration error: bad mapping");
    }
}
