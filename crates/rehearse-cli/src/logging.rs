//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Filter used when `RUST_LOG` is unset. Diagnostics are opt-in so the
/// learner's terminal only shows the scene and fatal errors.
pub const DEFAULT_FILTER: &str = "off";

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// the scene transcript.
pub fn init(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_keeps_recovered_errors_silent() {
        let filter = EnvFilter::new(DEFAULT_FILTER);

        assert_eq!(filter.max_level_hint(), Some(tracing::level_filters::LevelFilter::OFF));
    }
}
