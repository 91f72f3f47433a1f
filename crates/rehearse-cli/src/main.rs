//! `rehearse` entry point.

use std::process::ExitCode;

use clap::Parser;
use rehearse_cli::app;
use rehearse_cli::config::{Args, RunConfig};
use rehearse_cli::logging;

fn main() -> ExitCode {
    let config = RunConfig::from(Args::parse());
    logging::init(config.log_format);

    tracing::info!(scene_file = %config.scene_file.display(), "starting rehearse");

    match app::execute(&config) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "rehearsal aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
