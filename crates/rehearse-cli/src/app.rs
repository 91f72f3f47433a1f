//! Top-level operations behind the `rehearse` binary.

use std::io::Write;
use std::process::ExitCode;

use rehearse_core::clock::{Clock, SystemClock};
use rehearse_core::error::RehearsalError;
use rehearse_core::input::ChoiceInput;
use rehearse_core::rng::SeededRng;
use rehearse_player::{AutoChoices, ScenePlayer, SelectionResult};
use rehearse_scene::{Scene, check_scene, load_document, load_scene};
use tracing::info;

use crate::config::{AutoMode, RunConfig};
use crate::console::ConsoleInput;
use crate::error::AppError;

/// Runs the configured operation against the real terminal and clock.
///
/// # Errors
///
/// Returns `AppError` for any fatal load, configuration or playback error.
pub fn execute(config: &RunConfig) -> Result<ExitCode, AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if config.check_only {
        let issues = check(config, &mut out)?;
        return Ok(if issues == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut input = ConsoleInput::new();
    play(config, &SystemClock, &mut input, &mut out)?;
    Ok(ExitCode::SUCCESS)
}

/// Loads the scene, resolves automatic answers and plays it once.
///
/// # Errors
///
/// Returns `AppError::Rehearsal` when the scene cannot be loaded or the
/// playback aborts, and `AppError::Config` when the automatic mapping file
/// is unusable.
pub fn play(
    config: &RunConfig,
    clock: &dyn Clock,
    input: &mut dyn ChoiceInput,
    out: &mut dyn Write,
) -> Result<Vec<SelectionResult>, AppError> {
    let scene = load_scene(&config.scene_file)?;
    let auto = resolve_auto_choices(&config.auto, &scene)?;

    let results = ScenePlayer::new(clock, input, out)
        .with_options(config.options)
        .run(&scene, auto.as_ref())?;
    Ok(results)
}

/// Loads the scene and prints its authoring issues. Returns the number of
/// issues found.
///
/// # Errors
///
/// Returns `AppError::Rehearsal` when the scene cannot be loaded or the
/// report cannot be written.
pub fn check(config: &RunConfig, out: &mut dyn Write) -> Result<usize, AppError> {
    let scene = load_scene(&config.scene_file)?;
    let issues = check_scene(&scene);

    if issues.is_empty() {
        writeln!(out, "Scene {}: no issues found", scene.scene_id).map_err(RehearsalError::from)?;
    } else {
        writeln!(out, "Scene {}: {} issue(s)", scene.scene_id, issues.len())
            .map_err(RehearsalError::from)?;
        for issue in &issues {
            writeln!(out, "  - {issue}").map_err(RehearsalError::from)?;
        }
    }
    info!(scene_id = %scene.scene_id, issues = issues.len(), "scene checked");
    Ok(issues.len())
}

fn resolve_auto_choices(mode: &AutoMode, scene: &Scene) -> Result<Option<AutoChoices>, AppError> {
    match mode {
        AutoMode::Off => Ok(None),
        AutoMode::Best => Ok(Some(AutoChoices::always_best(scene))),
        AutoMode::Mapping(path) => match load_document::<AutoChoices>(path) {
            Ok(choices) => Ok(Some(choices)),
            Err(RehearsalError::SceneFormat(message)) => Err(AppError::Config(format!(
                "invalid auto-choices file {}: {message}",
                path.display()
            ))),
            Err(err) => Err(err.into()),
        },
        AutoMode::Random { seed } => {
            let mut rng = seed.map_or_else(SeededRng::from_os, SeededRng::from_seed);
            Ok(Some(AutoChoices::random(scene, &mut rng)))
        }
    }
}
