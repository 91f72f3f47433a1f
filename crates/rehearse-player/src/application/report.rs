//! Text rendering for the playback header, cut-in prompts and summary.

use std::collections::HashMap;
use std::io::{self, Write};

use rehearse_scene::{Cutin, Scene};

use crate::domain::selection::{Correctness, SelectionResult};

pub(crate) fn write_header(out: &mut dyn Write, scene: &Scene) -> io::Result<()> {
    let speakers: Vec<&str> = scene.speakers.iter().map(|s| s.id.as_str()).collect();

    writeln!(out)?;
    writeln!(
        out,
        "Scene ID: {} (Duration: {} sec)",
        scene.scene_id, scene.duration_sec
    )?;
    writeln!(
        out,
        "Topic: {} | Setting: {}",
        scene.topic.join(", "),
        scene.setting
    )?;
    writeln!(out, "Speakers: {}", speakers.join(", "))?;
    writeln!(out, "--- Conversation start ---")
}

pub(crate) fn write_cutin(out: &mut dyn Write, cutin: &Cutin) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "*** CUT-IN: {} ***", cutin.prompt)?;
    for (idx, choice) in cutin.choices.iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, choice.text)?;
    }
    Ok(())
}

pub(crate) fn write_summary(
    out: &mut dyn Write,
    results: &[SelectionResult],
    cutins: &HashMap<&str, &Cutin>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Conversation end ---")?;
    writeln!(out)?;
    writeln!(out, "Session Summary:")?;
    for result in results {
        writeln!(
            out,
            "  {}: reaction time={:.2}s, result={}",
            result.cutin_id,
            result.reaction_secs(),
            result.correctness
        )?;
        if result.correctness == Correctness::Best {
            continue;
        }
        let Some(cutin) = cutins.get(result.cutin_id.as_str()) else {
            continue;
        };
        if let Some(best) = cutin.best_choice() {
            writeln!(out, "    -> Best choice: {}", best.text)?;
        }
        if let Some(hint) = cutin.hint() {
            writeln!(out, "    -> Hint: {hint}")?;
        }
    }
    writeln!(out)
}
