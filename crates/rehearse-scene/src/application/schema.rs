//! Wire schema for scene documents and its conversion into the model.

use rehearse_core::error::RehearsalError;
use serde::Deserialize;

use crate::domain::model::{CUTIN_EVENT_PREFIX, Choice, Cutin, FollowUp, Line, Scene, Speaker};

#[derive(Debug, Deserialize)]
pub(crate) struct RawScene {
    scene_id: String,
    duration_sec: f64,
    topic: Vec<String>,
    setting: String,
    speakers: Vec<RawSpeaker>,
    lines: Vec<RawLine>,
    cutins: Vec<RawCutin>,
}

#[derive(Debug, Deserialize)]
struct RawSpeaker {
    id: String,
}

#[derive(Debug, Deserialize)]
struct RawLine {
    #[serde(default)]
    spk: Option<String>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    event: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCutin {
    id: String,
    prompt: String,
    choices: Vec<RawChoice>,
    best_choice_id: String,
    #[serde(default)]
    acceptable_choice_ids: Option<Vec<String>>,
    timer_sec: f64,
    #[serde(default)]
    follow_up: Option<RawFollowUp>,
}

#[derive(Debug, Deserialize)]
struct RawChoice {
    id: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct RawFollowUp {
    #[serde(default)]
    best_next_line_hint: Option<String>,
}

impl RawLine {
    fn into_line(self, position: usize) -> Result<Line, RehearsalError> {
        if let Some(event) = self
            .event
            .filter(|event| event.starts_with(CUTIN_EVENT_PREFIX))
        {
            return Ok(Line::Cutin { event });
        }
        match (self.spk, self.text) {
            (Some(speaker), Some(text)) => Ok(Line::Dialogue { speaker, text }),
            (None, _) => Err(RehearsalError::SceneFormat(format!(
                "lines[{position}]: missing field `spk` (and no {CUTIN_EVENT_PREFIX} event)"
            ))),
            (Some(_), None) => Err(RehearsalError::SceneFormat(format!(
                "lines[{position}]: missing field `text`"
            ))),
        }
    }
}

impl From<RawCutin> for Cutin {
    fn from(raw: RawCutin) -> Self {
        Self {
            id: raw.id,
            prompt: raw.prompt,
            choices: raw
                .choices
                .into_iter()
                .map(|c| Choice {
                    id: c.id,
                    text: c.text,
                })
                .collect(),
            best_choice_id: raw.best_choice_id,
            acceptable_choice_ids: raw.acceptable_choice_ids.unwrap_or_default(),
            timer_sec: raw.timer_sec,
            follow_up: raw.follow_up.map(|f| FollowUp {
                best_next_line_hint: f.best_next_line_hint,
            }),
        }
    }
}

impl RawScene {
    /// Converts into the model, rejecting lines that are neither dialogue
    /// nor cut-in triggers.
    pub(crate) fn into_scene(self) -> Result<Scene, RehearsalError> {
        let lines = self
            .lines
            .into_iter()
            .enumerate()
            .map(|(position, line)| line.into_line(position))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scene {
            scene_id: self.scene_id,
            duration_sec: self.duration_sec,
            topic: self.topic,
            setting: self.setting,
            speakers: self
                .speakers
                .into_iter()
                .map(|s| Speaker { id: s.id })
                .collect(),
            lines,
            cutins: self.cutins.into_iter().map(Cutin::from).collect(),
        })
    }
}
