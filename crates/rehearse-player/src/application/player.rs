//! Scene playback.
//!
//! A `ScenePlayer` walks a scene's lines in order, echoing dialogue and
//! stopping at each cut-in to obtain an answer, either from an
//! `AutoChoices` mapping or from the learner through a `ChoiceInput`.
//! Selection problems never abort the run; they are recorded as
//! `NoSelection`. Missing cut-ins and malformed cut-in definitions do
//! abort it, before any summary is written.

use std::io::Write;
use std::time::Duration;

use rehearse_core::clock::{Clock, elapsed_between};
use rehearse_core::error::{RehearsalError, SelectionError};
use rehearse_core::input::ChoiceInput;
use rehearse_scene::{Cutin, Line, Scene};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use super::report::{write_cutin, write_header, write_summary};
use crate::domain::auto_choices::AutoChoices;
use crate::domain::selection::{Correctness, SelectionResult};

/// Simulated latency of the automatic player.
pub const DEFAULT_AUTO_DELAY: Duration = Duration::from_millis(500);

/// Tunables for one playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerOptions {
    /// How long the automatic player "thinks" before answering.
    pub auto_delay: Duration,
    /// Treat each cut-in's `timer_sec` as a hard deadline for interactive
    /// answers. When off, the timer is only shown in the prompt.
    pub enforce_timer: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            auto_delay: DEFAULT_AUTO_DELAY,
            enforce_timer: false,
        }
    }
}

/// Drives one playback session over injected time, input and output.
pub struct ScenePlayer<'a> {
    clock: &'a dyn Clock,
    input: &'a mut dyn ChoiceInput,
    out: &'a mut dyn Write,
    options: PlayerOptions,
}

impl<'a> ScenePlayer<'a> {
    /// Creates a player with default options.
    #[must_use]
    pub fn new(
        clock: &'a dyn Clock,
        input: &'a mut dyn ChoiceInput,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            clock,
            input,
            out,
            options: PlayerOptions::default(),
        }
    }

    /// Replaces the playback options.
    #[must_use]
    pub fn with_options(mut self, options: PlayerOptions) -> Self {
        self.options = options;
        self
    }

    /// Plays `scene` to completion and prints the session summary.
    ///
    /// Cut-ins whose id appears in `auto_choices` are answered
    /// automatically; all others are asked interactively. One result is
    /// returned per cut-in occurrence, in playback order.
    ///
    /// # Errors
    ///
    /// Returns `RehearsalError::Lookup` if a line triggers an undefined
    /// cut-in, `RehearsalError::SceneFormat` if a presented cut-in's best
    /// choice is not among its options, `RehearsalError::UnknownChoice` if
    /// an automatic answer is not among the options, and
    /// `RehearsalError::Output` if writing fails. No summary is written in
    /// any of these cases.
    pub fn run(
        &mut self,
        scene: &Scene,
        auto_choices: Option<&AutoChoices>,
    ) -> Result<Vec<SelectionResult>, RehearsalError> {
        let session_id = Uuid::new_v4();
        let span = info_span!("playback", %session_id, scene_id = %scene.scene_id);
        let _entered = span.enter();
        info!(
            lines = scene.lines.len(),
            automatic = auto_choices.map_or(0, AutoChoices::len),
            "playback started"
        );

        write_header(self.out, scene)?;

        let cutins = scene.cutin_lookup();
        let mut results = Vec::new();
        for line in &scene.lines {
            match line {
                Line::Dialogue { speaker, text } => {
                    writeln!(self.out, "[{speaker}] {text}")?;
                }
                Line::Cutin { event } => {
                    let cutin = cutins
                        .get(event.as_str())
                        .copied()
                        .ok_or_else(|| RehearsalError::Lookup(event.clone()))?;
                    let result = self.present_cutin(cutin, auto_choices)?;
                    results.push(result);
                }
            }
        }

        write_summary(self.out, &results, &cutins)?;
        self.out.flush()?;

        info!(
            cutins = results.len(),
            best = results
                .iter()
                .filter(|r| r.correctness == Correctness::Best)
                .count(),
            "playback finished"
        );
        Ok(results)
    }

    fn present_cutin(
        &mut self,
        cutin: &Cutin,
        auto_choices: Option<&AutoChoices>,
    ) -> Result<SelectionResult, RehearsalError> {
        if cutin.best_choice().is_none() {
            return Err(RehearsalError::SceneFormat(format!(
                "cut-in {}: best choice {} is not one of its choices",
                cutin.id, cutin.best_choice_id
            )));
        }

        write_cutin(self.out, cutin)?;
        let started = self.clock.now();

        let (selected, reaction_time) =
            if let Some(choice_id) = auto_choices.and_then(|auto| auto.get(&cutin.id)) {
                self.clock.sleep(self.options.auto_delay);
                let index = cutin.display_index_of(choice_id).ok_or_else(|| {
                    RehearsalError::UnknownChoice {
                        cutin_id: cutin.id.clone(),
                        choice_id: choice_id.to_owned(),
                    }
                })?;
                writeln!(self.out, "(Auto) Selected option {index}")?;
                let elapsed = elapsed_between(started, self.clock.now());
                (Some(choice_id.to_owned()), Some(elapsed))
            } else {
                match self.ask(cutin)? {
                    Some(choice_id) => (
                        Some(choice_id),
                        Some(elapsed_between(started, self.clock.now())),
                    ),
                    None => (None, None),
                }
            };

        let correctness = Correctness::classify(cutin, selected.as_deref());
        debug!(cutin_id = %cutin.id, ?selected, %correctness, "cut-in answered");
        writeln!(self.out)?;

        Ok(SelectionResult {
            cutin_id: cutin.id.clone(),
            selected,
            reaction_time,
            correctness,
        })
    }

    /// Prompts for and reads one interactive answer.
    ///
    /// Returns `None` when no valid answer was given; the reason is logged
    /// and otherwise discarded.
    fn ask(&mut self, cutin: &Cutin) -> Result<Option<String>, RehearsalError> {
        write!(
            self.out,
            "Select your choice (1-{}) within {} seconds: ",
            cutin.choices.len(),
            cutin.timer_sec
        )?;
        self.out.flush()?;

        let timeout = if self.options.enforce_timer {
            Duration::try_from_secs_f64(cutin.timer_sec).ok()
        } else {
            None
        };

        match read_selection(self.input, cutin, timeout) {
            Ok(choice_id) => Ok(Some(choice_id)),
            Err(err) => {
                if matches!(err, SelectionError::TimedOut(_)) {
                    writeln!(self.out)?;
                    writeln!(self.out, "(Time is up)")?;
                }
                warn!(cutin_id = %cutin.id, error = %err, "no selection recorded");
                Ok(None)
            }
        }
    }
}

/// Reads an answer and resolves it to a choice id.
///
/// Answers are 1-based display indices; anything else is a
/// `SelectionError`.
fn read_selection(
    input: &mut dyn ChoiceInput,
    cutin: &Cutin,
    timeout: Option<Duration>,
) -> Result<String, SelectionError> {
    let raw = input.read_choice(timeout)?;
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_owned()))?;
    usize::try_from(value)
        .ok()
        .and_then(|index| cutin.choice_at(index))
        .map(|choice| choice.id.clone())
        .ok_or(SelectionError::OutOfRange {
            value,
            max: cutin.choices.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehearse_scene::Choice;
    use rehearse_test_support::ScriptedInput;

    fn cutin() -> Cutin {
        Cutin {
            id: "CUTIN_1".into(),
            prompt: "How do you respond?".into(),
            choices: vec![
                Choice {
                    id: "x".into(),
                    text: "Yes".into(),
                },
                Choice {
                    id: "y".into(),
                    text: "No".into(),
                },
            ],
            best_choice_id: "x".into(),
            acceptable_choice_ids: Vec::new(),
            timer_sec: 5.0,
            follow_up: None,
        }
    }

    #[test]
    fn test_read_selection_maps_display_index_to_choice_id() {
        let mut input = ScriptedInput::from_answers([" 2 \n"]);

        let selected = read_selection(&mut input, &cutin(), None).unwrap();

        assert_eq!(selected, "y");
    }

    #[test]
    fn test_read_selection_rejects_zero_and_past_end() {
        let mut input = ScriptedInput::from_answers(["0", "3", "-1"]);

        for expected in [0, 3, -1] {
            match read_selection(&mut input, &cutin(), None) {
                Err(SelectionError::OutOfRange { value, max }) => {
                    assert_eq!(value, expected);
                    assert_eq!(max, 2);
                }
                other => panic!("expected OutOfRange, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_read_selection_rejects_non_numeric() {
        let mut input = ScriptedInput::from_answers(["yes"]);

        let result = read_selection(&mut input, &cutin(), None);

        assert!(matches!(result, Err(SelectionError::NotANumber(text)) if text == "yes"));
    }

    #[test]
    fn test_read_selection_propagates_closed_input() {
        let mut input = ScriptedInput::default();

        let result = read_selection(&mut input, &cutin(), None);

        assert!(matches!(result, Err(SelectionError::Closed)));
    }

    #[test]
    fn test_default_options_keep_timer_advisory() {
        let options = PlayerOptions::default();

        assert_eq!(options.auto_delay, Duration::from_millis(500));
        assert!(!options.enforce_timer);
    }
}
