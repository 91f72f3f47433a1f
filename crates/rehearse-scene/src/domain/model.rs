//! Typed scene model.

use std::collections::HashMap;

/// Event names starting with this prefix trigger a cut-in.
pub const CUTIN_EVENT_PREFIX: &str = "CUTIN";

/// A complete, ordered conversation script with embedded decision points.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Scene identifier.
    pub scene_id: String,
    /// Nominal scene length in seconds.
    pub duration_sec: f64,
    /// Topic tags, in source order.
    pub topic: Vec<String>,
    /// Free-text setting description.
    pub setting: String,
    /// Declared speakers.
    pub speakers: Vec<Speaker>,
    /// Dialogue and cut-in triggers, in playback order.
    pub lines: Vec<Line>,
    /// Cut-in definitions.
    pub cutins: Vec<Cutin>,
}

impl Scene {
    /// Builds an id-to-definition index over the cut-ins.
    ///
    /// When ids repeat, the last definition wins.
    #[must_use]
    pub fn cutin_lookup(&self) -> HashMap<&str, &Cutin> {
        self.cutins.iter().map(|c| (c.id.as_str(), c)).collect()
    }

    /// Number of cut-in triggers in `lines`.
    #[must_use]
    pub fn cutin_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, Line::Cutin { .. }))
            .count()
    }
}

/// A declared participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Speaker {
    /// Speaker identifier, as used by dialogue lines.
    pub id: String,
}

/// One entry in a scene's line sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A spoken line.
    Dialogue {
        /// Speaker identifier.
        speaker: String,
        /// What is said.
        text: String,
    },
    /// A cut-in trigger referencing a cut-in by id.
    Cutin {
        /// The referenced cut-in id.
        event: String,
    },
}

/// A timed multiple-choice decision point.
#[derive(Debug, Clone, PartialEq)]
pub struct Cutin {
    /// Cut-in identifier.
    pub id: String,
    /// Question shown to the learner.
    pub prompt: String,
    /// Options in display order.
    pub choices: Vec<Choice>,
    /// Id of the single best choice.
    pub best_choice_id: String,
    /// Ids of choices that are acceptable but not best.
    pub acceptable_choice_ids: Vec<String>,
    /// Advisory answer window in seconds.
    pub timer_sec: f64,
    /// Optional coaching shown when the answer was not best.
    pub follow_up: Option<FollowUp>,
}

impl Cutin {
    /// Returns the 1-based display index of `choice_id`.
    #[must_use]
    pub fn display_index_of(&self, choice_id: &str) -> Option<usize> {
        self.choices
            .iter()
            .position(|choice| choice.id == choice_id)
            .map(|idx| idx + 1)
    }

    /// Returns the choice shown at 1-based `index`.
    #[must_use]
    pub fn choice_at(&self, index: usize) -> Option<&Choice> {
        index.checked_sub(1).and_then(|idx| self.choices.get(idx))
    }

    /// Returns the designated best choice, if it is among the options.
    #[must_use]
    pub fn best_choice(&self) -> Option<&Choice> {
        self.choices
            .iter()
            .find(|choice| choice.id == self.best_choice_id)
    }

    /// Whether `choice_id` is in the acceptable set.
    #[must_use]
    pub fn is_acceptable(&self, choice_id: &str) -> bool {
        self.acceptable_choice_ids.iter().any(|id| id == choice_id)
    }

    /// The follow-up hint, when one is defined and non-empty.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.follow_up
            .as_ref()
            .and_then(|follow_up| follow_up.best_next_line_hint.as_deref())
            .filter(|hint| !hint.is_empty())
    }
}

/// One selectable option of a cut-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Choice identifier.
    pub id: String,
    /// Display text.
    pub text: String,
}

/// Coaching attached to a cut-in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FollowUp {
    /// Suggested next line after the best choice.
    pub best_next_line_hint: Option<String>,
}
