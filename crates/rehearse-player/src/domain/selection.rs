//! Per-cut-in selection outcomes.

use std::fmt;
use std::time::Duration;

use rehearse_scene::Cutin;

/// How good a cut-in answer was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Correctness {
    /// The designated best choice.
    Best,
    /// In the acceptable set, but not best.
    Acceptable,
    /// Neither best nor acceptable.
    Ng,
    /// Nothing valid was selected.
    NoSelection,
}

impl Correctness {
    /// Classifies `selected` against `cutin`.
    ///
    /// The best choice wins over the acceptable set, so a best id that is
    /// also listed as acceptable still classifies as `Best`.
    #[must_use]
    pub fn classify(cutin: &Cutin, selected: Option<&str>) -> Self {
        match selected {
            None => Self::NoSelection,
            Some(id) if id == cutin.best_choice_id => Self::Best,
            Some(id) if cutin.is_acceptable(id) => Self::Acceptable,
            Some(_) => Self::Ng,
        }
    }

    /// Summary label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Best => "Best",
            Self::Acceptable => "Acceptable",
            Self::Ng => "NG",
            Self::NoSelection => "NoSelection",
        }
    }
}

impl fmt::Display for Correctness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one cut-in occurrence during playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    /// The cut-in answered.
    pub cutin_id: String,
    /// The chosen option id, if any.
    pub selected: Option<String>,
    /// Time from prompt to answer; absent when no valid answer arrived.
    pub reaction_time: Option<Duration>,
    /// Classification of `selected`.
    pub correctness: Correctness,
}

impl SelectionResult {
    /// Reaction time in seconds, or infinity when absent.
    #[must_use]
    pub fn reaction_secs(&self) -> f64 {
        self.reaction_time
            .map_or(f64::INFINITY, |elapsed| elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rehearse_scene::Choice;

    fn cutin() -> Cutin {
        Cutin {
            id: "CUTIN_ORDER".into(),
            prompt: "Order?".into(),
            choices: ["a", "b", "c"]
                .into_iter()
                .map(|id| Choice {
                    id: id.into(),
                    text: id.to_uppercase(),
                })
                .collect(),
            best_choice_id: "a".into(),
            acceptable_choice_ids: vec!["b".into()],
            timer_sec: 8.0,
            follow_up: None,
        }
    }

    #[test]
    fn test_best_choice_classifies_as_best() {
        assert_eq!(Correctness::classify(&cutin(), Some("a")), Correctness::Best);
    }

    #[test]
    fn test_acceptable_choice_classifies_as_acceptable() {
        assert_eq!(
            Correctness::classify(&cutin(), Some("b")),
            Correctness::Acceptable
        );
    }

    #[test]
    fn test_other_choice_classifies_as_ng() {
        assert_eq!(Correctness::classify(&cutin(), Some("c")), Correctness::Ng);
    }

    #[test]
    fn test_missing_selection_classifies_as_no_selection() {
        assert_eq!(
            Correctness::classify(&cutin(), None),
            Correctness::NoSelection
        );
    }

    #[test]
    fn test_best_wins_when_also_listed_acceptable() {
        let mut cutin = cutin();
        cutin.acceptable_choice_ids.push("a".into());

        assert_eq!(Correctness::classify(&cutin, Some("a")), Correctness::Best);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<String> = [
            Correctness::Best,
            Correctness::Acceptable,
            Correctness::Ng,
            Correctness::NoSelection,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();

        assert_eq!(labels, ["Best", "Acceptable", "NG", "NoSelection"]);
    }

    #[test]
    fn test_absent_reaction_time_is_infinite() {
        let result = SelectionResult {
            cutin_id: "CUTIN_ORDER".into(),
            selected: None,
            reaction_time: None,
            correctness: Correctness::NoSelection,
        };

        assert!(result.reaction_secs().is_infinite());
        assert_eq!(format!("{:.2}", result.reaction_secs()), "inf");
    }
}
