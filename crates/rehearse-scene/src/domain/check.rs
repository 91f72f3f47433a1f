//! Semantic checks over a loaded scene.
//!
//! Loading only guarantees structure. These checks catch authoring
//! mistakes that would otherwise abort or skew a playback.

use std::collections::HashSet;

use thiserror::Error;

use super::model::{Line, Scene};

/// An authoring problem found by `check_scene`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneIssue {
    /// A cut-in trigger names an undefined cut-in.
    #[error("lines[{position}] triggers undefined cut-in {event}")]
    DanglingCutin {
        /// Index into `lines`.
        position: usize,
        /// The referenced id.
        event: String,
    },

    /// Two cut-ins share an id.
    #[error("cut-in id {0} is defined more than once")]
    DuplicateCutin(String),

    /// A cut-in has no options.
    #[error("cut-in {0} has no choices")]
    NoChoices(String),

    /// Two options of one cut-in share an id.
    #[error("cut-in {cutin_id} repeats choice id {choice_id}")]
    DuplicateChoice {
        /// The cut-in.
        cutin_id: String,
        /// The repeated choice id.
        choice_id: String,
    },

    /// The best choice is not among the options.
    #[error("cut-in {cutin_id}: best choice {choice_id} is not one of its choices")]
    UnknownBestChoice {
        /// The cut-in.
        cutin_id: String,
        /// The dangling best choice id.
        choice_id: String,
    },

    /// An acceptable choice is not among the options.
    #[error("cut-in {cutin_id}: acceptable choice {choice_id} is not one of its choices")]
    UnknownAcceptableChoice {
        /// The cut-in.
        cutin_id: String,
        /// The dangling acceptable choice id.
        choice_id: String,
    },

    /// A dialogue line names a speaker missing from `speakers`.
    #[error("lines[{position}] is spoken by undeclared speaker {speaker}")]
    UndeclaredSpeaker {
        /// Index into `lines`.
        position: usize,
        /// The speaker id.
        speaker: String,
    },
}

/// Lints `scene` and returns every issue found, in source order.
#[must_use]
pub fn check_scene(scene: &Scene) -> Vec<SceneIssue> {
    let mut issues = Vec::new();

    let mut cutin_ids = HashSet::new();
    for cutin in &scene.cutins {
        if !cutin_ids.insert(cutin.id.as_str()) {
            issues.push(SceneIssue::DuplicateCutin(cutin.id.clone()));
        }
        if cutin.choices.is_empty() {
            issues.push(SceneIssue::NoChoices(cutin.id.clone()));
        }

        let mut choice_ids = HashSet::new();
        for choice in &cutin.choices {
            if !choice_ids.insert(choice.id.as_str()) {
                issues.push(SceneIssue::DuplicateChoice {
                    cutin_id: cutin.id.clone(),
                    choice_id: choice.id.clone(),
                });
            }
        }

        if !choice_ids.contains(cutin.best_choice_id.as_str()) {
            issues.push(SceneIssue::UnknownBestChoice {
                cutin_id: cutin.id.clone(),
                choice_id: cutin.best_choice_id.clone(),
            });
        }
        for acceptable in &cutin.acceptable_choice_ids {
            if !choice_ids.contains(acceptable.as_str()) {
                issues.push(SceneIssue::UnknownAcceptableChoice {
                    cutin_id: cutin.id.clone(),
                    choice_id: acceptable.clone(),
                });
            }
        }
    }

    let speakers: HashSet<&str> = scene.speakers.iter().map(|s| s.id.as_str()).collect();
    for (position, line) in scene.lines.iter().enumerate() {
        match line {
            Line::Cutin { event } if !cutin_ids.contains(event.as_str()) => {
                issues.push(SceneIssue::DanglingCutin {
                    position,
                    event: event.clone(),
                });
            }
            Line::Dialogue { speaker, .. } if !speakers.contains(speaker.as_str()) => {
                issues.push(SceneIssue::UndeclaredSpeaker {
                    position,
                    speaker: speaker.clone(),
                });
            }
            _ => {}
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::loader::{SourceFormat, parse_scene};
    use rehearse_test_support::fixtures;

    #[test]
    fn test_well_formed_scene_has_no_issues() {
        let scene = parse_scene(fixtures::CAFE_SCENE_JSON, SourceFormat::Json).unwrap();

        assert!(check_scene(&scene).is_empty());
    }

    #[test]
    fn test_dangling_cutin_is_reported() {
        // Arrange
        let scene =
            parse_scene(fixtures::DANGLING_CUTIN_SCENE_JSON, SourceFormat::Json).unwrap();

        // Act
        let issues = check_scene(&scene);

        // Assert
        assert_eq!(
            issues,
            vec![SceneIssue::DanglingCutin {
                position: 1,
                event: "CUTIN_MISSING".into(),
            }]
        );
    }

    #[test]
    fn test_bad_choice_references_are_reported() {
        // Arrange
        let mut scene = parse_scene(fixtures::GREETING_SCENE_JSON, SourceFormat::Json).unwrap();
        let cutin = &mut scene.cutins[0];
        cutin.best_choice_id = "q".into();
        cutin.acceptable_choice_ids = vec!["y".into(), "r".into()];
        cutin.choices.push(cutin.choices[0].clone());

        // Act
        let issues = check_scene(&scene);

        // Assert
        assert_eq!(
            issues,
            vec![
                SceneIssue::DuplicateChoice {
                    cutin_id: "CUTIN_1".into(),
                    choice_id: "x".into(),
                },
                SceneIssue::UnknownBestChoice {
                    cutin_id: "CUTIN_1".into(),
                    choice_id: "q".into(),
                },
                SceneIssue::UnknownAcceptableChoice {
                    cutin_id: "CUTIN_1".into(),
                    choice_id: "r".into(),
                },
            ]
        );
    }

    #[test]
    fn test_undeclared_speaker_and_duplicate_cutin() {
        // Arrange
        let mut scene = parse_scene(fixtures::GREETING_SCENE_JSON, SourceFormat::Json).unwrap();
        scene.speakers.clear();
        scene.cutins.push(scene.cutins[0].clone());

        // Act
        let issues = check_scene(&scene);

        // Assert
        assert!(issues.contains(&SceneIssue::DuplicateCutin("CUTIN_1".into())));
        assert!(issues.contains(&SceneIssue::UndeclaredSpeaker {
            position: 0,
            speaker: "A".into(),
        }));
    }

    #[test]
    fn test_issue_messages_are_readable() {
        let issue = SceneIssue::UnknownBestChoice {
            cutin_id: "CUTIN_2".into(),
            choice_id: "c".into(),
        };

        assert_eq!(
            issue.to_string(),
            "cut-in CUTIN_2: best choice c is not one of its choices"
        );
    }
}
