//! Pre-supplied answers for unattended playback.

use std::collections::HashMap;

use rehearse_core::rng::DeterministicRng;
use rehearse_scene::Scene;
use serde::Deserialize;

/// Mapping from cut-in id to the choice id an automatic player picks.
///
/// Cut-ins absent from the mapping are answered interactively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AutoChoices(HashMap<String, String>);

impl AutoChoices {
    /// Answers every cut-in with its own best choice, so every automatic
    /// run scores `Best` throughout.
    #[must_use]
    pub fn always_best(scene: &Scene) -> Self {
        scene
            .cutins
            .iter()
            .map(|cutin| (cutin.id.clone(), cutin.best_choice_id.clone()))
            .collect()
    }

    /// Answers every cut-in with a uniformly drawn option. Cut-ins without
    /// choices are left out.
    #[must_use]
    pub fn random(scene: &Scene, rng: &mut dyn DeterministicRng) -> Self {
        scene
            .cutins
            .iter()
            .filter_map(|cutin| {
                let last = u32::try_from(cutin.choices.len().checked_sub(1)?).ok()?;
                let drawn = usize::try_from(rng.next_u32_range(0, last)).ok()?;
                let choice = cutin.choices.get(drawn)?;
                Some((cutin.id.clone(), choice.id.clone()))
            })
            .collect()
    }

    /// The pre-chosen answer for `cutin_id`.
    #[must_use]
    pub fn get(&self, cutin_id: &str) -> Option<&str> {
        self.0.get(cutin_id).map(String::as_str)
    }

    /// Sets the answer for `cutin_id`, returning the previous one.
    pub fn insert(
        &mut self,
        cutin_id: impl Into<String>,
        choice_id: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(cutin_id.into(), choice_id.into())
    }

    /// Number of mapped cut-ins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no cut-in is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for AutoChoices {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, String)> for AutoChoices {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
