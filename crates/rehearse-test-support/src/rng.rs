//! Scripted randomness for auto-player tests.

use rehearse_core::rng::DeterministicRng;

/// Replays a fixed list of draws, so a test can state exactly which option
/// `AutoChoices::random` picks for each cut-in.
#[derive(Debug)]
pub struct SequenceRng {
    draws: Vec<u32>,
    next: usize,
}

impl SequenceRng {
    /// Replays `draws` in order.
    #[must_use]
    pub fn new(draws: Vec<u32>) -> Self {
        Self { draws, next: 0 }
    }
}

impl DeterministicRng for SequenceRng {
    /// Returns the next scripted draw, ignoring the requested range.
    ///
    /// # Panics
    ///
    /// Panics once every scripted draw has been used.
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let Some(&draw) = self.draws.get(self.next) else {
            panic!("SequenceRng exhausted after {} draws", self.draws.len());
        };
        self.next += 1;
        draw
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}
