//! Scripted input — deterministic `ChoiceInput` for tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use rehearse_core::error::SelectionError;
use rehearse_core::input::ChoiceInput;

use crate::clock::ManualClock;

#[derive(Debug)]
struct Step {
    latency: Duration,
    outcome: Result<String, SelectionError>,
}

/// A `ChoiceInput` that replays a fixed script of answers.
///
/// Each answer may carry a latency; when a `ManualClock` is attached the
/// clock is advanced by that latency before the answer is delivered. A
/// latency longer than the requested timeout yields `TimedOut` instead, so
/// timer enforcement can be tested without real waiting. Once the script
/// is exhausted every read returns `SelectionError::Closed`.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    steps: VecDeque<Step>,
    clock: Option<Arc<ManualClock>>,
    timeouts: Vec<Option<Duration>>,
}

impl ScriptedInput {
    /// Create an empty script that advances `clock` by each answer's latency.
    #[must_use]
    pub fn with_clock(clock: Arc<ManualClock>) -> Self {
        Self {
            clock: Some(clock),
            ..Self::default()
        }
    }

    /// Create a script of instant answers.
    #[must_use]
    pub fn from_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        answers
            .into_iter()
            .fold(Self::default(), |script, answer| {
                script.answer(answer, Duration::ZERO)
            })
    }

    /// Appends an answer delivered after `latency`.
    #[must_use]
    pub fn answer(mut self, text: impl Into<String>, latency: Duration) -> Self {
        self.steps.push_back(Step {
            latency,
            outcome: Ok(text.into()),
        });
        self
    }

    /// Appends a failed read.
    #[must_use]
    pub fn fail(mut self, error: SelectionError) -> Self {
        self.steps.push_back(Step {
            latency: Duration::ZERO,
            outcome: Err(error),
        });
        self
    }

    /// Returns the timeout passed to each `read_choice` call, in order.
    #[must_use]
    pub fn requested_timeouts(&self) -> &[Option<Duration>] {
        &self.timeouts
    }

    /// Number of scripted steps not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl ChoiceInput for ScriptedInput {
    fn read_choice(&mut self, timeout: Option<Duration>) -> Result<String, SelectionError> {
        self.timeouts.push(timeout);
        let Some(step) = self.steps.pop_front() else {
            return Err(SelectionError::Closed);
        };

        if let Some(limit) = timeout.filter(|limit| step.latency > *limit) {
            if let Some(clock) = &self.clock {
                clock.advance(limit);
            }
            return Err(SelectionError::TimedOut(limit));
        }

        if let Some(clock) = &self.clock {
            clock.advance(step.latency);
        }
        step.outcome
    }
}
