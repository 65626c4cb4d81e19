//! Timestamped record of processed steps.
//!
//! A [`StepHistory`] is a [`TraceSink`]: hand it to
//! [`Machine::process_traced`](super::Machine::process_traced) to keep every
//! applied transition, or build one by hand with the pure [`StepHistory::record`].

use super::state::{StateId, Symbol};
use super::trace::{Step, TraceSink};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use dfsm::core::StepRecord;
/// use chrono::Utc;
///
/// let record = StepRecord {
///     from: "S0".into(),
///     symbol: "1".into(),
///     to: "S1".into(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "S1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// The state before the symbol was consumed
    pub from: StateId,
    /// The consumed symbol
    pub symbol: Symbol,
    /// The state after the symbol was consumed
    pub to: StateId,
    /// When the step was applied
    pub timestamp: DateTime<Utc>,
}

impl StepRecord {
    /// Record a step as happening now.
    pub fn now(step: Step<'_>) -> Self {
        Self {
            from: step.from.clone(),
            symbol: step.symbol.clone(),
            to: step.to.clone(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of applied steps.
///
/// # Example
///
/// ```rust
/// use dfsm::core::{StepHistory, StepRecord};
/// use chrono::Utc;
///
/// let history = StepHistory::new()
///     .record(StepRecord {
///         from: "S0".into(),
///         symbol: "1".into(),
///         to: "S1".into(),
///         timestamp: Utc::now(),
///     })
///     .record(StepRecord {
///         from: "S1".into(),
///         symbol: "0".into(),
///         to: "S2".into(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // S0 -> S1 -> S2
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StepHistory {
    steps: Vec<StepRecord>,
}

impl StepHistory {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new history.
    ///
    /// The existing history is left unchanged.
    pub fn record(&self, step: StepRecord) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// The states visited, in order: the first step's source, then the
    /// target of every step. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&StateId> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// The consumed symbols, in order.
    pub fn symbols(&self) -> Vec<&Symbol> {
        self.steps.iter().map(|s| &s.symbol).collect()
    }

    /// Time between the first and last recorded step.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl TraceSink for StepHistory {
    fn step(&mut self, step: Step<'_>) {
        self.steps.push(StepRecord::now(step));
    }
}
