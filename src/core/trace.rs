//! Trace sinks that observe a machine while it processes input.
//!
//! A sink is handed to [`Machine::process_traced`](super::Machine::process_traced)
//! and sees the start state, every step, and the end state. Tracing never
//! changes what a run returns.

use super::state::{StateId, Symbol};

/// One applied transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step<'a> {
    pub from: &'a StateId,
    pub symbol: &'a Symbol,
    pub to: &'a StateId,
}

/// Receiver for the events of a single run.
pub trait TraceSink {
    /// Called once before the first symbol is applied.
    fn started(&mut self, _state: &StateId) {}

    fn step(&mut self, step: Step<'_>);

    /// Called once after the last symbol is applied.
    fn finished(&mut self, _state: &StateId) {}
}

/// The silent sink.
impl TraceSink for () {
    fn step(&mut self, _step: Step<'_>) {}
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn started(&mut self, state: &StateId) {
        (**self).started(state)
    }

    fn step(&mut self, step: Step<'_>) {
        (**self).step(step)
    }

    fn finished(&mut self, state: &StateId) {
        (**self).finished(state)
    }
}

/// Sink that reports every event through `tracing` at DEBUG level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn started(&mut self, state: &StateId) {
        tracing::debug!(%state, "Starting at state: {state}");
    }

    fn step(&mut self, step: Step<'_>) {
        tracing::debug!(
            from = %step.from,
            symbol = %step.symbol,
            to = %step.to,
            "(state: {}, inputVal: {}) -> {}",
            step.from,
            step.symbol,
            step.to
        );
    }

    fn finished(&mut self, state: &StateId) {
        tracing::debug!(%state, "Ending at state: {state}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Lines(Vec<String>);

    impl TraceSink for Lines {
        fn started(&mut self, state: &StateId) {
            self.0.push(format!("start {state}"));
        }

        fn step(&mut self, step: Step<'_>) {
            self.0
                .push(format!("{} -{}-> {}", step.from, step.symbol, step.to));
        }

        fn finished(&mut self, state: &StateId) {
            self.0.push(format!("end {state}"));
        }
    }

    fn drive(mut sink: impl TraceSink) {
        let (a, b, x) = (StateId::from("A"), StateId::from("B"), Symbol::from("x"));
        sink.started(&a);
        sink.step(Step {
            from: &a,
            symbol: &x,
            to: &b,
        });
        sink.finished(&b);
    }

    #[test]
    fn mutable_references_forward_events() {
        let mut lines = Lines::default();
        drive(&mut lines);
        assert_eq!(lines.0, vec!["start A", "A -x-> B", "end B"]);
    }

    #[test]
    fn silent_and_tracing_sinks_accept_events() {
        drive(());
        drive(TracingSink);
    }
}
