//! Execution cursor over a shared machine definition.

use super::definition::{InputAlphabet, MachineDefinition, StateSet, TransitionTable};
use super::error::{DefinitionError, ExecutionError};
use super::input::InputSequence;
use super::state::StateId;
use super::trace::{Step, TraceSink, TracingSink};
use std::sync::Arc;

/// A running machine: a shared [`MachineDefinition`] plus the current state.
///
/// The current state is the only thing that changes, and only through
/// `process*` and [`reset`](Machine::reset). Input is checked against the
/// alphabet in full before the first transition is applied, so a failed
/// call leaves the machine where it was.
///
/// Cursors are cheap to clone and independent of each other; give each
/// concurrent consumer its own.
///
/// # Example
///
/// ```rust
/// use dfsm::Machine;
/// use dfsm::{id_set, transition_table};
///
/// let mut machine = Machine::new(
///     id_set!["0", "1", "2"],
///     "0",
///     id_set!["0", "1"],
///     transition_table! {
///         "0" => { "0" => "0", "1" => "1" },
///         "1" => { "0" => "2", "1" => "0" },
///         "2" => { "0" => "1", "1" => "2" },
///     },
///     id_set!["0"],
/// )
/// .unwrap();
///
/// assert_eq!(machine.process_and_reset("1101").unwrap(), "1");
/// assert_eq!(machine.process("1111").unwrap(), "0");
/// assert!(machine.is_accepting());
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    definition: Arc<MachineDefinition>,
    current: StateId,
}

impl Machine {
    /// Validate a definition and open a cursor over it.
    pub fn new(
        states: StateSet,
        initial_state: impl Into<StateId>,
        input_alphabet: InputAlphabet,
        transition_table: TransitionTable,
        accepting_states: StateSet,
    ) -> Result<Self, DefinitionError> {
        let definition = MachineDefinition::new(
            states,
            initial_state,
            input_alphabet,
            transition_table,
            accepting_states,
        )?;
        Ok(Self::from_definition(Arc::new(definition)))
    }

    /// Open a cursor at the definition's initial state.
    pub fn from_definition(definition: Arc<MachineDefinition>) -> Self {
        let current = definition.initial_state().clone();
        Self {
            definition,
            current,
        }
    }

    /// Caller must ensure `current` is a declared state.
    pub(crate) fn at_state(definition: Arc<MachineDefinition>, current: StateId) -> Self {
        Self {
            definition,
            current,
        }
    }

    pub fn definition(&self) -> &Arc<MachineDefinition> {
        &self.definition
    }

    pub fn current_state(&self) -> &StateId {
        &self.current
    }

    pub fn is_accepting(&self) -> bool {
        self.definition.is_accepting_state(self.current.as_str())
    }

    pub fn reset(&mut self) {
        self.current = self.definition.initial_state().clone();
    }

    /// Consume `input` symbol by symbol and return the state reached.
    pub fn process<I>(&mut self, input: &I) -> Result<StateId, ExecutionError>
    where
        I: InputSequence + ?Sized,
    {
        self.process_traced(input, &mut ())
    }

    /// [`process`](Machine::process), reporting the run through `tracing`.
    pub fn process_verbose<I>(&mut self, input: &I) -> Result<StateId, ExecutionError>
    where
        I: InputSequence + ?Sized,
    {
        self.process_traced(input, &mut TracingSink)
    }

    /// [`process`](Machine::process), reporting the run to `sink`.
    pub fn process_traced<I, T>(&mut self, input: &I, sink: &mut T) -> Result<StateId, ExecutionError>
    where
        I: InputSequence + ?Sized,
        T: TraceSink + ?Sized,
    {
        let symbols = input.checked_symbols(self.definition.input_alphabet())?;

        sink.started(&self.current);
        for symbol in &symbols {
            let next = self.definition.step(&self.current, symbol).clone();
            sink.step(Step {
                from: &self.current,
                symbol,
                to: &next,
            });
            self.current = next;
        }
        sink.finished(&self.current);

        Ok(self.current.clone())
    }

    /// Process `input`, then reset to the initial state.
    ///
    /// Returns the state the run reached. The cursor's state is the initial
    /// state afterwards on success and unchanged on error.
    pub fn process_and_reset<I>(&mut self, input: &I) -> Result<StateId, ExecutionError>
    where
        I: InputSequence + ?Sized,
    {
        self.process_and_reset_traced(input, &mut ())
    }

    pub fn process_and_reset_verbose<I>(&mut self, input: &I) -> Result<StateId, ExecutionError>
    where
        I: InputSequence + ?Sized,
    {
        self.process_and_reset_traced(input, &mut TracingSink)
    }

    pub fn process_and_reset_traced<I, T>(
        &mut self,
        input: &I,
        sink: &mut T,
    ) -> Result<StateId, ExecutionError>
    where
        I: InputSequence + ?Sized,
        T: TraceSink + ?Sized,
    {
        let reached = self.process_traced(input, sink)?;
        self.reset();
        Ok(reached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StepHistory;
    use crate::{id_set, transition_table};
    use serde_json::json;

    fn machine(accepting: StateSet) -> Machine {
        Machine::new(
            id_set!["S0", "S1", "S2"],
            "S0",
            id_set!["0", "1"],
            transition_table! {
                "S0" => { "0" => "S0", "1" => "S1" },
                "S1" => { "0" => "S2", "1" => "S0" },
                "S2" => { "0" => "S1", "1" => "S2" },
            },
            accepting,
        )
        .unwrap()
    }

    #[test]
    fn process_a_single_value() {
        let mut m = machine(id_set!["S0"]);
        assert_eq!(m.current_state(), "S0");
        m.process("1").unwrap();
        assert_eq!(m.current_state(), "S1");
    }

    #[test]
    fn process_multiple_values_from_a_string() {
        let mut m = machine(id_set!["S0"]);
        assert_eq!(m.process("110").unwrap(), "S0");
        let mut m = machine(id_set!["S0"]);
        assert_eq!(m.process("10").unwrap(), "S2");
    }

    #[test]
    fn process_multiple_values_from_a_list() {
        let mut m = machine(id_set!["S0"]);
        assert_eq!(m.process(&["1", "0", "1", "0"]).unwrap(), "S1");
        assert_eq!(m.current_state(), "S1");
    }

    #[test]
    fn processing_continues_from_current_state() {
        let mut m = machine(id_set!["S0"]);
        m.process("1").unwrap();
        assert_eq!(m.process("0").unwrap(), "S2");
    }

    #[test]
    fn empty_input_keeps_state() {
        let mut m = machine(id_set!["S0"]);
        m.process("1").unwrap();
        assert_eq!(m.process("").unwrap(), "S1");
    }

    #[test]
    fn non_sequence_input_is_rejected() {
        let mut m = machine(id_set!["S0"]);
        let error = m.process(&json!(10110101)).unwrap_err();
        assert!(matches!(error, ExecutionError::InvalidInputType { .. }));
        assert_eq!(error.code(), "INVALID_INPUT_TYPE");
    }

    #[test]
    fn numeric_json_elements_are_not_symbols() {
        let mut m = machine(id_set!["S0"]);
        m.process("1").unwrap();

        let error = m.process(&json!([1, 0, 1])).unwrap_err();

        assert_eq!(error, ExecutionError::InvalidInput { symbol: "1".into() });
        assert_eq!(m.current_state(), "S1");
        assert_eq!(m.process(&json!(["0", "1"])).unwrap(), "S1");
    }

    #[test]
    fn symbol_outside_alphabet_is_rejected() {
        let mut m = machine(id_set!["S0"]);
        let error = m.process(&["1", "0", "0", "1", "3", "1"]).unwrap_err();
        assert_eq!(error, ExecutionError::InvalidInput { symbol: "3".into() });
    }

    #[test]
    fn rejected_input_applies_nothing() {
        let mut m = machine(id_set!["S0"]);
        m.process("1").unwrap();

        assert!(m.process(&["0", "1", "7"]).is_err());
        assert_eq!(m.current_state(), "S1");
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut m = machine(id_set!["S0"]);
        assert_eq!(m.process("1010").unwrap(), "S1");
        assert_eq!(m.current_state(), "S1");
        m.reset();
        assert_eq!(m.current_state(), "S0");
    }

    #[test]
    fn process_and_reset_reports_reached_state() {
        let mut m = machine(id_set!["S0"]);
        assert_eq!(m.process_and_reset("1010").unwrap(), "S1");
        assert_eq!(m.current_state(), "S0");
    }

    #[test]
    fn process_and_reset_error_leaves_state() {
        let mut m = machine(id_set!["S0"]);
        m.process("1").unwrap();
        assert!(m.process_and_reset("12").is_err());
        assert_eq!(m.current_state(), "S1");
    }

    #[test]
    fn accepting_reflects_current_state() {
        let mut m = machine(id_set!["S2"]);
        assert_eq!(m.current_state(), "S0");
        assert!(!m.is_accepting());

        m.process("10").unwrap();
        assert_eq!(m.current_state(), "S2");
        assert!(m.is_accepting());

        m.process("0").unwrap();
        assert_eq!(m.current_state(), "S1");
        assert!(!m.is_accepting());

        m.process("0").unwrap();
        assert_eq!(m.current_state(), "S2");
        assert!(m.is_accepting());
    }

    #[test]
    fn traced_run_records_every_step() {
        let mut m = machine(id_set!["S0"]);
        let mut history = StepHistory::new();

        let reached = m.process_traced("101", &mut history).unwrap();

        assert_eq!(reached, "S2");
        assert_eq!(history.get_path(), vec!["S0", "S1", "S2", "S2"]);
        assert_eq!(history.symbols(), vec!["1", "0", "1"]);
    }

    #[test]
    fn rejected_input_is_not_traced() {
        let mut m = machine(id_set!["S0"]);
        let mut history = StepHistory::new();

        assert!(m.process_traced("1x", &mut history).is_err());
        assert!(history.is_empty());
    }

    #[test]
    fn verbose_matches_silent() {
        let mut quiet = machine(id_set!["S0"]);
        let mut verbose = machine(id_set!["S0"]);
        assert_eq!(
            quiet.process("1110").unwrap(),
            verbose.process_verbose("1110").unwrap()
        );
        assert_eq!(
            quiet.process_and_reset("01").unwrap(),
            verbose.process_and_reset_verbose("01").unwrap()
        );
    }

    #[test]
    fn cursors_are_independent() {
        let first = machine(id_set!["S0"]);
        let mut second = first.definition().cursor();
        let mut first = first;

        first.process("1").unwrap();
        second.process("10").unwrap();

        assert_eq!(first.current_state(), "S1");
        assert_eq!(second.current_state(), "S2");
    }

    #[test]
    fn machine_can_move_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Machine>();
    }
}
