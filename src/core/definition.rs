//! Validated, immutable machine definitions.

use super::error::DefinitionError;
use super::machine::Machine;
use super::state::{StateId, Symbol};
use super::validator;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

/// Set of state identifiers. Iteration order is the identifiers' sort order.
pub type StateSet = BTreeSet<StateId>;

/// Set of input symbols. Iteration order is the symbols' sort order.
pub type InputAlphabet = BTreeSet<Symbol>;

/// Nested `state -> symbol -> target` table, the shape callers write.
pub type TransitionTable = BTreeMap<StateId, BTreeMap<Symbol, StateId>>;

/// The five raw components of a machine definition, not yet validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionParts {
    pub states: StateSet,
    pub initial_state: StateId,
    pub input_alphabet: InputAlphabet,
    pub transition_table: TransitionTable,
    pub accepting_states: StateSet,
}

/// A deterministic finite state machine definition that passed validation.
///
/// A `MachineDefinition` never changes after construction and is safe to
/// share between threads. Execution state lives in [`Machine`] cursors,
/// any number of which can run over one shared definition.
///
/// Every value of this type upholds:
///
/// - the initial state and every accepting state are declared states
/// - the table maps every `(state, symbol)` pair to a declared state
/// - every state is reachable from the initial state
///
/// # Example
///
/// ```rust
/// use dfsm::core::MachineDefinition;
/// use dfsm::{id_set, transition_table};
///
/// let definition = MachineDefinition::new(
///     id_set!["even", "odd"],
///     "even",
///     id_set!["1"],
///     transition_table! {
///         "even" => { "1" => "odd" },
///         "odd" => { "1" => "even" },
///     },
///     id_set!["even"],
/// )
/// .unwrap();
///
/// assert_eq!(definition.initial_state(), "even");
/// assert!(definition.is_accepting_state("even"));
/// ```
#[derive(Debug)]
pub struct MachineDefinition {
    states: StateSet,
    initial_state: StateId,
    input_alphabet: InputAlphabet,
    accepting_states: StateSet,
    table: TransitionTable,
    transitions: HashMap<StateId, HashMap<Symbol, StateId>>,
}

impl MachineDefinition {
    /// Validate the five components and build a definition from them.
    ///
    /// Returns the first violation found; see [`validator`] for the order
    /// in which checks run.
    pub fn new(
        states: StateSet,
        initial_state: impl Into<StateId>,
        input_alphabet: InputAlphabet,
        transition_table: TransitionTable,
        accepting_states: StateSet,
    ) -> Result<Self, DefinitionError> {
        Self::from_parts(DefinitionParts {
            states,
            initial_state: initial_state.into(),
            input_alphabet,
            transition_table,
            accepting_states,
        })
    }

    /// Validate already-assembled parts and build a definition from them.
    pub fn from_parts(parts: DefinitionParts) -> Result<Self, DefinitionError> {
        if let Err(error) = validator::validate(&parts) {
            tracing::debug!(code = error.code(), %error, "machine definition rejected");
            return Err(error);
        }

        let transitions = parts
            .transition_table
            .iter()
            .map(|(state, row)| {
                let row: HashMap<Symbol, StateId> = row
                    .iter()
                    .map(|(symbol, target)| (symbol.clone(), target.clone()))
                    .collect();
                (state.clone(), row)
            })
            .collect();

        tracing::debug!(
            states = parts.states.len(),
            symbols = parts.input_alphabet.len(),
            initial = %parts.initial_state,
            "machine definition validated"
        );

        Ok(Self {
            states: parts.states,
            initial_state: parts.initial_state,
            input_alphabet: parts.input_alphabet,
            accepting_states: parts.accepting_states,
            table: parts.transition_table,
            transitions,
        })
    }

    pub fn states(&self) -> &StateSet {
        &self.states
    }

    pub fn initial_state(&self) -> &StateId {
        &self.initial_state
    }

    pub fn input_alphabet(&self) -> &InputAlphabet {
        &self.input_alphabet
    }

    pub fn accepting_states(&self) -> &StateSet {
        &self.accepting_states
    }

    /// The nested transition table this definition was built from.
    pub fn transition_table(&self) -> &TransitionTable {
        &self.table
    }

    /// Look up the successor of `state` on `symbol`.
    ///
    /// Returns `None` only when `state` is not declared or `symbol` is not
    /// in the alphabet.
    pub fn next_state(&self, state: &str, symbol: &str) -> Option<&StateId> {
        self.transitions.get(state)?.get(symbol)
    }

    pub fn is_accepting_state(&self, state: &str) -> bool {
        self.accepting_states.contains(state)
    }

    /// Open a new cursor positioned at the initial state.
    pub fn cursor(self: &Arc<Self>) -> Machine {
        Machine::from_definition(Arc::clone(self))
    }

    /// Successor lookup for a symbol already known to be in the alphabet.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is outside the alphabet or `state` is undeclared;
    /// table completeness guarantees a target for every other pair.
    pub(crate) fn step(&self, state: &StateId, symbol: &Symbol) -> &StateId {
        &self.transitions[state.as_str()][symbol.as_str()]
    }
}

impl TryFrom<DefinitionParts> for MachineDefinition {
    type Error = DefinitionError;

    fn try_from(parts: DefinitionParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{id_set, transition_table};

    fn mod_three() -> MachineDefinition {
        MachineDefinition::new(
            id_set!["0", "1", "2"],
            "0",
            id_set!["0", "1"],
            transition_table! {
                "0" => { "0" => "0", "1" => "1" },
                "1" => { "0" => "2", "1" => "0" },
                "2" => { "0" => "1", "1" => "2" },
            },
            id_set!["0", "1", "2"],
        )
        .unwrap()
    }

    #[test]
    fn every_pair_has_a_declared_target() {
        let definition = mod_three();
        for state in definition.states() {
            for symbol in definition.input_alphabet() {
                let target = definition.next_state(state.as_str(), symbol.as_str()).unwrap();
                assert!(definition.states().contains(target));
            }
        }
    }

    #[test]
    fn next_state_follows_table() {
        let definition = mod_three();
        let next = definition.next_state("1", "0");
        assert_eq!(next, Some(&StateId::from("2")));
    }

    #[test]
    fn next_state_outside_alphabet_is_none() {
        let definition = mod_three();
        assert!(definition.next_state("1", "7").is_none());
        assert!(definition.next_state("9", "0").is_none());
    }

    #[test]
    fn rejects_initial_state_outside_states() {
        let result = MachineDefinition::new(
            id_set!["S0", "S1", "S2"],
            "S42",
            id_set!["0", "1"],
            transition_table! {
                "S0" => { "0" => "S0", "1" => "S1" },
                "S1" => { "0" => "S2", "1" => "S0" },
                "S2" => { "0" => "S1", "1" => "S2" },
            },
            id_set!["S0"],
        );

        assert!(matches!(
            result,
            Err(DefinitionError::InvalidInitialState { state }) if state == "S42"
        ));
    }

    #[test]
    fn try_from_parts_matches_new() {
        let definition = mod_three();
        let parts = DefinitionParts {
            states: definition.states().clone(),
            initial_state: definition.initial_state().clone(),
            input_alphabet: definition.input_alphabet().clone(),
            transition_table: definition.transition_table().clone(),
            accepting_states: definition.accepting_states().clone(),
        };

        let rebuilt = MachineDefinition::try_from(parts).unwrap();
        assert_eq!(rebuilt.transition_table(), definition.transition_table());
    }

    #[test]
    fn definition_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MachineDefinition>();
    }

    #[test]
    fn cursors_start_at_initial_state() {
        let definition = Arc::new(mod_three());
        let cursor = definition.cursor();
        assert_eq!(cursor.current_state(), "0");
        assert!(Arc::ptr_eq(cursor.definition(), &definition));
    }
}
