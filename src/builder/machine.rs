//! Builder for constructing machine definitions.

use crate::builder::error::BuildError;
use crate::builder::table;
use crate::core::{
    InputAlphabet, Machine, MachineDefinition, StateId, StateSet, Symbol, TransitionTable,
};
use std::sync::Arc;

/// Builder for constructing machine definitions with a fluent API.
///
/// Nothing is checked until [`build`](MachineBuilder::build), which runs
/// the full validator.
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    states: StateSet,
    initial: Option<StateId>,
    alphabet: InputAlphabet,
    table: TransitionTable,
    accepting: StateSet,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare several states.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StateId>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Declare one state.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states.insert(state.into());
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add several symbols to the input alphabet.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Symbol>,
    {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Add one symbol to the input alphabet.
    pub fn symbol(mut self, symbol: impl Into<Symbol>) -> Self {
        self.alphabet.insert(symbol.into());
        self
    }

    /// Add or replace a single table entry.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        symbol: impl Into<Symbol>,
        to: impl Into<StateId>,
    ) -> Self {
        self.table
            .entry(from.into())
            .or_default()
            .insert(symbol.into(), to.into());
        self
    }

    /// Merge a whole table, replacing entries that are already present.
    pub fn table(mut self, table: TransitionTable) -> Self {
        for (state, row) in table {
            self.table.entry(state).or_default().extend(row);
        }
        self
    }

    /// Fill the table from a transition function over the states and
    /// symbols declared so far.
    pub fn transition_fn<F, T>(self, transition: F) -> Self
    where
        F: FnMut(&StateId, &Symbol) -> T,
        T: Into<StateId>,
    {
        let generated = table::from_fn(&self.states, &self.alphabet, transition);
        self.table(generated)
    }

    /// Mark several states as accepting.
    pub fn accepting<I>(mut self, states: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StateId>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// Build the definition.
    /// Returns an error if the initial state is missing or validation fails.
    pub fn build(self) -> Result<MachineDefinition, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(MachineDefinition::new(
            self.states,
            initial,
            self.alphabet,
            self.table,
            self.accepting,
        )?)
    }

    /// Build the definition and open a cursor over it.
    pub fn build_machine(self) -> Result<Machine, BuildError> {
        Ok(Machine::from_definition(Arc::new(self.build()?)))
    }
}
