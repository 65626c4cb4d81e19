//! Errors raised while validating a definition or executing input.

use super::state::{StateId, Symbol};
use std::fmt;
use thiserror::Error;

/// One of the five components a machine definition is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    States,
    InputAlphabet,
    TransitionTable,
    AcceptingStates,
}

impl Component {
    pub fn name(&self) -> &'static str {
        match self {
            Self::States => "states",
            Self::InputAlphabet => "inputAlphabet",
            Self::TransitionTable => "transitionTable",
            Self::AcceptingStates => "acceptingStates",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Reasons a machine definition is rejected.
///
/// Validation is fail-fast: construction reports the first violation found,
/// in a fixed check order, so the same bad definition always yields the same
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("expected {component} to be {expected}, but got {found}")]
    TypeMismatch {
        component: Component,
        expected: &'static str,
        found: String,
    },

    #[error("the '{component}' set cannot be empty")]
    EmptySet { component: Component },

    #[error("the initial state '{state}' is not in the set of valid states")]
    InvalidInitialState { state: StateId },

    #[error("the accepting state '{state}' is not defined in the set of valid states")]
    InvalidAcceptingState { state: StateId },

    #[error("the transition table is missing a definition for state '{state}'")]
    MissingStateFromTable { state: StateId },

    #[error("the transition table contains '{state}', which is not a member of the state set")]
    InvalidStateInTable { state: StateId },

    #[error(
        "the transition table has invalid input symbols for state '{state}': [{}] are not members of the input alphabet",
        join(.symbols)
    )]
    InvalidInputInTable { state: StateId, symbols: Vec<Symbol> },

    #[error(
        "the transition table has invalid targets for state '{state}': [{}] are not members of the state set",
        join(.targets)
    )]
    InvalidTransitionTargetInTable {
        state: StateId,
        targets: Vec<StateId>,
    },

    #[error("the transition table has no transition for state '{state}' on input '{symbol}'")]
    MissingInputDefinition { state: StateId, symbol: Symbol },

    #[error("the state '{state}' is unreachable from the initial state")]
    UnreachableState { state: StateId },
}

impl DefinitionError {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::EmptySet { .. } => "EMPTY_SET",
            Self::InvalidInitialState { .. } => "INVALID_INITIAL_STATE",
            Self::InvalidAcceptingState { .. } => "INVALID_ACCEPTING_STATE",
            Self::MissingStateFromTable { .. } => "MISSING_STATE_FROM_TRANSITION_TABLE",
            Self::InvalidStateInTable { .. } => "INVALID_STATE_VALUE_IN_TRANSITION_TABLE",
            Self::InvalidInputInTable { .. } => "INVALID_INPUT_VALUE",
            Self::InvalidTransitionTargetInTable { .. } => "INVALID_TRANSITION_STATE",
            Self::MissingInputDefinition { .. } => "MISSING_INPUT_DEFINITION",
            Self::UnreachableState { .. } => "UNREACHABLE_STATE",
        }
    }
}

/// Reasons an input sequence is refused by a running machine.
///
/// Input is checked in full before any transition is applied, so a machine
/// that returns one of these is left exactly where it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("input must be a string or a sequence of symbols, but got {found}")]
    InvalidInputType { found: String },

    #[error("the input '{symbol}' is not a member of the input alphabet")]
    InvalidInput { symbol: Symbol },
}

impl ExecutionError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInputType { .. } => "INVALID_INPUT_TYPE",
            Self::InvalidInput { .. } => "INVALID_INPUT",
        }
    }
}
