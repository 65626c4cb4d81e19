//! Construction-time validation of machine definitions.
//!
//! [`validate`] is fail-fast and runs its checks in a fixed order:
//!
//! 1. the state set is non-empty
//! 2. the initial state is a declared state
//! 3. the input alphabet is non-empty
//! 4. every accepting state is declared, and there is at least one
//! 5. the transition table covers exactly states x alphabet and only
//!    targets declared states
//! 6. every state is reachable from the initial state
//!
//! [`audit`] runs the same checks independently and accumulates every
//! violation with Stillwater's `Validation`, for callers that want the whole
//! list in one pass.

use super::definition::{DefinitionParts, InputAlphabet, StateSet, TransitionTable};
use super::error::{Component, DefinitionError};
use super::state::{StateId, Symbol};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check every component of a definition, stopping at the first violation.
pub fn validate(parts: &DefinitionParts) -> Result<(), DefinitionError> {
    check_states(&parts.states)?;
    check_initial_state(&parts.states, &parts.initial_state)?;
    check_input_alphabet(&parts.input_alphabet)?;
    check_accepting_states(&parts.states, &parts.accepting_states)?;
    check_table(&parts.states, &parts.input_alphabet, &parts.transition_table)?;
    check_reachability(&parts.states, &parts.initial_state, &parts.transition_table)
}

pub(crate) fn check_states(states: &StateSet) -> Result<(), DefinitionError> {
    if states.is_empty() {
        return Err(DefinitionError::EmptySet {
            component: Component::States,
        });
    }
    Ok(())
}

pub(crate) fn check_initial_state(
    states: &StateSet,
    initial: &StateId,
) -> Result<(), DefinitionError> {
    if !states.contains(initial) {
        return Err(DefinitionError::InvalidInitialState {
            state: initial.clone(),
        });
    }
    Ok(())
}

pub(crate) fn check_input_alphabet(alphabet: &InputAlphabet) -> Result<(), DefinitionError> {
    if alphabet.is_empty() {
        return Err(DefinitionError::EmptySet {
            component: Component::InputAlphabet,
        });
    }
    Ok(())
}

pub(crate) fn check_accepting_states(
    states: &StateSet,
    accepting: &StateSet,
) -> Result<(), DefinitionError> {
    if let Some(state) = accepting.iter().find(|s| !states.contains(*s)) {
        return Err(DefinitionError::InvalidAcceptingState {
            state: state.clone(),
        });
    }
    if accepting.is_empty() {
        return Err(DefinitionError::EmptySet {
            component: Component::AcceptingStates,
        });
    }
    Ok(())
}

pub(crate) fn check_table(
    states: &StateSet,
    alphabet: &InputAlphabet,
    table: &TransitionTable,
) -> Result<(), DefinitionError> {
    if let Some(state) = states.iter().find(|s| !table.contains_key(*s)) {
        return Err(DefinitionError::MissingStateFromTable {
            state: state.clone(),
        });
    }

    for (state, row) in table {
        if !states.contains(state) {
            return Err(DefinitionError::InvalidStateInTable {
                state: state.clone(),
            });
        }

        let symbols = invalid_symbols(alphabet, row.keys());
        if !symbols.is_empty() {
            return Err(DefinitionError::InvalidInputInTable {
                state: state.clone(),
                symbols,
            });
        }

        let targets = invalid_targets(states, row.values());
        if !targets.is_empty() {
            return Err(DefinitionError::InvalidTransitionTargetInTable {
                state: state.clone(),
                targets,
            });
        }

        if let Some(symbol) = alphabet.iter().find(|a| !row.contains_key(*a)) {
            return Err(DefinitionError::MissingInputDefinition {
                state: state.clone(),
                symbol: symbol.clone(),
            });
        }
    }

    Ok(())
}

pub(crate) fn check_reachability(
    states: &StateSet,
    initial: &StateId,
    table: &TransitionTable,
) -> Result<(), DefinitionError> {
    match unreachable_states(states, initial, table).first() {
        Some(state) => Err(DefinitionError::UnreachableState {
            state: (*state).clone(),
        }),
        None => Ok(()),
    }
}

fn invalid_symbols<'a>(
    alphabet: &InputAlphabet,
    symbols: impl Iterator<Item = &'a Symbol>,
) -> Vec<Symbol> {
    symbols.filter(|s| !alphabet.contains(*s)).cloned().collect()
}

fn invalid_targets<'a>(
    states: &StateSet,
    targets: impl Iterator<Item = &'a StateId>,
) -> Vec<StateId> {
    targets.filter(|t| !states.contains(*t)).cloned().collect()
}

/// Depth-first walk from `initial`; returns the declared states never
/// visited, in state-set order.
fn unreachable_states<'a>(
    states: &'a StateSet,
    initial: &StateId,
    table: &TransitionTable,
) -> Vec<&'a StateId> {
    let mut visited: HashSet<&StateId> = HashSet::new();
    let mut stack = vec![initial];

    while let Some(current) = stack.pop() {
        if visited.insert(current) {
            if let Some(row) = table.get(current) {
                stack.extend(row.values());
            }
        }
    }

    states.iter().filter(|s| !visited.contains(s)).collect()
}

type Check = Validation<(), NonEmptyVec<DefinitionError>>;

fn check_each(errors: impl IntoIterator<Item = DefinitionError>) -> Vec<Check> {
    errors.into_iter().map(Validation::fail).collect()
}

fn from_result(result: Result<(), DefinitionError>) -> Check {
    match result {
        Ok(()) => Validation::success(()),
        Err(error) => Validation::fail(error),
    }
}

/// Run every check independently and accumulate ALL violations.
///
/// Succeeds exactly when [`validate`] succeeds. Reachability is only
/// evaluated once the transition table is structurally sound, since a
/// broken table gives no meaningful graph to walk.
pub fn audit(parts: &DefinitionParts) -> Validation<(), NonEmptyVec<DefinitionError>> {
    let DefinitionParts {
        states,
        initial_state,
        input_alphabet,
        transition_table,
        accepting_states,
    } = parts;

    let mut checks: Vec<Check> = vec![
        from_result(check_states(states)),
        from_result(check_initial_state(states, initial_state)),
        from_result(check_input_alphabet(input_alphabet)),
    ];

    checks.extend(check_each(
        accepting_states
            .iter()
            .filter(|s| !states.contains(*s))
            .map(|state| DefinitionError::InvalidAcceptingState {
                state: state.clone(),
            }),
    ));
    if accepting_states.is_empty() {
        checks.push(Validation::fail(DefinitionError::EmptySet {
            component: Component::AcceptingStates,
        }));
    }

    let table_errors = table_violations(states, input_alphabet, transition_table);
    let table_is_sound = table_errors.is_empty();
    checks.extend(check_each(table_errors));

    if table_is_sound && states.contains(initial_state) {
        checks.extend(check_each(
            unreachable_states(states, initial_state, transition_table)
                .into_iter()
                .map(|state| DefinitionError::UnreachableState {
                    state: state.clone(),
                }),
        ));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn table_violations(
    states: &StateSet,
    alphabet: &InputAlphabet,
    table: &TransitionTable,
) -> Vec<DefinitionError> {
    let mut errors: Vec<DefinitionError> = states
        .iter()
        .filter(|s| !table.contains_key(*s))
        .map(|state| DefinitionError::MissingStateFromTable {
            state: state.clone(),
        })
        .collect();

    for (state, row) in table {
        if !states.contains(state) {
            errors.push(DefinitionError::InvalidStateInTable {
                state: state.clone(),
            });
            continue;
        }

        let symbols = invalid_symbols(alphabet, row.keys());
        if !symbols.is_empty() {
            errors.push(DefinitionError::InvalidInputInTable {
                state: state.clone(),
                symbols,
            });
        }

        let targets = invalid_targets(states, row.values());
        if !targets.is_empty() {
            errors.push(DefinitionError::InvalidTransitionTargetInTable {
                state: state.clone(),
                targets,
            });
        }

        errors.extend(alphabet.iter().filter(|a| !row.contains_key(*a)).map(|symbol| {
            DefinitionError::MissingInputDefinition {
                state: state.clone(),
                symbol: symbol.clone(),
            }
        }));
    }

    errors
}
