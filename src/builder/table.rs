//! Generators for complete transition tables.
//!
//! Both functions produce one row per state and one entry per symbol, so
//! the result always covers `states x alphabet`. Whether the targets are
//! declared states is still up to the caller and checked at construction.

use crate::core::{InputAlphabet, StateId, StateSet, Symbol, TransitionTable};
use std::collections::BTreeMap;

/// Build a table by asking `transition` for the target of every pair.
///
/// # Example
///
/// ```
/// use dfsm::builder::table;
/// use dfsm::core::{InputAlphabet, StateSet};
/// use dfsm::id_set;
///
/// let states: StateSet = id_set!["EVEN", "ODD"];
/// let alphabet: InputAlphabet = id_set!["1", "2", "3", "4"];
///
/// let transitions = table::from_fn(&states, &alphabet, |_, input| {
///     if input.as_str().parse::<u32>().unwrap() % 2 == 0 { "EVEN" } else { "ODD" }
/// });
///
/// assert_eq!(transitions["ODD"]["4"], "EVEN");
/// ```
pub fn from_fn<F, T>(states: &StateSet, alphabet: &InputAlphabet, mut transition: F) -> TransitionTable
where
    F: FnMut(&StateId, &Symbol) -> T,
    T: Into<StateId>,
{
    states
        .iter()
        .map(|state| {
            let row: BTreeMap<Symbol, StateId> = alphabet
                .iter()
                .map(|symbol| (symbol.clone(), transition(state, symbol).into()))
                .collect();
            (state.clone(), row)
        })
        .collect()
}

/// Build a table sending every pair to `default`.
pub fn filled(
    states: &StateSet,
    alphabet: &InputAlphabet,
    default: impl Into<StateId>,
) -> TransitionTable {
    let default = default.into();
    from_fn(states, alphabet, |_, _| default.clone())
}
