//! Construction from loosely typed JSON components.
//!
//! Callers that receive machine components as `serde_json::Value`s (from a
//! scripting layer, a config blob, a test fixture) can hand them over as-is.
//! Shape errors become [`DefinitionError::TypeMismatch`] and are reported in
//! the same order as the typed checks, so the first error for a given input
//! does not depend on which constructor was used.

use super::definition::{DefinitionParts, MachineDefinition, TransitionTable};
use super::error::{Component, DefinitionError};
use super::state::{StateId, Symbol};
use super::validator;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

impl MachineDefinition {
    /// Build a definition from JSON components.
    ///
    /// `states`, `input_alphabet` and `accepting_states` must be arrays of
    /// strings, `transition_table` an object of objects of strings, and
    /// `initial_state` a string naming one of the states.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dfsm::core::MachineDefinition;
    /// use serde_json::json;
    ///
    /// let definition = MachineDefinition::from_json(
    ///     &json!(["on", "off"]),
    ///     &json!("off"),
    ///     &json!(["press"]),
    ///     &json!({ "on": { "press": "off" }, "off": { "press": "on" } }),
    ///     &json!(["on"]),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(definition.initial_state(), "off");
    /// ```
    pub fn from_json(
        states: &Value,
        initial_state: &Value,
        input_alphabet: &Value,
        transition_table: &Value,
        accepting_states: &Value,
    ) -> Result<Self, DefinitionError> {
        let states: BTreeSet<StateId> = string_set(Component::States, states)?;
        validator::check_states(&states)?;

        // A non-string can never name a state, even when its text matches one.
        let initial_state = match initial_state {
            Value::String(name) => StateId::from(name.as_str()),
            other => {
                return Err(DefinitionError::InvalidInitialState {
                    state: StateId::from(other.to_string()),
                })
            }
        };
        validator::check_initial_state(&states, &initial_state)?;

        let input_alphabet: BTreeSet<Symbol> = string_set(Component::InputAlphabet, input_alphabet)?;
        validator::check_input_alphabet(&input_alphabet)?;

        let accepting_states = accepting_set(&states, accepting_states)?;

        let transition_table = table(transition_table)?;

        Self::from_parts(DefinitionParts {
            states,
            initial_state,
            input_alphabet,
            transition_table,
            accepting_states,
        })
    }
}

fn describe(value: &Value) -> String {
    let kind = match value {
        Value::Null => return "null".to_string(),
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    format!("{kind} ({value})")
}

fn mismatch(component: Component, expected: &'static str, found: &Value) -> DefinitionError {
    DefinitionError::TypeMismatch {
        component,
        expected,
        found: describe(found),
    }
}

/// An empty array is reported as an empty set before element types are looked at.
fn string_set<T>(component: Component, value: &Value) -> Result<BTreeSet<T>, DefinitionError>
where
    T: for<'a> From<&'a str> + Ord,
{
    let Value::Array(items) = value else {
        return Err(mismatch(component, "an array of strings", value));
    };
    if items.is_empty() {
        return Err(DefinitionError::EmptySet { component });
    }
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(T::from)
                .ok_or_else(|| mismatch(component, "a string", item))
        })
        .collect()
}

/// Each element is type-checked and then looked up before the next one is read.
fn accepting_set(
    states: &BTreeSet<StateId>,
    value: &Value,
) -> Result<BTreeSet<StateId>, DefinitionError> {
    let component = Component::AcceptingStates;
    let Value::Array(items) = value else {
        return Err(mismatch(component, "an array of strings", value));
    };
    let mut accepting = BTreeSet::new();
    for item in items {
        let state = item
            .as_str()
            .ok_or_else(|| mismatch(component, "a string", item))?;
        if !states.contains(state) {
            return Err(DefinitionError::InvalidAcceptingState {
                state: StateId::from(state),
            });
        }
        accepting.insert(StateId::from(state));
    }
    if accepting.is_empty() {
        return Err(DefinitionError::EmptySet { component });
    }
    Ok(accepting)
}

fn table(value: &Value) -> Result<TransitionTable, DefinitionError> {
    let rows = object(value, "an object of per-state transitions")?;
    rows.iter()
        .map(|(state, row)| -> Result<_, DefinitionError> {
            let row = object(row, "an object mapping input symbols to states")?
                .iter()
                .map(|(symbol, target)| -> Result<_, DefinitionError> {
                    let target = target
                        .as_str()
                        .ok_or_else(|| mismatch(Component::TransitionTable, "a string", target))?;
                    Ok((Symbol::from(symbol.as_str()), StateId::from(target)))
                })
                .collect::<Result<BTreeMap<_, _>, DefinitionError>>()?;
            Ok((StateId::from(state.as_str()), row))
        })
        .collect()
}

fn object<'a>(
    value: &'a Value,
    expected: &'static str,
) -> Result<&'a Map<String, Value>, DefinitionError> {
    value
        .as_object()
        .ok_or_else(|| mismatch(Component::TransitionTable, expected, value))
}
