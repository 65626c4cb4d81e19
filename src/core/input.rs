//! Conversion of caller input into symbol sequences.

use super::definition::InputAlphabet;
use super::error::ExecutionError;
use super::state::Symbol;
use serde_json::Value;

/// Anything a machine can consume as an ordered sequence of symbols.
///
/// Strings are split into one symbol per `char`; slices, arrays and vectors
/// of string-likes contribute one symbol per element. JSON values are
/// accepted when they are a string or an array, so loosely typed callers
/// get an [`ExecutionError::InvalidInputType`] rather than a panic. A
/// non-string element of a JSON array is never a symbol, whatever its text.
pub trait InputSequence {
    fn to_symbols(&self) -> Result<Vec<Symbol>, ExecutionError>;

    /// Convert and check every symbol against `alphabet`, in input order.
    ///
    /// Fails with [`ExecutionError::InvalidInput`] naming the first element
    /// that is not an alphabet symbol.
    fn checked_symbols(&self, alphabet: &InputAlphabet) -> Result<Vec<Symbol>, ExecutionError> {
        let symbols = self.to_symbols()?;
        if let Some(symbol) = symbols.iter().find(|s| !alphabet.contains(*s)) {
            return Err(ExecutionError::InvalidInput {
                symbol: symbol.clone(),
            });
        }
        Ok(symbols)
    }
}

impl InputSequence for str {
    fn to_symbols(&self) -> Result<Vec<Symbol>, ExecutionError> {
        Ok(self.chars().map(Symbol::from).collect())
    }
}

impl InputSequence for String {
    fn to_symbols(&self) -> Result<Vec<Symbol>, ExecutionError> {
        self.as_str().to_symbols()
    }
}

impl<S: AsRef<str>> InputSequence for [S] {
    fn to_symbols(&self) -> Result<Vec<Symbol>, ExecutionError> {
        Ok(self.iter().map(|s| Symbol::from(s.as_ref())).collect())
    }
}

impl<S: AsRef<str>, const N: usize> InputSequence for [S; N] {
    fn to_symbols(&self) -> Result<Vec<Symbol>, ExecutionError> {
        self.as_slice().to_symbols()
    }
}

impl<S: AsRef<str>> InputSequence for Vec<S> {
    fn to_symbols(&self) -> Result<Vec<Symbol>, ExecutionError> {
        self.as_slice().to_symbols()
    }
}

impl InputSequence for Value {
    fn to_symbols(&self) -> Result<Vec<Symbol>, ExecutionError> {
        match self {
            Value::String(text) => text.to_symbols(),
            Value::Array(items) => items.iter().map(json_symbol).collect(),
            other => Err(ExecutionError::InvalidInputType {
                found: other.to_string(),
            }),
        }
    }

    fn checked_symbols(&self, alphabet: &InputAlphabet) -> Result<Vec<Symbol>, ExecutionError> {
        let Value::Array(items) = self else {
            let symbols = self.to_symbols()?;
            return symbols.as_slice().checked_symbols(alphabet);
        };
        items
            .iter()
            .map(|item| {
                let symbol = json_symbol(item)?;
                if !alphabet.contains(&symbol) {
                    return Err(ExecutionError::InvalidInput { symbol });
                }
                Ok(symbol)
            })
            .collect()
    }
}

fn json_symbol(item: &Value) -> Result<Symbol, ExecutionError> {
    match item {
        Value::String(text) => Ok(Symbol::from(text.as_str())),
        other => Err(ExecutionError::InvalidInput {
            symbol: Symbol::from(other.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_split_per_char() {
        let symbols = "héllo".to_symbols().unwrap();
        assert_eq!(symbols, vec!["h", "é", "l", "l", "o"]);
    }

    #[test]
    fn slices_keep_whole_elements() {
        let symbols = ["10", "0"].to_symbols().unwrap();
        assert_eq!(symbols, vec!["10", "0"]);
    }

    #[test]
    fn vectors_of_owned_strings() {
        let input = vec![String::from("a"), String::from("b")];
        assert_eq!(input.to_symbols().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_is_an_empty_sequence() {
        assert!("".to_symbols().unwrap().is_empty());
        assert!(Vec::<&str>::new().to_symbols().unwrap().is_empty());
    }

    #[test]
    fn json_strings_and_arrays_are_sequences() {
        assert_eq!(json!("101").to_symbols().unwrap(), vec!["1", "0", "1"]);
        assert_eq!(json!(["1", "0"]).to_symbols().unwrap(), vec!["1", "0"]);
    }

    #[test]
    fn json_non_string_elements_are_invalid_input() {
        assert_eq!(
            json!(["1", 3]).to_symbols().unwrap_err(),
            ExecutionError::InvalidInput { symbol: "3".into() }
        );
    }

    #[test]
    fn numbers_never_match_symbols_with_the_same_text() {
        let alphabet: InputAlphabet = crate::id_set!["0", "1"];
        assert_eq!(
            json!([1, 0, 1]).checked_symbols(&alphabet).unwrap_err(),
            ExecutionError::InvalidInput { symbol: "1".into() }
        );
    }

    #[test]
    fn first_offender_wins_in_input_order() {
        let alphabet: InputAlphabet = crate::id_set!["0", "1"];
        assert_eq!(
            json!(["1", "2", 3]).checked_symbols(&alphabet).unwrap_err(),
            ExecutionError::InvalidInput { symbol: "2".into() }
        );
        assert_eq!(
            json!(["1", 3, "2"]).checked_symbols(&alphabet).unwrap_err(),
            ExecutionError::InvalidInput { symbol: "3".into() }
        );
        assert_eq!(
            json!(["1", "0"]).checked_symbols(&alphabet).unwrap(),
            vec!["1", "0"]
        );
    }

    #[test]
    fn json_scalars_are_rejected() {
        let error = json!(10110101).to_symbols().unwrap_err();
        assert_eq!(
            error,
            ExecutionError::InvalidInputType {
                found: "10110101".to_string()
            }
        );
        assert!(json!(null).to_symbols().is_err());
        assert!(json!({"a": "b"}).to_symbols().is_err());
    }
}
