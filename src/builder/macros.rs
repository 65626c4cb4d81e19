//! Macros for writing sets and transition tables as literals.

/// Collect identifiers into a `BTreeSet`.
///
/// Each item is converted with `From`, so the element type comes from the
/// surrounding context (`StateSet` or `InputAlphabet`).
///
/// # Example
///
/// ```
/// use dfsm::core::{InputAlphabet, StateSet};
/// use dfsm::id_set;
///
/// let states: StateSet = id_set!["S0", "S1"];
/// let alphabet: InputAlphabet = id_set!['a', 'b', 'c'];
///
/// assert!(states.contains("S1"));
/// assert_eq!(alphabet.len(), 3);
/// ```
#[macro_export]
macro_rules! id_set {
    ($($item:expr),* $(,)?) => {
        [$(::std::convert::From::from($item)),*]
            .into_iter()
            .collect::<::std::collections::BTreeSet<_>>()
    };
}

/// Build a `TransitionTable` from `state => { symbol => target, ... }` rows.
///
/// # Example
///
/// ```
/// use dfsm::transition_table;
///
/// let table = transition_table! {
///     "0" => { "0" => "0", "1" => "1" },
///     "1" => { "0" => "2", "1" => "0" },
///     "2" => { "0" => "1", "1" => "2" },
/// };
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table["1"]["0"], "2");
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            $state:expr => { $($symbol:expr => $target:expr),* $(,)? }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut table = $crate::core::TransitionTable::new();
        $(
            #[allow(unused_mut)]
            let mut row = ::std::collections::BTreeMap::new();
            $(
                row.insert(
                    $crate::core::Symbol::from($symbol),
                    $crate::core::StateId::from($target),
                );
            )*
            table.insert($crate::core::StateId::from($state), row);
        )*
        table
    }};
}
