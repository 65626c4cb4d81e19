//! dfsm: an immutable, strictly validated deterministic finite state machine
//!
//! A machine is described by five components: a set of states, an initial
//! state, an input alphabet, a transition table and a set of accepting
//! states. The description is validated once, up front, and rejected with a
//! specific error if anything is off: missing or extra table entries,
//! targets outside the state set, states that can never be reached. What
//! survives is a [`MachineDefinition`] that cannot change and can be shared
//! freely; execution happens in separate [`Machine`] cursors that hold only
//! the current state.
//!
//! # Core Concepts
//!
//! - **Definition**: the validated, immutable machine (`core::MachineDefinition`)
//! - **Cursor**: per-consumer execution state over a shared definition (`core::Machine`)
//! - **Trace sinks**: pluggable observers of a run (`core::TraceSink`)
//! - **Builders**: fluent construction and table generators (`builder`)
//! - **Checkpoints**: serializable snapshots of a cursor's position (`checkpoint`)
//!
//! # Example
//!
//! ```rust
//! use dfsm::builder::{alphabet, table};
//! use dfsm::core::{Machine, StateSet};
//! use dfsm::id_set;
//!
//! // Recognizes exactly the word "hi".
//! let states: StateSet = id_set!["start", "h", "hi", "error"];
//! let letters = alphabet::lowercase_letters();
//! let transitions = table::from_fn(&states, &letters, |state, letter| {
//!     match (state.as_str(), letter.as_str()) {
//!         ("start", "h") => "h",
//!         ("h", "i") => "hi",
//!         _ => "error",
//!     }
//! });
//!
//! let mut machine = Machine::new(states, "start", letters, transitions, id_set!["hi"]).unwrap();
//!
//! machine.process("hi").unwrap();
//! assert!(machine.is_accepting());
//!
//! machine.reset();
//! machine.process("hello").unwrap();
//! assert!(!machine.is_accepting());
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use crate::core::{
    DefinitionError, ExecutionError, Machine, MachineDefinition, StateId, Symbol, TraceSink,
};
