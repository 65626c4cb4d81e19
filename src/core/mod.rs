//! Machine definitions, validation and execution.
//!
//! This module contains the core of the crate:
//! - `StateId`/`Symbol` identifiers
//! - the construction-time [`validator`]
//! - the immutable, shareable `MachineDefinition`
//! - the `Machine` cursor that executes input against a definition
//! - trace sinks and step history for observing runs
//!
//! Nothing in this module performs I/O.

mod definition;
mod dynamic;
mod error;
mod history;
mod input;
mod machine;
mod state;
mod trace;
pub mod validator;

pub use definition::{DefinitionParts, InputAlphabet, MachineDefinition, StateSet, TransitionTable};
pub use error::{Component, DefinitionError, ExecutionError};
pub use history::{StepHistory, StepRecord};
pub use input::InputSequence;
pub use machine::Machine;
pub use state::{StateId, Symbol};
pub use trace::{Step, TraceSink, TracingSink};
