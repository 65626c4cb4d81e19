//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder, generators for complete
//! transition tables, ready-made alphabets, and the `id_set!` and
//! `transition_table!` macros.

pub mod alphabet;
pub mod error;
pub mod machine;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use machine::MachineBuilder;
