//! Checkpoint error types.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpointed state is not declared by the definition being resumed
    #[error("Checkpoint state '{state}' is not a state of this machine")]
    UnknownState { state: StateId },

    /// The checkpoint was taken from a machine with a different initial state
    #[error("Checkpoint initial state '{found}' does not match machine initial state '{expected}'")]
    InitialStateMismatch { expected: StateId, found: StateId },
}
