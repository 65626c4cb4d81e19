//! Checkpoint and resume for machine cursors.
//!
//! A checkpoint captures where a cursor is, never what the machine is: the
//! definition itself is not serialized. Resuming pairs a checkpoint with a
//! definition the caller already holds and checks that the two agree.

use crate::core::{Machine, MachineDefinition, StateId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a cursor's position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the machine the cursor runs over
    pub initial_state: StateId,

    /// Current state of the cursor
    pub current_state: StateId,
}

impl Checkpoint {
    /// Snapshot `machine`'s current position.
    pub fn capture(machine: &Machine) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: machine.definition().initial_state().clone(),
            current_state: machine.current_state().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

impl Machine {
    /// Snapshot this cursor's position.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(self)
    }

    /// Open a cursor over `definition` at the position in `checkpoint`.
    ///
    /// Fails if the checkpoint's version is unsupported, its initial state
    /// differs from the definition's, or its current state is not declared.
    pub fn resume(
        definition: Arc<MachineDefinition>,
        checkpoint: &Checkpoint,
    ) -> Result<Self, CheckpointError> {
        checkpoint.check_version()?;
        if checkpoint.initial_state != *definition.initial_state() {
            return Err(CheckpointError::InitialStateMismatch {
                expected: definition.initial_state().clone(),
                found: checkpoint.initial_state.clone(),
            });
        }
        if !definition.states().contains(&checkpoint.current_state) {
            return Err(CheckpointError::UnknownState {
                state: checkpoint.current_state.clone(),
            });
        }

        tracing::debug!(
            checkpoint = %checkpoint.id,
            state = %checkpoint.current_state,
            "resuming machine from checkpoint"
        );
        Ok(Machine::at_state(definition, checkpoint.current_state.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{id_set, transition_table};

    fn definition() -> Arc<MachineDefinition> {
        Arc::new(
            MachineDefinition::new(
                id_set!["S0", "S1", "S2"],
                "S0",
                id_set!["0", "1"],
                transition_table! {
                    "S0" => { "0" => "S0", "1" => "S1" },
                    "S1" => { "0" => "S2", "1" => "S0" },
                    "S2" => { "0" => "S1", "1" => "S2" },
                },
                id_set!["S2"],
            )
            .unwrap(),
        )
    }

    #[test]
    fn checkpoint_captures_position() {
        let mut machine = definition().cursor();
        machine.process("10").unwrap();

        let checkpoint = machine.checkpoint();

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.initial_state, "S0");
        assert_eq!(checkpoint.current_state, "S2");
        assert!(Uuid::parse_str(&checkpoint.id).is_ok());
    }

    #[test]
    fn checkpoint_ids_are_unique() {
        let machine = definition().cursor();
        assert_ne!(machine.checkpoint().id, machine.checkpoint().id);
    }

    #[test]
    fn resume_through_json() {
        let definition = definition();
        let mut machine = definition.cursor();
        machine.process("10").unwrap();

        let json = machine.checkpoint().to_json().unwrap();
        let restored = Checkpoint::from_json(&json).unwrap();
        let mut resumed = Machine::resume(Arc::clone(&definition), &restored).unwrap();

        assert_eq!(resumed.current_state(), "S2");
        assert!(resumed.is_accepting());
        assert_eq!(resumed.process("0").unwrap(), machine.process("0").unwrap());
    }

    #[test]
    fn resume_through_bytes() {
        let definition = definition();
        let mut machine = definition.cursor();
        machine.process("1").unwrap();

        let checkpoint = machine.checkpoint();
        let bytes = checkpoint.to_bytes().unwrap();
        let restored = Checkpoint::from_bytes(&bytes).unwrap();

        assert_eq!(restored, checkpoint);
        let resumed = Machine::resume(definition, &restored).unwrap();
        assert_eq!(resumed.current_state(), "S1");
    }

    #[test]
    fn resume_rejects_unknown_state() {
        let mut checkpoint = definition().cursor().checkpoint();
        checkpoint.current_state = "S9".into();

        let result = Machine::resume(definition(), &checkpoint);

        assert_eq!(
            result.unwrap_err(),
            CheckpointError::UnknownState { state: "S9".into() }
        );
    }

    #[test]
    fn resume_rejects_other_machines() {
        let mut checkpoint = definition().cursor().checkpoint();
        checkpoint.initial_state = "S1".into();

        let result = Machine::resume(definition(), &checkpoint);

        assert!(matches!(
            result,
            Err(CheckpointError::InitialStateMismatch { .. })
        ));
    }

    #[test]
    fn unsupported_version_rejected() {
        let mut checkpoint = definition().cursor().checkpoint();
        checkpoint.version = CHECKPOINT_VERSION + 1;

        let json = serde_json::to_string(&checkpoint).unwrap();
        assert_eq!(
            Checkpoint::from_json(&json).unwrap_err(),
            CheckpointError::UnsupportedVersion {
                found: CHECKPOINT_VERSION + 1,
                supported: CHECKPOINT_VERSION,
            }
        );
        assert_eq!(
            Machine::resume(definition(), &checkpoint).unwrap_err(),
            CheckpointError::UnsupportedVersion {
                found: CHECKPOINT_VERSION + 1,
                supported: CHECKPOINT_VERSION,
            }
        );

        let bytes = bincode::serialize(&checkpoint).unwrap();
        assert!(matches!(
            Checkpoint::from_bytes(&bytes),
            Err(CheckpointError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn malformed_input_is_a_deserialization_error() {
        assert!(matches!(
            Checkpoint::from_json("{not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::from_bytes(&[1, 2, 3]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }
}
