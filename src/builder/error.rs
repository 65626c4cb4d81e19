//! Build errors for the machine builder.

use crate::core::DefinitionError;
use thiserror::Error;

/// Errors that can occur when building a machine definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error(transparent)]
    Definition(#[from] DefinitionError),
}
