//! Error types raised by the adapter and its configuration.

use thiserror::Error;

use crate::description::Description;

/// Lifecycle call issued out of order by the execution engine.
///
/// These are caller bugs. The adapter rejects the call before touching any
/// collaborator or scope.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A call that needs a running execution unit arrived while idle.
    #[error("`{operation}` called while no execution unit is running")]
    NotInExecutionUnit {
        /// Name of the rejected call.
        operation: &'static str,
    },
    /// An execution unit was started before the previous one finished.
    #[error("cannot start an execution unit while `{active}` is still running")]
    ExecutionUnitAlreadyActive {
        /// Identity of the execution unit that is still running.
        active: Description,
    },
}

/// Invalid configuration supplied through the environment.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A boolean setting held an unrecognised value.
    #[error(
        "invalid value '{value}' for {variable}, expected one of: true, false, yes, no, on, off, 1, 0"
    )]
    InvalidBool {
        /// Environment variable that was read.
        variable: &'static str,
        /// Raw value found in the environment.
        value: String,
    },
}
