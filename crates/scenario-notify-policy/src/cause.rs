//! Failure causes attached to execution results.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// Message carried by a pending marker that was created without one.
pub const DEFAULT_PENDING_MESSAGE: &str = "TODO: implement me";

/// Shared, clonable error produced by a step or hook.
pub type SharedError = Arc<dyn StdError + Send + Sync + 'static>;

/// Marker raised by a step that was deliberately left unimplemented.
///
/// # Examples
///
/// ```
/// use scenario_notify_policy::{DEFAULT_PENDING_MESSAGE, PendingStep};
///
/// assert_eq!(PendingStep::default().message(), DEFAULT_PENDING_MESSAGE);
/// assert_eq!(PendingStep::new("wire up the bank").to_string(), "wire up the bank");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PendingStep {
    message: String,
}

impl PendingStep {
    /// Creates a pending marker with an explanatory message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the marker message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for PendingStep {
    fn default() -> Self {
        Self::new(DEFAULT_PENDING_MESSAGE)
    }
}

/// Cause attached to a non-passing execution result.
///
/// The pending marker is a tagged variant so classification never needs to
/// inspect the concrete error type.
///
/// # Examples
///
/// ```
/// use scenario_notify_policy::{FailureCause, PendingStep};
///
/// let pending = FailureCause::from(PendingStep::default());
/// assert!(pending.is_pending());
///
/// let io = FailureCause::error(std::io::Error::other("disk full"));
/// assert!(!io.is_pending());
/// assert_eq!(io.to_string(), "disk full");
/// ```
#[derive(Clone, Debug, Error)]
pub enum FailureCause {
    /// The step is pending.
    #[error(transparent)]
    Pending(#[from] PendingStep),
    /// Any other error raised while running the step.
    #[error(transparent)]
    Error(#[from] SharedError),
}

impl FailureCause {
    /// Wraps an arbitrary error as a failure cause.
    #[must_use]
    pub fn error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error(Arc::new(error))
    }

    /// Returns `true` for the pending marker.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Returns the pending marker, if this cause is one.
    #[must_use]
    pub const fn as_pending(&self) -> Option<&PendingStep> {
        match self {
            Self::Pending(marker) => Some(marker),
            Self::Error(_) => None,
        }
    }

    /// Returns `true` when both causes refer to the same underlying value.
    ///
    /// Wrapped errors compare by allocation, so a clone of a cause is the same
    /// cause while two errors with equal messages are not.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_notify_policy::FailureCause;
    ///
    /// let cause = FailureCause::error(std::io::Error::other("boom"));
    /// let other = FailureCause::error(std::io::Error::other("boom"));
    /// assert!(cause.same_as(&cause.clone()));
    /// assert!(!cause.same_as(&other));
    /// ```
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Pending(left), Self::Pending(right)) => left == right,
            (Self::Error(left), Self::Error(right)) => {
                std::ptr::addr_eq(Arc::as_ptr(left), Arc::as_ptr(right))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_marker_keeps_custom_message() {
        let cause = FailureCause::from(PendingStep::new("later"));
        assert_eq!(cause.as_pending().map(PendingStep::message), Some("later"));
        assert_eq!(cause.to_string(), "later");
    }

    #[test]
    fn wrapped_error_exposes_no_pending_marker() {
        let cause = FailureCause::error(std::io::Error::other("timeout"));
        assert!(cause.as_pending().is_none());
    }

    #[test]
    fn pending_and_error_are_never_the_same() {
        let pending = FailureCause::from(PendingStep::default());
        let error = FailureCause::error(std::io::Error::other("TODO: implement me"));
        assert!(!pending.same_as(&error));
        assert!(!error.same_as(&pending));
    }
}
