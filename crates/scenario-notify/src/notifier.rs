//! Runner notification primitive and failure payload.

use scenario_notify_policy::FailureCause;

use crate::description::Description;

/// Failure delivered to the runner for one description.
#[derive(Clone, Debug)]
pub struct Failure {
    description: Description,
    cause: FailureCause,
}

impl Failure {
    /// Creates a failure for `description` caused by `cause`.
    #[must_use]
    pub const fn new(description: Description, cause: FailureCause) -> Self {
        Self { description, cause }
    }

    /// Returns the failing description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the cause reported for the failure.
    #[must_use]
    pub const fn cause(&self) -> &FailureCause {
        &self.cause
    }

    /// Consumes the failure and returns its parts.
    #[must_use]
    pub fn into_parts(self) -> (Description, FailureCause) {
        (self.description, self.cause)
    }
}

/// Receives start, finish, failure and ignore events from the adapter.
///
/// The handle is shared by every scope of a running execution unit, so
/// implementations take `&self` and keep their own state behind interior
/// mutability.
pub trait RunNotifier {
    /// A test identified by `description` started.
    fn fire_test_started(&self, description: &Description);

    /// A test identified by `description` finished.
    fn fire_test_finished(&self, description: &Description);

    /// A test failed.
    fn fire_test_failure(&self, failure: Failure);

    /// A test identified by `description` was ignored and will not run.
    fn fire_test_ignored(&self, description: &Description);
}
