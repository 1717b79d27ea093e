//! Execution results produced by the step engine.

use std::time::Duration;

use crate::cause::{FailureCause, PendingStep};

/// Status reported by the engine for a step or hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Status {
    /// The step ran without error.
    Passed,
    /// The step raised an error.
    Failed,
    /// No step definition matched the step text.
    Undefined,
    /// The step definition is marked as pending.
    Pending,
    /// The step was not run because an earlier step did not pass.
    Skipped,
    /// More than one step definition matched the step text.
    Ambiguous,
}

impl Status {
    /// Retrieve the lowercase label for the status.
    ///
    /// # Examples
    /// ```
    /// use scenario_notify_policy::Status;
    ///
    /// assert_eq!(Status::Undefined.label(), "undefined");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Undefined => "undefined",
            Self::Pending => "pending",
            Self::Skipped => "skipped",
            Self::Ambiguous => "ambiguous",
        }
    }
}

/// Outcome of evaluating one step or one scenario hook.
///
/// # Examples
///
/// ```
/// use scenario_notify_policy::{FailureCause, Status, StepResult};
///
/// let result = StepResult::failed(FailureCause::error(std::io::Error::other("boom")));
/// assert_eq!(result.status(), Status::Failed);
/// assert!(result.error().is_some());
/// assert!(StepResult::passed().error().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StepResult {
    status: Status,
    error: Option<FailureCause>,
    duration: Option<Duration>,
}

impl StepResult {
    /// Creates a result from its raw parts.
    ///
    /// A [`Status::Pending`] result without a cause gets the default pending
    /// marker, so it is never mistaken for a pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenario_notify_policy::{Status, StepResult};
    ///
    /// let result = StepResult::new(Status::Pending, None);
    /// assert!(result.error().is_some_and(|cause| cause.is_pending()));
    /// ```
    #[must_use]
    pub fn new(status: Status, error: Option<FailureCause>) -> Self {
        let error = match (status, error) {
            (Status::Pending, None) => Some(FailureCause::Pending(PendingStep::default())),
            (_, error) => error,
        };
        Self::from_parts(status, error)
    }

    const fn from_parts(status: Status, error: Option<FailureCause>) -> Self {
        Self {
            status,
            error,
            duration: None,
        }
    }

    /// A passing result.
    #[must_use]
    pub const fn passed() -> Self {
        Self::from_parts(Status::Passed, None)
    }

    /// A failing result carrying `cause`.
    #[must_use]
    pub const fn failed(cause: FailureCause) -> Self {
        Self::from_parts(Status::Failed, Some(cause))
    }

    /// The result reported for a step without a matching definition.
    #[must_use]
    pub const fn undefined() -> Self {
        Self::from_parts(Status::Undefined, None)
    }

    /// A pending result carrying the marker raised by the step.
    #[must_use]
    pub const fn pending(marker: PendingStep) -> Self {
        Self::from_parts(Status::Pending, Some(FailureCause::Pending(marker)))
    }

    /// A skipped result.
    #[must_use]
    pub const fn skipped() -> Self {
        Self::from_parts(Status::Skipped, None)
    }

    /// An ambiguous match carrying the engine's explanation.
    #[must_use]
    pub const fn ambiguous(cause: FailureCause) -> Self {
        Self::from_parts(Status::Ambiguous, Some(cause))
    }

    /// Attaches the time spent running the step.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Returns the reported status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the attached cause, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&FailureCause> {
        self.error.as_ref()
    }

    /// Returns the measured duration, if the engine supplied one.
    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Returns `true` when `other` carries the same status, duration and cause.
    ///
    /// Causes are compared with [`FailureCause::same_as`].
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        let same_error = match (&self.error, &other.error) {
            (Some(left), Some(right)) => left.same_as(right),
            (None, None) => true,
            _ => false,
        };
        self.status == other.status && self.duration == other.duration && same_error
    }
}
