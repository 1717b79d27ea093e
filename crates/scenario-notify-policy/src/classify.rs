//! Strict-mode classification of execution results.
//!
//! This is the only place where the strictness flag changes behaviour. The
//! adapter turns each [`Outcome`] into runner notifications.

use crate::cause::{FailureCause, PendingStep};
use crate::result::{Status, StepResult};

/// Verdict for a result that is reported as a regular step.
#[derive(Clone, Debug)]
pub enum Verdict {
    /// The step passed.
    Passed,
    /// The step failed with the attached cause.
    Failed(FailureCause),
}

/// Category chosen for one execution result.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// Report the step as started, then finished or failed.
    Normal(Verdict),
    /// Report the step as ignored (pending or undefined, non-strict).
    Ignored,
    /// Fail both the step and its execution unit (pending or undefined, strict).
    StrictFailure(FailureCause),
}

impl Outcome {
    /// Retrieve a short label for logs and summaries.
    ///
    /// # Examples
    /// ```
    /// use scenario_notify_policy::{Outcome, Verdict};
    ///
    /// assert_eq!(Outcome::Normal(Verdict::Passed).label(), "passed");
    /// assert_eq!(Outcome::Ignored.label(), "ignored");
    /// ```
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal(Verdict::Passed) => "passed",
            Self::Normal(Verdict::Failed(_)) => "failed",
            Self::Ignored => "ignored",
            Self::StrictFailure(_) => "strict-failure",
        }
    }

    /// Returns `true` when the outcome marks the execution unit as failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::Normal(Verdict::Failed(_)) | Self::StrictFailure(_)
        )
    }
}

fn is_pending_or_undefined(result: &StepResult) -> bool {
    result.status() == Status::Undefined || result.error().is_some_and(FailureCause::is_pending)
}

/// Classify an execution result under the given strictness.
///
/// Pending and undefined results are ignored in non-strict mode. In strict
/// mode they become failures carrying the pending marker, synthesising one
/// when the result has none. Any other error is a regular failure and
/// everything else passes.
///
/// # Examples
///
/// ```
/// use scenario_notify_policy::{Outcome, StepResult, classify};
///
/// assert!(matches!(classify(&StepResult::undefined(), false), Outcome::Ignored));
/// let Outcome::StrictFailure(cause) = classify(&StepResult::undefined(), true) else {
///     panic!("strict mode fails undefined steps");
/// };
/// assert!(cause.is_pending());
/// ```
#[must_use]
pub fn classify(result: &StepResult, strict: bool) -> Outcome {
    if is_pending_or_undefined(result) {
        if !strict {
            return Outcome::Ignored;
        }
        let marker = result
            .error()
            .and_then(FailureCause::as_pending)
            .cloned()
            .unwrap_or_default();
        return Outcome::StrictFailure(FailureCause::Pending(marker));
    }
    result
        .error()
        .cloned()
        .map_or(Outcome::Normal(Verdict::Passed), |cause| {
            Outcome::Normal(Verdict::Failed(cause))
        })
}
