//! Aggregate outcome of one finished execution unit.

use scenario_notify_policy::{Outcome, Verdict};

use crate::description::Description;

/// Number of results reported per outcome category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeCounts {
    /// Results reported as passed.
    pub passed: usize,
    /// Results reported as failed.
    pub failed: usize,
    /// Pending or undefined results reported as ignored.
    pub ignored: usize,
    /// Pending or undefined results reported as failures in strict mode.
    pub strict_failures: usize,
}

impl OutcomeCounts {
    /// Counts one more result in the category of `outcome`.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Normal(Verdict::Passed) => self.passed += 1,
            Outcome::Normal(Verdict::Failed(_)) => self.failed += 1,
            Outcome::Ignored => self.ignored += 1,
            Outcome::StrictFailure(_) => self.strict_failures += 1,
        }
    }

    /// Returns the number of results counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed + self.ignored + self.strict_failures
    }
}

/// Summary returned when an execution unit finishes.
///
/// # Examples
///
/// ```
/// use scenario_notify::{Description, ExecutionUnitSummary, OutcomeCounts};
///
/// let summary = ExecutionUnitSummary::new(
///     Description::new("feature").child("scenario"),
///     2,
///     OutcomeCounts { passed: 1, ignored: 1, ..OutcomeCounts::default() },
/// );
/// assert!(!summary.failed());
/// assert_eq!(summary.counts().total(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionUnitSummary {
    description: Description,
    steps: usize,
    counts: OutcomeCounts,
}

impl ExecutionUnitSummary {
    /// Creates a summary from its parts.
    #[must_use]
    pub const fn new(description: Description, steps: usize, counts: OutcomeCounts) -> Self {
        Self {
            description,
            steps,
            counts,
        }
    }

    /// Returns the identity of the execution unit.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Returns how many steps were bound during the unit.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Returns the per-category result counts.
    #[must_use]
    pub const fn counts(&self) -> &OutcomeCounts {
        &self.counts
    }

    /// Returns `true` when any result failed the execution unit.
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.counts.failed > 0 || self.counts.strict_failures > 0
    }
}
