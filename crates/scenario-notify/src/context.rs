//! State held for the execution unit that is currently running.

use std::fmt;
use std::sync::Arc;

use gherkin::Step;
use scenario_notify_policy::Outcome;

use crate::description::Description;
use crate::notifier::RunNotifier;
use crate::scope::NotificationScope;
use crate::summary::{ExecutionUnitSummary, OutcomeCounts};
use crate::unit::DescribeExecutionUnit;

/// Scopes and bookkeeping for one running execution unit.
///
/// The execution-unit scope is fixed for the lifetime of the context. The
/// step scope is replaced every time a step is bound.
pub struct ExecutionUnitContext {
    source: Box<dyn DescribeExecutionUnit>,
    notifier: Arc<dyn RunNotifier>,
    execution_unit_scope: NotificationScope,
    step_scope: Option<NotificationScope>,
    steps_bound: usize,
    counts: OutcomeCounts,
}

impl ExecutionUnitContext {
    /// Binds the execution-unit scope described by `source`.
    #[must_use]
    pub fn new(
        source: impl DescribeExecutionUnit + 'static,
        notifier: Arc<dyn RunNotifier>,
    ) -> Self {
        let execution_unit_scope =
            NotificationScope::new(Arc::clone(&notifier), source.description());
        Self {
            source: Box::new(source),
            notifier,
            execution_unit_scope,
            step_scope: None,
            steps_bound: 0,
            counts: OutcomeCounts::default(),
        }
    }

    /// Returns the identity of the execution unit.
    #[must_use]
    pub const fn description(&self) -> &Description {
        self.execution_unit_scope.description()
    }

    /// Returns the scope reporting against the execution unit.
    #[must_use]
    pub const fn execution_unit_scope(&self) -> &NotificationScope {
        &self.execution_unit_scope
    }

    /// Returns the scope of the most recently bound step.
    #[must_use]
    pub const fn step_scope(&self) -> Option<&NotificationScope> {
        self.step_scope.as_ref()
    }

    /// Returns how many steps have been bound so far.
    #[must_use]
    pub const fn steps_bound(&self) -> usize {
        self.steps_bound
    }

    /// Replaces the step scope with one bound to `step`.
    pub fn bind_step(&mut self, step: &Step) -> &NotificationScope {
        let description = self.source.describe_step(self.steps_bound, step);
        log::debug!("binding step #{}: {description}", self.steps_bound);
        self.steps_bound += 1;
        self.step_scope
            .insert(NotificationScope::new(Arc::clone(&self.notifier), description))
    }

    /// Counts a reported outcome towards the execution unit summary.
    pub fn record(&mut self, outcome: &Outcome) {
        self.counts.record(outcome);
    }

    /// Consumes the context and summarises the execution unit.
    #[must_use]
    pub fn into_summary(self) -> ExecutionUnitSummary {
        let Self {
            execution_unit_scope,
            steps_bound,
            counts,
            ..
        } = self;
        ExecutionUnitSummary::new(
            execution_unit_scope.description().clone(),
            steps_bound,
            counts,
        )
    }
}

impl fmt::Debug for ExecutionUnitContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionUnitContext")
            .field("execution_unit_scope", &self.execution_unit_scope)
            .field("step_scope", &self.step_scope)
            .field("steps_bound", &self.steps_bound)
            .field("counts", &self.counts)
            .finish_non_exhaustive()
    }
}
