//! Runner notifications for behaviour-driven scenario execution.
//!
//! A [`ReportingAdapter`] sits between a step engine and a test runner. It
//! forwards every lifecycle call of the engine to a [`Formatter`] or
//! [`Reporter`], and reports each step result to the runner through
//! [`NotificationScope`]s bound to the current step and to the running
//! execution unit. Strict mode turns pending and undefined steps into
//! failures of both the step and its execution unit.

mod adapter;
mod collaborator;
mod config;
mod context;
mod description;
mod error;
mod notifier;
mod scope;
mod summary;
mod unit;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use adapter::ReportingAdapter;
pub use collaborator::{Formatter, MatchArgument, Reporter, StepMatch};
pub use config::{AdapterConfig, STRICT_ENV_VAR};
pub use context::ExecutionUnitContext;
pub use description::Description;
pub use error::{ConfigError, UsageError};
pub use notifier::{Failure, RunNotifier};
pub use scenario_notify_policy::{
    DEFAULT_PENDING_MESSAGE, FailureCause, Outcome, PendingStep, SharedError, Status, StepResult,
    Verdict, classify,
};
pub use scope::NotificationScope;
pub use summary::{ExecutionUnitSummary, OutcomeCounts};
pub use unit::{DescribeExecutionUnit, UnitMetadata, step_display_name};
