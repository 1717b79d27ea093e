//! Shared result model and classification policy for scenario-notify.
//!
//! This crate holds the execution result types produced by a step engine, the
//! failure cause taxonomy (including the pending marker) and the pure
//! [`classify`] function deciding how a result is reported under strict or
//! non-strict execution.

mod cause;
mod classify;
mod result;

pub use cause::{DEFAULT_PENDING_MESSAGE, FailureCause, PendingStep, SharedError};
pub use classify::{Outcome, Verdict, classify};
pub use result::{Status, StepResult};
