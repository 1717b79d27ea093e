//! Reporting adapter between a step engine and a test runner.
//!
//! The adapter receives every lifecycle call of the engine, forwards each one
//! verbatim to the formatter or reporter, and turns `step` and `result` calls
//! into runner notifications. It runs one execution unit at a time:
//!
//! ```text
//! Idle --start_execution_unit--> InExecutionUnit --finish_execution_unit--> Idle
//! ```

use std::sync::Arc;

use gherkin::{Background, Examples, Feature, Scenario, Step};
use scenario_notify_policy::{Outcome, StepResult, Verdict, classify};

use crate::collaborator::{Formatter, Reporter, StepMatch};
use crate::config::AdapterConfig;
use crate::context::ExecutionUnitContext;
use crate::error::UsageError;
use crate::notifier::RunNotifier;
use crate::summary::ExecutionUnitSummary;
use crate::unit::DescribeExecutionUnit;

#[derive(Debug, Default)]
enum AdapterState {
    #[default]
    Idle,
    InExecutionUnit(ExecutionUnitContext),
}

impl AdapterState {
    fn active_mut(
        &mut self,
        operation: &'static str,
    ) -> Result<&mut ExecutionUnitContext, UsageError> {
        match self {
            Self::InExecutionUnit(context) => Ok(context),
            Self::Idle => {
                log::error!("`{operation}` called while no execution unit is running");
                Err(UsageError::NotInExecutionUnit { operation })
            }
        }
    }
}

/// Translates engine lifecycle calls into runner notifications.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use scenario_notify::test_support::{
///     NotificationKind, RecordingFormatter, RecordingNotifier, RecordingReporter, parse_feature,
/// };
/// use scenario_notify::{AdapterConfig, Description, ReportingAdapter, StepResult};
///
/// let feature = parse_feature("Feature: Bank\n  Scenario: Deposit\n    Given an account\n");
/// let step = &feature.scenarios[0].steps[0];
/// let notifier = Arc::new(RecordingNotifier::default());
/// let mut adapter = ReportingAdapter::new(
///     RecordingFormatter::default(),
///     RecordingReporter::default(),
///     AdapterConfig::default(),
/// );
///
/// let unit = Description::new("bank.feature").child("Deposit");
/// adapter.start_execution_unit(unit.clone(), notifier.clone())?;
/// adapter.step(step)?;
/// adapter.result(&StepResult::passed())?;
/// let summary = adapter.finish_execution_unit()?;
///
/// assert!(!summary.failed());
/// assert_eq!(
///     notifier.kinds_for(&unit.child("Given an account (step #1)")),
///     [NotificationKind::Started, NotificationKind::Finished]
/// );
/// # Ok::<(), scenario_notify::UsageError>(())
/// ```
#[derive(Debug)]
pub struct ReportingAdapter<F, R> {
    formatter: F,
    reporter: R,
    config: AdapterConfig,
    state: AdapterState,
}

impl<F: Formatter, R: Reporter> ReportingAdapter<F, R> {
    /// Creates an idle adapter forwarding to `formatter` and `reporter`.
    #[must_use]
    pub fn new(formatter: F, reporter: R, config: AdapterConfig) -> Self {
        Self {
            formatter,
            reporter,
            config,
            state: AdapterState::Idle,
        }
    }

    /// Returns the configuration fixed at construction.
    #[must_use]
    pub const fn config(&self) -> AdapterConfig {
        self.config
    }

    /// Returns `true` while an execution unit is running.
    #[must_use]
    pub const fn in_execution_unit(&self) -> bool {
        matches!(self.state, AdapterState::InExecutionUnit(_))
    }

    /// Returns the context of the running execution unit, if any.
    #[must_use]
    pub const fn execution_unit(&self) -> Option<&ExecutionUnitContext> {
        match &self.state {
            AdapterState::InExecutionUnit(context) => Some(context),
            AdapterState::Idle => None,
        }
    }

    /// Returns the formatter collaborator.
    #[must_use]
    pub const fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Returns the reporter collaborator.
    #[must_use]
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Consumes the adapter and returns its collaborators.
    #[must_use]
    pub fn into_parts(self) -> (F, R) {
        (self.formatter, self.reporter)
    }

    /// Starts reporting a new execution unit against `notifier`.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::ExecutionUnitAlreadyActive`] when the previous
    /// execution unit has not finished.
    pub fn start_execution_unit(
        &mut self,
        unit: impl DescribeExecutionUnit + 'static,
        notifier: Arc<dyn RunNotifier>,
    ) -> Result<(), UsageError> {
        if let AdapterState::InExecutionUnit(active) = &self.state {
            log::error!(
                "execution unit started while `{}` is still running",
                active.description()
            );
            return Err(UsageError::ExecutionUnitAlreadyActive {
                active: active.description().clone(),
            });
        }
        let context = ExecutionUnitContext::new(unit, notifier);
        log::debug!("execution unit started: {}", context.description());
        self.state = AdapterState::InExecutionUnit(context);
        Ok(())
    }

    /// Finishes the running execution unit and summarises it.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::NotInExecutionUnit`] when no execution unit is
    /// running.
    pub fn finish_execution_unit(&mut self) -> Result<ExecutionUnitSummary, UsageError> {
        match std::mem::take(&mut self.state) {
            AdapterState::InExecutionUnit(context) => {
                let summary = context.into_summary();
                log::debug!(
                    "execution unit finished: {} ({} steps, failed: {})",
                    summary.description(),
                    summary.steps(),
                    summary.failed()
                );
                Ok(summary)
            }
            AdapterState::Idle => {
                log::error!("`finish_execution_unit` called while no execution unit is running");
                Err(UsageError::NotInExecutionUnit {
                    operation: "finish_execution_unit",
                })
            }
        }
    }

    /// Forwards `step` to the formatter and binds it as the current step.
    ///
    /// No notification is fired until the step's result arrives.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::NotInExecutionUnit`] when no execution unit is
    /// running.
    pub fn step(&mut self, step: &Step) -> Result<(), UsageError> {
        let context = self.state.active_mut("step")?;
        context.bind_step(step);
        self.formatter.step(step);
        Ok(())
    }

    /// Reports the result of the current step and forwards it to the reporter.
    ///
    /// Passed and failed results start the step scope before finishing or
    /// failing it. Pending and undefined results ignore the step in lenient
    /// mode; in strict mode they fail both the step scope and the
    /// execution-unit scope. The result reaches the reporter unchanged
    /// whatever its classification.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::NotInExecutionUnit`] when no execution unit is
    /// running.
    pub fn result(&mut self, result: &StepResult) -> Result<(), UsageError> {
        let context = self.state.active_mut("result")?;
        let outcome = classify(result, self.config.strict);
        log::debug!(
            "{} result in {} classified as {}",
            result.status().label(),
            context.description(),
            outcome.label()
        );
        notify(context, &outcome);
        context.record(&outcome);
        self.reporter.result(result);
        Ok(())
    }

    /// Forwards the feature file location to the formatter.
    pub fn uri(&mut self, uri: &str) {
        self.formatter.uri(uri);
    }

    /// Forwards the feature header to the formatter.
    pub fn feature(&mut self, feature: &Feature) {
        self.formatter.feature(feature);
    }

    /// Forwards a scenario outline to the formatter.
    pub fn scenario_outline(&mut self, outline: &Scenario) {
        self.formatter.scenario_outline(outline);
    }

    /// Forwards an examples table to the formatter.
    pub fn examples(&mut self, examples: &Examples) {
        self.formatter.examples(examples);
    }

    /// Forwards the start of a scenario life cycle to the formatter.
    pub fn start_of_scenario_life_cycle(&mut self, scenario: &Scenario) {
        self.formatter.start_of_scenario_life_cycle(scenario);
    }

    /// Forwards the background to the formatter.
    pub fn background(&mut self, background: &Background) {
        self.formatter.background(background);
    }

    /// Forwards the scenario header to the formatter.
    pub fn scenario(&mut self, scenario: &Scenario) {
        self.formatter.scenario(scenario);
    }

    /// Forwards the end of a scenario life cycle to the formatter.
    pub fn end_of_scenario_life_cycle(&mut self, scenario: &Scenario) {
        self.formatter.end_of_scenario_life_cycle(scenario);
    }

    /// Forwards the end of the feature file to the formatter.
    pub fn eof(&mut self) {
        self.formatter.eof();
    }

    /// Forwards the end of the run to the formatter.
    pub fn done(&mut self) {
        self.formatter.done();
    }

    /// Closes the formatter.
    pub fn close(&mut self) {
        self.formatter.close();
    }

    /// Forwards a before hook to the reporter.
    pub fn before(&mut self, hook: &StepMatch, result: &StepResult) {
        self.reporter.before(hook, result);
    }

    /// Forwards a step definition match to the reporter.
    pub fn step_match(&mut self, step_match: &StepMatch) {
        self.reporter.step_match(step_match);
    }

    /// Forwards embedded data to the reporter.
    pub fn embedding(&mut self, mime_type: &str, data: &[u8]) {
        self.reporter.embedding(mime_type, data);
    }

    /// Forwards written text to the reporter.
    pub fn write(&mut self, text: &str) {
        self.reporter.write(text);
    }

    /// Forwards an after hook to the reporter.
    pub fn after(&mut self, hook: &StepMatch, result: &StepResult) {
        self.reporter.after(hook, result);
    }
}

/// Fires the notifications for one classified result.
///
/// Before any step is bound there is no step scope, and only failures reach
/// the execution-unit scope, once each. Passed and ignored results fire
/// nothing there.
fn notify(context: &ExecutionUnitContext, outcome: &Outcome) {
    let execution_unit_scope = context.execution_unit_scope();
    let Some(step_scope) = context.step_scope() else {
        match outcome {
            Outcome::Normal(Verdict::Failed(cause)) | Outcome::StrictFailure(cause) => {
                execution_unit_scope.fail(cause.clone());
            }
            Outcome::Normal(Verdict::Passed) | Outcome::Ignored => {}
        }
        return;
    };
    match outcome {
        Outcome::Normal(Verdict::Passed) => {
            step_scope.start();
            step_scope.finish();
        }
        Outcome::Normal(Verdict::Failed(cause)) => {
            step_scope.start();
            step_scope.fail(cause.clone());
        }
        Outcome::Ignored => step_scope.ignore(),
        Outcome::StrictFailure(cause) => {
            step_scope.fail(cause.clone());
            execution_unit_scope.fail(cause.clone());
        }
    }
}

#[cfg(test)]
mod tests;
