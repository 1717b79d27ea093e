//! Recording doubles for behaviour tests.
//!
//! This module is gated behind the `test-support` feature. It provides a
//! runner handle and collaborators that remember every call so tests can
//! assert on exact notification and forwarding sequences.

use std::sync::{Mutex, MutexGuard};

use gherkin::{Background, Examples, Feature, GherkinEnv, Scenario, Step};
use scenario_notify_policy::{FailureCause, StepResult};

use crate::collaborator::{Formatter, Reporter, StepMatch};
use crate::description::Description;
use crate::notifier::{Failure, RunNotifier};

/// Parse Gherkin source, panicking when it is malformed.
///
/// A trailing newline is appended when missing.
///
/// # Panics
///
/// Panics if the source is not a valid feature.
#[must_use]
pub fn parse_feature(source: &str) -> Feature {
    let mut text = source.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Feature::parse(text.as_str(), GherkinEnv::default())
        .unwrap_or_else(|err| panic!("test feature should parse: {err}"))
}

/// Kind of a recorded runner notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// `fire_test_started`.
    Started,
    /// `fire_test_finished`.
    Finished,
    /// `fire_test_failure`.
    Failed,
    /// `fire_test_ignored`.
    Ignored,
}

/// One notification received by a [`RecordingNotifier`].
#[derive(Clone, Debug)]
pub enum Notification {
    /// A test started.
    Started(Description),
    /// A test finished.
    Finished(Description),
    /// A test failed.
    Failed(Failure),
    /// A test was ignored.
    Ignored(Description),
}

impl Notification {
    /// Returns the kind of the notification.
    #[must_use]
    pub const fn kind(&self) -> NotificationKind {
        match self {
            Self::Started(_) => NotificationKind::Started,
            Self::Finished(_) => NotificationKind::Finished,
            Self::Failed(_) => NotificationKind::Failed,
            Self::Ignored(_) => NotificationKind::Ignored,
        }
    }

    /// Returns the description the notification was addressed to.
    #[must_use]
    pub const fn description(&self) -> &Description {
        match self {
            Self::Started(description)
            | Self::Finished(description)
            | Self::Ignored(description) => description,
            Self::Failed(failure) => failure.description(),
        }
    }
}

/// Runner handle that records every notification in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Returns every notification received so far.
    #[must_use]
    pub fn events(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Returns the kinds of the notifications addressed to `description`.
    #[must_use]
    pub fn kinds_for(&self, description: &Description) -> Vec<NotificationKind> {
        self.lock()
            .iter()
            .filter(|event| event.description() == description)
            .map(Notification::kind)
            .collect()
    }

    /// Returns the causes of failures addressed to `description`.
    #[must_use]
    pub fn failures_for(&self, description: &Description) -> Vec<FailureCause> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                Notification::Failed(failure) if failure.description() == description => {
                    Some(failure.cause().clone())
                }
                _ => None,
            })
            .collect()
    }

    /// Returns `true` when no notification has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl RunNotifier for RecordingNotifier {
    fn fire_test_started(&self, description: &Description) {
        self.lock().push(Notification::Started(description.clone()));
    }

    fn fire_test_finished(&self, description: &Description) {
        self.lock().push(Notification::Finished(description.clone()));
    }

    fn fire_test_failure(&self, failure: Failure) {
        self.lock().push(Notification::Failed(failure));
    }

    fn fire_test_ignored(&self, description: &Description) {
        self.lock().push(Notification::Ignored(description.clone()));
    }
}

/// Call received by a [`RecordingFormatter`].
#[derive(Clone, Debug, PartialEq)]
pub enum FormatterCall {
    /// `uri`.
    Uri(String),
    /// `feature`.
    Feature(Feature),
    /// `scenario_outline`.
    ScenarioOutline(Scenario),
    /// `examples`.
    Examples(Examples),
    /// `start_of_scenario_life_cycle`.
    StartOfScenarioLifeCycle(Scenario),
    /// `background`.
    Background(Background),
    /// `scenario`.
    Scenario(Scenario),
    /// `step`.
    Step(Step),
    /// `end_of_scenario_life_cycle`.
    EndOfScenarioLifeCycle(Scenario),
    /// `eof`.
    Eof,
    /// `done`.
    Done,
    /// `close`.
    Close,
}

/// Formatter that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingFormatter {
    calls: Vec<FormatterCall>,
}

impl RecordingFormatter {
    /// Returns the recorded calls.
    #[must_use]
    pub fn calls(&self) -> &[FormatterCall] {
        &self.calls
    }
}

impl Formatter for RecordingFormatter {
    fn uri(&mut self, uri: &str) {
        self.calls.push(FormatterCall::Uri(uri.to_string()));
    }
    fn feature(&mut self, feature: &Feature) {
        self.calls.push(FormatterCall::Feature(feature.clone()));
    }
    fn scenario_outline(&mut self, outline: &Scenario) {
        self.calls.push(FormatterCall::ScenarioOutline(outline.clone()));
    }
    fn examples(&mut self, examples: &Examples) {
        self.calls.push(FormatterCall::Examples(examples.clone()));
    }
    fn start_of_scenario_life_cycle(&mut self, scenario: &Scenario) {
        self.calls
            .push(FormatterCall::StartOfScenarioLifeCycle(scenario.clone()));
    }
    fn background(&mut self, background: &Background) {
        self.calls.push(FormatterCall::Background(background.clone()));
    }
    fn scenario(&mut self, scenario: &Scenario) {
        self.calls.push(FormatterCall::Scenario(scenario.clone()));
    }
    fn step(&mut self, step: &Step) {
        self.calls.push(FormatterCall::Step(step.clone()));
    }
    fn end_of_scenario_life_cycle(&mut self, scenario: &Scenario) {
        self.calls
            .push(FormatterCall::EndOfScenarioLifeCycle(scenario.clone()));
    }
    fn eof(&mut self) {
        self.calls.push(FormatterCall::Eof);
    }
    fn done(&mut self) {
        self.calls.push(FormatterCall::Done);
    }
    fn close(&mut self) {
        self.calls.push(FormatterCall::Close);
    }
}

/// Call received by a [`RecordingReporter`].
#[derive(Clone, Debug)]
pub enum ReporterCall {
    /// `before`.
    Before(StepMatch, StepResult),
    /// `step_match`.
    Match(StepMatch),
    /// `embedding`.
    Embedding {
        /// MIME type of the data.
        mime_type: String,
        /// Embedded bytes.
        data: Vec<u8>,
    },
    /// `write`.
    Write(String),
    /// `result`.
    Result(StepResult),
    /// `after`.
    After(StepMatch, StepResult),
}

/// Reporter that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    calls: Vec<ReporterCall>,
}

impl RecordingReporter {
    /// Returns the recorded calls.
    #[must_use]
    pub fn calls(&self) -> &[ReporterCall] {
        &self.calls
    }

    /// Returns the results forwarded through `result`.
    #[must_use]
    pub fn results(&self) -> Vec<&StepResult> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                ReporterCall::Result(result) => Some(result),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn before(&mut self, hook: &StepMatch, result: &StepResult) {
        self.calls
            .push(ReporterCall::Before(hook.clone(), result.clone()));
    }
    fn step_match(&mut self, step_match: &StepMatch) {
        self.calls.push(ReporterCall::Match(step_match.clone()));
    }
    fn embedding(&mut self, mime_type: &str, data: &[u8]) {
        self.calls.push(ReporterCall::Embedding {
            mime_type: mime_type.to_string(),
            data: data.to_vec(),
        });
    }
    fn write(&mut self, text: &str) {
        self.calls.push(ReporterCall::Write(text.to_string()));
    }
    fn result(&mut self, result: &StepResult) {
        self.calls.push(ReporterCall::Result(result.clone()));
    }
    fn after(&mut self, hook: &StepMatch, result: &StepResult) {
        self.calls
            .push(ReporterCall::After(hook.clone(), result.clone()));
    }
}
