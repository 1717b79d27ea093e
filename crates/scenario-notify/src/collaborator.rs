//! Downstream observers that receive execution events verbatim.
//!
//! The adapter forwards structural events (features, scenarios, steps) to a
//! [`Formatter`] and execution events (matches, results, hooks, output) to a
//! [`Reporter`]. Neither collaborator is consulted for runner notifications.

use gherkin::{Background, Examples, Feature, Scenario, Step};
use scenario_notify_policy::StepResult;

/// Argument captured when a step definition matched a step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchArgument {
    /// Byte offset of the capture within the step text.
    pub offset: usize,
    /// Captured text.
    pub value: String,
}

/// Step definition or hook matched by the engine.
///
/// # Examples
///
/// ```
/// use scenario_notify::{MatchArgument, StepMatch};
///
/// let step_match = StepMatch::new("steps/bank.rs:14").with_argument(MatchArgument {
///     offset: 16,
///     value: "100".into(),
/// });
/// assert_eq!(step_match.location(), Some("steps/bank.rs:14"));
/// assert_eq!(step_match.arguments().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMatch {
    location: Option<String>,
    arguments: Vec<MatchArgument>,
}

impl StepMatch {
    /// Creates a match for the definition at `location`.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            arguments: Vec::new(),
        }
    }

    /// Creates a match without a known definition, as reported for undefined
    /// steps.
    #[must_use]
    pub fn unmatched() -> Self {
        Self::default()
    }

    /// Appends a captured argument.
    #[must_use]
    pub fn with_argument(mut self, argument: MatchArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Returns the definition location, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns the captured arguments in match order.
    #[must_use]
    pub fn arguments(&self) -> &[MatchArgument] {
        &self.arguments
    }
}

/// Receives the structure of the features being executed.
pub trait Formatter {
    /// A feature file is about to be processed.
    fn uri(&mut self, uri: &str);
    /// The feature header.
    fn feature(&mut self, feature: &Feature);
    /// A scenario outline, before its examples expand.
    fn scenario_outline(&mut self, outline: &Scenario);
    /// An examples table of the current outline.
    fn examples(&mut self, examples: &Examples);
    /// A scenario is about to run, before its background.
    fn start_of_scenario_life_cycle(&mut self, scenario: &Scenario);
    /// The background shared by the feature's scenarios.
    fn background(&mut self, background: &Background);
    /// The scenario header.
    fn scenario(&mut self, scenario: &Scenario);
    /// A step of the current scenario or background.
    fn step(&mut self, step: &Step);
    /// The scenario finished, including its after hooks.
    fn end_of_scenario_life_cycle(&mut self, scenario: &Scenario);
    /// The end of the current feature file.
    fn eof(&mut self);
    /// Every feature has been processed.
    fn done(&mut self);
    /// Release any resources held by the formatter.
    fn close(&mut self);
}

/// Receives execution events for steps and hooks.
pub trait Reporter {
    /// A before hook ran.
    fn before(&mut self, hook: &StepMatch, result: &StepResult);
    /// A step definition was matched to the current step.
    fn step_match(&mut self, step_match: &StepMatch);
    /// Binary data attached by a step.
    fn embedding(&mut self, mime_type: &str, data: &[u8]);
    /// Text written by a step.
    fn write(&mut self, text: &str);
    /// The result of the current step.
    fn result(&mut self, result: &StepResult);
    /// An after hook ran.
    fn after(&mut self, hook: &StepMatch, result: &StepResult);
}

impl<T: Formatter + ?Sized> Formatter for &mut T {
    fn uri(&mut self, uri: &str) {
        (**self).uri(uri);
    }
    fn feature(&mut self, feature: &Feature) {
        (**self).feature(feature);
    }
    fn scenario_outline(&mut self, outline: &Scenario) {
        (**self).scenario_outline(outline);
    }
    fn examples(&mut self, examples: &Examples) {
        (**self).examples(examples);
    }
    fn start_of_scenario_life_cycle(&mut self, scenario: &Scenario) {
        (**self).start_of_scenario_life_cycle(scenario);
    }
    fn background(&mut self, background: &Background) {
        (**self).background(background);
    }
    fn scenario(&mut self, scenario: &Scenario) {
        (**self).scenario(scenario);
    }
    fn step(&mut self, step: &Step) {
        (**self).step(step);
    }
    fn end_of_scenario_life_cycle(&mut self, scenario: &Scenario) {
        (**self).end_of_scenario_life_cycle(scenario);
    }
    fn eof(&mut self) {
        (**self).eof();
    }
    fn done(&mut self) {
        (**self).done();
    }
    fn close(&mut self) {
        (**self).close();
    }
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn before(&mut self, hook: &StepMatch, result: &StepResult) {
        (**self).before(hook, result);
    }
    fn step_match(&mut self, step_match: &StepMatch) {
        (**self).step_match(step_match);
    }
    fn embedding(&mut self, mime_type: &str, data: &[u8]) {
        (**self).embedding(mime_type, data);
    }
    fn write(&mut self, text: &str) {
        (**self).write(text);
    }
    fn result(&mut self, result: &StepResult) {
        (**self).result(result);
    }
    fn after(&mut self, hook: &StepMatch, result: &StepResult) {
        (**self).after(hook, result);
    }
}
