//! Description sources for execution units.
//!
//! An execution unit is one scenario, or one example row of a scenario
//! outline, reported as a single test with its steps as children.

use gherkin::Step;

use crate::description::Description;

/// Supplies the test identities of an execution unit and of its steps.
pub trait DescribeExecutionUnit {
    /// Returns the identity of the execution unit itself.
    fn description(&self) -> Description;

    /// Returns the identity of the step bound at zero-based `index`.
    ///
    /// The default names the step `"<keyword> <text> (step #n)"` beneath the
    /// execution unit, with `n` counted from one, so repeated step texts
    /// keep distinct identities.
    fn describe_step(&self, index: usize, step: &Step) -> Description {
        self.description().child(format!("{} (step #{})", step_display_name(step), index + 1))
    }
}

impl DescribeExecutionUnit for Description {
    fn description(&self) -> Description {
        self.clone()
    }
}

/// Renders a step as `"<keyword> <text>"`.
///
/// # Examples
///
/// ```
/// use scenario_notify::step_display_name;
/// use scenario_notify::test_support::parse_feature;
///
/// let feature = parse_feature(
///     "Feature: Bank\n  Scenario: Deposit\n    Given an empty account\n",
/// );
/// let step = &feature.scenarios[0].steps[0];
/// assert_eq!(step_display_name(step), "Given an empty account");
/// ```
#[must_use]
pub fn step_display_name(step: &Step) -> String {
    format!("{} {}", step.keyword.trim(), step.value)
}

/// Metadata describing one scenario run as an execution unit.
///
/// # Examples
///
/// ```
/// use scenario_notify::{DescribeExecutionUnit, UnitMetadata};
///
/// let unit = UnitMetadata::new("features/bank.feature", "Withdraw", 7).with_example_row(2);
/// assert_eq!(unit.scenario_line(), 7);
/// assert_eq!(
///     unit.description().segments(),
///     ["features/bank.feature", "Withdraw (example #2)"]
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitMetadata {
    feature_path: String,
    scenario_name: String,
    scenario_line: usize,
    example_row: Option<usize>,
}

impl UnitMetadata {
    /// Creates metadata for a plain scenario.
    #[must_use]
    pub fn new(
        feature_path: impl Into<String>,
        scenario_name: impl Into<String>,
        scenario_line: usize,
    ) -> Self {
        Self {
            feature_path: feature_path.into(),
            scenario_name: scenario_name.into(),
            scenario_line,
            example_row: None,
        }
    }

    /// Creates metadata from a parsed scenario.
    #[must_use]
    pub fn from_scenario(feature_path: impl Into<String>, scenario: &gherkin::Scenario) -> Self {
        Self::new(feature_path, scenario.name.clone(), scenario.position.line)
    }

    /// Marks the unit as the one-based example row of an outline.
    #[must_use]
    pub fn with_example_row(mut self, row: usize) -> Self {
        self.example_row = Some(row);
        self
    }

    /// Returns the feature path.
    #[must_use]
    pub fn feature_path(&self) -> &str {
        &self.feature_path
    }

    /// Returns the scenario name.
    #[must_use]
    pub fn scenario_name(&self) -> &str {
        &self.scenario_name
    }

    /// Returns the one-based line of the scenario in the feature file.
    #[must_use]
    pub const fn scenario_line(&self) -> usize {
        self.scenario_line
    }

    /// Returns the example row, if the unit comes from an outline.
    #[must_use]
    pub const fn example_row(&self) -> Option<usize> {
        self.example_row
    }
}

impl DescribeExecutionUnit for UnitMetadata {
    fn description(&self) -> Description {
        let name = self.example_row.map_or_else(
            || self.scenario_name.clone(),
            |row| format!("{} (example #{row})", self.scenario_name),
        );
        Description::new(self.feature_path.clone()).child(name)
    }
}
