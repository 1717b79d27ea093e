//! Shared fixtures for scenario-notify behaviour tests.

use std::sync::Arc;

use gherkin::{Feature, Step};
use rstest::fixture;
use scenario_notify::test_support::{
    RecordingFormatter, RecordingNotifier, RecordingReporter, parse_feature,
};
use scenario_notify::{AdapterConfig, Description, ReportingAdapter};

pub type TestAdapter = ReportingAdapter<RecordingFormatter, RecordingReporter>;

pub const FEATURE_PATH: &str = "features/orders.feature";

pub const FEATURE: &str = "\
Feature: Orders
  Background:
    Given a logged in customer

  Scenario: Place an order
    Given a basket with 3 items
    When I place the order
    Then I receive a confirmation

  Scenario Outline: Apply a voucher
    Given a voucher worth <amount>
    When I apply it
    Then the total drops by <amount>

    Examples:
      | amount |
      | 5      |
      | 10     |
";

#[fixture]
pub fn feature() -> Feature {
    parse_feature(FEATURE)
}

#[fixture]
pub fn notifier() -> Arc<RecordingNotifier> {
    Arc::new(RecordingNotifier::default())
}

pub fn adapter(strict: bool) -> TestAdapter {
    ReportingAdapter::new(
        RecordingFormatter::default(),
        RecordingReporter::default(),
        AdapterConfig { strict },
    )
}

pub fn unit_description() -> Description {
    Description::new(FEATURE_PATH).child("Place an order")
}

/// Returns the first step of the "Place an order" scenario.
pub fn first_step(feature: &Feature) -> Step {
    let Some(step) = feature
        .scenarios
        .first()
        .and_then(|scenario| scenario.steps.first())
    else {
        panic!("fixture feature should contain a step");
    };
    step.clone()
}

/// Starts an execution unit and binds its first step.
///
/// Returns the description of the bound step.
pub fn running_step(
    adapter: &mut TestAdapter,
    notifier: &Arc<RecordingNotifier>,
    feature: &Feature,
) -> Description {
    let notifier: Arc<RecordingNotifier> = Arc::clone(notifier);
    if let Err(err) = adapter.start_execution_unit(unit_description(), notifier) {
        panic!("execution unit should start: {err}");
    }
    let step = first_step(feature);
    if let Err(err) = adapter.step(&step) {
        panic!("step should bind: {err}");
    }
    unit_description().child("Given a basket with 3 items (step #1)")
}
