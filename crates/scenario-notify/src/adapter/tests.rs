//! Unit tests for notification routing inside the reporting adapter.

use std::sync::Arc;

use gherkin::Feature;
use rstest::rstest;
use scenario_notify_policy::{FailureCause, PendingStep, StepResult};

use super::ReportingAdapter;
use crate::config::AdapterConfig;
use crate::description::Description;
use crate::error::UsageError;
use crate::test_support::{
    NotificationKind, RecordingFormatter, RecordingNotifier, RecordingReporter, parse_feature,
};

type TestAdapter = ReportingAdapter<RecordingFormatter, RecordingReporter>;

fn adapter(strict: bool) -> TestAdapter {
    ReportingAdapter::new(
        RecordingFormatter::default(),
        RecordingReporter::default(),
        AdapterConfig { strict },
    )
}

fn feature() -> Feature {
    parse_feature(
        "\
Feature: Library
  Scenario: Borrow a book
    Given a member card
    When I borrow \"Dune\"
",
    )
}

fn unit() -> Description {
    Description::new("features/library.feature").child("Borrow a book")
}

#[test]
fn failure_before_any_step_fails_the_execution_unit() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut adapter = adapter(false);
    let cause = FailureCause::error(std::io::Error::other("before hook exploded"));
    assert_eq!(adapter.start_execution_unit(unit(), notifier.clone()), Ok(()));

    assert_eq!(adapter.result(&StepResult::failed(cause.clone())), Ok(()));

    assert_eq!(notifier.kinds_for(&unit()), [NotificationKind::Failed]);
    let failures = notifier.failures_for(&unit());
    assert!(failures.iter().all(|reported| reported.same_as(&cause)));
}

#[rstest]
#[case::lenient_undefined(StepResult::undefined())]
#[case::lenient_pending(StepResult::pending(PendingStep::default()))]
#[case::passed(StepResult::passed())]
#[case::skipped(StepResult::skipped())]
fn non_failing_result_before_any_step_leaves_the_execution_unit_alone(
    #[case] result: StepResult,
) {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut adapter = adapter(false);
    assert_eq!(adapter.start_execution_unit(unit(), notifier.clone()), Ok(()));

    assert_eq!(adapter.result(&result), Ok(()));

    assert!(notifier.is_empty());
    assert_eq!(adapter.reporter().results().len(), 1);
}

#[test]
fn repeated_step_texts_are_reported_as_separate_tests() {
    let feature = parse_feature(
        "\
Feature: Menu
  Scenario: Toggle twice
    Given I click
    Then the menu opens
    Given I click
",
    );
    let Some(scenario) = feature.scenarios.first() else {
        panic!("feature should contain a scenario");
    };
    let notifier = Arc::new(RecordingNotifier::default());
    let mut adapter = adapter(false);
    assert_eq!(adapter.start_execution_unit(unit(), notifier.clone()), Ok(()));

    for step in &scenario.steps {
        assert_eq!(adapter.step(step), Ok(()));
        assert_eq!(adapter.result(&StepResult::passed()), Ok(()));
    }

    for name in ["Given I click (step #1)", "Given I click (step #3)"] {
        assert_eq!(
            notifier.kinds_for(&unit().child(name)),
            [NotificationKind::Started, NotificationKind::Finished],
            "unexpected notifications for {name}"
        );
    }
}

#[test]
fn strict_failure_before_any_step_is_reported_once() {
    let notifier = Arc::new(RecordingNotifier::default());
    let mut adapter = adapter(true);
    assert_eq!(adapter.start_execution_unit(unit(), notifier.clone()), Ok(()));

    assert_eq!(adapter.result(&StepResult::undefined()), Ok(()));

    assert_eq!(notifier.kinds_for(&unit()), [NotificationKind::Failed]);
}

#[test]
fn each_result_goes_to_the_latest_step() {
    let feature = feature();
    let Some(scenario) = feature.scenarios.first() else {
        panic!("feature should contain a scenario");
    };
    let notifier = Arc::new(RecordingNotifier::default());
    let mut adapter = adapter(false);
    assert_eq!(adapter.start_execution_unit(unit(), notifier.clone()), Ok(()));

    for step in &scenario.steps {
        assert_eq!(adapter.step(step), Ok(()));
        assert_eq!(adapter.result(&StepResult::passed()), Ok(()));
    }

    for name in [
        "Given a member card (step #1)",
        "When I borrow \"Dune\" (step #2)",
    ] {
        assert_eq!(
            notifier.kinds_for(&unit().child(name)),
            [NotificationKind::Started, NotificationKind::Finished],
            "unexpected notifications for {name}"
        );
    }
    assert!(notifier.kinds_for(&unit()).is_empty());
}

#[test]
fn strict_failures_are_reported_once_per_offending_step() {
    let feature = feature();
    let Some(scenario) = feature.scenarios.first() else {
        panic!("feature should contain a scenario");
    };
    let notifier = Arc::new(RecordingNotifier::default());
    let mut adapter = adapter(true);
    assert_eq!(adapter.start_execution_unit(unit(), notifier.clone()), Ok(()));

    for step in &scenario.steps {
        assert_eq!(adapter.step(step), Ok(()));
        assert_eq!(
            adapter.result(&StepResult::pending(PendingStep::default())),
            Ok(())
        );
    }

    assert_eq!(
        notifier.kinds_for(&unit()),
        [NotificationKind::Failed, NotificationKind::Failed]
    );
    let Ok(summary) = adapter.finish_execution_unit() else {
        panic!("execution unit should finish");
    };
    assert_eq!(summary.counts().strict_failures, 2);
    assert!(summary.failed());
}

#[test]
fn idle_adapter_rejects_result_without_side_effects() {
    let mut adapter = adapter(true);
    assert_eq!(
        adapter.result(&StepResult::passed()),
        Err(UsageError::NotInExecutionUnit {
            operation: "result"
        })
    );
    assert!(adapter.reporter().calls().is_empty());
    assert!(!adapter.in_execution_unit());
}

#[test]
fn execution_unit_context_is_exposed_while_running() {
    let mut adapter = adapter(false);
    assert!(adapter.execution_unit().is_none());
    assert_eq!(
        adapter.start_execution_unit(unit(), Arc::new(RecordingNotifier::default())),
        Ok(())
    );
    let Some(context) = adapter.execution_unit() else {
        panic!("context should be live");
    };
    assert_eq!(context.description(), &unit());
    assert!(!adapter.config().strict);
}
