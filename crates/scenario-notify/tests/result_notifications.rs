//! Behavioural tests for the notifications fired for step results.

mod support;

use std::sync::Arc;

use gherkin::Feature;
use rstest::rstest;
use scenario_notify::test_support::{NotificationKind, RecordingNotifier};
use scenario_notify::{FailureCause, PendingStep, StepResult};
use support::{adapter, feature, notifier, running_step, unit_description};

fn io_failure(message: &str) -> FailureCause {
    FailureCause::error(std::io::Error::other(message.to_string()))
}

#[rstest]
#[case::lenient(false)]
#[case::strict(true)]
fn genuine_failure_starts_then_fails_the_step(
    feature: Feature,
    notifier: Arc<RecordingNotifier>,
    #[case] strict: bool,
) {
    let mut adapter = adapter(strict);
    let step = running_step(&mut adapter, &notifier, &feature);
    let cause = io_failure("payment gateway unavailable");
    let result = StepResult::failed(cause.clone());

    assert_eq!(adapter.result(&result), Ok(()));

    assert_eq!(
        notifier.kinds_for(&step),
        [NotificationKind::Started, NotificationKind::Failed]
    );
    let failures = notifier.failures_for(&step);
    assert_eq!(failures.len(), 1);
    assert!(failures.iter().all(|reported| reported.same_as(&cause)));
    assert!(notifier.kinds_for(&unit_description()).is_empty());

    let forwarded = adapter.reporter().results();
    assert_eq!(forwarded.len(), 1);
    assert!(forwarded.iter().all(|seen| seen.same_as(&result)));
}

#[rstest]
#[case::lenient_passed(false, StepResult::passed())]
#[case::strict_passed(true, StepResult::passed())]
#[case::lenient_skipped(false, StepResult::skipped())]
#[case::strict_skipped(true, StepResult::skipped())]
fn result_without_error_starts_then_finishes(
    feature: Feature,
    notifier: Arc<RecordingNotifier>,
    #[case] strict: bool,
    #[case] result: StepResult,
) {
    let mut adapter = adapter(strict);
    let step = running_step(&mut adapter, &notifier, &feature);

    assert_eq!(adapter.result(&result), Ok(()));

    assert_eq!(
        notifier.kinds_for(&step),
        [NotificationKind::Started, NotificationKind::Finished]
    );
    assert!(notifier.kinds_for(&unit_description()).is_empty());
}

#[rstest]
#[case::undefined(StepResult::undefined())]
#[case::pending(StepResult::pending(PendingStep::default()))]
#[case::pending_error_on_failed_status(
    StepResult::failed(FailureCause::from(PendingStep::new("later")))
)]
fn lenient_pending_or_undefined_ignores_the_step(
    feature: Feature,
    notifier: Arc<RecordingNotifier>,
    #[case] result: StepResult,
) {
    let mut adapter = adapter(false);
    let step = running_step(&mut adapter, &notifier, &feature);

    assert_eq!(adapter.result(&result), Ok(()));

    assert_eq!(notifier.kinds_for(&step), [NotificationKind::Ignored]);
    assert!(notifier.kinds_for(&unit_description()).is_empty());
    assert_eq!(adapter.reporter().results().len(), 1);
}

#[rstest]
#[case::undefined(StepResult::undefined(), "TODO: implement me")]
#[case::pending(StepResult::pending(PendingStep::new("awaiting design")), "awaiting design")]
fn strict_pending_or_undefined_fails_step_and_execution_unit(
    feature: Feature,
    notifier: Arc<RecordingNotifier>,
    #[case] result: StepResult,
    #[case] message: &str,
) {
    let mut adapter = adapter(true);
    let step = running_step(&mut adapter, &notifier, &feature);

    assert_eq!(adapter.result(&result), Ok(()));

    assert_eq!(notifier.kinds_for(&step), [NotificationKind::Failed]);
    assert_eq!(
        notifier.kinds_for(&unit_description()),
        [NotificationKind::Failed]
    );
    let failures = notifier
        .failures_for(&step)
        .into_iter()
        .chain(notifier.failures_for(&unit_description()));
    for cause in failures {
        assert_eq!(
            cause.as_pending().map(PendingStep::message),
            Some(message),
            "both scopes should see the pending marker"
        );
    }
}

#[rstest]
fn forwarded_result_is_unchanged_whatever_the_classification(
    feature: Feature,
    notifier: Arc<RecordingNotifier>,
) {
    let mut adapter = adapter(true);
    running_step(&mut adapter, &notifier, &feature);
    let results = [
        StepResult::passed(),
        StepResult::undefined(),
        StepResult::failed(io_failure("boom")),
        StepResult::pending(PendingStep::default()),
    ];

    for result in &results {
        assert_eq!(adapter.result(result), Ok(()));
    }

    let forwarded = adapter.reporter().results();
    assert_eq!(forwarded.len(), results.len());
    for (seen, sent) in forwarded.iter().zip(&results) {
        assert!(seen.same_as(sent), "reporter should see {sent:?} unchanged");
    }
}
