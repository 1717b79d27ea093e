//! Notification scopes bound to one test identity.

use std::fmt;
use std::sync::Arc;

use scenario_notify_policy::FailureCause;

use crate::description::Description;
use crate::notifier::{Failure, RunNotifier};

/// Addressable target for start, finish, failure and ignore events.
///
/// A scope pairs a runner handle with the description every event is reported
/// against.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use scenario_notify::test_support::{NotificationKind, RecordingNotifier};
/// use scenario_notify::{Description, NotificationScope};
///
/// let notifier = Arc::new(RecordingNotifier::default());
/// let step = Description::new("feature").child("Given a step");
/// let scope = NotificationScope::new(notifier.clone(), step.clone());
/// scope.start();
/// scope.finish();
/// assert_eq!(
///     notifier.kinds_for(&step),
///     [NotificationKind::Started, NotificationKind::Finished]
/// );
/// ```
#[derive(Clone)]
pub struct NotificationScope {
    notifier: Arc<dyn RunNotifier>,
    description: Description,
}

impl NotificationScope {
    /// Binds `description` to a runner handle.
    #[must_use]
    pub fn new(notifier: Arc<dyn RunNotifier>, description: Description) -> Self {
        Self {
            notifier,
            description,
        }
    }

    /// Returns the bound description.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Reports that the bound test started.
    pub fn start(&self) {
        log::trace!("test started: {}", self.description);
        self.notifier.fire_test_started(&self.description);
    }

    /// Reports that the bound test finished.
    pub fn finish(&self) {
        log::trace!("test finished: {}", self.description);
        self.notifier.fire_test_finished(&self.description);
    }

    /// Reports a failure of the bound test.
    pub fn fail(&self, cause: FailureCause) {
        log::trace!("test failed: {}: {cause}", self.description);
        self.notifier
            .fire_test_failure(Failure::new(self.description.clone(), cause));
    }

    /// Reports that the bound test was ignored.
    pub fn ignore(&self) {
        log::trace!("test ignored: {}", self.description);
        self.notifier.fire_test_ignored(&self.description);
    }
}

impl fmt::Debug for NotificationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationScope")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
