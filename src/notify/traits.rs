//! Trait abstraction for outcome delivery to enable mocking in tests

use crate::state::{SubmitOutcome, Toast};

/// Receiver for submit outcomes, presented to the user as a transient
/// notification
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    /// Present an outcome. Called exactly once per submit.
    fn notify(&mut self, outcome: &SubmitOutcome);

    /// Advance any time-based state; called once per frame
    fn tick(&mut self) {}

    /// Hide the current notification early
    fn dismiss(&mut self) {}

    /// Notification currently on screen
    fn current(&self) -> Option<Toast> {
        None
    }
}
