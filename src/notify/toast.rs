//! Toast-backed notifier

use super::traits::Notifier;
use crate::state::{SubmitOutcome, Toast, ToastTimings};

/// Shows each outcome as a toast, replacing whatever was showing
#[derive(Debug, Default)]
pub struct ToastNotifier {
    timings: ToastTimings,
    toast: Option<Toast>,
}

impl ToastNotifier {
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            timings,
            toast: None,
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&mut self, outcome: &SubmitOutcome) {
        let lifetime = self.timings.resolve(outcome.duration());
        self.toast = Some(Toast::new(outcome.message(), lifetime));
    }

    fn tick(&mut self) {
        if let Some(ref mut toast) = self.toast {
            toast.update();
            if toast.is_complete() {
                self.toast = None;
            }
        }
    }

    fn dismiss(&mut self) {
        self.toast = None;
    }

    fn current(&self) -> Option<Toast> {
        self.toast.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn rejected() -> SubmitOutcome {
        SubmitOutcome::Rejected {
            message: "no".to_string(),
        }
    }

    fn created() -> SubmitOutcome {
        SubmitOutcome::Created {
            summary: "yes".to_string(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let notifier = ToastNotifier::default();
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_notify_uses_outcome_duration() {
        let timings = ToastTimings {
            short: Duration::from_secs(1),
            long: Duration::from_secs(9),
        };
        let mut notifier = ToastNotifier::new(timings);

        notifier.notify(&rejected());
        assert_eq!(notifier.current().map(|t| t.lifetime), Some(Duration::from_secs(1)));

        notifier.notify(&created());
        let toast = notifier.current().unwrap();
        assert_eq!(toast.lifetime, Duration::from_secs(9));
        assert_eq!(toast.message, "yes");
    }

    #[test]
    fn test_dismiss_clears() {
        let mut notifier = ToastNotifier::default();
        notifier.notify(&rejected());
        notifier.dismiss();
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_tick_drops_expired_toast() {
        let mut notifier = ToastNotifier::new(ToastTimings {
            short: Duration::ZERO,
            long: Duration::ZERO,
        });
        notifier.notify(&rejected());
        notifier.tick();
        assert!(notifier.current().is_none());
    }

    #[test]
    fn test_tick_keeps_live_toast() {
        let mut notifier = ToastNotifier::default();
        notifier.notify(&created());
        notifier.tick();
        assert!(notifier.current().is_some());
    }
}
