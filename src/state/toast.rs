//! Transient notification state

use std::time::{Duration, Instant};

/// How long a toast stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastDuration {
    Short,
    Long,
}

/// Resolved display times for each [`ToastDuration`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub short: Duration,
    pub long: Duration,
}

impl ToastTimings {
    pub const DEFAULT_SHORT: Duration = Duration::from_millis(2000);
    pub const DEFAULT_LONG: Duration = Duration::from_millis(3500);

    pub fn resolve(&self, duration: ToastDuration) -> Duration {
        match duration {
            ToastDuration::Short => self.short,
            ToastDuration::Long => self.long,
        }
    }
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            short: Self::DEFAULT_SHORT,
            long: Self::DEFAULT_LONG,
        }
    }
}

/// Animation phase for a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Fully visible
    Display,
    /// Sliding off the bottom edge
    SlideOut,
    /// Expired; should be dropped
    Complete,
}

/// A notification currently on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    /// Total time on screen, slide-out included
    pub lifetime: Duration,
    pub phase: ToastPhase,
    /// Fraction of the toast height pushed below its resting row (0.0 to 1.0)
    pub slide_offset: f32,
}

impl Toast {
    /// Duration of the slide-out at the end of the lifetime
    pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

    pub fn new(message: impl Into<String>, lifetime: Duration) -> Self {
        Self::starting_at(message, lifetime, Instant::now())
    }

    pub fn starting_at(message: impl Into<String>, lifetime: Duration, start_time: Instant) -> Self {
        Self {
            message: message.into(),
            start_time,
            lifetime,
            phase: ToastPhase::Display,
            slide_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    pub fn update_at(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.start_time);
        let slide = Self::SLIDE_DURATION.min(self.lifetime);
        let display = self.lifetime - slide;

        if elapsed < display {
            self.phase = ToastPhase::Display;
            self.slide_offset = 0.0;
        } else if elapsed < self.lifetime {
            self.phase = ToastPhase::SlideOut;
            let progress = (elapsed - display).as_secs_f32() / slide.as_secs_f32();
            self.slide_offset = simple_easing::cubic_in(progress.clamp(0.0, 1.0));
        } else {
            self.phase = ToastPhase::Complete;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == ToastPhase::Complete
    }

    pub fn is_animating(&self) -> bool {
        self.phase == ToastPhase::SlideOut
    }
}
