// SPDX-License-Identifier: MPL-2.0
//! Time-based vertical slide used by the entrance and exit sequences.

use std::time::Duration;

/// A vertical slide from `from` to `to`, sampled against the event loop clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    pub from: f32,
    pub to: f32,
    pub started: Duration,
    pub duration: Duration,
}

impl Slide {
    #[must_use]
    pub fn new(from: f32, to: f32, started: Duration, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased y position at `now`.
    #[must_use]
    pub fn value_at(&self, now: Duration) -> f32 {
        let t = ease_in_out(self.progress(now));
        self.from + (self.to - self.from) * t
    }
}

/// Cubic ease-in-out.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
