// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and recording collaborators.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::banner::BannerDelegate;
use crate::sound::{AlertSound, SoundId};
use std::cell::RefCell;

/// Delegate callback observed by [`RecordingDelegate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Tap,
    Complete,
}

/// Delegate that records every callback in order.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    calls: RefCell<Vec<Call>>,
}

impl RecordingDelegate {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: Call) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }
}

impl BannerDelegate for RecordingDelegate {
    fn on_tap(&self) {
        self.calls.borrow_mut().push(Call::Tap);
    }

    fn on_complete(&self) {
        self.calls.borrow_mut().push(Call::Complete);
    }
}

/// Alert player that records requested sounds instead of playing them.
#[derive(Debug, Default)]
pub struct RecordingSound {
    played: RefCell<Vec<SoundId>>,
}

impl RecordingSound {
    pub fn played(&self) -> Vec<SoundId> {
        self.played.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.played.borrow().len()
    }
}

impl AlertSound for RecordingSound {
    fn play_alert(&self, sound: SoundId) {
        self.played.borrow_mut().push(sound);
    }
}
