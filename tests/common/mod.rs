// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for integration tests.
#![allow(dead_code)]

use iced_banner::banner::{Banner, BannerDelegate, BannerHandle};
use iced_banner::sound::{AlertSound, SoundId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

pub const SCREEN_WIDTH: f32 = 400.0;

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

/// A banner with a recording delegate and sound player attached.
pub fn recorded_banner() -> (BannerHandle, Rc<RecordingDelegate>, Rc<RecordingSound>) {
    let sound = Rc::new(RecordingSound::default());
    let recorder = Rc::new(RecordingDelegate::default());
    let banner = Banner::new(SCREEN_WIDTH, sound.clone());
    banner.borrow_mut().subscribe(recorder.clone());
    (banner, recorder, sound)
}

pub fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}
