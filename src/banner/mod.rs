// SPDX-License-Identifier: MPL-2.0
//! Drop-down banner notification.
//!
//! A banner rests off-screen at [`HIDDEN_Y`]. `show` plays the alert sound,
//! sizes the card to its content and slides it down; once the entrance
//! settles an auto-dismiss timer is armed. A tap hides the banner at once, a
//! swipe or the timer slides it back up. Every dismissal ends with the
//! delegate's `on_complete`.
//!
//! # Components
//!
//! - [`state`] - phases, events and the transition table
//! - [`layout`] - frame geometry and content sizing
//! - [`animation`] - time-based slides
//!
//! Banners are shared as [`BannerHandle`]s and driven through
//! [`EventLoop`](crate::runtime::EventLoop), which owns the clock and delivers
//! animation completions and timers as [`Event`]s.

pub mod animation;
pub mod layout;
pub mod state;

pub use animation::Slide;
pub use layout::{Fitted, Frame, LabelLayout, LineMetrics, TextMeasure};
pub use state::{transition, Action, Event, Phase, Transition};

use crate::config::{HIDDEN_Y, PADDING, SHOW_DURATION, SLIDE_DOWN_DURATION, SLIDE_UP_DURATION};
use crate::runtime::{EventLoop, Notice, Task, Ticket};
use crate::sound::{AlertSound, SoundId};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Shared, single-threaded reference to a banner.
pub type BannerHandle = Rc<RefCell<Banner>>;

/// Callbacks a banner reports to whoever presented it.
pub trait BannerDelegate {
    /// The user tapped the banner.
    fn on_tap(&self);
    /// The banner finished dismissing, by any path.
    fn on_complete(&self);
}

/// Proof of a delegate subscription, needed to unsubscribe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// A slide currently running, with the ticket of its completion event.
#[derive(Debug, Clone, Copy)]
struct InFlight {
    slide: Slide,
    completion: Ticket,
}

/// A floating notification card.
pub struct Banner {
    me: Weak<RefCell<Banner>>,
    frame: Frame,
    title: String,
    message: String,
    fitted: Fitted,
    phase: Phase,
    hidden: bool,
    in_flight: Option<InFlight>,
    layout: LabelLayout,
    title_metrics: Box<dyn TextMeasure>,
    body_metrics: Box<dyn TextMeasure>,
    sound: Rc<dyn AlertSound>,
    delegate: Option<(Subscription, Rc<dyn BannerDelegate>)>,
    next_subscription: u64,
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("frame", &self.frame)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("phase", &self.phase)
            .field("hidden", &self.hidden)
            .field("has_delegate", &self.delegate.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for Banner {
    fn drop(&mut self) {
        tracing::debug!(title = %self.title, "banner released");
    }
}

impl Banner {
    /// Creates a hidden banner for a screen `screen_width` wide, using the
    /// default label layout and text metrics.
    pub fn new(screen_width: f32, sound: Rc<dyn AlertSound>) -> BannerHandle {
        Self::with_layout(
            screen_width,
            sound,
            LabelLayout::default(),
            Box::new(LineMetrics::TITLE),
            Box::new(LineMetrics::BODY),
        )
    }

    /// Creates a hidden banner with explicit layout and text metrics.
    pub fn with_layout(
        screen_width: f32,
        sound: Rc<dyn AlertSound>,
        layout: LabelLayout,
        title_metrics: Box<dyn TextMeasure>,
        body_metrics: Box<dyn TextMeasure>,
    ) -> BannerHandle {
        Rc::new_cyclic(|me| {
            RefCell::new(Self {
                me: me.clone(),
                frame: Frame::resting(screen_width),
                title: String::new(),
                message: String::new(),
                fitted: Fitted::default(),
                phase: Phase::Hidden,
                hidden: true,
                in_flight: None,
                layout,
                title_metrics,
                body_metrics,
                sound,
                delegate: None,
                next_subscription: 0,
            })
        })
    }

    // =========================================================================
    // Delegate
    // =========================================================================

    /// Attaches `delegate`, replacing any previous one.
    pub fn subscribe(&mut self, delegate: Rc<dyn BannerDelegate>) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.delegate = Some((subscription, delegate));
        subscription
    }

    /// Detaches the delegate attached by `subscription`.
    ///
    /// Returns `false` if that subscription was already replaced or removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        match &self.delegate {
            Some((current, _)) if *current == subscription => {
                self.delegate = None;
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Model frame. During a slide its y already holds the slide's target.
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.frame
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Label measurements from the last sizing pass.
    #[must_use]
    pub fn fitted(&self) -> Fitted {
        self.fitted
    }

    #[must_use]
    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True between a successful `show` and the end of its dismissal.
    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.phase.is_showing()
    }

    /// Whether the view is hidden (not drawn, not interactable).
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether a slide is currently running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Presented y position at `now`.
    #[must_use]
    pub fn position_at(&self, now: Duration) -> f32 {
        self.in_flight
            .map_or(self.frame.y, |in_flight| in_flight.slide.value_at(now))
    }

    /// Follows a change of the screen width. Vertical placement is untouched.
    pub fn resize(&mut self, screen_width: f32) {
        let resting = Frame::resting(screen_width);
        self.frame.x = resting.x;
        self.frame.width = resting.width;
        if !self.message.is_empty() {
            self.refit();
        }
    }

    // =========================================================================
    // Operations (driven by EventLoop)
    // =========================================================================

    pub(crate) fn show(&mut self, cx: &mut EventLoop, title: &str, message: &str) {
        if message.is_empty() {
            return;
        }

        self.sound.play_alert(SoundId::ALERT);

        if self.is_showing() {
            self.handle(cx, Event::DismissRequested { animated: false });
        }

        self.phase = Phase::Showing;
        self.set_content(title, message);
        tracing::info!(title, message, height = self.frame.height, "showing banner");

        self.hidden = false;
        self.start_slide(cx, PADDING, SLIDE_DOWN_DURATION, Event::EntranceFinished);
    }

    pub(crate) fn dismiss_after(&self, cx: &mut EventLoop, delay: Duration) {
        cx.schedule_in(
            delay,
            Task::Banner {
                target: self.me.clone(),
                event: Event::DismissTimerFired,
            },
        );
    }

    /// Feeds `event` through the transition table and runs its action.
    pub(crate) fn handle(&mut self, cx: &mut EventLoop, event: Event) {
        let Some(Transition { to, action }) = transition(self.phase, event) else {
            tracing::trace!(phase = ?self.phase, ?event, "event ignored");
            return;
        };
        tracing::debug!(from = ?self.phase, ?to, ?event, "banner transition");

        match event {
            Event::EntranceFinished | Event::ExitFinished => self.in_flight = None,
            _ => {}
        }
        self.phase = to;

        match action {
            Action::ArmDismissTimer => self.dismiss_after(cx, SHOW_DURATION),
            Action::StartExit => {
                self.start_slide(cx, HIDDEN_Y, SLIDE_UP_DURATION, Event::ExitFinished);
            }
            Action::HideNow => self.hide_now(cx),
            Action::TapThenHide => {
                self.report_tap(cx);
                self.hide_now(cx);
            }
            Action::ReportTap => self.report_tap(cx),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn set_content(&mut self, title: &str, message: &str) {
        self.title.clear();
        self.title.push_str(title);
        self.message.clear();
        self.message.push_str(message);
        self.size_to_fit();
    }

    /// Fits the height to the content and parks the frame at the off-screen
    /// y. Only the entrance slide moves it down.
    fn size_to_fit(&mut self) {
        self.refit();
        self.frame.y = HIDDEN_Y;
    }

    fn refit(&mut self) {
        self.fitted = self.layout.fit(
            &self.title,
            &self.message,
            self.frame.width,
            self.title_metrics.as_ref(),
            self.body_metrics.as_ref(),
        );
        self.frame.height = self.fitted.height;
    }

    /// Replaces any running slide with one towards `to`, starting from the
    /// currently presented position.
    fn start_slide(&mut self, cx: &mut EventLoop, to: f32, duration: Duration, done: Event) {
        let now = cx.now();
        let from = self.position_at(now);
        self.cancel_slide(cx);

        let completion = cx.schedule_in(
            duration,
            Task::Banner {
                target: self.me.clone(),
                event: done,
            },
        );
        self.in_flight = Some(InFlight {
            slide: Slide::new(from, to, now, duration),
            completion,
        });
        self.frame.y = to;
    }

    fn cancel_slide(&mut self, cx: &mut EventLoop) {
        if let Some(in_flight) = self.in_flight.take() {
            cx.cancel(in_flight.completion);
        }
    }

    fn report_tap(&self, cx: &mut EventLoop) {
        if let Some((_, delegate)) = &self.delegate {
            cx.notify(Notice::Tapped(Rc::clone(delegate)));
        }
    }

    fn hide_now(&mut self, cx: &mut EventLoop) {
        self.cancel_slide(cx);
        self.hidden = true;
        self.frame.y = HIDDEN_Y;
        self.phase = Phase::Hidden;
        tracing::debug!(title = %self.title, "banner hidden");
        if let Some((_, delegate)) = &self.delegate {
            cx.notify(Notice::Completed(Rc::clone(delegate)));
        }
    }
}
