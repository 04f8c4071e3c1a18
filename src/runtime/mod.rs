// SPDX-License-Identifier: MPL-2.0
//! Single-threaded event loop driving banners and the pending holder.
//!
//! The loop owns a virtual clock and a deadline queue. Nothing ever blocks:
//! banner operations enqueue a future [`Task`] (an animation completion, a
//! dismiss timer, a holder settle) and return. The embedder moves the clock
//! forward with [`EventLoop::advance_to`], typically from an iced `time::every`
//! subscription; tests move it by hand.
//!
//! Only animation completions are ever cancelled. Timers and settle jobs always
//! fire and are written to be harmless when stale.
//!
//! Delegate callbacks are collected while a banner is borrowed and dispatched
//! once the borrow is released, so a delegate may freely touch the holder.

mod scheduler;

pub use scheduler::{Scheduler, Ticket};

use crate::banner::{BannerDelegate, BannerHandle, Event};
use crate::holder;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// A job waiting in the event loop's queue.
pub(crate) enum Task {
    /// Deliver `event` to the banner, if it is still alive.
    Banner {
        target: Weak<RefCell<crate::banner::Banner>>,
        event: Event,
    },
    /// Replace the holder's contents with `banner`.
    Settle {
        slot: Rc<RefCell<Vec<BannerHandle>>>,
        banner: BannerHandle,
    },
}

/// A delegate callback waiting to be dispatched.
pub(crate) enum Notice {
    Tapped(Rc<dyn BannerDelegate>),
    Completed(Rc<dyn BannerDelegate>),
}

impl Notice {
    fn dispatch(self) {
        match self {
            Notice::Tapped(delegate) => delegate.on_tap(),
            Notice::Completed(delegate) => delegate.on_complete(),
        }
    }
}

/// Cooperative scheduler with a virtual clock.
#[derive(Default)]
pub struct EventLoop {
    now: Duration,
    queue: Scheduler<Task>,
    outbox: Vec<Notice>,
}

impl fmt::Debug for EventLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLoop")
            .field("now", &self.now)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}

impl EventLoop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value, measured from the loop's start.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of jobs waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether no job is waiting.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Clock value at which the next job fires.
    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.queue.next_due()
    }

    /// Moves the clock forward by `by`, firing every job that comes due.
    pub fn advance(&mut self, by: Duration) {
        self.advance_to(self.now + by);
    }

    /// Moves the clock to `target`, firing due jobs in deadline order.
    ///
    /// Each job runs with the clock set to its own deadline, so jobs it
    /// schedules are timed from the moment it fired. A `target` in the past
    /// leaves the clock where it is.
    pub fn advance_to(&mut self, target: Duration) {
        while let Some((due, task)) = self.queue.pop_due(target) {
            self.now = self.now.max(due);
            self.run(task);
            self.flush();
        }
        self.now = self.now.max(target);
    }

    /// Fires jobs until the queue is empty.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.next_deadline() {
            self.advance_to(due);
        }
    }

    // =========================================================================
    // Banner operations
    // =========================================================================

    /// Shows `message` under `title`. No-op when `message` is empty.
    pub fn show(&mut self, banner: &BannerHandle, title: &str, message: &str) {
        banner.borrow_mut().show(self, title, message);
        self.flush();
    }

    /// Hides the banner at once, without animation.
    pub fn dismiss(&mut self, banner: &BannerHandle) {
        self.dismiss_animated(banner, false);
    }

    /// Hides the banner, sliding it up when `animated`. No-op when not showing.
    pub fn dismiss_animated(&mut self, banner: &BannerHandle, animated: bool) {
        self.deliver(banner, Event::DismissRequested { animated });
    }

    /// Requests an animated dismissal after `delay`. Cannot be cancelled.
    pub fn dismiss_after(&mut self, banner: &BannerHandle, delay: Duration) {
        banner.borrow().dismiss_after(self, delay);
    }

    /// User tapped the banner.
    pub fn tap(&mut self, banner: &BannerHandle) {
        self.deliver(banner, Event::Tapped);
    }

    /// User swiped the banner up.
    pub fn swipe_up(&mut self, banner: &BannerHandle) {
        self.deliver(banner, Event::SwipedUp);
    }

    // =========================================================================
    // Crate-internal plumbing
    // =========================================================================

    pub(crate) fn schedule_in(&mut self, delay: Duration, task: Task) -> Ticket {
        self.queue.schedule(self.now + delay, task)
    }

    pub(crate) fn cancel(&mut self, ticket: Ticket) -> bool {
        self.queue.cancel(ticket)
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.outbox.push(notice);
    }

    fn deliver(&mut self, banner: &BannerHandle, event: Event) {
        banner.borrow_mut().handle(self, event);
        self.flush();
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::Banner { target, event } => {
                if let Some(banner) = target.upgrade() {
                    banner.borrow_mut().handle(self, event);
                }
            }
            Task::Settle { slot, banner } => holder::settle(&slot, banner),
        }
    }

    fn flush(&mut self) {
        for notice in std::mem::take(&mut self.outbox) {
            notice.dispatch();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::Banner;
    use crate::config::{SHOW_DURATION, SLIDE_DOWN_DURATION};
    use crate::sound::Silent;

    #[test]
    fn new_loop_is_idle_at_zero() {
        let mut cx = EventLoop::new();
        assert_eq!(cx.now(), Duration::ZERO);
        assert!(cx.is_idle());
        assert_eq!(cx.next_deadline(), None);
    }

    #[test]
    fn advance_moves_the_clock_without_jobs() {
        let mut cx = EventLoop::new();
        cx.advance(Duration::from_millis(250));
        cx.advance(Duration::from_millis(250));
        assert_eq!(cx.now(), Duration::from_millis(500));
    }

    #[test]
    fn advance_to_never_moves_backwards() {
        let mut cx = EventLoop::new();
        cx.advance_to(Duration::from_secs(2));
        cx.advance_to(Duration::from_secs(1));
        assert_eq!(cx.now(), Duration::from_secs(2));
    }

    #[test]
    fn follow_up_jobs_are_timed_from_their_trigger() {
        let banner = Banner::new(400.0, Rc::new(Silent));
        let mut cx = EventLoop::new();
        cx.show(&banner, "", "Body");

        // Overshoot: the dismiss timer is still armed relative to the
        // entrance completion, not to the advance target.
        cx.advance_to(Duration::from_secs(3));
        assert_eq!(cx.next_deadline(), Some(SLIDE_DOWN_DURATION + SHOW_DURATION));
    }

    #[test]
    fn run_until_idle_drains_the_whole_sequence() {
        let banner = Banner::new(400.0, Rc::new(Silent));
        let mut cx = EventLoop::new();
        cx.show(&banner, "Title", "Body");

        cx.run_until_idle();

        assert!(cx.is_idle());
        assert!(!banner.borrow().is_showing());
    }
}
