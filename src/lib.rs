// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` provides drop-down banner notifications for Iced applications.
//!
//! A banner slides down from above the window, shows a title and message,
//! plays an alert sound, and dismisses itself after a few seconds unless it is
//! tapped or swiped away first. A [`PendingHolder`] keeps the most recently
//! shown banner alive until it completes.
//!
//! All state changes happen on a single-threaded [`EventLoop`] with a virtual
//! clock, so the whole presentation sequence can be driven without a renderer.
//!
//! ```
//! use iced_banner::{Banner, EventLoop, PendingHolder, sound::Silent};
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let mut event_loop = EventLoop::new();
//! let holder = PendingHolder::new();
//!
//! let banner = Banner::new(400.0, Rc::new(Silent));
//! event_loop.show(&banner, "Build finished", "All 42 tests passed");
//! holder.push(&mut event_loop, Rc::clone(&banner));
//!
//! event_loop.advance(Duration::from_secs(2));
//! assert!(banner.borrow().is_showing());
//! assert!(holder.holds(&banner));
//! ```

pub mod app;
pub mod banner;
pub mod config;
pub mod error;
pub mod holder;
pub mod runtime;
pub mod sound;
pub mod ui;

#[cfg(test)]
mod test_utils;

pub use banner::{Banner, BannerDelegate, BannerHandle, Phase, Subscription};
pub use holder::PendingHolder;
pub use runtime::EventLoop;
