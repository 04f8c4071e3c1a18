// SPDX-License-Identifier: MPL-2.0
//! Single-slot registry keeping the most recently shown banner alive.
//!
//! A banner's presenter usually drops its own handle right after `show`; the
//! holder keeps it until the banner reports completion. The holder is an
//! ordinary value: create one and hand clones to whoever needs it.

use crate::banner::BannerHandle;
use crate::config::SETTLE_DELAY;
use crate::runtime::{EventLoop, Task};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared single-slot store for the pending banner.
///
/// Clones share the same slot.
#[derive(Clone, Default)]
pub struct PendingHolder {
    slot: Rc<RefCell<Vec<BannerHandle>>>,
}

impl fmt::Debug for PendingHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingHolder")
            .field("held", &self.len())
            .finish()
    }
}

impl PendingHolder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds `banner` once its entrance has had time to run.
    ///
    /// After [`SETTLE_DELAY`] the slot is emptied and `banner` stored, so a
    /// later push always wins over an earlier one.
    pub fn push(&self, cx: &mut EventLoop, banner: BannerHandle) {
        cx.schedule_in(
            SETTLE_DELAY,
            Task::Settle {
                slot: Rc::clone(&self.slot),
                banner,
            },
        );
    }

    /// Empties the slot if it holds exactly one banner.
    pub fn clean(&self) {
        let mut slot = self.slot.borrow_mut();
        if slot.len() == 1 {
            slot.clear();
            tracing::debug!("pending banner released");
        }
    }

    /// Number of banners currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slot.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The held banner, if any.
    #[must_use]
    pub fn current(&self) -> Option<BannerHandle> {
        self.slot.borrow().last().cloned()
    }

    /// Whether `banner` is the one held.
    #[must_use]
    pub fn holds(&self, banner: &BannerHandle) -> bool {
        self.slot.borrow().iter().any(|held| Rc::ptr_eq(held, banner))
    }
}

/// Settle step of [`PendingHolder::push`].
pub(crate) fn settle(slot: &RefCell<Vec<BannerHandle>>, banner: BannerHandle) {
    let replaced = {
        let mut slot = slot.borrow_mut();
        let replaced = std::mem::take(&mut *slot);
        slot.push(banner);
        replaced
    };
    tracing::debug!(replaced = replaced.len(), "pending banner settled");
    // Released outside the borrow: dropping a banner must not observe the slot locked.
    drop(replaced);
}
