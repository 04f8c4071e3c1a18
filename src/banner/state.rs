// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine of a banner.
//!
//! ```text
//! Hidden ──show──▶ Showing ──EntranceFinished──▶ Visible
//!                     │                            │
//!                     └───── dismiss (animated) ───┴──▶ Dismissing ──ExitFinished──▶ Hidden
//! ```
//!
//! `show` is not an event of the table: it carries content and always forces
//! an immediate hide of the current display before entering `Showing`.

/// Where a banner is in its presentation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Off-screen and not interactable.
    #[default]
    Hidden,
    /// Sliding down from the off-screen position.
    Showing,
    /// Resting on screen, waiting for the auto-dismiss timer or user input.
    Visible,
    /// Sliding up towards the off-screen position.
    Dismissing,
}

impl Phase {
    /// Whether the banner counts as showing (between `show` and the end of
    /// its dismissal).
    #[must_use]
    pub fn is_showing(self) -> bool {
        self != Phase::Hidden
    }
}

/// Inputs that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The slide-down animation completed without being cancelled.
    EntranceFinished,
    /// The slide-up animation completed without being cancelled.
    ExitFinished,
    /// A delayed dismissal came due.
    DismissTimerFired,
    /// Direct dismissal request from the owner of the banner.
    DismissRequested { animated: bool },
    /// The user tapped the banner.
    Tapped,
    /// The user swiped the banner up.
    SwipedUp,
}

/// Side effect to run when entering the target phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Schedule the auto-dismiss timer.
    ArmDismissTimer,
    /// Start (or restart from the current position) the slide-up animation.
    StartExit,
    /// Cancel animations, move off-screen, report completion.
    HideNow,
    /// Report the tap, then hide as with [`Action::HideNow`].
    TapThenHide,
    /// Report the tap only; there is nothing to hide.
    ReportTap,
}

/// Result of feeding an event to [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub to: Phase,
    pub action: Action,
}

/// Transition table. Returns `None` when the event is ignored in `from`.
#[must_use]
pub fn transition(from: Phase, event: Event) -> Option<Transition> {
    use Phase::{Dismissing, Hidden, Showing, Visible};

    let (to, action) = match (from, event) {
        (Hidden, Event::Tapped) => (Hidden, Action::ReportTap),
        (Hidden, _) => return None,
        (Showing, Event::EntranceFinished) => (Visible, Action::ArmDismissTimer),
        (Dismissing, Event::ExitFinished) => (Hidden, Action::HideNow),
        (
            Showing | Visible | Dismissing,
            Event::DismissTimerFired
            | Event::SwipedUp
            | Event::DismissRequested { animated: true },
        ) => (Dismissing, Action::StartExit),
        (Showing | Visible | Dismissing, Event::DismissRequested { animated: false }) => {
            (Hidden, Action::HideNow)
        }
        (Showing | Visible | Dismissing, Event::Tapped) => (Hidden, Action::TapThenHide),
        (_, Event::EntranceFinished | Event::ExitFinished) => return None,
    };

    Some(Transition { to, action })
}
