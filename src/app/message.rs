// SPDX-License-Identifier: MPL-2.0
//! Messages and launch flags of the sample application.

use crate::ui::Interaction;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by [`crate::app::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The "Send" button was pressed.
    Send,
    /// The sound toggle was pressed.
    ToggleSound,
    /// Animation frame tick.
    Tick(Instant),
    /// Pointer input on the topmost banner.
    Banner(Interaction),
    WindowResized(Size),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
}
