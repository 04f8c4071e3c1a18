// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! The banner presentation constants are fixed: they shape the look and
//! timing of every banner and are not read from the settings file. Only the
//! sound section of [`super::Config`] is user-adjustable.
//!
//! # Categories
//!
//! - **Geometry**: Banner frame placement and sizing
//! - **Timing**: Slide animations, auto-dismiss, holder settle delay
//! - **Sound**: Alert sound identifier and volume bounds
//! - **Gestures**: Tap/swipe discrimination

use std::time::Duration;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Horizontal inset of the banner and its resting y once slid down.
pub const PADDING: f32 = 8.0;

/// Height of a banner before its content has been sized.
pub const DEFAULT_HEIGHT: f32 = 120.0;

/// Off-screen resting y coordinate of a hidden banner.
pub const HIDDEN_Y: f32 = -300.0;

/// Extra space added below the header when fitting the height to the content.
pub const CONTENT_PADDING: f32 = PADDING * 2.0;

/// Corner radius of the banner card.
pub const CORNER_RADIUS: f32 = 10.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Duration of the slide-down entrance animation.
pub const SLIDE_DOWN_DURATION: Duration = Duration::from_millis(1000);

/// Duration of the slide-up exit animation.
pub const SLIDE_UP_DURATION: Duration = Duration::from_millis(300);

/// How long a banner stays visible after the entrance settles.
pub const SHOW_DURATION: Duration = Duration::from_secs(5);

/// Delay before a pushed banner replaces the pending holder's slot.
///
/// Slightly longer than [`SLIDE_DOWN_DURATION`] so the holder only ever
/// reflects banners whose entrance has already run.
pub const SETTLE_DELAY: Duration = Duration::from_millis(1050);

// ==========================================================================
// Sound Defaults
// ==========================================================================

/// Identifier of the alert played when a banner is shown.
pub const ALERT_SOUND_ID: u32 = 1007;

/// Default alert volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum upward pointer travel, in logical pixels, recognized as a swipe.
pub const SWIPE_THRESHOLD: f32 = 24.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_delay_outlasts_entrance() {
        assert!(SETTLE_DELAY > SLIDE_DOWN_DURATION);
        assert_eq!(SETTLE_DELAY - SLIDE_DOWN_DURATION, Duration::from_millis(50));
    }

    #[test]
    fn exit_is_faster_than_entrance() {
        assert!(SLIDE_UP_DURATION < SLIDE_DOWN_DURATION);
    }

    #[test]
    fn hidden_y_is_above_any_banner() {
        assert!(HIDDEN_Y + DEFAULT_HEIGHT < 0.0);
    }

    #[test]
    fn default_volume_within_bounds() {
        assert!((MIN_VOLUME..=MAX_VOLUME).contains(&DEFAULT_VOLUME));
    }
}
