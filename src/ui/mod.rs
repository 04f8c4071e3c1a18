// SPDX-License-Identifier: MPL-2.0
//! User interface for banners, following the Elm-style "state down, messages up"
//! pattern.
//!
//! - [`banner_card`] - Card widget rendering a banner at its presented position
//! - [`gesture`] - Tap and swipe-up recognition from raw pointer input
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod banner_card;
pub mod design_tokens;
pub mod gesture;

pub use gesture::{Gesture, Interaction, Recognizer};
