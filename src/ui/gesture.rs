// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture recognition for the banner card.
//!
//! `mouse_area` reports presses and releases without a position, so the
//! recognizer tracks the cursor from move events and compares the press and
//! release positions.

use crate::config::SWIPE_THRESHOLD;
use iced::Point;

/// What a completed press/release pair meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    SwipeUp,
}

/// Raw pointer input forwarded by the banner card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Pressed,
    Moved(Point),
    Released,
}

/// Turns pointer input into [`Gesture`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct Recognizer {
    cursor: Option<Point>,
    pressed_at: Option<Point>,
}

impl Recognizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one interaction, returning the gesture it completes, if any.
    pub fn update(&mut self, interaction: Interaction) -> Option<Gesture> {
        match interaction {
            Interaction::Moved(position) => {
                self.cursor = Some(position);
                None
            }
            Interaction::Pressed => {
                self.pressed_at = Some(self.cursor.unwrap_or(Point::ORIGIN));
                None
            }
            Interaction::Released => {
                let origin = self.pressed_at.take()?;
                let release = self.cursor.unwrap_or(origin);
                if origin.y - release.y >= SWIPE_THRESHOLD {
                    Some(Gesture::SwipeUp)
                } else {
                    Some(Gesture::Tap)
                }
            }
        }
    }

    /// Forgets any press in progress.
    pub fn reset(&mut self) {
        self.pressed_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(recognizer: &mut Recognizer, from: f32, to: f32) -> Option<Gesture> {
        recognizer.update(Interaction::Moved(Point::new(50.0, from)));
        recognizer.update(Interaction::Pressed);
        recognizer.update(Interaction::Moved(Point::new(50.0, (from + to) / 2.0)));
        recognizer.update(Interaction::Moved(Point::new(50.0, to)));
        recognizer.update(Interaction::Released)
    }

    #[test]
    fn press_and_release_in_place_is_a_tap() {
        let mut recognizer = Recognizer::new();
        assert_eq!(drag(&mut recognizer, 40.0, 40.0), Some(Gesture::Tap));
    }

    #[test]
    fn small_jitter_is_still_a_tap() {
        let mut recognizer = Recognizer::new();
        assert_eq!(drag(&mut recognizer, 40.0, 30.0), Some(Gesture::Tap));
    }

    #[test]
    fn upward_drag_past_threshold_is_a_swipe() {
        let mut recognizer = Recognizer::new();
        assert_eq!(
            drag(&mut recognizer, 80.0, 80.0 - SWIPE_THRESHOLD),
            Some(Gesture::SwipeUp)
        );
    }

    #[test]
    fn downward_drag_is_a_tap() {
        let mut recognizer = Recognizer::new();
        assert_eq!(drag(&mut recognizer, 10.0, 90.0), Some(Gesture::Tap));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut recognizer = Recognizer::new();
        assert_eq!(recognizer.update(Interaction::Released), None);
    }

    #[test]
    fn reset_discards_the_press() {
        let mut recognizer = Recognizer::new();
        recognizer.update(Interaction::Pressed);
        recognizer.reset();
        assert_eq!(recognizer.update(Interaction::Released), None);
    }
}
