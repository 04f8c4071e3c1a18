// SPDX-License-Identifier: MPL-2.0
//! Banner geometry and content-driven sizing.

use crate::config::{CONTENT_PADDING, DEFAULT_HEIGHT, HIDDEN_Y, PADDING};

/// Position and size of a banner in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    /// Off-screen frame spanning the screen width minus the side padding.
    #[must_use]
    pub fn resting(screen_width: f32) -> Self {
        Self {
            x: PADDING,
            y: HIDDEN_Y,
            width: (screen_width - PADDING * 2.0).max(0.0),
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Measures the height a piece of text needs when wrapped at `max_width`.
pub trait TextMeasure {
    fn measure(&self, text: &str, max_width: f32) -> f32;
}

/// Approximate measurement with a fixed line height and average glyph width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    pub line_height: f32,
    pub glyph_width: f32,
}

impl LineMetrics {
    pub const TITLE: Self = Self {
        line_height: 20.0,
        glyph_width: 8.5,
    };

    pub const BODY: Self = Self {
        line_height: 18.0,
        glyph_width: 7.5,
    };

    fn line_count(&self, text: &str, max_width: f32) -> usize {
        let per_line = (max_width / self.glyph_width).floor().max(1.0) as usize;
        text.lines()
            .map(|line| line.chars().count().div_ceil(per_line).max(1))
            .sum()
    }
}

impl TextMeasure for LineMetrics {
    fn measure(&self, text: &str, max_width: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.line_count(text, max_width) as f32 * self.line_height
    }
}

/// Fixed placement of the banner's labels, relative to the area below the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelLayout {
    /// Height of the header row (icon and application name).
    pub header_height: f32,
    /// Vertical offset of the title label.
    pub title_y: f32,
    /// Vertical offset of the message label when a title is present.
    pub message_y: f32,
    /// Horizontal inset of both labels inside the card.
    pub inset: f32,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            header_height: 28.0,
            title_y: 4.0,
            message_y: 28.0,
            inset: 12.0,
        }
    }
}

/// Outcome of sizing a banner to its content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fitted {
    pub height: f32,
    pub title_height: f32,
    pub message_y: f32,
    pub message_height: f32,
}

impl LabelLayout {
    /// Sizes the labels for `title`/`message` inside a card of `width`.
    ///
    /// An empty title collapses to zero height and the message takes the
    /// title's offset, so no gap is left above it.
    pub fn fit(
        &self,
        title: &str,
        message: &str,
        width: f32,
        title_metrics: &dyn TextMeasure,
        body_metrics: &dyn TextMeasure,
    ) -> Fitted {
        let label_width = (width - self.inset * 2.0).max(1.0);
        let title_height = title_metrics.measure(title, label_width);
        let message_height = body_metrics.measure(message, label_width);

        let message_y = if title_height == 0.0 {
            self.title_y
        } else {
            self.message_y
        };

        Fitted {
            height: self.header_height + CONTENT_PADDING + message_y + message_height,
            title_height,
            message_y,
            message_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    struct PerLine(f32);

    impl TextMeasure for PerLine {
        fn measure(&self, text: &str, _max_width: f32) -> f32 {
            text.lines().count() as f32 * self.0
        }
    }

    #[test]
    fn resting_frame_is_inset_and_off_screen() {
        let frame = Frame::resting(400.0);
        assert_abs_diff_eq!(frame.x, PADDING);
        assert_abs_diff_eq!(frame.y, HIDDEN_Y);
        assert_abs_diff_eq!(frame.width, 384.0);
        assert_abs_diff_eq!(frame.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn height_follows_header_padding_offset_and_message() {
        let layout = LabelLayout::default();
        let fitted = layout.fit("Title", "one\ntwo", 300.0, &PerLine(20.0), &PerLine(18.0));

        assert_abs_diff_eq!(fitted.title_height, 20.0);
        assert_abs_diff_eq!(fitted.message_y, layout.message_y);
        assert_abs_diff_eq!(
            fitted.height,
            layout.header_height + 16.0 + layout.message_y + 36.0
        );
    }

    #[test]
    fn empty_title_moves_message_up() {
        let layout = LabelLayout::default();
        let fitted = layout.fit("", "body", 300.0, &PerLine(20.0), &PerLine(18.0));

        assert_abs_diff_eq!(fitted.title_height, 0.0);
        assert_abs_diff_eq!(fitted.message_y, layout.title_y);
        assert_abs_diff_eq!(
            fitted.height,
            layout.header_height + 16.0 + layout.title_y + 18.0
        );
    }

    #[test]
    fn line_metrics_wraps_long_lines() {
        let metrics = LineMetrics {
            line_height: 10.0,
            glyph_width: 10.0,
        };
        // 100 px fits 10 glyphs per line.
        assert_abs_diff_eq!(metrics.measure("", 100.0), 0.0);
        assert_abs_diff_eq!(metrics.measure("short", 100.0), 10.0);
        assert_abs_diff_eq!(metrics.measure(&"x".repeat(25), 100.0), 30.0);
        assert_abs_diff_eq!(metrics.measure("a\nb", 100.0), 20.0);
    }

    #[test]
    fn line_metrics_survives_tiny_widths() {
        let metrics = LineMetrics::BODY;
        assert_abs_diff_eq!(metrics.measure("abc", 0.5), 3.0 * metrics.line_height);
    }
}
