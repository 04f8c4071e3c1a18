// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the banner card: palette, spacing, typography, shadows.
//!
//! Spacing follows an 8px baseline grid, matching the banner's outer padding.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;

    /// Surface background - Semi-transparent banner card
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;

    /// Height of the header row (icon and application name).
    pub const HEADER_HEIGHT: f32 = 28.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner title
    pub const TITLE: f32 = 16.0;

    /// Banner message
    pub const BODY: f32 = 14.0;

    /// Header caption (application name)
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::LabelLayout;
    use crate::config::PADDING;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XS, PADDING);
    }

    #[test]
    fn default_label_layout_matches_tokens() {
        let layout = LabelLayout::default();
        assert_eq!(layout.header_height, sizing::HEADER_HEIGHT);
        assert_eq!(layout.inset, spacing::SM);
    }
}
