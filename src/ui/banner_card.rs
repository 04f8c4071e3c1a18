// SPDX-License-Identifier: MPL-2.0
//! Banner card widget.
//!
//! Renders a banner as a rounded card at its presented position: a header row
//! with the application glyph and name, an optional title and the message.
//! The part of the card above the window's top edge is clipped.

use super::design_tokens::{opacity, palette, shadow, sizing, spacing, typography};
use super::gesture::Interaction;
use crate::banner::Banner;
use crate::config::CORNER_RADIUS;
use iced::widget::{container, mouse_area, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Duration;

/// Application name shown in the card header.
pub const APP_NAME: &str = "Iced Banner";

/// Renders `banner` as it should appear at `now`.
///
/// Hidden banners render as an empty space.
pub fn view<'a>(banner: &Banner, now: Duration) -> Element<'a, Interaction> {
    if banner.is_hidden() {
        return Space::new().into();
    }

    let frame = banner.frame();
    let y = banner.position_at(now);
    let card = card(banner);

    let interactive = mouse_area(card)
        .on_press(Interaction::Pressed)
        .on_release(Interaction::Released)
        .on_move(Interaction::Moved);

    let (top, visible) = visible_span(y, frame.height);
    let window = Container::new(interactive)
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(visible))
        .align_y(alignment::Vertical::Bottom)
        .clip(true);

    Column::new()
        .push(Space::new().height(Length::Fixed(top)))
        .push(
            Row::new()
                .push(Space::new().width(Length::Fixed(frame.x)))
                .push(window),
        )
        .into()
}

/// Offset from the window top and on-screen height of a card at `y`.
fn visible_span(y: f32, height: f32) -> (f32, f32) {
    let top = y.max(0.0);
    let visible = (height + y.min(0.0)).clamp(0.0, height);
    (top, visible)
}

fn card<'a>(banner: &Banner) -> Element<'a, Interaction> {
    let frame = banner.frame();
    let fitted = banner.fitted();
    let layout = banner.layout();

    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fixed(layout.header_height))
        .push(
            Text::new("\u{25CF}")
                .size(sizing::ICON_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PRIMARY_500),
                }),
        )
        .push(Text::new(APP_NAME).size(typography::CAPTION).style(muted_text));

    let mut body = Column::new().push(Space::new().height(Length::Fixed(layout.title_y)));

    if fitted.title_height > 0.0 {
        let gap = (fitted.message_y - layout.title_y - fitted.title_height).max(0.0);
        body = body
            .push(
                Text::new(banner.title().to_owned())
                    .size(typography::TITLE)
                    .height(Length::Fixed(fitted.title_height)),
            )
            .push(Space::new().height(Length::Fixed(gap)));
    }

    body = body.push(
        Text::new(banner.message().to_owned())
            .size(typography::BODY)
            .height(Length::Fixed(fitted.message_height)),
    );

    Container::new(Column::new().push(header).push(body))
        .width(Length::Fixed(frame.width))
        .height(Length::Fixed(frame.height))
        .padding([0.0, layout.inset])
        .style(card_style)
        .into()
}

fn muted_text(theme: &Theme) -> text::Style {
    let color = if theme.extended_palette().is_dark {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };
    text::Style { color: Some(color) }
}

/// Style function for the card container.
fn card_style(theme: &Theme) -> container::Style {
    let base = if theme.extended_palette().is_dark {
        palette::GRAY_900
    } else {
        palette::WHITE
    };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: CORNER_RADIUS.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn card_style_is_rounded() {
        let style = card_style(&Theme::Light);
        assert_abs_diff_eq!(style.border.radius.top_left, CORNER_RADIUS);
        assert!(style.background.is_some());
    }

    #[test]
    fn dark_theme_uses_dark_surface() {
        let light = card_style(&Theme::Light);
        let dark = card_style(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn fully_off_screen_card_has_no_visible_span() {
        assert_eq!(visible_span(-300.0, 120.0), (0.0, 0.0));
    }

    #[test]
    fn partially_off_screen_card_is_clipped_from_the_top() {
        assert_eq!(visible_span(-20.0, 120.0), (0.0, 100.0));
    }

    #[test]
    fn resting_card_is_offset_by_its_y() {
        assert_eq!(visible_span(8.0, 120.0), (8.0, 120.0));
    }
}
