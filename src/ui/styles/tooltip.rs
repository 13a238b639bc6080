// SPDX-License-Identifier: MPL-2.0
//! Tooltips for icon-only controls.
//!
//! The bubble inverts the page contrast so it stays readable over both the
//! light and the dark theme.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

pub use iced::widget::tooltip::Position;

/// Bubble behind the tooltip text.
pub fn bubble(theme: &Theme) -> container::Style {
    let (background, text) = if theme.extended_palette().is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..background
        })),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_MD / 2.0,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::SM,
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` with a localized hint shown on hover.
pub fn labeled<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    hint: String,
    position: Position,
) -> tooltip::Tooltip<'a, M, Theme, iced::Renderer> {
    let bubble = Container::new(Text::new(hint).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(bubble);

    tooltip(content, bubble, position).gap(spacing::XXS)
}
