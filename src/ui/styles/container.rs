// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn surface(theme: &Theme) -> Color {
    let base = theme.extended_palette().background.base.color;
    Color::from_rgba(base.r, base.g, base.b, opacity::SURFACE)
}

/// Generic panel surface (header, modal sections).
///
/// The color is derived from the active Iced `Theme` background so panels
/// stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Project card in the gallery grid.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        text_color: Some(extended.background.weak.text),
        border: Border {
            color: extended.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Modal dialog body.
pub fn dialog(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        text_color: Some(extended.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed full-window layer behind the modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Pill-shaped tech/skill badge.
pub fn badge(theme: &Theme) -> container::Style {
    let is_dark = theme.extended_palette().is_dark;
    let (background, text) = if is_dark {
        (palette::PRIMARY_800, palette::PRIMARY_100)
    } else {
        (palette::PRIMARY_100, palette::PRIMARY_800)
    };
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder shown where an image is missing.
pub fn placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.strong.color)),
        text_color: Some(extended.background.strong.text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
