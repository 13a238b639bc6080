// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow, sizing,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (card "details", modal link buttons).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Translucent buttons drawn over images (carousel arrows, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Secondary action that adapts to light/dark themes (header toggles, show all).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_dark {
        (palette::GRAY_700, WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    let (background, border_color, shadow) = match status {
        button::Status::Hovered => {
            let hover = if is_dark {
                Color::from_rgb(0.35, 0.35, 0.35)
            } else {
                palette::GRAY_200
            };
            (hover, palette::PRIMARY_500, shadow::SM)
        }
        _ => (bg_color, palette::GRAY_400, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Carousel indicator dot; `active` marks the image on screen.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match (active, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_100,
            (false, _) => palette::GRAY_400,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: (sizing::INDICATOR_DOT / 2.0).into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Whole-card hit area: no chrome of its own, the card container draws it.
pub fn card(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: Color::TRANSPARENT,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
