// SPDX-License-Identifier: MPL-2.0
//! Header bar with the portfolio owner name and the theme/language toggles.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Catalog owner; falls back to a generic title when absent.
    pub owner: Option<&'a str>,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    CycleTheme,
    CycleLanguage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ThemeChanged(ThemeMode),
    LanguageCycleRequested,
}

/// Process a header message. The theme mode is advanced in place.
pub fn update(message: Message, theme_mode: &mut ThemeMode) -> Event {
    match message {
        Message::CycleTheme => {
            *theme_mode = theme_mode.cycle();
            Event::ThemeChanged(*theme_mode)
        }
        Message::CycleLanguage => Event::LanguageCycleRequested,
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let owner = ctx
        .owner
        .map_or_else(|| ctx.i18n.tr("header-default-owner"), str::to_string);

    let theme_label = ctx.i18n.tr_with_args(
        "header-theme-button",
        &[("mode", ctx.i18n.tr(ctx.theme_mode.i18n_key()))],
    );
    let language_label = ctx.i18n.tr_with_args(
        "header-language-button",
        &[("locale", ctx.i18n.current_locale().to_string())],
    );

    let theme_button = button(Text::new(theme_label).size(typography::BODY))
        .on_press(Message::CycleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);

    let language_button = button(Text::new(language_label).size(typography::BODY))
        .on_press(Message::CycleLanguage)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(owner).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(theme_button)
        .push(language_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_theme_advances_mode_and_reports_it() {
        let mut mode = ThemeMode::Light;
        let event = update(Message::CycleTheme, &mut mode);
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(event, Event::ThemeChanged(ThemeMode::Dark));
    }

    #[test]
    fn cycle_language_is_forwarded() {
        let mut mode = ThemeMode::System;
        let event = update(Message::CycleLanguage, &mut mode);
        assert_eq!(event, Event::LanguageCycleRequested);
        assert_eq!(mode, ThemeMode::System);
    }
}
