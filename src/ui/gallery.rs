// SPDX-License-Identifier: MPL-2.0
//! Project gallery: card grid with a bounded preview and an expand toggle.
//!
//! Layout is built from [`CardView`] projections only; all state changes go
//! through [`GalleryState`].

use crate::catalog::Catalog;
use crate::gallery::{card_views, CardView, GalleryState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, image, mouse_area, Column, Container, Row, Scrollable, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, ContentFit, Element, Length,
};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a GalleryState,
    pub catalog: &'a Catalog,
    pub tech_preview_count: usize,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleExpanded,
    OpenProject(usize),
    OpenRepository(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// `selected`/`modal_open` changed; the modal must be re-synced.
    SelectionChanged,
    /// Hand the URL to the system browser.
    OpenLink(String),
}

/// Process a gallery message.
pub fn update(message: Message, state: &mut GalleryState) -> Event {
    match message {
        Message::ToggleExpanded => {
            state.toggle_expanded();
            tracing::debug!(expanded = state.is_expanded(), "gallery toggled");
            Event::None
        }
        Message::OpenProject(index) => {
            if state.select_project(index) {
                tracing::debug!(project = index, "project selected");
                Event::SelectionChanged
            } else {
                Event::None
            }
        }
        Message::OpenRepository(url) => Event::OpenLink(url),
    }
}

/// Render the gallery section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let records = ctx.catalog.projects();

    let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(title);

    if records.is_empty() {
        content = content.push(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY));
    } else {
        let cards: Vec<Element<'a, Message>> = card_views(ctx.state, records, ctx.tech_preview_count)
            .into_iter()
            .map(|card| view_card(card, ctx.i18n))
            .collect();

        let grid = Row::with_children(cards)
            .spacing(spacing::LG)
            .wrap()
            .vertical_spacing(spacing::LG);
        content = content.push(grid);

        if ctx.state.has_toggle(records.len()) {
            content = content.push(view_toggle(ctx.state, records.len(), ctx.i18n));
        }
    }

    Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_toggle<'a>(state: &GalleryState, total: usize, i18n: &I18n) -> Element<'a, Message> {
    let label = if state.is_expanded() {
        i18n.tr("gallery-show-less")
    } else {
        i18n.tr_with_args("gallery-show-all", &[("count", total.to_string())])
    };

    button(Text::new(label).size(typography::BODY))
        .on_press(Message::ToggleExpanded)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary)
        .into()
}

fn view_card<'a>(card: CardView<'a>, i18n: &I18n) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match card.thumbnail {
        Some(path) => image(Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_THUMBNAIL_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        None => Container::new(Text::new(i18n.tr("gallery-card-no-image")).size(typography::CAPTION))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_THUMBNAIL_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    };

    let mut badges = Row::new().spacing(spacing::XXS);
    for tech in card.tech_badges {
        badges = badges.push(badge(tech.clone()));
    }
    if card.tech_overflow > 0 {
        badges = badges.push(badge(format!("+{}", card.tech_overflow)));
    }

    let details = button(Text::new(i18n.tr("gallery-card-details")).size(typography::BODY_SM))
        .on_press(Message::OpenProject(card.index))
        .style(styles::button::primary);

    let mut actions = Row::new().spacing(spacing::XS).push(details);
    if let Some(url) = card.repository_url {
        actions = actions.push(
            button(Text::new(i18n.tr("gallery-card-code")).size(typography::BODY_SM))
                .on_press(Message::OpenRepository(url.to_string()))
                .style(styles::button::secondary),
        );
    }

    let body = Column::new()
        .spacing(spacing::XS)
        .push(thumbnail)
        .push(Text::new(card.title).size(typography::TITLE_SM))
        .push(Text::new(card.short_description).size(typography::BODY))
        .push(badges.wrap())
        .push(actions);

    let framed = Container::new(body)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card);

    // Inner buttons capture their own presses, so this only fires on the card surface.
    mouse_area(framed)
        .on_press(Message::OpenProject(card.index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

/// Small pill label, shared with the project modal.
pub(crate) fn badge<'a, M: 'a>(label: String) -> Element<'a, M> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(styles::container::badge)
        .into()
}
