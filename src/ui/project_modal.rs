// SPDX-License-Identifier: MPL-2.0
//! Modal dialog showing one project's details and its image carousel.
//!
//! The dialog is layered over the page by [`overlay`]. Clicking the dimmed
//! backdrop closes it; clicks inside the dialog are swallowed.

use crate::gallery::{ModalView, ModalViewer};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::gallery::badge;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{
    button, center, image, mouse_area, opaque, Column, Container, Row, Scrollable, Space, Stack,
    Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};
use std::path::Path;

/// Contextual data needed to render the modal dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view: ModalView<'a>,
}

/// Messages emitted by the modal dialog and by keyboard shortcuts while it is open.
#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Next,
    Previous,
    JumpTo(usize),
    OpenLink(String),
    PlayVideo(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The dialog closed; the owner must clear its selection.
    Closed,
    /// Hand the URL to the system browser.
    OpenLink(String),
    /// Hand the video file to the system media player.
    PlayVideo(String),
}

/// Process a modal message.
pub fn update(message: Message, viewer: &mut ModalViewer) -> Event {
    match message {
        Message::Close => {
            if viewer.is_open() {
                viewer.close();
                tracing::debug!("modal closed");
            }
            Event::Closed
        }
        Message::Next => {
            viewer.next();
            Event::None
        }
        Message::Previous => {
            viewer.previous();
            Event::None
        }
        Message::JumpTo(index) => {
            viewer.jump_to(index);
            Event::None
        }
        Message::OpenLink(url) => Event::OpenLink(url),
        Message::PlayVideo(path) => Event::PlayVideo(path),
    }
}

/// Layers `dialog` over `base` with a dimmed backdrop that emits `on_blur` when clicked.
pub fn overlay<'a, M>(base: Element<'a, M>, dialog: Element<'a, M>, on_blur: M) -> Element<'a, M>
where
    M: Clone + 'a,
{
    let backdrop = mouse_area(
        center(opaque(dialog))
            .padding(spacing::XL)
            .style(styles::container::backdrop),
    )
    .on_press(on_blur);

    Stack::new().push(base).push(opaque(backdrop)).into()
}

/// Render the dialog body.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let view = ctx.view;

    let close_button = styles::tooltip::labeled(
        button(Text::new("✕").size(typography::TITLE_SM))
            .on_press(Message::Close)
            .padding(spacing::XS)
            .style(styles::button::secondary),
        i18n.tr("modal-close"),
        styles::tooltip::Position::Left,
    );

    let title_bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(view.title).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(close_button);

    let mut body = Column::new()
        .spacing(spacing::MD)
        .push(view_carousel(&view, i18n));

    if !view.indicators.is_empty() {
        body = body.push(view_indicators(&view.indicators));
    }

    body = body.push(section(
        i18n.tr("modal-section-description"),
        Text::new(view.detailed_description).size(typography::BODY).into(),
    ));

    if !view.tech_stack.is_empty() {
        let mut badges = Row::new().spacing(spacing::XXS);
        for tech in view.tech_stack {
            badges = badges.push(badge(tech.clone()));
        }
        body = body.push(section(i18n.tr("modal-section-tech"), badges.wrap().into()));
    }

    if !view.skills.is_empty() {
        let skills = Column::with_children(
            view.skills
                .iter()
                .map(|skill| Text::new(format!("• {skill}")).size(typography::BODY).into()),
        )
        .spacing(spacing::XXS);
        body = body.push(section(i18n.tr("modal-section-skills"), skills.into()));
    }

    if let Some(video) = view.video {
        body = body.push(section(i18n.tr("modal-section-video"), view_video(video, i18n)));
    }

    let links = view_links(&view, i18n);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title_bar)
        .push(Scrollable::new(body.padding([0.0, spacing::XS])).height(Length::Fill))
        .push(links);

    Container::new(content)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .max_height(sizing::MODAL_MAX_HEIGHT)
        .padding(spacing::LG)
        .style(styles::container::dialog)
        .into()
}

fn view_carousel<'a>(view: &ModalView<'a>, i18n: &I18n) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match view.image {
        Some(path) => image(Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        None => Container::new(Text::new(i18n.tr("modal-no-image")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::placeholder)
            .into(),
    };

    if !view.show_navigation {
        return picture;
    }

    let arrow_style = || styles::button::overlay(palette::WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);

    let previous = button(
        Container::new(Text::new("◀").size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .on_press(Message::Previous)
    .style(arrow_style());

    let next = button(
        Container::new(Text::new("▶").size(typography::TITLE_MD))
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .on_press(Message::Next)
    .style(arrow_style());

    let arrows = Row::new()
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(next);

    let counter_text = i18n.tr_with_args(
        "modal-image-counter",
        &[
            ("current", (view.current_index + 1).to_string()),
            ("total", view.image_count.to_string()),
        ],
    );
    let counter = Container::new(Text::new(counter_text).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::overlay::indicator(radius::SM));

    Stack::new()
        .push(picture)
        .push(
            Container::new(arrows)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MODAL_IMAGE_HEIGHT))
                .align_y(Vertical::Center),
        )
        .push(
            Container::new(counter)
                .width(Length::Fill)
                .padding(spacing::SM)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Top),
        )
        .into()
}

fn view_indicators<'a>(indicators: &[bool]) -> Element<'a, Message> {
    let dots = indicators.iter().enumerate().map(|(index, &active)| {
        button(Space::new())
            .width(Length::Fixed(sizing::INDICATOR_DOT))
            .height(Length::Fixed(sizing::INDICATOR_DOT))
            .padding(0)
            .on_press(Message::JumpTo(index))
            .style(styles::button::indicator(active))
            .into()
    });

    Container::new(Row::with_children(dots).spacing(spacing::XS))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn view_video<'a>(video: &'a str, i18n: &I18n) -> Element<'a, Message> {
    let file_name = Path::new(video)
        .file_name()
        .map_or_else(|| video.to_string(), |name| name.to_string_lossy().into_owned());

    let play = button(Text::new(format!("▶  {}", i18n.tr("modal-video-play"))).size(typography::BODY))
        .on_press(Message::PlayVideo(video.to_string()))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(play)
        .push(
            Text::new(i18n.tr_with_args("modal-video-file", &[("path", file_name)]))
                .size(typography::BODY_SM),
        )
        .into()
}

fn view_links<'a>(view: &ModalView<'a>, i18n: &I18n) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM).push(Space::new().width(Length::Fill));

    if let Some(url) = view.repository_url {
        row = row.push(
            button(Text::new(i18n.tr("modal-action-code")).size(typography::BODY))
                .on_press(Message::OpenLink(url.to_string()))
                .style(styles::button::primary),
        );
    }
    if let Some(url) = view.live_demo_url {
        row = row.push(
            button(Text::new(i18n.tr("modal-action-demo")).size(typography::BODY))
                .on_press(Message::OpenLink(url.to_string()))
                .style(styles::button::primary),
        );
    }

    row.into()
}

fn section<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(content)
        .into()
}
