// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: header, gallery, modal overlay and toasts.

use super::Message;
use crate::catalog::Catalog;
use crate::gallery::{GalleryState, ModalViewer};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery, header, project_modal};
use iced::widget::{Column, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub gallery: &'a GalleryState,
    pub modal: &'a ModalViewer,
    pub theme_mode: ThemeMode,
    pub tech_preview_count: usize,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(header::ViewContext {
        i18n: ctx.i18n,
        owner: ctx.catalog.owner(),
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Header);

    let gallery_view = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        state: ctx.gallery,
        catalog: ctx.catalog,
        tech_preview_count: ctx.tech_preview_count,
    })
    .map(Message::Gallery);

    let page: Element<'_, Message> = Column::new()
        .push(header_view)
        .push(gallery_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let page = match ctx.modal.view(ctx.catalog.projects()) {
        Some(modal_view) => {
            let dialog = project_modal::view(project_modal::ViewContext {
                i18n: ctx.i18n,
                view: modal_view,
            })
            .map(Message::Modal);
            project_modal::overlay(page, dialog, Message::Modal(project_modal::Message::Close))
        }
        None => page,
    };

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(page)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
