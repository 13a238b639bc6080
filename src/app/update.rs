// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler forwards a component message to its component, then applies
//! the resulting event to the rest of the application state.

use super::launcher::Launcher;
use super::Message;
use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::gallery::{GalleryState, ModalViewer};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::{gallery, header, project_modal};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub catalog: &'a Catalog,
    pub gallery: &'a mut GalleryState,
    pub modal: &'a mut ModalViewer,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut Config,
    /// Directory holding `settings.toml`; `None` uses the resolved default.
    pub config_dir: Option<PathBuf>,
    pub notifications: &'a mut notifications::Manager,
    pub launcher: &'a dyn Launcher,
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message, ctx.theme_mode) {
        header::Event::ThemeChanged(mode) => {
            tracing::info!(?mode, "theme mode changed");
            ctx.config.general.theme_mode = mode;
        }
        header::Event::LanguageCycleRequested => {
            let locale = ctx.i18n.cycle_locale().to_string();
            tracing::info!(%locale, "language changed");
            ctx.config.general.language = Some(locale);
        }
    }
    persist_preferences(ctx);
    Task::none()
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match gallery::update(message, ctx.gallery) {
        gallery::Event::None => Task::none(),
        gallery::Event::SelectionChanged => {
            sync_modal(ctx);
            Task::none()
        }
        gallery::Event::OpenLink(url) => open_external(ctx, url),
    }
}

pub fn handle_modal_message(
    ctx: &mut UpdateContext<'_>,
    message: project_modal::Message,
) -> Task<Message> {
    match project_modal::update(message, ctx.modal) {
        project_modal::Event::None => Task::none(),
        project_modal::Event::Closed => {
            ctx.gallery.close_modal();
            sync_modal(ctx);
            Task::none()
        }
        project_modal::Event::OpenLink(url) | project_modal::Event::PlayVideo(url) => {
            open_external(ctx, url)
        }
    }
}

/// Brings the modal in line with the gallery's selection.
fn sync_modal(ctx: &mut UpdateContext<'_>) {
    ctx.modal.sync(
        ctx.gallery.selected(),
        ctx.gallery.is_modal_open(),
        ctx.catalog.projects(),
    );
}

/// Opens a link or video with the desktop; on failure the target is copied
/// to the clipboard so the user can still reach it.
fn open_external(ctx: &mut UpdateContext<'_>, target: String) -> Task<Message> {
    match ctx.launcher.open(&target) {
        Ok(()) => {
            tracing::info!(%target, "opened with the system handler");
            Task::none()
        }
        Err(err) => {
            tracing::warn!(%target, error = %err, "system handler unavailable");
            ctx.notifications.push(
                Notification::warning("notification-open-failed").with_arg("target", target.clone()),
            );
            iced::clipboard::write(target)
        }
    }
}

fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.clone()) {
        tracing::warn!(error = %err, "failed to save settings");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}
