// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, the project
//! modal and the header.
//!
//! The `App` struct wires together the catalog, localization and persisted
//! preferences, and translates component events into side effects such as
//! config persistence or handing links and videos to the desktop.

pub mod launcher;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::modal_shortcut;

use self::launcher::SystemLauncher;
use crate::catalog::{self, Catalog};
use crate::config::{self, Config};
use crate::gallery::{GalleryState, ModalViewer};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    gallery: GalleryState,
    modal: ModalViewer,
    theme_mode: ThemeMode,
    /// `theme_mode` resolved once per change; system detection is not free.
    theme: Theme,
    tech_preview_count: usize,
    /// Persisted preferences, rewritten when the theme or language changes.
    config: Config,
    notifications: notifications::Manager,
    launcher: SystemLauncher,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("projects", &self.catalog.len())
            .field("gallery", &self.gallery)
            .field("modal", &self.modal.state())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences, translations and the project catalog.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let catalog_path = flags
            .catalog
            .map(PathBuf::from)
            .or_else(|| config.gallery.catalog.clone());
        let catalog = load_catalog(catalog_path, &mut notifications);
        report_missing_images(&catalog, &mut notifications);

        let app = App {
            i18n,
            catalog,
            gallery: GalleryState::new(config.gallery.effective_preview_count()),
            modal: ModalViewer::new(),
            theme_mode: config.general.theme_mode,
            theme: config.general.theme_mode.to_theme(),
            tech_preview_count: config.gallery.effective_tech_preview_count(),
            config,
            notifications,
            launcher: SystemLauncher,
        };

        tracing::info!(
            locale = %app.i18n.current_locale(),
            projects = app.catalog.len(),
            "application started"
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.modal.project().and_then(|index| self.catalog.get(index)) {
            Some(project) => format!("{} - {app_name}", project.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(self.modal.is_open()),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            catalog: &self.catalog,
            gallery: &mut self.gallery,
            modal: &mut self.modal,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            config_dir: None,
            notifications: &mut self.notifications,
            launcher: &self.launcher,
        };

        match message {
            Message::Header(header_message) => {
                let task = update::handle_header_message(&mut ctx, header_message);
                self.theme = self.theme_mode.to_theme();
                task
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Modal(modal_message) => update::handle_modal_message(&mut ctx, modal_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            gallery: &self.gallery,
            modal: &self.modal,
            theme_mode: self.theme_mode,
            tech_preview_count: self.tech_preview_count,
            notifications: &self.notifications,
        })
    }
}

/// Loads the configured catalog, falling back to the embedded one on failure.
fn load_catalog(path: Option<PathBuf>, notifications: &mut notifications::Manager) -> Catalog {
    match catalog::load(path.as_deref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "failed to load project catalog");
            notifications.push(Notification::error(err.i18n_key()));
            if path.is_some() {
                Catalog::embedded().unwrap_or_else(|err| {
                    tracing::error!(error = %err, "embedded catalog unavailable");
                    Catalog::default()
                })
            } else {
                Catalog::default()
            }
        }
    }
}

/// Warns once at startup when catalog images cannot be found, since they
/// would otherwise render as empty frames.
fn report_missing_images(catalog: &Catalog, notifications: &mut notifications::Manager) {
    let missing = catalog.missing_images();
    if missing.is_empty() {
        return;
    }
    tracing::warn!(count = missing.len(), first = missing[0], "catalog images not found");
    notifications.push(
        Notification::info("notification-assets-missing").with_arg("count", missing.len().to_string()),
    );
}
