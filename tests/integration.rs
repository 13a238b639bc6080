// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::modal_shortcut;
use iced_folio::catalog::{self, Catalog};
use iced_folio::config::{self, Config};
use iced_folio::gallery::{card_views, GalleryState, ModalState, ModalViewer};
use iced_folio::i18n::fluent::I18n;
use iced_folio::ui::project_modal;
use std::fs;
use tempfile::tempdir;

const CATALOG: &str = r#"
owner = "Test Owner"
asset_root = "media"

[[project]]
title = "A"
short_description = "first"
detailed_description = "first project"
tech_stack = ["Rust", "Iced", "Fluent", "Serde"]
images = ["a1.png", "a2.png"]
repository_link = "https://example.com/a"

[[project]]
title = "B"
short_description = "second"
detailed_description = "second project"
images = ["b1.png"]

[[project]]
title = "C"
short_description = "third"
detailed_description = "third project"
images = ["c1.png"]

[[project]]
title = "D"
short_description = "fourth"
detailed_description = "fourth project"
images = []

[[project]]
title = "E"
short_description = "fifth"
detailed_description = "fifth project"
images = ["e1.png", "e2.png", "e3.png"]

[[project]]
title = "F"
short_description = "sixth"
detailed_description = "sixth project"
images = ["f1.png"]
live_demo_link = "https://f.example.com"
"#;

fn write_catalog() -> (tempfile::TempDir, Catalog) {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("projects.toml");
    fs::write(&path, CATALOG).expect("Failed to write catalog");
    let catalog = catalog::load(Some(&path)).expect("Failed to load catalog");
    (dir, catalog)
}

#[test]
fn test_six_project_gallery_expands_and_collapses() {
    let (_dir, catalog) = write_catalog();
    let mut state = GalleryState::new(4);

    let titles = |state: &GalleryState| -> Vec<String> {
        card_views(state, catalog.projects(), 3)
            .iter()
            .map(|card| card.title.to_string())
            .collect()
    };

    assert_eq!(titles(&state), ["A", "B", "C", "D"]);
    state.toggle_expanded();
    assert_eq!(titles(&state), ["A", "B", "C", "D", "E", "F"]);
    state.toggle_expanded();
    assert_eq!(titles(&state), ["A", "B", "C", "D"]);
}

#[test]
fn test_card_projection_uses_resolved_assets() {
    let (dir, catalog) = write_catalog();
    let state = GalleryState::new(4);
    let cards = card_views(&state, catalog.projects(), 3);

    let expected = dir
        .path()
        .join("media")
        .join("a1.png")
        .to_string_lossy()
        .into_owned();
    assert_eq!(cards[0].thumbnail, Some(expected.as_str()));
    assert_eq!(cards[0].tech_badges.len(), 3);
    assert_eq!(cards[0].tech_overflow, 1);
    assert_eq!(cards[0].repository_url, Some("https://example.com/a"));
    assert_eq!(cards[3].thumbnail, None);
}

#[test]
fn test_modal_resets_between_projects() {
    let (_dir, catalog) = write_catalog();
    let records = catalog.projects();
    let mut gallery = GalleryState::new(4);
    let mut viewer = ModalViewer::new();

    gallery.select_project(0);
    viewer.sync(gallery.selected(), gallery.is_modal_open(), records);
    project_modal::update(project_modal::Message::Next, &mut viewer);
    assert_eq!(viewer.current_index(), 1);

    let event = project_modal::update(project_modal::Message::Close, &mut viewer);
    assert_eq!(event, project_modal::Event::Closed);
    gallery.close_modal();
    viewer.sync(gallery.selected(), gallery.is_modal_open(), records);
    assert_eq!(viewer.state(), ModalState::Closed);

    gallery.select_project(1);
    viewer.sync(gallery.selected(), gallery.is_modal_open(), records);
    let view = viewer.view(records).expect("modal should render");
    assert_eq!(view.title, "B");
    assert_eq!(view.current_index, 0);
    assert!(!view.show_navigation);
}

#[test]
fn test_project_without_images_is_safe() {
    let (_dir, catalog) = write_catalog();
    let records = catalog.projects();
    let mut viewer = ModalViewer::new();
    viewer.sync(Some(3), true, records);

    for message in [
        project_modal::Message::Next,
        project_modal::Message::Previous,
        project_modal::Message::JumpTo(0),
    ] {
        project_modal::update(message, &mut viewer);
    }

    let view = viewer.view(records).expect("modal should render");
    assert_eq!(view.image, None);
    assert_eq!(view.current_index, 0);
    assert!(view.indicators.is_empty());
}

#[test]
fn test_keyboard_shortcuts_drive_the_carousel() {
    use iced::keyboard::{key::Named, Key};

    let (_dir, catalog) = write_catalog();
    let records = catalog.projects();
    let mut viewer = ModalViewer::new();
    viewer.sync(Some(4), true, records);

    let left = modal_shortcut(&Key::Named(Named::ArrowLeft)).expect("left arrow is mapped");
    project_modal::update(left, &mut viewer);
    assert_eq!(viewer.current_index(), 2);

    let escape = modal_shortcut(&Key::Named(Named::Escape)).expect("escape is mapped");
    project_modal::update(escape, &mut viewer);
    assert!(!viewer.is_open());
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(
        i18n_en.tr_with_args("gallery-show-all", &[("count", "6".to_string())]),
        "Show all projects (6)"
    );

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-show-less"), "Voir moins");
}

#[test]
fn test_preview_count_comes_from_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[gallery]\npreview_count = 2\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let (_catalog_dir, catalog) = write_catalog();
    let state = GalleryState::new(config.gallery.effective_preview_count());
    assert_eq!(card_views(&state, catalog.projects(), 3).len(), 2);
    assert!(state.has_toggle(catalog.len()));
}

#[test]
fn test_every_translation_key_exists_in_all_locales() {
    let keys = [
        "window-title",
        "header-default-owner",
        "theme-mode-light",
        "theme-mode-dark",
        "theme-mode-system",
        "gallery-title",
        "gallery-show-less",
        "gallery-card-details",
        "gallery-card-code",
        "gallery-card-no-image",
        "gallery-empty",
        "modal-close",
        "modal-no-image",
        "modal-section-description",
        "modal-section-tech",
        "modal-section-skills",
        "modal-section-video",
        "modal-video-play",
        "modal-action-code",
        "modal-action-demo",
        "notification-config-load-error",
        "notification-config-save-error",
        "error-catalog-parse",
        "error-catalog-empty",
        "error-catalog-missing-embedded",
        "error-io",
    ];
    let keys_with_args: [(&str, &[(&str, &str)]); 7] = [
        ("gallery-show-all", &[("count", "6")]),
        ("modal-image-counter", &[("current", "2"), ("total", "5")]),
        ("modal-video-file", &[("path", "demo.mp4")]),
        ("notification-open-failed", &[("target", "https://example.com")]),
        ("notification-assets-missing", &[("count", "17")]),
        ("header-theme-button", &[("mode", "Dark")]),
        ("header-language-button", &[("locale", "fr")]),
    ];

    let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    for _ in 0..i18n.available_locales.len() {
        let locale = i18n.current_locale().to_string();
        for key in keys {
            assert!(
                !i18n.tr(key).starts_with("MISSING"),
                "{key} missing for {locale}"
            );
        }
        for (key, args) in keys_with_args {
            let owned: Vec<(&str, String)> = args
                .iter()
                .map(|(name, value)| (*name, (*value).to_string()))
                .collect();
            let text = i18n.tr_with_args(key, &owned);
            assert!(!text.starts_with("MISSING"), "{key} missing for {locale}");
            for (name, value) in args {
                assert!(
                    text.contains(value),
                    "{key} drops ${name} for {locale}: {text}"
                );
            }
        }
        i18n.cycle_locale();
    }
}
