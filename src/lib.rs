// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a portfolio project gallery built with the Iced GUI framework.
//!
//! It shows a bounded preview of project cards that expands on demand, and a
//! modal viewer with an image carousel for the selected project. Projects come
//! from a TOML catalog; UI strings are localized with Fluent.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
