// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes `Message`, `Event`, `update` and a `view` taking a `ViewContext`.
//!
//! - [`header`] - owner name with theme and language toggles
//! - [`gallery`] - project card grid with the expand toggle
//! - [`project_modal`] - project details overlay with the image carousel
//! - [`notifications`] - toast notifications for user feedback
//! - [`styles`] - centralized widget styles
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod header;
pub mod notifications;
pub mod project_modal;
pub mod styles;
pub mod theming;
