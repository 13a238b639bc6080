// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery, the project modal and the header.

pub mod button;
pub mod container;
pub mod overlay;
pub mod tooltip;
