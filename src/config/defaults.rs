// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Preview card count before expansion
//! - **Cards**: Tech badge truncation on project cards

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of project cards shown before the gallery is expanded.
pub const DEFAULT_PREVIEW_COUNT: usize = 4;

/// Upper bound accepted for `preview_count` in `settings.toml`.
pub const MAX_PREVIEW_COUNT: usize = 64;

// ==========================================================================
// Card Defaults
// ==========================================================================

/// Number of tech badges shown on a card before the `+N` overflow badge.
pub const DEFAULT_TECH_PREVIEW_COUNT: usize = 3;

/// Upper bound accepted for `tech_preview_count`.
pub const MAX_TECH_PREVIEW_COUNT: usize = 12;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_PREVIEW_COUNT <= MAX_PREVIEW_COUNT);
    assert!(DEFAULT_TECH_PREVIEW_COUNT > 0);
    assert!(DEFAULT_TECH_PREVIEW_COUNT <= MAX_TECH_PREVIEW_COUNT);
};
