// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for short-lived feedback.
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - queuing and auto-dismiss
//! - [`toast`] - rendering in the bottom-right corner
//!
//! Success and info toasts disappear after ~3s, warnings after ~5s, errors
//! stay until dismissed. At most three are visible at once.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
