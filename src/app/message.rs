// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::project_modal;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Gallery(gallery::Message),
    Modal(project_modal::Message),
    /// Toast dismissals and the periodic auto-dismiss tick.
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog file, taking precedence over `[gallery] catalog`.
    pub catalog: Option<String>,
}
