// SPDX-License-Identifier: MPL-2.0
//! Hands repository links, demo links and video files to the desktop.
//!
//! The update loop only sees the [`Launcher`] trait so handlers can be
//! exercised without spawning a browser or a media player.

use std::io;

/// Opens a URL or a local file with the user's default application.
pub trait Launcher {
    fn open(&self, target: &str) -> io::Result<()>;
}

/// Launcher backed by the platform opener (`xdg-open`, `open`, `start`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&self, target: &str) -> io::Result<()> {
        if target.trim().is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty target"));
        }
        // Returns once the opener is spawned; the child is not awaited.
        open::that_detached(target)
    }
}
