// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are only routed while the project modal is open; the
//! notification tick only runs while toasts are on screen.

use super::Message;
use crate::ui::{notifications::NotificationMessage, project_modal};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::{Duration, Instant};

/// Routes Escape and the arrow keys to the modal while it is open.
pub fn create_keyboard_subscription(modal_open: bool) -> Subscription<Message> {
    if !modal_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if let event::Status::Captured = status {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                modal_shortcut(&key).map(Message::Modal)
            }
            _ => None,
        }
    })
}

/// Maps a pressed key to a modal action.
pub fn modal_shortcut(key: &Key) -> Option<project_modal::Message> {
    match key {
        Key::Named(Named::Escape) => Some(project_modal::Message::Close),
        Key::Named(Named::ArrowLeft) => Some(project_modal::Message::Previous),
        Key::Named(Named::ArrowRight) => Some(project_modal::Message::Next),
        _ => None,
    }
}

fn tick_message(_now: Instant) -> Message {
    Message::Notification(NotificationMessage::Tick)
}

/// Periodic tick for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(200)).map(tick_message)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_and_arrows_navigate() {
        assert!(matches!(
            modal_shortcut(&Key::Named(Named::Escape)),
            Some(project_modal::Message::Close)
        ));
        assert!(matches!(
            modal_shortcut(&Key::Named(Named::ArrowLeft)),
            Some(project_modal::Message::Previous)
        ));
        assert!(matches!(
            modal_shortcut(&Key::Named(Named::ArrowRight)),
            Some(project_modal::Message::Next)
        ));
    }

    #[test]
    fn tick_is_routed_to_the_notification_manager() {
        assert!(matches!(
            tick_message(Instant::now()),
            Message::Notification(NotificationMessage::Tick)
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(modal_shortcut(&Key::Named(Named::Enter)).is_none());
        assert!(modal_shortcut(&Key::Character("a".into())).is_none());
    }
}
