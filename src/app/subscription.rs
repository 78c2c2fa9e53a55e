// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, Screen};
use crate::ui::editor;
use crate::ui::notifications::NotificationMessage;
use iced::{event, time, Subscription};
use std::time::Duration;

/// How often visible toasts are checked for expiry.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// File drops are only handled on the editor screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Editor => event::listen_with(|event, _status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = event {
                return Some(Message::FileDropped(path));
            }
            None
        }),
        Screen::About => Subscription::none(),
    }
}

/// Ticks only while there are toasts to expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}

/// Animation frames for the sticker, whatever screen is shown.
pub fn create_sticker_subscription(editor: &editor::State) -> Subscription<Message> {
    editor.subscription().map(Message::Editor)
}
