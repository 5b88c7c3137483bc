// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, Route};
use iced::keyboard::{self, key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Frame interval of running animations (about 60 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Window resizes and the Escape key, which closes the detail overlay.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(Message::Navigate(Route::Home)),
        _ => None,
    })
}

/// Frame ticks, only while something is moving.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
