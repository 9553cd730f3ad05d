// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.
//!
//! Every timer here is conditional: it is only part of the returned
//! subscription while its owner exists, so dropping the owner (or leaving
//! the screen) cancels it.

use super::{App, Message, Screen};
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// Frame period used while a transition is running.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn subscription(app: &App, now: Instant) -> Subscription<Message> {
    Subscription::batch([
        create_typewriter_subscription(app),
        create_tick_subscription(is_animating(app, now)),
        create_projects_subscription(app),
    ])
}

fn is_animating(app: &App, now: Instant) -> bool {
    match app.screen {
        Screen::Projects => app.projects.as_ref().is_some_and(|p| p.is_animating(now)),
        Screen::Skills => app.skills.is_animating(now),
        Screen::Home | Screen::About | Screen::Contact => false,
    }
}

/// The banner types only while it is on screen.
fn create_typewriter_subscription(app: &App) -> Subscription<Message> {
    if app.screen == Screen::Home {
        app.banner.subscription().map(Message::Banner)
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription that refreshes the view clock while
/// something is animating.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Card autoplay timers, the modal close timer and modal shortcuts.
fn create_projects_subscription(app: &App) -> Subscription<Message> {
    app.projects
        .as_ref()
        .map_or_else(Subscription::none, |section| {
            section.subscription().map(Message::Projects)
        })
}
