// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{persistence, App, Message, Screen, PAGE_SCROLLABLE_ID};
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::banner::Event as BannerEvent;
use crate::ui::contact::Event as ContactEvent;
use crate::ui::links;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::projects::{self, Event as ProjectsEvent};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    app.now = Instant::now();

    match message {
        Message::Navbar(message) => handle_navbar(app, message),
        Message::Banner(message) => match app.banner.update(message) {
            BannerEvent::None => Task::none(),
            BannerEvent::Navigate(screen) => navigate(app, screen),
            BannerEvent::DownloadCv => {
                links::open_external(app.config.profile.resume_url());
                Task::none()
            }
            BannerEvent::OpenLink(url) => {
                links::open_external(&url);
                Task::none()
            }
        },
        Message::About(message) => {
            let AboutEvent::OpenLink(url) = about::update(message);
            links::open_external(&url);
            Task::none()
        }
        Message::Skills(message) => {
            app.skills.update(message);
            Task::none()
        }
        Message::Contact(message) => {
            if let ContactEvent::OpenLink(url) = app.contact.update(message) {
                links::open_external(&url);
            }
            Task::none()
        }
        Message::Projects(message) => handle_projects(app, message),
        Message::Tick(now) => {
            app.now = now;
            Task::none()
        }
        Message::PageScrolled(offset) => {
            app.scrolled = navbar::is_scrolled(offset);
            Task::none()
        }
    }
}

fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, &mut app.drawer_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(screen) => navigate(app, screen),
        NavbarEvent::OpenResume => {
            links::open_external(app.config.profile.resume_url());
            Task::none()
        }
        NavbarEvent::CycleTheme => {
            app.theme_mode = app.theme_mode.cycle();
            persistence::persist_theme(&mut app.config, app.theme_mode);
            Task::none()
        }
    }
}

fn handle_projects(app: &mut App, message: projects::Message) -> Task<Message> {
    // Results addressed to a section that has since been dropped.
    let Some(section) = app.projects.as_mut() else {
        tracing::trace!("projects message without a mounted section");
        return Task::none();
    };

    let (event, task) = section.update(message);
    if let ProjectsEvent::OpenLink(url) = event {
        links::open_external(&url);
    }
    task.map(Message::Projects)
}

/// Switches screens. Entering Projects mounts the section (and starts its
/// fetch); leaving it drops the section, aborting whatever it had pending.
pub(super) fn navigate(app: &mut App, screen: Screen) -> Task<Message> {
    let scroll_top = operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset::START);

    if app.screen == screen && (screen != Screen::Projects || app.projects.is_some()) {
        return scroll_top;
    }

    tracing::debug!(from = ?app.screen, to = ?screen, "navigating");
    app.screen = screen;
    app.drawer_open = false;
    app.scrolled = false;

    if screen != Screen::Projects {
        app.projects = None;
        return scroll_top;
    }

    let (section, task) = projects::State::mount(app.projects_settings.clone(), app.page.clone());
    app.projects = Some(section);
    Task::batch([scroll_top, task.map(Message::Projects)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::record::sample;
    use crate::projects::ProjectId;
    use crate::ui::projects::{card, modal};

    fn on_projects() -> App {
        let mut app = App::default();
        let _task = navigate(&mut app, Screen::Projects);
        app
    }

    fn load(app: &mut App, records: Vec<crate::projects::ProjectRecord>) {
        let request = app
            .projects()
            .and_then(projects::State::pending_request)
            .expect("section is loading");
        let _ = update(
            app,
            Message::Projects(projects::Message::Loaded(request, Ok(records))),
        );
    }

    #[test]
    fn entering_projects_mounts_section() {
        let app = on_projects();
        assert_eq!(app.screen(), Screen::Projects);
        assert!(app.projects().is_some());
    }

    #[test]
    fn leaving_projects_unmounts_section_and_unlocks_page() {
        let mut app = on_projects();
        load(&mut app, vec![sample(1, 2)]);
        let _ = update(
            &mut app,
            Message::Projects(projects::Message::Card(
                ProjectId::from(1),
                card::Message::ViewDetails,
            )),
        );
        assert!(app.is_page_locked());

        let _ = update(&mut app, Message::Navbar(navbar::Message::Navigate(Screen::About)));
        assert!(app.projects().is_none());
        assert!(!app.is_page_locked());
    }

    #[test]
    fn messages_for_dropped_section_are_ignored() {
        let mut app = App::default();
        let _ = update(
            &mut app,
            Message::Projects(projects::Message::Modal(modal::Message::RequestClose)),
        );
        assert!(app.projects().is_none());
    }

    #[test]
    fn reentering_projects_starts_a_fresh_load() {
        let mut app = on_projects();
        load(&mut app, vec![sample(1, 0)]);
        let _ = navigate(&mut app, Screen::Home);
        let _ = navigate(&mut app, Screen::Projects);
        let section = app.projects().expect("mounted again");
        assert!(section.pending_request().is_some());
        assert!(section.projects().is_empty());
    }

    #[test]
    fn page_scroll_sets_navbar_flag() {
        let mut app = App::default();
        let _ = update(&mut app, Message::PageScrolled(120.0));
        assert!(app.is_scrolled());
        let _ = update(&mut app, Message::PageScrolled(0.0));
        assert!(!app.is_scrolled());
    }

    #[test]
    fn theme_toggle_cycles() {
        let mut app = App::default();
        let before = app.theme_mode();
        let _ = update(&mut app, Message::Navbar(navbar::Message::CycleTheme));
        assert_eq!(app.theme_mode(), before.cycle());
    }

    #[test]
    fn contact_me_switches_screen() {
        let mut app = App::default();
        let _ = update(
            &mut app,
            Message::Banner(crate::ui::banner::Message::ContactMe),
        );
        assert_eq!(app.screen(), Screen::Contact);
    }
}
