// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the portfolio screens.
//!
//! The `App` struct wires together the screens (banner, about, skills,
//! projects, contact), the navbar and persisted preferences, and translates
//! component events into side effects like opening links or saving the theme.
//! The projects section only exists while its screen is shown.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::ui::projects::{self, Settings as ProjectsSettings};
use crate::ui::state::PageScroll;
use crate::ui::theming::ThemeMode;
use crate::ui::{banner, contact, skills};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Id of the scrollable hosting the current screen.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    config: Config,
    theme_mode: ThemeMode,
    /// Settings handed to the projects section each time it mounts.
    projects_settings: ProjectsSettings,
    /// Mounted only while the Projects screen is active.
    projects: Option<projects::State>,
    /// Shared with overlays that freeze the page.
    page: PageScroll,
    drawer_open: bool,
    /// Whether the page is scrolled past the navbar threshold.
    scrolled: bool,
    banner: banner::State,
    skills: skills::State,
    contact: contact::State,
    /// Clock used by views for transitions; refreshed on every update.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("projects", &self.projects)
            .field("page_locked", &self.page.is_locked())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl App {
    fn with_config(config: Config) -> Self {
        Self {
            screen: Screen::Home,
            theme_mode: config.general.theme_mode,
            projects_settings: ProjectsSettings::from(&config.projects),
            config,
            projects: None,
            page: PageScroll::new(),
            drawer_open: false,
            scrolled: false,
            banner: banner::State::default(),
            skills: skills::State::default(),
            contact: contact::State::default(),
            now: Instant::now(),
        }
    }

    /// Initializes application state from the persisted config and the CLI
    /// flags, then navigates to the requested route.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let mut app = Self::with_config(config);
        if let Some(source) = flags.projects.as_deref() {
            app.projects_settings.source = crate::projects::ProjectSource::parse(source);
        }
        tracing::info!(source = %app.projects_settings.source, "project source");

        let route = flags
            .route
            .as_deref()
            .map(Screen::from_hash)
            .unwrap_or_default();
        let task = update::navigate(&mut app, route);
        (app, task)
    }

    fn title(&self) -> String {
        format!("Akash Ahamed | {}", self.screen.label())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self, Instant::now())
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn projects(&self) -> Option<&projects::State> {
        self.projects.as_ref()
    }

    #[must_use]
    pub fn is_page_locked(&self) -> bool {
        self.page.is_locked()
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }
}
