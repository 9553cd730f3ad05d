// SPDX-License-Identifier: MPL-2.0
//! Projects section: loads the collection, renders one card per record and
//! hosts at most one detail modal.
//!
//! The section is mounted when the Projects screen is entered and dropped
//! when it is left. Dropping it aborts the in-flight fetch, removes every
//! card timer from the subscription and releases the modal's scroll lock.

use crate::app::config::ProjectsConfig;
use crate::error::FetchError;
use crate::media::{remote_image, ImageCache};
use crate::projects::{self, ProjectId, ProjectRecord, ProjectSource};
use crate::ui::animation;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::projects::{card, modal};
use crate::ui::state::{CarouselInterval, CloseDelay, PageScroll};
use crate::ui::styles;
use crate::ui::widgets::{animated_spinner, AnimatedSpinner};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, task, time, Element, Length, Padding, Subscription, Task};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

pub const HEADING: &str = "My Projects";
pub const SUBTITLE: &str = "A selection of things I have designed and built.";
pub const EMPTY_MESSAGE: &str = "No projects to show yet.";

/// Values the section reads from configuration when mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub source: ProjectSource,
    pub carousel_interval: CarouselInterval,
    pub close_delay: CloseDelay,
    pub image_cache_entries: usize,
}

impl From<&ProjectsConfig> for Settings {
    fn from(config: &ProjectsConfig) -> Self {
        Self {
            source: config.source(),
            carousel_interval: config.carousel_interval(),
            close_delay: config.close_delay(),
            image_cache_entries: config.image_cache_entries(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&ProjectsConfig::default())
    }
}

/// Tag of one load attempt; results carrying an older tag are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestId(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Load {
    Loading { since: Instant },
    Failed(String),
    Ready { since: Instant },
}

pub struct State {
    settings: Settings,
    load: Load,
    mounted_at: Instant,
    projects: Vec<Arc<ProjectRecord>>,
    cards: HashMap<ProjectId, card::State>,
    modal: Option<modal::State>,
    request: RequestId,
    fetch: Option<task::Handle>,
    image_fetch: Option<task::Handle>,
    images: ImageCache,
    page: PageScroll,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(RequestId, Result<Vec<ProjectRecord>, FetchError>),
    Retry,
    Card(ProjectId, card::Message),
    Modal(modal::Message),
    ImageLoaded(String, Result<iced::widget::image::Handle, FetchError>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenLink(String),
}

impl State {
    /// Mounts the section and starts the first load.
    pub fn mount(settings: Settings, page: PageScroll) -> (Self, Task<Message>) {
        let now = Instant::now();
        let mut state = Self {
            images: ImageCache::new(settings.image_cache_entries),
            settings,
            load: Load::Loading { since: now },
            mounted_at: now,
            projects: Vec::new(),
            cards: HashMap::new(),
            modal: None,
            request: RequestId::default(),
            fetch: None,
            image_fetch: None,
            page,
        };
        let task = state.start_load();
        (state, task)
    }

    fn start_load(&mut self) -> Task<Message> {
        self.request = RequestId(self.request.0 + 1);
        self.load = Load::Loading {
            since: Instant::now(),
        };

        let request = self.request;
        let (task, handle) = Task::perform(projects::load(self.settings.source.clone()), move |r| {
            Message::Loaded(request, r)
        })
        .abortable();
        // Replacing the handle aborts a previous attempt still in flight.
        self.fetch = Some(handle.abort_on_drop());
        task
    }

    #[must_use]
    pub fn load_state(&self) -> &Load {
        &self.load
    }

    /// Tag of the attempt currently awaited, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<RequestId> {
        matches!(self.load, Load::Loading { .. }).then_some(self.request)
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.load {
            Load::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn projects(&self) -> &[Arc<ProjectRecord>] {
        &self.projects
    }

    #[must_use]
    pub fn card(&self, id: &ProjectId) -> Option<&card::State> {
        self.cards.get(id)
    }

    #[must_use]
    pub fn modal(&self) -> Option<&modal::State> {
        self.modal.as_ref()
    }

    /// Id of the record bound to the open modal.
    #[must_use]
    pub fn selected(&self) -> Option<&ProjectId> {
        self.modal.as_ref().map(|modal| &modal.record().id)
    }

    #[must_use]
    pub fn images(&self) -> &ImageCache {
        &self.images
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::Loaded(request, result) => {
                if request != self.request || !matches!(self.load, Load::Loading { .. }) {
                    tracing::debug!(?request, "discarding stale project load");
                    return (Event::None, Task::none());
                }
                self.fetch = None;
                match result {
                    Ok(records) => (Event::None, self.apply_records(records)),
                    Err(err) => {
                        self.load = Load::Failed(err.user_message().to_string());
                        (Event::None, Task::none())
                    }
                }
            }
            Message::Retry => {
                if matches!(self.load, Load::Failed(_)) {
                    tracing::info!("retrying project load");
                    (Event::None, self.start_load())
                } else {
                    (Event::None, Task::none())
                }
            }
            Message::Card(id, message) => {
                let Some(card) = self.cards.get_mut(&id) else {
                    return (Event::None, Task::none());
                };
                match card.update(message) {
                    card::Event::None => (Event::None, Task::none()),
                    card::Event::OpenLink(url) => (Event::OpenLink(url), Task::none()),
                    card::Event::ViewDetails => (Event::None, self.select(&id)),
                }
            }
            Message::Modal(message) => {
                let Some(modal) = self.modal.as_mut() else {
                    return (Event::None, Task::none());
                };
                match modal.update(message) {
                    modal::Event::None => (Event::None, Task::none()),
                    modal::Event::OpenLink(url) => (Event::OpenLink(url), Task::none()),
                    modal::Event::Closed => {
                        self.modal = None;
                        (Event::None, Task::none())
                    }
                }
            }
            Message::ImageLoaded(url, result) => {
                if let Err(err) = &result {
                    tracing::debug!(%url, error = %err, "project image unavailable");
                }
                self.images.complete(url, result);
                (Event::None, Task::none())
            }
        }
    }

    fn apply_records(&mut self, records: Vec<ProjectRecord>) -> Task<Message> {
        self.projects = records.into_iter().map(Arc::new).collect();

        // Keep per-card state for ids that survive, drop the rest.
        let mut cards = std::mem::take(&mut self.cards);
        self.cards = self
            .projects
            .iter()
            .map(|record| {
                let state = match cards.remove(&record.id) {
                    Some(mut existing) => {
                        existing.sync(record);
                        existing
                    }
                    None => card::State::new(record),
                };
                (record.id.clone(), state)
            })
            .collect();

        self.load = Load::Ready {
            since: Instant::now(),
        };
        self.fetch_images()
    }

    fn fetch_images(&mut self) -> Task<Message> {
        let distinct: HashSet<&str> = self
            .projects
            .iter()
            .flat_map(|record| record.images.iter().map(|picture| picture.url.as_str()))
            .collect();
        self.images.reserve(distinct.len());

        let mut tasks = Vec::new();
        for record in &self.projects {
            for picture in &record.images {
                if self.images.request(&picture.url) {
                    let url = picture.url.clone();
                    tasks.push(Task::perform(
                        remote_image::fetch(url.clone()),
                        move |result| Message::ImageLoaded(url.clone(), result),
                    ));
                }
            }
        }
        if tasks.is_empty() {
            return Task::none();
        }

        let (task, handle) = Task::batch(tasks).abortable();
        self.image_fetch = Some(handle.abort_on_drop());
        task
    }

    /// Binds the modal to `id`. A modal already open is replaced.
    fn select(&mut self, id: &ProjectId) -> Task<Message> {
        let Some(record) = self.projects.iter().find(|r| &r.id == id).cloned() else {
            return Task::none();
        };
        // Release the previous modal (and its lock) before mounting.
        self.modal = None;
        let (modal, task) = modal::State::new(record, &self.page, self.settings.close_delay);
        self.modal = Some(modal);
        task.map(Message::Modal)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let interval = self.settings.carousel_interval.as_duration();
        let timers = self
            .cards
            .values()
            .filter(|card| card.wants_autoplay())
            .map(|card| {
                time::every(interval)
                    .with(card.id().clone())
                    .map(|(id, _)| Message::Card(id, card::Message::Tick))
            });

        let modal = self
            .modal
            .as_ref()
            .map_or_else(Subscription::none, |m| m.subscription().map(Message::Modal));

        Subscription::batch(timers.chain(std::iter::once(modal)))
    }

    /// Whether any entrance transition or spinner still needs frames.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        let header =
            !animation::HEADER.is_settled(now.saturating_duration_since(self.mounted_at));
        let body = match self.load {
            Load::Loading { .. } => true,
            Load::Failed(_) => false,
            Load::Ready { since } => self.projects.len().checked_sub(1).is_some_and(|last| {
                !animation::CARD
                    .staggered(last, animation::CARD_STAGGER)
                    .is_settled(now.saturating_duration_since(since))
            }),
        };
        let modal = self.modal.as_ref().is_some_and(|m| m.is_animating(now));
        header || body || modal
    }

    pub fn view(&self, now: Instant) -> Element<'_, Message> {
        let pose = animation::HEADER.pose_at(now.saturating_duration_since(self.mounted_at));

        let header = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(text(HEADING).size(typography::TITLE_LG))
            .push(text(SUBTITLE).size(typography::BODY_LG));

        let header = Container::new(header)
            .center_x(Length::Fill)
            .padding(Padding::ZERO.top((-pose.y).max(0.0)));

        let body: Element<'_, Message> = match &self.load {
            Load::Loading { since } => {
                let spinner = AnimatedSpinner::new(
                    palette::PRIMARY_500,
                    animated_spinner::rotation_at(now.saturating_duration_since(*since)),
                )
                .size(sizing::ICON_XL)
                .into_element();
                Column::new()
                    .spacing(spacing::SM)
                    .align_x(alignment::Horizontal::Center)
                    .push(spinner)
                    .push(text("Loading projects…").size(typography::BODY))
                    .into()
            }
            Load::Failed(message) => Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(
                    container(text(message.as_str()).size(typography::BODY_LG))
                        .padding(spacing::MD)
                        .style(styles::container::error),
                )
                .push(
                    button(text("Retry").size(typography::BODY))
                        .on_press(Message::Retry)
                        .style(styles::button::primary),
                )
                .into(),
            Load::Ready { since } => self.build_grid(now.saturating_duration_since(*since)),
        };

        Column::new()
            .spacing(spacing::XL)
            .padding(spacing::XL)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .push(header)
            .push(body)
            .into()
    }

    fn build_grid(&self, elapsed: std::time::Duration) -> Element<'_, Message> {
        if self.projects.is_empty() {
            return text(EMPTY_MESSAGE).size(typography::BODY_LG).into();
        }

        let grid = self
            .projects
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let state = self.cards.get(&record.id)?;
                let id = record.id.clone();
                let element = card::view(card::ViewContext {
                    record,
                    state,
                    index,
                    images: &self.images,
                    elapsed,
                })
                .map(move |message| Message::Card(id.clone(), message));
                Some(element)
            })
            .fold(
                Row::new().spacing(spacing::LG),
                |row, element| row.push(element),
            );

        Container::new(grid.wrap())
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .into()
    }

    /// The detail overlay, rendered by the host above the whole page.
    pub fn modal_view(&self, now: Instant) -> Option<Element<'_, Message>> {
        self.modal.as_ref().map(|state| {
            modal::view(modal::ViewContext {
                state,
                images: &self.images,
                now,
            })
            .map(Message::Modal)
        })
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("load", &self.load)
            .field("projects", &self.projects.len())
            .field("selected", &self.selected())
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}
