// SPDX-License-Identifier: MPL-2.0
//! Project detail overlay.
//!
//! Lifecycle: the owner creates the state (mount), the returned task marks
//! it open on the next update, and a close request runs in two phases:
//! `is_open` drops to `false` immediately so the exit transition can play,
//! then a keyed timer fires once after the close delay and the modal emits
//! [`Event::Closed`]. The owner drops the state on that event, which also
//! releases the page scroll lock held by the modal.

use crate::media::ImageCache;
use crate::projects::ProjectRecord;
use crate::ui::animation;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::projects::image_view;
use crate::ui::state::{CloseDelay, ImageCursor, PageScroll, ScrollLock};
use crate::ui::styles;
use iced::widget::{
    button, container, mouse_area, opaque, scrollable, text, Column, Container, Row, Space,
    Stack,
};
use iced::{alignment, event, keyboard, time, window, Element, Length, Padding};
use iced::{Subscription, Task};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Identity of one modal instance, used to key its close timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(u64);

impl ModalId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Features,
    Challenges,
    Metrics,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Features, Tab::Challenges, Tab::Metrics];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Features => "Features",
            Tab::Challenges => "Challenges",
            Tab::Metrics => "Metrics",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// Mounted, entrance not started yet.
    Mounted,
    Open { since: Instant },
    Closing { since: Instant },
    /// Close delay elapsed and `Closed` was emitted.
    Closed,
}

#[derive(Debug)]
pub struct State {
    id: ModalId,
    record: Arc<ProjectRecord>,
    cursor: ImageCursor,
    phase: Phase,
    tab: Tab,
    tab_since: Option<Instant>,
    fullscreen: bool,
    close_delay: CloseDelay,
    _scroll: ScrollLock,
}

#[derive(Debug, Clone)]
pub enum Message {
    Opened(Instant),
    NextImage,
    PrevImage,
    /// Thumbnail clicked.
    SelectImage(usize),
    SelectTab(Tab),
    ToggleFullscreen,
    RequestClose,
    CloseDelayElapsed(ModalId),
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Close delay elapsed; the owner must drop the modal now.
    Closed,
    OpenLink(String),
}

impl State {
    /// Mounts a modal for `record`, locking the page scroll until dropped.
    pub fn new(
        record: Arc<ProjectRecord>,
        page: &PageScroll,
        close_delay: CloseDelay,
    ) -> (Self, Task<Message>) {
        let state = Self {
            id: ModalId::next(),
            cursor: ImageCursor::new(record.images.len()),
            record,
            phase: Phase::Mounted,
            tab: Tab::default(),
            tab_since: None,
            fullscreen: false,
            close_delay,
            _scroll: page.lock(),
        };
        tracing::debug!(project = %state.record.id, "detail modal mounted");
        (state, Task::done(()).map(|()| Message::Opened(Instant::now())))
    }

    #[must_use]
    pub fn id(&self) -> ModalId {
        self.id
    }

    #[must_use]
    pub fn record(&self) -> &Arc<ProjectRecord> {
        &self.record
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    /// Whether a close was requested (and possibly completed).
    #[must_use]
    pub fn is_closing(&self) -> bool {
        matches!(self.phase, Phase::Closing { .. } | Phase::Closed)
    }

    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn current_image(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Fullscreen only makes sense with a gallery to browse.
    #[must_use]
    pub fn can_toggle_fullscreen(&self) -> bool {
        self.cursor.can_move()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Opened(now) => {
                if self.phase == Phase::Mounted {
                    self.phase = Phase::Open { since: now };
                }
            }
            Message::NextImage => self.cursor.next(),
            Message::PrevImage => self.cursor.prev(),
            Message::SelectImage(index) => self.cursor.select(index),
            Message::SelectTab(tab) => {
                if tab != self.tab {
                    self.tab = tab;
                    self.tab_since = Some(Instant::now());
                }
            }
            Message::ToggleFullscreen => {
                if self.can_toggle_fullscreen() {
                    self.fullscreen = !self.fullscreen;
                }
            }
            Message::RequestClose => {
                if matches!(self.phase, Phase::Mounted | Phase::Open { .. }) {
                    tracing::debug!(project = %self.record.id, "detail modal closing");
                    self.phase = Phase::Closing {
                        since: Instant::now(),
                    };
                }
            }
            Message::CloseDelayElapsed(id) => {
                if id == self.id && matches!(self.phase, Phase::Closing { .. }) {
                    self.phase = Phase::Closed;
                    return Event::Closed;
                }
            }
            Message::OpenLink(url) => return Event::OpenLink(url),
        }
        Event::None
    }

    /// Keyboard shortcuts while open, and the close timer while closing.
    pub fn subscription(&self) -> Subscription<Message> {
        match self.phase {
            Phase::Mounted | Phase::Open { .. } => event::listen_with(handle_key),
            Phase::Closing { .. } => time::every(self.close_delay.as_duration())
                .with(self.id)
                .map(|(id, _)| Message::CloseDelayElapsed(id)),
            Phase::Closed => Subscription::none(),
        }
    }

    /// Panel opacity for the entrance/exit transition.
    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Mounted | Phase::Closed => 0.0,
            Phase::Open { since } => {
                animation::MODAL
                    .pose_at(now.saturating_duration_since(since))
                    .opacity
            }
            Phase::Closing { since } => {
                animation::MODAL
                    .exit_pose_at(now.saturating_duration_since(since))
                    .opacity
            }
        }
    }

    /// Whether the transition still needs frames.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        let tab_moving = self
            .tab_since
            .is_some_and(|since| {
                !animation::TAB.is_settled(now.saturating_duration_since(since))
            });
        match self.phase {
            Phase::Mounted => true,
            Phase::Open { since } => {
                !animation::MODAL.is_settled(now.saturating_duration_since(since)) || tab_moving
            }
            Phase::Closing { .. } => true,
            Phase::Closed => false,
        }
    }
}

fn handle_key(
    event: iced::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => shortcut(&key, status),
        _ => None,
    }
}

/// Escape always closes; the arrows only browse when no widget used the key.
fn shortcut(key: &keyboard::Key, status: event::Status) -> Option<Message> {
    use keyboard::key::Named;

    match key.as_ref() {
        keyboard::Key::Named(Named::Escape) => Some(Message::RequestClose),
        _ if status == event::Status::Captured => None,
        keyboard::Key::Named(Named::ArrowLeft) => Some(Message::PrevImage),
        keyboard::Key::Named(Named::ArrowRight) => Some(Message::NextImage),
        _ => None,
    }
}

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub images: &'a ImageCache,
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let alpha = state.opacity_at(ctx.now);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(build_header(state))
        .push(build_stage(&ctx));

    if state.cursor.can_move() {
        content = content.push(build_thumbnails(&ctx));
    }

    if !state.fullscreen {
        content = content
            .push(build_tab_bar(state))
            .push(build_tab_body(&ctx))
            .push(build_footer(state));
    }

    let panel_width = if state.fullscreen {
        Length::Fill
    } else {
        Length::Fixed(sizing::MODAL_MAX_WIDTH)
    };

    let panel = Container::new(scrollable(content.padding(spacing::LG)))
        .width(panel_width)
        .max_height(if state.fullscreen { f32::INFINITY } else { 760.0 })
        .style(styles::container::modal_panel(alpha));

    // Clicks on the panel stop here; clicks on the backdrop close.
    let backdrop = Container::new(opaque(panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(if state.fullscreen {
            spacing::MD
        } else {
            spacing::XL
        })
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::backdrop(alpha));

    opaque(mouse_area(backdrop).on_press(Message::RequestClose))
}

fn build_header<'a>(state: &'a State) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text(&state.record.name).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill));

    if state.can_toggle_fullscreen() {
        let label = if state.fullscreen {
            "Exit Fullscreen"
        } else {
            "Fullscreen"
        };
        row = row.push(
            button(text(label).size(typography::BODY))
                .on_press(Message::ToggleFullscreen)
                .style(styles::button::outline),
        );
    }

    row.push(
        button(text("✕").size(typography::BODY_LG))
            .on_press(Message::RequestClose)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_STRONG,
            )),
    )
    .into()
}

fn build_stage<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let height = if state.fullscreen {
        sizing::MODAL_IMAGE_HEIGHT * 1.6
    } else {
        sizing::MODAL_IMAGE_HEIGHT
    };

    let picture = image_view::project_image(
        state.record.image(state.current_image()),
        &state.record.name,
        ctx.images,
        height,
    );

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .push(picture);

    if state.cursor.can_move() {
        let nav_style = || {
            styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_STRONG,
            )
        };
        let arrows = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(
                button(text("‹").size(typography::TITLE_MD))
                    .on_press(Message::PrevImage)
                    .style(nav_style()),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(text("›").size(typography::TITLE_MD))
                    .on_press(Message::NextImage)
                    .style(nav_style()),
            );

        let counter = container(
            text(format!(
                "{} / {}",
                state.current_image() + 1,
                state.cursor.len()
            ))
            .size(typography::CAPTION),
        )
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::tag);

        stack = stack
            .push(
                container(arrows)
                    .height(Length::Fill)
                    .padding(spacing::SM)
                    .align_y(alignment::Vertical::Center),
            )
            .push(
                container(counter)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(spacing::SM)
                    .align_x(alignment::Horizontal::Right)
                    .align_y(alignment::Vertical::Bottom),
            );
    }

    stack.into()
}

fn build_thumbnails<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let current = state.current_image();
    let row = state.record.images.iter().enumerate().fold(
        Row::new().spacing(spacing::XS),
        |row, (i, picture)| {
            let thumb = container(image_view::project_image(
                Some(picture),
                &state.record.name,
                ctx.images,
                sizing::THUMBNAIL_HEIGHT,
            ))
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH));
            row.push(
                button(thumb)
                    .padding(spacing::XXS)
                    .on_press(Message::SelectImage(i))
                    .style(styles::button::thumbnail(i == current)),
            )
        },
    );

    scrollable(row)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .into()
}

fn build_tab_bar<'a>(state: &'a State) -> Element<'a, Message> {
    Tab::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &tab| {
            row.push(
                button(text(tab.label()).size(typography::BODY))
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::SelectTab(tab))
                    .style(styles::button::tab(tab == state.tab)),
            )
        })
        .into()
}

fn build_tab_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let record = state.record.as_ref();
    let body = match state.tab {
        Tab::Overview => overview_tab(record),
        Tab::Features => features_tab(record),
        Tab::Challenges => challenges_tab(record),
        Tab::Metrics => metrics_tab(record),
    };

    let shift = state
        .tab_since
        .map_or(0.0, |since| {
            animation::TAB
                .pose_at(ctx.now.saturating_duration_since(since))
                .x
        });

    Container::new(body)
        .width(Length::Fill)
        .padding(Padding::ZERO.left(shift.max(0.0)))
        .into()
}

fn heading<'a>(label: &'a str) -> Element<'a, Message> {
    text(label).size(typography::TITLE_SM).into()
}

fn bullet_list<'a>(items: &'a [String]) -> Element<'a, Message> {
    items
        .iter()
        .fold(Column::new().spacing(spacing::XS), |col, item| {
            col.push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(text("•").size(typography::BODY))
                    .push(text(item).size(typography::BODY)),
            )
        })
        .into()
}

fn info_card<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::XXS)
            .push(text(label).size(typography::CAPTION))
            .push(text(value).size(typography::BODY_LG)),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn overview_tab(record: &ProjectRecord) -> Element<'_, Message> {
    let mut col = Column::new()
        .spacing(spacing::MD)
        .push(text(&record.description).size(typography::BODY_LG));

    let mut facts = Row::new().spacing(spacing::SM);
    if let Some(timeline) = &record.timeline {
        facts = facts.push(info_card("Timeline", timeline));
    }
    if let Some(team) = &record.team_size {
        facts = facts.push(info_card("Team Size", team));
    }
    col = col.push(facts);

    let tags = record
        .technology
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, tech| {
            row.push(image_view::tag(tech))
        });

    col.push(heading("Technologies")).push(tags.wrap()).into()
}

fn features_tab(record: &ProjectRecord) -> Element<'_, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(heading("Key Features"))
        .push(bullet_list(&record.key_features))
        .into()
}

fn challenges_tab(record: &ProjectRecord) -> Element<'_, Message> {
    let mut col = Column::new().spacing(spacing::SM);
    if let Some(challenges) = &record.challenges {
        col = col
            .push(heading("Challenges Faced"))
            .push(bullet_list(challenges));
    }
    if let Some(solutions) = &record.solutions {
        col = col
            .push(heading("Solutions Implemented"))
            .push(bullet_list(solutions));
    }
    if record.challenges.is_none() && record.solutions.is_none() {
        col = col.push(heading("Challenges Faced"));
    }
    col.into()
}

fn metrics_tab(record: &ProjectRecord) -> Element<'_, Message> {
    let achievements = record.achievements.as_deref().unwrap_or_default();
    let cards = achievements
        .iter()
        .fold(Column::new().spacing(spacing::SM), |col, item| {
            col.push(info_card(&item.title, &item.description))
        });

    Column::new()
        .spacing(spacing::SM)
        .push(heading("Project Metrics"))
        .push(cards)
        .into()
}

fn build_footer<'a>(state: &'a State) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM);
    if let Some(url) = state.record.live_url() {
        row = row.push(
            button(text("Live Demo").size(typography::BODY))
                .on_press(Message::OpenLink(url.to_string()))
                .style(styles::button::primary),
        );
    }
    if let Some(url) = state.record.repo_url() {
        row = row.push(
            button(text("Source Code").size(typography::BODY))
                .on_press(Message::OpenLink(url.to_string()))
                .style(styles::button::outline),
        );
    }
    row.into()
}
