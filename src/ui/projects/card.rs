// SPDX-License-Identifier: MPL-2.0
//! Project summary card with an autoplaying image carousel.
//!
//! The card owns only its carousel cursor and hover flag. The autoplay timer
//! itself lives in the owner's subscription and is only present while the
//! record has more than one image; ticks received while hovered are ignored.

use crate::media::ImageCache;
use crate::projects::{ProjectId, ProjectRecord};
use crate::ui::animation::{self, CARD_STAGGER};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::projects::image_view;
use crate::ui::state::ImageCursor;
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Space, Stack};
use iced::{alignment, Element, Length, Padding};
use std::time::Duration;

/// Per-card state, keyed by record id in the owner.
#[derive(Debug, Clone)]
pub struct State {
    id: ProjectId,
    cursor: ImageCursor,
    hovered: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Autoplay interval elapsed.
    Tick,
    HoverChanged(bool),
    /// Indicator dot clicked.
    SelectImage(usize),
    ViewDetails,
    OpenLink(String),
}

/// Events propagated to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ViewDetails,
    OpenLink(String),
}

impl State {
    #[must_use]
    pub fn new(record: &ProjectRecord) -> Self {
        Self {
            id: record.id.clone(),
            cursor: ImageCursor::new(record.images.len()),
            hovered: false,
        }
    }

    /// Re-binds the card to a fresh copy of its record, keeping the cursor
    /// where it is when still in range.
    pub fn sync(&mut self, record: &ProjectRecord) {
        self.cursor.reset_len(record.images.len());
    }

    #[must_use]
    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    #[must_use]
    pub fn current_image(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the owner should keep an autoplay timer for this card.
    #[must_use]
    pub fn wants_autoplay(&self) -> bool {
        self.cursor.can_move()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Tick => {
                if !self.hovered {
                    self.cursor.next();
                }
                Event::None
            }
            Message::HoverChanged(hovered) => {
                self.hovered = hovered;
                Event::None
            }
            Message::SelectImage(index) => {
                self.cursor.select(index);
                Event::None
            }
            Message::ViewDetails => Event::ViewDetails,
            Message::OpenLink(url) => Event::OpenLink(url),
        }
    }
}

/// Contextual data needed to render a card.
pub struct ViewContext<'a> {
    pub record: &'a ProjectRecord,
    pub state: &'a State,
    /// Position in the grid; only staggers the entrance.
    pub index: usize,
    pub images: &'a ImageCache,
    /// Time since the collection appeared.
    pub elapsed: Duration,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let pose = animation::CARD
        .staggered(ctx.index, CARD_STAGGER)
        .pose_at(ctx.elapsed);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(build_media(&ctx))
        .push(build_body(&ctx));

    let card = Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card(pose.opacity));

    let hoverable = mouse_area(card)
        .on_enter(Message::HoverChanged(true))
        .on_exit(Message::HoverChanged(false));

    // The entrance slides up from `pose.y`.
    Container::new(hoverable)
        .padding(Padding::ZERO.top(pose.y.max(0.0)))
        .into()
}

fn build_media<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let record = ctx.record;
    let picture = image_view::project_image(
        record.image(ctx.state.current_image()),
        &record.name,
        ctx.images,
        sizing::CARD_IMAGE_HEIGHT,
    );

    // Clicking the picture opens the details; indicator buttons capture
    // their own clicks so they never reach this area.
    let clickable = mouse_area(picture).on_press(Message::ViewDetails);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .push(clickable);

    if ctx.state.wants_autoplay() {
        stack = stack.push(build_indicators(ctx));
    }

    stack.into()
}

fn build_indicators<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.state.current_image();
    let dots = (0..ctx.record.images.len()).fold(
        Row::new().spacing(spacing::XS),
        |row, i| {
            row.push(
                button(Space::new())
                    .width(Length::Fixed(sizing::INDICATOR))
                    .height(Length::Fixed(sizing::INDICATOR))
                    .padding(0)
                    .on_press(Message::SelectImage(i))
                    .style(styles::button::indicator(i == current)),
            )
        },
    );

    container(dots)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn build_body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let record = ctx.record;

    let title = text(&record.name).size(typography::TITLE_MD);
    let description = text(&record.description).size(typography::BODY);

    let tags = record.technology.iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, tech| row.push(image_view::tag(tech)),
    );

    let mut actions = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);
    if let Some(url) = record.live_url() {
        actions = actions.push(
            button(text("Live").size(typography::BODY))
                .on_press(Message::OpenLink(url.to_string()))
                .style(styles::button::outline),
        );
    }
    if let Some(url) = record.repo_url() {
        actions = actions.push(
            button(text("Code").size(typography::BODY))
                .on_press(Message::OpenLink(url.to_string()))
                .style(styles::button::outline),
        );
    }
    actions = actions.push(Space::new().width(Length::Fill)).push(
        button(text("View Details").size(typography::BODY))
            .on_press(Message::ViewDetails)
            .style(styles::button::primary),
    );

    Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(description)
        .push(tags.wrap())
        .push(actions)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::record::sample;

    #[test]
    fn ticks_advance_modulo_len() {
        let record = sample(1, 3);
        let mut card = State::new(&record);
        for k in 1..=7 {
            card.update(Message::Tick);
            assert_eq!(card.current_image(), k % 3);
        }
    }

    #[test]
    fn hover_suspends_ticks_without_resetting() {
        let record = sample(1, 3);
        let mut card = State::new(&record);
        card.update(Message::Tick);
        card.update(Message::HoverChanged(true));
        for _ in 0..10 {
            card.update(Message::Tick);
        }
        assert_eq!(card.current_image(), 1);

        card.update(Message::HoverChanged(false));
        assert_eq!(card.current_image(), 1);
        card.update(Message::Tick);
        assert_eq!(card.current_image(), 2);
    }

    #[test]
    fn indicator_click_sets_index_and_does_not_bubble() {
        let record = sample(1, 3);
        let mut card = State::new(&record);
        card.update(Message::Tick);
        card.update(Message::Tick);
        assert_eq!(card.current_image(), 2);

        let event = card.update(Message::SelectImage(0));
        assert_eq!(card.current_image(), 0);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn view_details_is_forwarded() {
        let mut card = State::new(&sample(1, 0));
        assert_eq!(card.update(Message::ViewDetails), Event::ViewDetails);
    }

    #[test]
    fn autoplay_only_with_several_images() {
        assert!(!State::new(&sample(1, 0)).wants_autoplay());
        assert!(!State::new(&sample(1, 1)).wants_autoplay());
        assert!(State::new(&sample(1, 2)).wants_autoplay());
    }

    #[test]
    fn sync_keeps_valid_cursor() {
        let mut card = State::new(&sample(1, 4));
        card.update(Message::SelectImage(3));
        card.sync(&sample(1, 4));
        assert_eq!(card.current_image(), 3);
        card.sync(&sample(1, 2));
        assert_eq!(card.current_image(), 0);
    }

    #[test]
    fn card_view_renders_with_and_without_links() {
        let mut record = sample(1, 3);
        let cache = ImageCache::new(8);
        let state = State::new(&record);
        drop(view(ViewContext {
            record: &record,
            state: &state,
            index: 0,
            images: &cache,
            elapsed: Duration::ZERO,
        }));

        record.links = Some(crate::projects::ProjectLinks {
            project: Some("https://live.test".into()),
            repo: None,
        });
        drop(view(ViewContext {
            record: &record,
            state: &state,
            index: 2,
            images: &cache,
            elapsed: Duration::from_secs(2),
        }));
    }
}
