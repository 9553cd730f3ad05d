// SPDX-License-Identifier: MPL-2.0
//! About screen: profile paragraph and quick info cards.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::profile;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, text, Column, Container, Row, Text},
    Element, Length,
};

const PARAGRAPHS: &[&str] = &[
    "I am a frontend-focused full stack developer who enjoys turning rough ideas \
     into polished, responsive interfaces.",
    "Most of my work is built on the MERN stack. I care about clean component \
     boundaries, predictable state and fast first loads.",
];

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    OpenLink(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenLink(String),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenLink(url) => Event::OpenLink(url),
    }
}

/// Label, value and optional link target of each info card.
fn info_items() -> [(&'static str, &'static str, Option<String>); 4] {
    [
        ("Email", profile::EMAIL, Some(format!("mailto:{}", profile::EMAIL))),
        (
            "Phone",
            profile::PHONE,
            Some(format!("tel:{}", profile::PHONE.replace([' ', '-'], ""))),
        ),
        ("Location", profile::LOCATION, None),
        ("Speciality", profile::SPECIALITY, None),
    ]
}

#[must_use]
pub fn view<'a>() -> Element<'a, Message> {
    let title = Text::new("About Me").size(typography::TITLE_LG);

    let paragraphs = PARAGRAPHS.iter().fold(
        Column::new().spacing(spacing::SM),
        |col, paragraph| col.push(text(*paragraph).size(typography::BODY_LG)),
    );

    let cards = info_items()
        .into_iter()
        .fold(Row::new().spacing(spacing::MD), |row, (label, value, link)| {
            row.push(build_info_card(label, value, link))
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .push(title)
        .push(paragraphs)
        .push(cards.wrap());

    Container::new(content).center_x(Length::Fill).into()
}

fn build_info_card<'a>(
    label: &'static str,
    value: &'static str,
    link: Option<String>,
) -> Element<'a, Message> {
    let value: Element<'a, Message> = match link {
        Some(url) => button(text(value).size(typography::BODY_LG))
            .padding(0)
            .on_press(Message::OpenLink(url))
            .style(styles::button::link(false))
            .into(),
        None => text(value).size(typography::BODY_LG).into(),
    };

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(text(label).size(typography::CAPTION))
            .push(value),
    )
    .padding(spacing::MD)
    .width(Length::Fixed(240.0))
    .style(styles::container::panel)
    .into()
}
