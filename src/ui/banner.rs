// SPDX-License-Identifier: MPL-2.0
//! Hero banner with the typewriter role line.

use crate::app::Screen;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::profile;
use crate::ui::state::typewriter::{Typewriter, CURSOR};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row};
use iced::{alignment::Horizontal, time, Element, Length, Subscription};

#[derive(Debug, Clone)]
pub struct State {
    typewriter: Typewriter,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// One typewriter step is due.
    Advance,
    ContactMe,
    DownloadCv,
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    DownloadCv,
    OpenLink(String),
}

impl Default for State {
    fn default() -> Self {
        Self {
            typewriter: Typewriter::new(profile::ROLES),
        }
    }
}

impl State {
    #[must_use]
    pub fn typed(&self) -> &'static str {
        self.typewriter.text()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Advance => {
                self.typewriter.advance();
                Event::None
            }
            Message::ContactMe => Event::Navigate(Screen::Contact),
            Message::DownloadCv => Event::DownloadCv,
            Message::OpenLink(url) => Event::OpenLink(url),
        }
    }

    /// The period follows the current phase, so the timer is replaced
    /// whenever typing turns into holding or deleting.
    pub fn subscription(&self) -> Subscription<Message> {
        time::every(self.typewriter.step_delay()).map(|_| Message::Advance)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let role = Row::new()
            .push(text(self.typed()).size(typography::TITLE_LG))
            .push(text(CURSOR.to_string()).size(typography::TITLE_LG));

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(text("Contact Me").size(typography::BODY_LG))
                    .padding([spacing::XS, spacing::LG])
                    .on_press(Message::ContactMe)
                    .style(styles::button::primary),
            )
            .push(
                button(text("Download CV").size(typography::BODY_LG))
                    .padding([spacing::XS, spacing::LG])
                    .on_press(Message::DownloadCv)
                    .style(styles::button::outline),
            );

        let socials = profile::SOCIALS.iter().fold(
            Row::new().spacing(spacing::XS),
            |row, (label, url)| {
                row.push(
                    button(text(*label).size(typography::BODY))
                        .on_press(Message::OpenLink((*url).to_string()))
                        .style(styles::button::link(false)),
                )
            },
        );

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(text(profile::GREETING).size(typography::TITLE_MD))
            .push(text(profile::NAME).size(typography::DISPLAY))
            .push(role)
            .push(text(profile::TAGLINE).size(typography::BODY_LG))
            .push(actions)
            .push(socials);

        Container::new(content)
            .padding(spacing::XXL)
            .center_x(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_types_first_role() {
        let mut banner = State::default();
        assert_eq!(banner.typed(), "");
        for _ in 0..3 {
            banner.update(Message::Advance);
        }
        assert_eq!(banner.typed(), &profile::ROLES[0][..3]);
    }

    #[test]
    fn contact_me_navigates_to_contact() {
        let mut banner = State::default();
        assert_eq!(
            banner.update(Message::ContactMe),
            Event::Navigate(Screen::Contact)
        );
        assert_eq!(banner.update(Message::DownloadCv), Event::DownloadCv);
    }

    #[test]
    fn banner_view_renders() {
        drop(State::default().view());
    }
}
