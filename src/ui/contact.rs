// SPDX-License-Identifier: MPL-2.0
//! Contact screen: a small form that hands the message to the mail client,
//! plus the direct contact details.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::links;
use crate::ui::profile;
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Row};
use iced::{alignment::Horizontal, Element, Length};

pub const INVALID_FORM: &str = "Please fill in every field with a valid email address.";
pub const SENT: &str = "Your mail client should open with the message ready to send.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Invalid,
    Sent,
}

#[derive(Debug, Clone)]
pub struct State {
    name: String,
    email: String,
    message: String,
    status: Status,
}

#[derive(Debug, Clone)]
pub enum Message {
    Edit(Field, String),
    Submit,
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenLink(String),
}

impl Default for State {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            status: Status::Idle,
        }
    }
}

impl State {
    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Every field filled, and something that looks like an address.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.message.trim().is_empty()
            && self.email.trim().contains('@')
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Edit(field, value) => {
                match field {
                    Field::Name => self.name = value,
                    Field::Email => self.email = value,
                    Field::Message => self.message = value,
                }
                self.status = Status::Idle;
                Event::None
            }
            Message::Submit => {
                if !self.is_valid() {
                    self.status = Status::Invalid;
                    return Event::None;
                }
                let subject = format!("Portfolio contact from {}", self.name.trim());
                let body = format!("{}\n\nReply to: {}", self.message.trim(), self.email.trim());
                match links::mailto(profile::EMAIL, &subject, &body) {
                    Some(url) => {
                        *self = Self {
                            status: Status::Sent,
                            ..Self::default()
                        };
                        Event::OpenLink(url.to_string())
                    }
                    None => {
                        tracing::warn!("could not build mailto link");
                        self.status = Status::Invalid;
                        Event::None
                    }
                }
            }
            Message::OpenLink(url) => Event::OpenLink(url),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let form = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fixed(420.0))
            .push(
                text_input("Your name", &self.name)
                    .on_input(|v| Message::Edit(Field::Name, v))
                    .padding(spacing::XS),
            )
            .push(
                text_input("Your email", &self.email)
                    .on_input(|v| Message::Edit(Field::Email, v))
                    .padding(spacing::XS),
            )
            .push(
                text_input("Your message", &self.message)
                    .on_input(|v| Message::Edit(Field::Message, v))
                    .on_submit(Message::Submit)
                    .padding(spacing::XS),
            )
            .push(
                button(text("Send Message").size(typography::BODY_LG))
                    .padding([spacing::XS, spacing::LG])
                    .on_press(Message::Submit)
                    .style(styles::button::primary),
            );

        let form = match self.status {
            Status::Idle => form,
            Status::Invalid => form.push(
                text(INVALID_FORM)
                    .size(typography::BODY)
                    .color(palette::ERROR_500),
            ),
            Status::Sent => form.push(
                text(SENT)
                    .size(typography::BODY)
                    .color(palette::SUCCESS_500),
            ),
        };

        let details = [
            ("Email", profile::EMAIL, format!("mailto:{}", profile::EMAIL)),
            (
                "Phone",
                profile::PHONE,
                format!("tel:{}", profile::PHONE.replace([' ', '-'], "")),
            ),
        ]
        .into_iter()
        .fold(Column::new().spacing(spacing::SM), |col, (label, value, url)| {
            col.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(text(label).size(typography::CAPTION))
                    .push(
                        button(text(value).size(typography::BODY_LG))
                            .padding(0)
                            .on_press(Message::OpenLink(url))
                            .style(styles::button::link(false)),
                    ),
            )
        })
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(text("Location").size(typography::CAPTION))
                .push(text(profile::LOCATION).size(typography::BODY_LG)),
        );

        let body = Row::new()
            .spacing(spacing::XL)
            .push(form)
            .push(Container::new(details).padding(spacing::MD).style(styles::container::panel));

        Container::new(
            Column::new()
                .spacing(spacing::LG)
                .padding(spacing::XL)
                .align_x(Horizontal::Center)
                .push(text("Get In Touch").size(typography::TITLE_LG))
                .push(body.wrap()),
        )
        .center_x(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        let mut form = State::default();
        form.update(Message::Edit(Field::Name, "Ada".into()));
        form.update(Message::Edit(Field::Email, "ada@site.test".into()));
        form.update(Message::Edit(Field::Message, "Hello there".into()));
        form
    }

    #[test]
    fn empty_form_is_rejected() {
        let mut form = State::default();
        assert_eq!(form.update(Message::Submit), Event::None);
        assert_eq!(form.status(), &Status::Invalid);
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut form = filled();
        form.update(Message::Edit(Field::Email, "ada.site.test".into()));
        assert!(!form.is_valid());
    }

    #[test]
    fn valid_form_opens_mailto_and_resets() {
        let mut form = filled();
        let Event::OpenLink(url) = form.update(Message::Submit) else {
            panic!("expected a link");
        };
        assert!(url.starts_with(&format!("mailto:{}", profile::EMAIL)));
        assert!(url.contains("subject=Portfolio+contact+from+Ada"));
        assert_eq!(form.status(), &Status::Sent);
        assert!(!form.is_valid());
    }

    #[test]
    fn editing_clears_status() {
        let mut form = State::default();
        form.update(Message::Submit);
        form.update(Message::Edit(Field::Name, "A".into()));
        assert_eq!(form.status(), &Status::Idle);
    }

    #[test]
    fn contact_view_renders() {
        let mut form = State::default();
        drop(form.view());
        form.update(Message::Submit);
        drop(form.view());
    }
}
