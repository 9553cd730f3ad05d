// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above a single page scrollable holding the current
//! screen. The project detail modal, when present, is stacked over both.

use super::{App, Message, Screen, PAGE_SCROLLABLE_ID};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::widgets::scroll_guard;
use crate::ui::{about, styles};
use iced::widget::scrollable::Viewport;
use iced::widget::{scrollable, Column, Container, Id, Stack, Text};
use iced::{Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        active: app.screen,
        drawer_open: app.drawer_open,
        scrolled: app.scrolled,
        theme_mode: app.theme_mode,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match app.screen {
        Screen::Home => app.banner.view().map(Message::Banner),
        Screen::About => about::view().map(Message::About),
        Screen::Skills => app.skills.view(app.now).map(Message::Skills),
        Screen::Projects => match &app.projects {
            Some(section) => section.view(app.now).map(Message::Projects),
            None => Text::new("").into(),
        },
        Screen::Contact => app.contact.view().map(Message::Contact),
    };

    let page = scrollable(Container::new(current_view).width(Length::Fill))
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.absolute_offset().y))
        .width(Length::Fill)
        .height(Length::Fill);

    let base = Container::new(
        Column::new()
            .push(navbar_view)
            .push(scroll_guard(page, app.page.is_locked())),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let overlay = app
        .projects
        .as_ref()
        .and_then(|section| section.modal_view(app.now))
        .map(|modal| modal.map(Message::Projects));

    match overlay {
        Some(modal) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(modal)
            .into(),
        None => base.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update;

    #[test]
    fn every_screen_renders() {
        let mut app = App::default();
        for screen in Screen::ALL {
            let _ = update::navigate(&mut app, screen);
            drop(view(&app));
        }
    }
}
