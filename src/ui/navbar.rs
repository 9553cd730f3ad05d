// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for app-level navigation.
//!
//! Shows the brand, one link per screen, the resume button and a theme
//! toggle. A compact drawer repeats the links for narrow windows. The bar
//! switches to a solid background once the page has scrolled.

use crate::app::Screen;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Scroll offset (in pixels) past which the bar counts as scrolled.
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub active: Screen,
    pub drawer_open: bool,
    pub scrolled: bool,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleDrawer,
    CloseDrawer,
    Navigate(Screen),
    OpenResume,
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    OpenResume,
    CycleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, drawer_open: &mut bool) -> Event {
    match message {
        Message::ToggleDrawer => {
            *drawer_open = !*drawer_open;
            Event::None
        }
        Message::CloseDrawer => {
            *drawer_open = false;
            Event::None
        }
        Message::Navigate(screen) => {
            *drawer_open = false;
            Event::Navigate(screen)
        }
        Message::OpenResume => {
            *drawer_open = false;
            Event::OpenResume
        }
        Message::CycleTheme => Event::CycleTheme,
    }
}

/// Whether a page offset should render the scrolled style.
#[must_use]
pub fn is_scrolled(offset_y: f32) -> bool {
    offset_y > SCROLLED_THRESHOLD
}

/// Render the navigation bar.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.drawer_open {
        content = content.push(build_drawer(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar(ctx.scrolled))
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let brand = button(Text::new("Akash.").size(typography::TITLE_MD))
        .on_press(Message::Navigate(Screen::Home))
        .style(styles::button::link(false));

    let links = Screen::ALL.iter().fold(
        Row::new().spacing(spacing::XXS).align_y(Vertical::Center),
        |row, &screen| {
            row.push(
                button(Text::new(screen.label()).size(typography::BODY))
                    .on_press(Message::Navigate(screen))
                    .style(styles::button::link(screen == ctx.active)),
            )
        },
    );

    let theme_label = match ctx.theme_mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
        ThemeMode::System => "Auto",
    };

    let drawer_label = if ctx.drawer_open { "✕" } else { "☰" };

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::XS, spacing::LG])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(
            button(Text::new(theme_label).size(typography::CAPTION))
                .on_press(Message::CycleTheme)
                .style(styles::button::outline),
        )
        .push(
            button(Text::new("RESUME").size(typography::BODY))
                .on_press(Message::OpenResume)
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(drawer_label).size(typography::BODY_LG))
                .on_press(Message::ToggleDrawer)
                .style(styles::button::link(ctx.drawer_open)),
        );

    row.into()
}

/// Compact menu listing every screen plus the resume button.
fn build_drawer<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let items = Screen::ALL.iter().fold(
        Column::new().spacing(spacing::XXS),
        |col, &screen| {
            col.push(
                button(Text::new(screen.label()).size(typography::BODY_LG))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::SM])
                    .on_press(Message::Navigate(screen))
                    .style(styles::button::link(screen == ctx.active)),
            )
        },
    );

    let menu = items.push(
        button(Text::new("RESUME").size(typography::BODY))
            .width(Length::Fill)
            .on_press(Message::OpenResume)
            .style(styles::button::primary),
    );

    Container::new(menu)
        .width(Length::Fixed(sizing::DRAWER_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::panel)
        .align_x(Horizontal::Right)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(drawer_open: bool, scrolled: bool) -> ViewContext {
        ViewContext {
            active: Screen::Projects,
            drawer_open,
            scrolled,
            theme_mode: ThemeMode::System,
        }
    }

    #[test]
    fn navbar_view_renders() {
        drop(view(ctx(false, false)));
        drop(view(ctx(true, true)));
    }

    #[test]
    fn toggle_drawer_changes_state() {
        let mut drawer_open = false;
        assert_eq!(update(Message::ToggleDrawer, &mut drawer_open), Event::None);
        assert!(drawer_open);
        assert_eq!(update(Message::ToggleDrawer, &mut drawer_open), Event::None);
        assert!(!drawer_open);
    }

    #[test]
    fn navigation_closes_drawer_and_emits_event() {
        let mut drawer_open = true;
        let event = update(Message::Navigate(Screen::Skills), &mut drawer_open);
        assert!(!drawer_open);
        assert_eq!(event, Event::Navigate(Screen::Skills));

        drawer_open = true;
        assert_eq!(update(Message::OpenResume, &mut drawer_open), Event::OpenResume);
        assert!(!drawer_open);
    }

    #[test]
    fn theme_toggle_keeps_drawer() {
        let mut drawer_open = true;
        assert_eq!(update(Message::CycleTheme, &mut drawer_open), Event::CycleTheme);
        assert!(drawer_open);
    }

    #[test]
    fn scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLLED_THRESHOLD));
        assert!(is_scrolled(SCROLLED_THRESHOLD + 1.0));
    }
}
