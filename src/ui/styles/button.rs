// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button (Contact Me, View Details, Retry).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_600)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::ACCENT_600)),
            text_color: WHITE,
            border: Border {
                color: palette::ACCENT_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme, status),
    }
}

/// Outlined button (Download CV, Code, RESUME).
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.extended_palette().background.base.text;
    let (border_color, text_color, background) = match status {
        button::Status::Hovered | button::Status::Pressed => (
            palette::PRIMARY_400,
            palette::PRIMARY_400,
            Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            })),
        ),
        button::Status::Disabled => return disabled(theme, status),
        button::Status::Active => (palette::PRIMARY_500, text, None),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Flat text button used for navigation items and footer links.
pub fn link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base.text;
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
            _ if active => palette::PRIMARY_400,
            _ => base,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Tab header; the active tab is filled.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            return primary(theme, button::Status::Active);
        }
        let palette = theme.extended_palette();
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(palette.background.strong.color))
            }
            _ => Some(Background::Color(palette.background.weak.color)),
        };
        button::Style {
            background,
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round carousel indicator dot.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match (active, status) {
            (true, _) => opacity::OPAQUE,
            (false, button::Status::Hovered) => opacity::OVERLAY_STRONG,
            (false, _) => opacity::OVERLAY_MEDIUM,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Thumbnail frame; the selected one gets a brand border.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if selected {
            palette::PRIMARY_500
        } else if matches!(status, button::Status::Hovered) {
            palette::GRAY_400
        } else {
            Color::TRANSPARENT
        };
        button::Style {
            background: None,
            text_color: WHITE,
            border: Border {
                color,
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Style pour boutons overlay (navigation, play, etc.).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Grayed out, non-interactive.
pub fn disabled(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hover_differs_from_active() {
        let active = primary(&Theme::Dark, button::Status::Active);
        let hovered = primary(&Theme::Dark, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn active_indicator_is_opaque() {
        let style = indicator(true)(&Theme::Dark, button::Status::Active);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::OPAQUE),
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn selected_tab_uses_primary_fill() {
        let selected = tab(true)(&Theme::Light, button::Status::Hovered);
        let primary_active = primary(&Theme::Light, button::Status::Active);
        assert_eq!(selected.background, primary_active.background);
    }
}
