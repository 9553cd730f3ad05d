// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Project card surface. `alpha` carries the entrance animation opacity.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(with_alpha(
                palette.background.weak.color,
                alpha,
            ))),
            text_color: Some(with_alpha(palette.background.base.text, alpha)),
            border: Border {
                color: with_alpha(palette.background.strong.color, alpha),
                width: 1.0,
                radius: radius::XL.into(),
            },
            shadow: shadow::LG,
            ..Default::default()
        }
    }
}

/// Panel of the detail modal.
pub fn modal_panel(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base;
        container::Style {
            background: Some(Background::Color(with_alpha(base.color, alpha))),
            text_color: Some(with_alpha(base.text, alpha)),
            border: Border {
                color: with_alpha(palette::GRAY_700, alpha),
                width: 1.0,
                radius: radius::XL.into(),
            },
            shadow: shadow::LG,
            ..Default::default()
        }
    }
}

/// Dimmed layer behind the modal; `alpha` fades it in and out.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP * alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Frame around an image or its placeholder.
pub fn image_frame(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.strong.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small pill around a technology name.
pub fn tag(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_500
        })),
        text_color: Some(palette::PRIMARY_300),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Generic raised panel (info cards, tab bodies).
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Top bar. Gains a solid background and shadow once the page has scrolled.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        container::Style {
            background: Some(Background::Color(if scrolled {
                base
            } else {
                with_alpha(base, opacity::OVERLAY_STRONG)
            })),
            shadow: if scrolled { shadow::MD } else { shadow::NONE },
            ..Default::default()
        }
    }
}

/// Page background behind every screen.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface_page)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Error message box.
pub fn error(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        text_color: Some(palette::ERROR_500),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
