// SPDX-License-Identifier: MPL-2.0
//! Shared look of the portfolio: colors, spacing, sizes, type scale, radii
//! and shadows. Views never hard-code these values.
//!
//! ```
//! use iced::Color;
//! use iced_folio::ui::design_tokens::{opacity, palette};
//!
//! let backdrop = Color { a: opacity::BACKDROP, ..palette::BLACK };
//! assert!(backdrop.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.012, 0.027, 0.071);
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Brand: blue to purple
    pub const PRIMARY_300: Color = Color::from_rgb(0.576, 0.773, 0.992);
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980);
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const ACCENT_500: Color = Color::from_rgb(0.659, 0.333, 0.969);
    pub const ACCENT_600: Color = Color::from_rgb(0.576, 0.200, 0.918);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Modal backdrop once fully faded in.
    pub const BACKDROP: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    //! Multiples of a 4px step.
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    pub const CARD_WIDTH: f32 = 340.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 190.0;
    /// Dots under a card image.
    pub const INDICATOR: f32 = 10.0;

    pub const MODAL_MAX_WIDTH: f32 = 960.0;
    pub const MODAL_IMAGE_HEIGHT: f32 = 380.0;
    pub const THUMBNAIL_WIDTH: f32 = 96.0;
    pub const THUMBNAIL_HEIGHT: f32 = 60.0;

    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const DRAWER_WIDTH: f32 = 260.0;
}

pub mod typography {
    //! Font sizes, from page headings down to captions.

    /// Hero name in the banner
    pub const DISPLAY: f32 = 44.0;

    /// Section headings (My Projects, Contact...)
    pub const TITLE_LG: f32 = 34.0;

    /// Card and modal titles
    pub const TITLE_MD: f32 = 22.0;

    /// Sub-headings inside a section
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Tags, counters, small labels
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    /// Pill shape.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
    };
}

// Checked at compile time.
const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::THUMBNAIL_HEIGHT < sizing::MODAL_IMAGE_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_colors_lean_blue_and_purple() {
        assert!(palette::PRIMARY_500.b > palette::PRIMARY_500.r);
        assert!(palette::ACCENT_500.r > palette::ACCENT_500.g);
    }
}
