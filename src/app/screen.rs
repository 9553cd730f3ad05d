// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and hash-anchor routing.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Screen {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Screen {
    /// Navbar order.
    pub const ALL: [Screen; 5] = [
        Screen::Home,
        Screen::About,
        Screen::Skills,
        Screen::Projects,
        Screen::Contact,
    ];

    /// Resolves a hash anchor such as `#projects`. The leading `#` is
    /// optional; unknown anchors fall back to [`Screen::Home`].
    #[must_use]
    pub fn from_hash(anchor: &str) -> Self {
        let name = anchor.trim().trim_start_matches('#');
        Self::ALL
            .into_iter()
            .find(|screen| screen.hash()[1..].eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn hash(self) -> &'static str {
        match self {
            Screen::Home => "#home",
            Screen::About => "#about",
            Screen::Skills => "#skills",
            Screen::Projects => "#projects",
            Screen::Contact => "#contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::About => "About",
            Screen::Skills => "Skills",
            Screen::Projects => "Projects",
            Screen::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_resolves_from_its_own_hash() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_hash(screen.hash()), screen);
        }
    }

    #[test]
    fn hash_prefix_and_case_are_optional() {
        assert_eq!(Screen::from_hash("projects"), Screen::Projects);
        assert_eq!(Screen::from_hash("#Contact"), Screen::Contact);
    }

    #[test]
    fn unknown_anchor_falls_back_to_home() {
        assert_eq!(Screen::from_hash("#blog"), Screen::Home);
        assert_eq!(Screen::from_hash(""), Screen::Home);
    }
}
