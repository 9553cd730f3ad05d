// SPDX-License-Identifier: MPL-2.0
//! Static profile data shown across the portfolio screens.

pub const NAME: &str = "Akash Ahamed";
pub const GREETING: &str = "Hi, I'm";
pub const TAGLINE: &str =
    "I build fast, accessible web applications with React, Node.js and MongoDB.";

/// Roles cycled by the banner typewriter.
pub const ROLES: &[&str] = &[
    "Frontend Developer",
    "React Specialist",
    "MERN Stack Developer",
    "Full Stack Engineer",
];

pub const EMAIL: &str = "akashahamed.dev@gmail.com";
pub const PHONE: &str = "+880 1733-596607";
pub const LOCATION: &str = "Dhaka, Bangladesh";
pub const SPECIALITY: &str = "MERN Stack Development";

/// Label and URL of each social profile.
pub const SOCIALS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/akash-ahamed"),
    ("LinkedIn", "https://www.linkedin.com/in/akash-ahamed"),
    ("X", "https://x.com/akash_ahamed"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::links::external_url;

    #[test]
    fn every_social_link_is_openable() {
        for (label, url) in SOCIALS {
            assert!(external_url(url).is_some(), "{label} link is invalid");
        }
    }
}
