// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`banner`] - Hero banner with the typewriter role line
//! - [`about`] - Profile paragraph and info cards
//! - [`skills`] - Skill categories in tabs
//! - [`projects`] - Project gallery, cards and the detail modal
//! - [`contact`] - Contact form and details
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (carousel cursor, scroll lock, timings, typewriter)
//! - [`animation`] - Data-only entrance/exit transitions
//! - [`widgets`] - Custom Iced widgets (spinner, scroll guard)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar with the compact drawer
//! - [`links`] - Opening outbound links
//! - [`profile`] - Static profile data

pub mod about;
pub mod animation;
pub mod banner;
pub mod contact;
pub mod design_tokens;
pub mod links;
pub mod navbar;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
