// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal portfolio rendered as a native application
//! with the Iced GUI framework.
//!
//! It shows a hero banner, about, skills and contact screens, and a projects
//! gallery whose records are fetched from a JSON source, each with an
//! autoplaying image carousel and a tabbed detail modal.

pub mod app;
pub mod error;
pub mod logging;
pub mod media;
pub mod projects;
pub mod ui;
