// SPDX-License-Identifier: MPL-2.0
//! Projects gallery: summary cards, the detail modal and the section that
//! owns them.

pub mod card;
pub mod image_view;
pub mod modal;
pub mod section;

pub use section::{Event, Message, Settings, State};
