// SPDX-License-Identifier: MPL-2.0
//! Media handling for project screenshots.

pub mod remote_image;

pub use remote_image::{ImageCache, ImageEntry};
