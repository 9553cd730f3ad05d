// SPDX-License-Identifier: MPL-2.0
//! Project data: record types and the repository that loads them.

pub mod record;
pub mod repository;

pub use record::{Achievement, ProjectId, ProjectImage, ProjectLinks, ProjectRecord};
pub use repository::{load, ProjectSource};
