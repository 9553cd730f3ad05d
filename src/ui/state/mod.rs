// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Small, pure state machines used by the views. None of them touch the
//! runtime; owners drive them from `update`.

pub mod carousel;
pub mod scroll_lock;
pub mod timing;
pub mod typewriter;

pub use carousel::ImageCursor;
pub use scroll_lock::{PageScroll, ScrollLock};
pub use timing::{CarouselInterval, CloseDelay};
pub use typewriter::Typewriter;
