// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod scroll_guard;

pub use animated_spinner::AnimatedSpinner;
pub use scroll_guard::scroll_guard;
