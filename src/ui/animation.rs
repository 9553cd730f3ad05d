// SPDX-License-Identifier: MPL-2.0
//! Entrance and exit animation variants.
//!
//! A [`Variant`] is plain data: two poses and a timing. Views sample it with
//! [`Variant::pose_at`] using the time elapsed since the element appeared and
//! map the resulting [`Pose`] onto widget properties (opacity, offsets).
//! Interpolation is linear.

use std::time::Duration;

/// Visual state of an element at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Horizontal offset in logical pixels.
    pub x: f32,
    /// Vertical offset in logical pixels.
    pub y: f32,
    pub scale: f32,
}

impl Pose {
    pub const VISIBLE: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    fn lerp(self, to: Pose, t: f32) -> Pose {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }
}

/// Hidden and visible poses plus the transition timing between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub hidden: Pose,
    pub visible: Pose,
    pub delay: Duration,
    pub duration: Duration,
}

impl Variant {
    /// Progress of the entrance in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Pose of an element that appeared `elapsed` ago.
    #[must_use]
    pub fn pose_at(&self, elapsed: Duration) -> Pose {
        self.hidden.lerp(self.visible, self.progress(elapsed))
    }

    /// Pose of an element that started leaving `elapsed` ago.
    #[must_use]
    pub fn exit_pose_at(&self, elapsed: Duration) -> Pose {
        self.visible.lerp(self.hidden, self.progress(elapsed))
    }

    #[must_use]
    pub fn is_settled(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }

    /// Same variant delayed by `index * step`, for list entrances.
    #[must_use]
    pub fn staggered(self, index: usize, step: Duration) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            delay: self.delay + step.saturating_mul(index),
            ..self
        }
    }
}

/// Delay added per card position in the project grid.
pub const CARD_STAGGER: Duration = Duration::from_millis(150);

/// Project card entrance.
pub const CARD: Variant = Variant {
    hidden: Pose {
        opacity: 0.0,
        x: 0.0,
        y: 50.0,
        scale: 0.95,
    },
    visible: Pose::VISIBLE,
    delay: Duration::ZERO,
    duration: Duration::from_millis(500),
};

/// Detail modal panel, used for both entrance and exit.
pub const MODAL: Variant = Variant {
    hidden: Pose {
        opacity: 0.0,
        x: 0.0,
        y: 0.0,
        scale: 0.95,
    },
    visible: Pose::VISIBLE,
    delay: Duration::ZERO,
    duration: Duration::from_millis(300),
};

/// Tab body swap inside the modal.
pub const TAB: Variant = Variant {
    hidden: Pose {
        opacity: 0.0,
        x: 10.0,
        y: 0.0,
        scale: 1.0,
    },
    visible: Pose::VISIBLE,
    delay: Duration::ZERO,
    duration: Duration::from_millis(200),
};

/// Section heading entrance.
pub const HEADER: Variant = Variant {
    hidden: Pose {
        opacity: 0.0,
        x: 0.0,
        y: -30.0,
        scale: 1.0,
    },
    visible: Pose::VISIBLE,
    delay: Duration::ZERO,
    duration: Duration::from_millis(800),
};
