// SPDX-License-Identifier: MPL-2.0
//! Declarative animation variants and time-based tweens.
//!
//! A [`Variants`] set maps a state name (`"hidden"`, `"hover"`, ...) to a
//! [`Variant`]: the [`Pose`] to reach and the [`Timing`] used to reach it.
//! Components pick a variant by their current state and start a [`Tween`]
//! from wherever the element currently is. Nothing here depends on a
//! rendering engine; the view samples [`Tween::at`] on every frame tick.

use std::collections::HashMap;
use std::time::{Duration, Instant};

pub const ROW_HIDDEN: &str = "hidden";
pub const ROW_VISIBLE: &str = "visible";
pub const ROW_EXIT: &str = "exit";
pub const TILE_NORMAL: &str = "normal";
pub const TILE_HOVER: &str = "hover";

/// Default duration of a tween without explicit timing.
pub const DEFAULT_TWEEN: Duration = Duration::from_millis(300);

/// Easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// How a variant is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Default for Timing {
    fn default() -> Self {
        Self::tween(DEFAULT_TWEEN)
    }
}

impl Timing {
    pub fn tween(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::EaseInOut,
        }
    }

    #[must_use]
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Animatable properties of an element.
///
/// `offset_x` is a fraction of the element's own width; `offset_y` is in
/// logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Pose {
    pub const REST: Pose = Pose {
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    #[must_use]
    pub fn lerp(self, to: Pose, t: f32) -> Pose {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Pose {
            offset_x: mix(self.offset_x, to.offset_x),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale),
            opacity: mix(self.opacity, to.opacity),
        }
    }
}

/// Target pose plus timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub pose: Pose,
    pub timing: Timing,
}

/// Named variants of one kind of element.
#[derive(Debug, Clone, Default)]
pub struct Variants {
    entries: HashMap<&'static str, Variant>,
}

impl Variants {
    #[must_use]
    pub fn with(mut self, name: &'static str, pose: Pose, timing: Timing) -> Self {
        self.entries.insert(name, Variant { pose, timing });
        self
    }

    pub fn get(&self, name: &str) -> Option<&Variant> {
        self.entries.get(name)
    }

    /// Pose of `name`, or the rest pose when the variant is unknown.
    pub fn pose(&self, name: &str) -> Pose {
        self.get(name).map(|v| v.pose).unwrap_or(Pose::REST)
    }
}

/// Slider row: enters from the right, leaves to the left.
pub fn row_variants(duration: Duration) -> Variants {
    let timing = Timing::tween(duration);
    Variants::default()
        .with(
            ROW_HIDDEN,
            Pose {
                offset_x: 1.0,
                ..Pose::REST
            },
            timing,
        )
        .with(ROW_VISIBLE, Pose::REST, timing)
        .with(
            ROW_EXIT,
            Pose {
                offset_x: -1.0,
                ..Pose::REST
            },
            timing,
        )
}

/// Slider tile: grows and lifts while hovered.
pub fn tile_variants() -> Variants {
    Variants::default()
        .with(TILE_NORMAL, Pose::REST, Timing::default())
        .with(
            TILE_HOVER,
            Pose {
                offset_y: -30.0,
                scale: 1.2,
                ..Pose::REST
            },
            hover_timing(),
        )
}

/// Caption under a tile: fades in while the tile is hovered.
pub fn caption_variants() -> Variants {
    Variants::default()
        .with(
            TILE_NORMAL,
            Pose {
                opacity: 0.0,
                ..Pose::REST
            },
            Timing::default(),
        )
        .with(TILE_HOVER, Pose::REST, hover_timing())
}

fn hover_timing() -> Timing {
    Timing::tween(Duration::from_millis(200)).delayed(Duration::from_millis(300))
}

/// A running interpolation between two poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: Pose,
    to: Pose,
    timing: Timing,
    started_at: Instant,
}

impl Tween {
    /// Starts moving from `from` towards `target`.
    pub fn start(from: Pose, target: &Variant, now: Instant) -> Self {
        Self {
            from,
            to: target.pose,
            timing: target.timing,
            started_at: now,
        }
    }

    /// A tween that is already at `pose`.
    pub fn settled(pose: Pose, now: Instant) -> Self {
        Self {
            from: pose,
            to: pose,
            timing: Timing {
                duration: Duration::ZERO,
                delay: Duration::ZERO,
                easing: Easing::Linear,
            },
            started_at: now,
        }
    }

    /// Restarts towards `target` from the pose currently shown.
    #[must_use]
    pub fn retarget(&self, target: &Variant, now: Instant) -> Self {
        Self::start(self.at(now), target, now)
    }

    pub fn target(&self) -> Pose {
        self.to
    }

    /// Linear progress in `[0, 1]`, delay excluded.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let Some(active) = elapsed.checked_sub(self.timing.delay) else {
            return 0.0;
        };
        if self.timing.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f32() / self.timing.duration.as_secs_f32()).min(1.0)
    }

    pub fn at(&self, now: Instant) -> Pose {
        let eased = self.timing.easing.apply(self.progress(now));
        self.from.lerp(self.to, eased)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.timing.total()
    }
}
