//! Fade animation for the semi-selection indicator.
//!
//! A [`Fade`] is a pure value: it records where and when it started and
//! answers "what alpha now?" for any timestamp. Redirecting an in-flight
//! fade starts the new one from the current alpha, so the newest writer
//! always wins and the indicator never jumps.

use chrono::{DateTime, Duration as ChronoDuration, Utc};

/// Duration of the indicator fade.
pub const FADE_DURATION_MS: i64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    /// Towards fully opaque.
    In,
    /// Towards fully transparent.
    Out,
}

impl FadeDirection {
    fn target_alpha(self) -> f32 {
        match self {
            FadeDirection::In => 1.0,
            FadeDirection::Out => 0.0,
        }
    }
}

/// An in-flight (or settled) alpha transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    direction: FadeDirection,
    from_alpha: f32,
    started_at: DateTime<Utc>,
}

impl Fade {
    /// Start a fade from the direction's natural origin (0 for in, 1 for
    /// out).
    pub fn begin(direction: FadeDirection, now: DateTime<Utc>) -> Self {
        let from_alpha = match direction {
            FadeDirection::In => 0.0,
            FadeDirection::Out => 1.0,
        };
        Self {
            direction,
            from_alpha,
            started_at: now,
        }
    }

    /// Supersede this fade with one in `direction`, continuing from the
    /// current alpha.
    pub fn redirect(self, direction: FadeDirection, now: DateTime<Utc>) -> Self {
        Self {
            direction,
            from_alpha: self.alpha_at(now),
            started_at: now,
        }
    }

    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    /// Alpha at `now`, clamped to the target once the duration has passed.
    pub fn alpha_at(&self, now: DateTime<Utc>) -> f32 {
        let elapsed = (now - self.started_at)
            .num_milliseconds()
            .clamp(0, FADE_DURATION_MS);
        let progress = elapsed as f32 / FADE_DURATION_MS as f32;
        let target = self.direction.target_alpha();
        self.from_alpha + (target - self.from_alpha) * progress
    }

    /// Whether the fade has reached its target at `now`.
    pub fn is_settled(&self, now: DateTime<Utc>) -> bool {
        now - self.started_at >= ChronoDuration::milliseconds(FADE_DURATION_MS)
    }
}
