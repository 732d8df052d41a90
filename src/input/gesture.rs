//! Press-to-release gesture tracking and tap classification.

use glam::Vec2;
use web_time::{Duration, Instant};

use crate::options::InputOptions;

/// Which device started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureSource {
    /// Primary mouse button drag.
    Mouse,
    /// Single-finger touch drag.
    Touch,
}

/// Limits under which a press/release pair counts as a tap instead of a
/// drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapThresholds {
    /// Maximum accumulated pointer travel in pixels.
    pub max_travel: f32,
    /// Maximum time between press and release.
    pub max_duration: Duration,
}

impl TapThresholds {
    /// Thresholds from the input options.
    #[must_use]
    pub fn from_options(options: &InputOptions) -> Self {
        Self {
            max_travel: options.tap_max_travel,
            max_duration: Duration::from_millis(options.tap_max_duration_ms),
        }
    }
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Short, nearly stationary press: eligible for hit testing.
    Tap {
        /// Release position in viewport pixels.
        at: Vec2,
    },
    /// Anything else. Never navigates.
    Drag,
}

/// Transient per-gesture record, alive from press to release.
#[derive(Debug, Clone)]
pub struct InputSession {
    source: GestureSource,
    last_pointer: Vec2,
    travelled: f32,
    started_at: Instant,
}

impl InputSession {
    /// Start a gesture at `at`.
    #[must_use]
    pub fn begin(source: GestureSource, at: Vec2) -> Self {
        Self {
            source,
            last_pointer: at,
            travelled: 0.0,
            started_at: Instant::now(),
        }
    }

    /// Device that owns this gesture.
    #[must_use]
    pub fn source(&self) -> GestureSource {
        self.source
    }

    /// Last pointer position seen by the gesture.
    #[must_use]
    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }

    /// Total path length so far, in pixels.
    #[must_use]
    pub fn travelled(&self) -> f32 {
        self.travelled
    }

    /// Move the pointer and return the delta since the previous position.
    pub fn advance(&mut self, to: Vec2) -> Vec2 {
        let delta = to - self.last_pointer;
        self.last_pointer = to;
        self.travelled += delta.length();
        delta
    }

    /// Consume the session and classify the release.
    #[must_use]
    pub fn finish(self, at: Vec2, thresholds: TapThresholds) -> Release {
        let travelled = self.travelled + (at - self.last_pointer).length();
        let quick = self.started_at.elapsed() <= thresholds.max_duration;
        if travelled <= thresholds.max_travel && quick {
            Release::Tap { at }
        } else {
            Release::Drag
        }
    }
}
