use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
/// Deferred transition delays, in seconds.
pub struct TimingOptions {
    /// Intro screen dwell before the cube appears.
    #[schemars(title = "Intro Dwell", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub intro_dwell: f32,
    /// Intro dwell used while reduced motion is enabled.
    #[schemars(skip)]
    pub intro_dwell_reduced: f32,
    /// Delay before auto-rotation resumes after a wheel spin.
    #[schemars(title = "Wheel Resume", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub wheel_resume: f32,
    /// Delay before the loading overlay is hidden.
    #[schemars(skip)]
    pub loader_hide: f32,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            intro_dwell: 3.0,
            intro_dwell_reduced: 0.5,
            wheel_resume: 2.0,
            loader_hide: 1.5,
        }
    }
}

impl TimingOptions {
    /// Intro dwell for the given reduced-motion preference.
    #[must_use]
    pub fn intro_dwell_for(&self, reduce_motion: bool) -> Duration {
        let secs = if reduce_motion {
            self.intro_dwell_reduced
        } else {
            self.intro_dwell
        };
        secs_to_duration(secs)
    }

    /// Wheel auto-rotate suspension length.
    #[must_use]
    pub fn wheel_resume_duration(&self) -> Duration {
        secs_to_duration(self.wheel_resume)
    }

    /// Loader overlay lifetime.
    #[must_use]
    pub fn loader_hide_duration(&self) -> Duration {
        secs_to_duration(self.loader_hide)
    }
}

/// Negative or non-finite values collapse to zero.
fn secs_to_duration(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or(Duration::ZERO)
}
