use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Per-modality sensitivities and tap disambiguation thresholds.
pub struct InputOptions {
    /// Mouse drag sensitivity (radians per pixel).
    #[schemars(title = "Pointer Sensitivity", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub pointer_sensitivity: f32,
    /// Touch drag sensitivity (radians per pixel).
    #[schemars(title = "Touch Sensitivity", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub touch_sensitivity: f32,
    /// Wheel sensitivity (radians of yaw per unit of vertical scroll).
    #[schemars(title = "Wheel Sensitivity", range(min = 0.0005, max = 0.01), extend("step" = 0.0005))]
    pub wheel_sensitivity: f32,
    /// Maximum pointer travel (pixels) for a release to count as a tap.
    #[schemars(skip)]
    pub tap_max_travel: f32,
    /// Maximum press duration (milliseconds) for a release to count as a
    /// tap.
    #[schemars(skip)]
    pub tap_max_duration_ms: u64,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            pointer_sensitivity: 0.01,
            touch_sensitivity: 0.01,
            wheel_sensitivity: 0.003,
            tap_max_travel: 6.0,
            tap_max_duration_ms: 500,
        }
    }
}
