use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Orientation smoothing and auto-rotation parameters.
pub struct MotionOptions {
    /// Disable smoothing and continuous rotation.
    #[schemars(title = "Reduce Motion")]
    pub reduce_motion: bool,
    /// Fraction of the remaining target gap closed per frame.
    #[schemars(title = "Smoothing", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub smoothing: f32,
    /// Yaw added to the target per frame while auto-rotating (radians).
    #[schemars(title = "Auto-Rotate Speed", range(min = 0.0, max = 0.05), extend("step" = 0.001))]
    pub auto_rotate_speed: f32,
    /// Initial pitch of the cube (radians).
    #[schemars(skip)]
    pub initial_pitch: f32,
    /// Initial yaw of the cube (radians).
    #[schemars(skip)]
    pub initial_yaw: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            smoothing: 0.1,
            auto_rotate_speed: 0.005,
            initial_pitch: 0.2,
            initial_yaw: 0.0,
        }
    }
}
