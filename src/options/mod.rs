//! Centralized runtime options with TOML preset support.
//!
//! Every tunable (smoothing, sensitivities, camera, face table, timers,
//! keybindings) is consolidated here. Options serialize to/from TOML so a
//! deployment can restyle the cube without recompiling.

mod camera;
mod faces;
mod input;
mod keybindings;
mod motion;
mod timing;

use std::path::Path;

pub use camera::CameraOptions;
pub use faces::{hex_to_rgb, FaceDescriptor, FaceOptions, FACE_COUNT};
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
pub use motion::MotionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::FaceCubeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[motion]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Smoothing and auto-rotation.
    pub motion: MotionOptions,
    /// Input sensitivities and tap thresholds.
    pub input: InputOptions,
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Face descriptors and snap angles.
    #[schemars(skip)]
    pub faces: FaceOptions,
    /// Transition delays.
    pub timing: TimingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string and validate the face table.
    pub fn from_toml(content: &str) -> Result<Self, FaceCubeError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| FaceCubeError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        opts.validate()?;
        Ok(opts)
    }

    /// Check cross-field invariants (currently the face table).
    pub fn validate(&self) -> Result<(), FaceCubeError> {
        self.faces.validate()
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FaceCubeError> {
        let content = std::fs::read_to_string(path).map_err(FaceCubeError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FaceCubeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FaceCubeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FaceCubeError::Io)?;
        }
        std::fs::write(path, content).map_err(FaceCubeError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[motion]
reduce_motion = true
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert!(opts.motion.reduce_motion);
        // Everything else should be default
        assert_eq!(opts.motion.smoothing, 0.1);
        assert_eq!(opts.input.wheel_sensitivity, 0.003);
        assert_eq!(opts.faces.count(), FACE_COUNT);
    }

    #[test]
    fn wrong_face_count_is_rejected() {
        let toml_str = r#"
[faces]
face_angles = [0.0]
"#;
        let err = Options::from_toml(toml_str).unwrap_err();
        assert!(matches!(err, FaceCubeError::InvalidFaces(_)));
    }

    #[test]
    fn misnumbered_face_is_rejected() {
        let mut faces = FaceOptions::default();
        faces.faces[2].index = 5;
        assert!(faces.validate().is_err());
    }

    #[test]
    fn face_angles_follow_custom_schedule() {
        use std::f32::consts::PI;
        let faces = FaceOptions::default();
        assert_eq!(faces.angle(0), Some(PI / 4.0));
        assert_eq!(faces.angle(3), Some(PI / 4.0 + PI * 1.2));
        assert_eq!(faces.angle(6), None);
    }

    #[test]
    fn hex_colors_split_into_channels() {
        let [r, g, b] = hex_to_rgb(0x00ff_8000);
        assert_eq!(r, 1.0);
        assert!((g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(b, 0.0);
    }

    #[test]
    fn keybinding_lookup_survives_reload() {
        use crate::input::KeyAction;
        let toml_str = r#"
[keybindings.bindings]
close_page = "Backspace"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("Backspace"),
            Some(KeyAction::ClosePage)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), None);
    }

    #[test]
    fn timing_converts_to_durations() {
        let timing = TimingOptions::default();
        assert_eq!(timing.intro_dwell_for(false).as_secs_f32(), 3.0);
        assert_eq!(timing.intro_dwell_for(true).as_secs_f32(), 0.5);
        assert_eq!(timing.wheel_resume_duration().as_secs_f32(), 2.0);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("motion"));
        assert!(props.contains_key("input"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("timing"));

        // Skipped sections should be absent
        assert!(!props.contains_key("faces"));
        assert!(!props.contains_key("keybindings"));

        let motion = &props["motion"]["properties"];
        assert!(motion.get("smoothing").is_some());
        assert!(motion.get("initial_pitch").is_none());
    }
}
