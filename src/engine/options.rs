//! Options methods for CubeEngine

use super::CubeEngine;
use crate::camera::core::Camera;
use crate::error::FaceCubeError;
use crate::options::Options;
use crate::scene::{CubeScene, WelcomeScene};

impl CubeEngine {
    /// Replace options and apply all changes to subsystems. Invalid options
    /// are rejected and the current ones kept.
    pub fn set_options(&mut self, new: Options) -> Result<(), FaceCubeError> {
        new.validate()?;
        let faces_changed = new.faces != self.options.faces;
        self.options = new;
        self.apply_options(faces_changed);
        Ok(())
    }

    /// Push current option values to the orientation model, translator,
    /// cameras and (when the face table changed) the scenes.
    fn apply_options(&mut self, faces_changed: bool) {
        self.orientation.set_smoothing(self.options.motion.smoothing);
        self.orientation
            .set_reduced_motion(self.options.motion.reduce_motion);
        self.translator.apply_options(&self.options.input);
        self.apply_camera();
        if faces_changed {
            self.welcome = WelcomeScene::with_rng(
                self.options.faces.spectrum_size,
                &mut self.rng,
            );
            self.cube = CubeScene::with_rng(&self.options.faces, &mut self.rng);
            self.cube.update(self.orientation.current(), self.clock);
            log::info!("face table changed, scenes rebuilt");
        }
    }

    /// Rebuild both cameras from the camera options.
    fn apply_camera(&mut self) {
        let co = &self.options.camera;
        let aspect = self.viewport.aspect();
        self.welcome_camera =
            Camera::looking_at_origin(co, co.welcome_distance, aspect);
        self.cube_camera = Camera::looking_at_origin(co, co.cube_distance, aspect);
    }

    /// Switch reduced motion on or off. The next tick snaps when enabled.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        if self.orientation.reduced_motion() != enabled {
            log::info!("reduced motion {}", if enabled { "on" } else { "off" });
        }
        self.options.motion.reduce_motion = enabled;
        self.orientation.set_reduced_motion(enabled);
    }
}

#[cfg(test)]
mod tests {
    use crate::camera::core::Viewport;
    use crate::engine::{CubeCommand, CubeEngine};
    use crate::error::FaceCubeError;
    use crate::options::Options;

    fn engine() -> CubeEngine {
        CubeEngine::with_seed(Options::default(), Viewport::new(640, 480), 9).unwrap()
    }

    #[test]
    fn invalid_faces_are_rejected_and_kept() {
        let mut engine = engine();
        let mut bad = Options::default();
        let _ = bad.faces.face_angles.pop();
        let err = engine.set_options(bad).unwrap_err();
        assert!(matches!(err, FaceCubeError::InvalidFaces(_)));
        assert_eq!(engine.options().faces.face_angles.len(), 6);
    }

    #[test]
    fn camera_options_apply_to_both_cameras() {
        let mut engine = engine();
        let mut options = Options::default();
        options.camera.fovy = 60.0;
        options.camera.cube_distance = 8.0;
        engine.set_options(options).unwrap();
        assert_eq!(engine.cube_camera().fovy, 60.0);
        assert_eq!(engine.welcome_camera().fovy, 60.0);
        assert_eq!(engine.cube_camera().eye.z, 8.0);
        assert!((engine.cube_camera().aspect - 640.0 / 480.0).abs() < 1e-6);
    }

    #[test]
    fn toggle_flips_reduced_motion() {
        let mut engine = engine();
        assert!(!engine.reduced_motion());
        assert!(engine.execute(CubeCommand::ToggleReducedMotion));
        assert!(engine.reduced_motion());
        assert!(engine.options().motion.reduce_motion);
        assert!(engine.handle_key("KeyM"));
        assert!(!engine.reduced_motion());
    }

    #[test]
    fn resized_cube_uses_new_aspect() {
        let mut engine = engine();
        assert!(engine.execute(CubeCommand::Resize {
            width: 1000,
            height: 500,
        }));
        assert_eq!(engine.viewport(), Viewport::new(1000, 500));
        assert_eq!(engine.cube_camera().aspect, 2.0);
        assert_eq!(engine.welcome_camera().aspect, 2.0);
    }
}
