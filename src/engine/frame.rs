//! Per-frame update and draw for CubeEngine

use web_time::Duration;

use super::{CubeEngine, SceneKind};
use crate::renderer::{RenderError, RenderSurface, SceneFrame};
use crate::util::timer::TimerKind;

impl CubeEngine {
    /// Advance the engine by one frame of `dt`.
    ///
    /// Fires expired timers, then runs the driver for the current screen.
    /// The state is read fresh after the timers, so a dwell expiring this
    /// frame already shows the cube.
    pub fn update(&mut self, dt: Duration) {
        self.clock += dt.as_secs_f32();
        for kind in self.timers.advance(dt) {
            self.on_timer(kind);
        }

        match self.navigator.state().active_scene() {
            Some(SceneKind::Welcome) => {
                self.welcome.update(self.clock, &mut self.rng);
            }
            Some(SceneKind::Cube) => {
                let enabled = self.auto_rotate_enabled();
                self.orientation
                    .auto_advance(self.options.motion.auto_rotate_speed, enabled);
                self.orientation.tick();
                self.cube.update(self.orientation.current(), self.clock);
            }
            None => {}
        }
    }

    fn on_timer(&mut self, kind: TimerKind) {
        log::debug!("timer fired: {kind:?}");
        match kind {
            TimerKind::IntroDwell => {
                let _ = self.navigator.finish_intro();
            }
            TimerKind::WheelResume => self.wheel_suspended = false,
            TimerKind::LoaderHide => self.loader_visible = false,
        }
    }

    /// Draw the active screen. The intro screen draws nothing.
    pub fn render<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<(), RenderError> {
        let frame = match self.navigator.state().active_scene() {
            Some(SceneKind::Welcome) => SceneFrame::Welcome {
                scene: &self.welcome,
                camera: &self.welcome_camera,
            },
            Some(SceneKind::Cube) => SceneFrame::Cube {
                scene: &self.cube,
                camera: &self.cube_camera,
            },
            None => SceneFrame::Blank,
        };
        surface.draw(frame)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::camera::core::Viewport;
    use crate::engine::{CubeCommand, NavigationState};
    use crate::options::Options;

    fn engine(options: Options) -> CubeEngine {
        CubeEngine::with_seed(options, Viewport::new(800, 600), 3).unwrap()
    }

    fn frame() -> Duration {
        Duration::from_millis(16)
    }

    fn enter_cube(engine: &mut CubeEngine) {
        assert!(engine.execute(CubeCommand::Start));
        assert!(engine.execute(CubeCommand::Start));
        assert_eq!(engine.navigation_state(), NavigationState::Cube);
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<&'static str>,
    }

    impl RenderSurface for Recorder {
        fn draw(&mut self, frame: SceneFrame<'_>) -> Result<(), RenderError> {
            self.frames.push(match frame {
                SceneFrame::Welcome { .. } => "welcome",
                SceneFrame::Cube { .. } => "cube",
                SceneFrame::Blank => "blank",
            });
            Ok(())
        }
    }

    #[test]
    fn intro_dwell_reveals_cube() {
        let mut engine = engine(Options::default());
        let mut surface = Recorder::default();
        engine.update(frame());
        engine.render(&mut surface).unwrap();

        assert!(engine.execute(CubeCommand::Start));
        engine.update(Duration::from_millis(2990));
        assert_eq!(engine.navigation_state(), NavigationState::Intro);
        engine.render(&mut surface).unwrap();

        engine.update(Duration::from_millis(20));
        assert_eq!(engine.navigation_state(), NavigationState::Cube);
        engine.render(&mut surface).unwrap();
        assert_eq!(surface.frames, vec!["welcome", "blank", "cube"]);
    }

    #[test]
    fn reduced_motion_shortens_dwell() {
        let mut options = Options::default();
        options.motion.reduce_motion = true;
        let mut engine = engine(options);
        let _ = engine.execute(CubeCommand::Start);
        engine.update(Duration::from_millis(500));
        assert_eq!(engine.navigation_state(), NavigationState::Cube);
    }

    #[test]
    fn auto_rotation_advances_target_in_cube() {
        let mut engine = engine(Options::default());
        enter_cube(&mut engine);
        let before = engine.orientation().target().yaw;
        engine.update(frame());
        assert!((engine.orientation().target().yaw - before - 0.005).abs() < 1e-6);
        assert!(engine.auto_rotate_enabled());
    }

    #[test]
    fn dragging_pauses_auto_rotation() {
        let mut engine = engine(Options::default());
        enter_cube(&mut engine);
        assert!(engine.execute(CubeCommand::BeginGesture));
        assert!(!engine.auto_rotate_enabled());
        let before = engine.orientation().target().yaw;
        engine.update(frame());
        assert_eq!(engine.orientation().target().yaw, before);
        let _ = engine.execute(CubeCommand::EndGesture { tap: None });
        assert!(engine.auto_rotate_enabled());
    }

    #[test]
    fn wheel_suspension_lifts_after_resume_delay() {
        let mut engine = engine(Options::default());
        enter_cube(&mut engine);
        assert!(engine.execute(CubeCommand::Spin { delta_yaw: 0.3 }));
        assert!(!engine.auto_rotate_enabled());
        engine.update(Duration::from_millis(1999));
        assert!(!engine.auto_rotate_enabled());
        engine.update(Duration::from_millis(1));
        assert!(engine.auto_rotate_enabled());
    }

    #[test]
    fn hidden_surface_pauses_auto_rotation() {
        let mut engine = engine(Options::default());
        enter_cube(&mut engine);
        assert!(engine.execute(CubeCommand::SetVisible(false)));
        assert!(!engine.auto_rotate_enabled());
        assert!(!engine.execute(CubeCommand::SetVisible(false)));
        assert!(engine.execute(CubeCommand::SetVisible(true)));
        assert!(engine.auto_rotate_enabled());
    }

    #[test]
    fn loader_hides_after_delay() {
        let mut engine = engine(Options::default());
        assert!(engine.loader_visible());
        engine.update(Duration::from_millis(1500));
        assert!(!engine.loader_visible());
    }

    #[test]
    fn page_keeps_smoothing_without_auto_rotation() {
        let mut engine = engine(Options::default());
        enter_cube(&mut engine);
        assert!(engine.execute(CubeCommand::OpenFace { index: 2 }));
        let target = engine.orientation().target().yaw;
        let before = engine.orientation().current().yaw;
        engine.update(frame());
        assert_eq!(engine.orientation().target().yaw, target);
        let after = engine.orientation().current().yaw;
        assert!((after - before - (target - before) * 0.1).abs() < 1e-5);
        assert!(engine.pick_face(Vec2::ZERO).is_none());
    }
}
