//! Command dispatch for CubeEngine

use glam::Vec2;

use super::{CubeCommand, CubeEngine, NavigationState};
use crate::picking::{hit_test, HitTarget};
use crate::util::timer::TimerKind;

impl CubeEngine {
    /// Execute a command. Returns `true` when it changed engine state.
    ///
    /// Commands that are illegal in the current navigation state are
    /// silent no-ops and return `false`.
    pub fn execute(&mut self, command: CubeCommand) -> bool {
        match command {
            CubeCommand::Start => self.start(),
            CubeCommand::OpenFace { index } => self.open_face(index),
            CubeCommand::ClosePage => self.navigator.close_page(),
            CubeCommand::BeginGesture => {
                if !self.accepts_input() {
                    return false;
                }
                self.dragging = true;
                true
            }
            CubeCommand::Rotate {
                delta_pitch,
                delta_yaw,
            } => {
                if !self.accepts_input() {
                    return false;
                }
                self.orientation.set_target(delta_pitch, delta_yaw);
                true
            }
            CubeCommand::Spin { delta_yaw } => self.spin(delta_yaw),
            CubeCommand::EndGesture { tap } => self.end_gesture(tap),
            CubeCommand::SetReducedMotion(enabled) => {
                self.set_reduced_motion(enabled);
                true
            }
            CubeCommand::ToggleReducedMotion => {
                self.set_reduced_motion(!self.orientation.reduced_motion());
                true
            }
            CubeCommand::SetVisible(visible) => {
                let changed = self.visible != visible;
                self.visible = visible;
                changed
            }
            CubeCommand::Resize { width, height } => {
                self.resize(width, height);
                true
            }
        }
    }

    fn accepts_input(&self) -> bool {
        self.navigator.state().accepts_input()
    }

    /// Welcome → Intro, or skip the remaining intro dwell.
    fn start(&mut self) -> bool {
        if self.navigator.start() {
            let dwell = self
                .options
                .timing
                .intro_dwell_for(self.orientation.reduced_motion());
            self.timers.schedule(TimerKind::IntroDwell, dwell);
            log::debug!("intro dwell scheduled for {dwell:?}");
            return true;
        }
        if self.navigator.state() == NavigationState::Intro {
            let _ = self.timers.cancel(TimerKind::IntroDwell);
            log::debug!("intro dwell skipped");
            return self.navigator.finish_intro();
        }
        false
    }

    /// Open the page of face `index` and turn that face toward the viewer.
    /// Indices past the face count wrap.
    fn open_face(&mut self, index: usize) -> bool {
        let Some(index) = index.checked_rem(self.options.faces.count()) else {
            return false;
        };
        let Some(yaw) = self.options.faces.angle(index) else {
            log::warn!("no face at index {index}");
            return false;
        };
        if !self.navigator.open_page(index) {
            return false;
        }
        self.translator.cancel();
        self.dragging = false;
        self.orientation.snap_yaw(yaw);
        true
    }

    fn spin(&mut self, delta_yaw: f32) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.orientation.set_target(0.0, delta_yaw);
        self.wheel_suspended = true;
        self.timers.schedule(
            TimerKind::WheelResume,
            self.options.timing.wheel_resume_duration(),
        );
        true
    }

    /// End the gesture. A tap on the cube screen is hit tested and opens
    /// the face under it.
    fn end_gesture(&mut self, tap: Option<Vec2>) -> bool {
        let was_dragging = std::mem::take(&mut self.dragging);
        let Some(pointer) = tap else {
            return was_dragging;
        };
        if !self.accepts_input() {
            return was_dragging;
        }
        match self.pick_face(pointer) {
            Some(face) => {
                log::debug!("tap at {pointer} hit face {face}");
                self.open_face(face) || was_dragging
            }
            None => was_dragging,
        }
    }

    /// Face under `pointer` given the displayed cube orientation.
    #[must_use]
    pub fn pick_face(&self, pointer: Vec2) -> Option<usize> {
        let target = HitTarget {
            mesh: self.cube.mesh(),
            model: self.orientation.current().to_matrix(),
            face_count: self.options.faces.count(),
        };
        hit_test(pointer, self.viewport, &self.cube_camera, &target)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport.width = width;
        self.viewport.height = height;
        let aspect = self.viewport.aspect();
        self.welcome_camera.aspect = aspect;
        self.cube_camera.aspect = aspect;
    }
}
