//! Read-only queries on CubeEngine

use super::{CubeEngine, NavigationState, Panels};
use crate::camera::core::{Camera, Viewport};
use crate::options::{FaceDescriptor, Options};
use crate::scene::{CubeScene, OrientationModel, WelcomeScene};

impl CubeEngine {
    /// Current screen.
    #[must_use]
    pub fn navigation_state(&self) -> NavigationState {
        self.navigator.state()
    }

    /// Visibility of every screen element.
    #[must_use]
    pub fn panels(&self) -> Panels<'_> {
        self.navigator.panels(&self.options.faces)
    }

    /// Descriptor of the face whose page is open.
    #[must_use]
    pub fn open_page(&self) -> Option<&FaceDescriptor> {
        self.navigator
            .state()
            .open_face()
            .and_then(|index| self.options.faces.face(index))
    }

    /// Target and displayed orientation.
    #[must_use]
    pub fn orientation(&self) -> &OrientationModel {
        &self.orientation
    }

    /// Whether the cube turns on its own this frame: on the cube screen,
    /// with no gesture, no reduced motion, no recent wheel input and a
    /// visible surface.
    #[must_use]
    pub fn auto_rotate_enabled(&self) -> bool {
        self.navigator.state() == NavigationState::Cube
            && !self.dragging
            && !self.orientation.reduced_motion()
            && !self.wheel_suspended
            && self.visible
    }

    /// Whether a drag or touch gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the startup loading overlay is still shown.
    #[must_use]
    pub fn loader_visible(&self) -> bool {
        self.loader_visible
    }

    /// Whether reduced motion is on.
    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.orientation.reduced_motion()
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Drawable area used for hit testing.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Camera of the cube screen.
    #[must_use]
    pub fn cube_camera(&self) -> &Camera {
        &self.cube_camera
    }

    /// Camera of the welcome screen.
    #[must_use]
    pub fn welcome_camera(&self) -> &Camera {
        &self.welcome_camera
    }

    /// Cube screen driver.
    #[must_use]
    pub fn cube_scene(&self) -> &CubeScene {
        &self.cube
    }

    /// Welcome screen driver.
    #[must_use]
    pub fn welcome_scene(&self) -> &WelcomeScene {
        &self.welcome
    }

    /// Seconds of animation time elapsed.
    #[must_use]
    pub fn clock(&self) -> f32 {
        self.clock
    }
}
