//! The cube menu engine: navigation, input, timers and the frame driver.

mod accessors;
mod command;
mod dispatch;
mod frame;
mod input;
/// Screen sequencing and panel visibility.
pub mod navigation;
mod options;

pub use command::CubeCommand;
pub use navigation::{NavigationState, Navigator, Panels, SceneKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::core::{Camera, Viewport};
use crate::error::FaceCubeError;
use crate::input::InputTranslator;
use crate::options::Options;
use crate::scene::{CubeScene, Orientation, OrientationModel, WelcomeScene};
use crate::util::timer::{TimerKind, Timers};

/// The single owned context behind the cube menu.
///
/// Holds the orientation model, the input translator, the navigator, the
/// countdown timers, both scene drivers and their cameras. Nothing here
/// touches the GPU: drawing goes through a
/// [`RenderSurface`](crate::renderer::RenderSurface).
///
/// # Frame loop
///
/// Each frame, call [`update`](Self::update) with the frame delta, then
/// [`render`](Self::render). Call [`execute`](Self::execute) with
/// [`CubeCommand`]s, or forward raw events via
/// [`handle_input`](Self::handle_input) and [`handle_key`](Self::handle_key).
///
/// # Navigation
///
/// The engine starts on the welcome screen. [`CubeCommand::Start`] moves
/// to the intro; the cube appears once the intro dwell elapses. A tap on a
/// face (or [`CubeCommand::OpenFace`]) opens that face's page and turns the
/// face toward the viewer.
pub struct CubeEngine {
    options: Options,
    orientation: OrientationModel,
    translator: InputTranslator,
    navigator: Navigator,
    timers: Timers,
    welcome: WelcomeScene,
    cube: CubeScene,
    welcome_camera: Camera,
    cube_camera: Camera,
    viewport: Viewport,
    dragging: bool,
    wheel_suspended: bool,
    visible: bool,
    loader_visible: bool,
    /// Animation clock in seconds.
    clock: f32,
    rng: StdRng,
}

impl CubeEngine {
    /// Build an engine for `viewport`, seeding particle placement from the
    /// OS.
    pub fn new(options: Options, viewport: Viewport) -> Result<Self, FaceCubeError> {
        Self::with_rng(options, viewport, StdRng::from_os_rng())
    }

    /// Build an engine with deterministic particle placement.
    pub fn with_seed(
        options: Options,
        viewport: Viewport,
        seed: u64,
    ) -> Result<Self, FaceCubeError> {
        Self::with_rng(options, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        options: Options,
        viewport: Viewport,
        mut rng: StdRng,
    ) -> Result<Self, FaceCubeError> {
        options.validate()?;

        let motion = &options.motion;
        let mut orientation = OrientationModel::new(
            Orientation::new(motion.initial_pitch, motion.initial_yaw),
            motion.smoothing,
        );
        orientation.set_reduced_motion(motion.reduce_motion);

        let aspect = viewport.aspect();
        let welcome_camera = Camera::looking_at_origin(
            &options.camera,
            options.camera.welcome_distance,
            aspect,
        );
        let cube_camera = Camera::looking_at_origin(
            &options.camera,
            options.camera.cube_distance,
            aspect,
        );

        let welcome = WelcomeScene::with_rng(options.faces.spectrum_size, &mut rng);
        let cube = CubeScene::with_rng(&options.faces, &mut rng);

        let mut timers = Timers::new();
        timers.schedule(
            TimerKind::LoaderHide,
            options.timing.loader_hide_duration(),
        );

        log::info!(
            "cube engine ready: {} faces, {}x{}, reduced motion {}",
            options.faces.count(),
            viewport.width,
            viewport.height,
            motion.reduce_motion
        );

        Ok(Self {
            translator: InputTranslator::new(&options.input),
            orientation,
            navigator: Navigator::new(),
            timers,
            welcome,
            cube,
            welcome_camera,
            cube_camera,
            viewport,
            dragging: false,
            wheel_suspended: false,
            visible: true,
            loader_visible: true,
            clock: 0.0,
            rng,
            options,
        })
    }
}
