//! Standalone cube window backed by winit.
//!
//! ```no_run
//! # use facecube::Viewer;
//! Viewer::builder()
//!     .with_title("Cube")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, Touch, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    camera::core::Viewport,
    engine::{CubeCommand, CubeEngine},
    error::FaceCubeError,
    gpu::render_context::RenderContext,
    input::{InputEvent, MouseButton, TouchPhase},
    options::Options,
    renderer::{GpuRenderer, RenderError},
    util::frame_timing::FrameTiming,
};

/// Pixels per wheel line, matching a browser's line-mode scroll.
const PIXELS_PER_LINE: f32 = 100.0;

/// Frames between FPS log lines.
const FPS_LOG_INTERVAL: u64 = 600;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default title and options.
    fn new() -> Self {
        Self {
            options: None,
            title: "FaceCube".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window showing the cube menu.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), FaceCubeError> {
        let event_loop = EventLoop::new()
            .map_err(|e| FaceCubeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            renderer: None,
            engine: None,
            frame_timing: FrameTiming::new(),
            active_touch: None,
            options: Some(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| FaceCubeError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    renderer: Option<GpuRenderer>,
    engine: Option<CubeEngine>,
    frame_timing: FrameTiming,
    /// Finger that owns the current touch gesture.
    active_touch: Option<u64>,
    options: Option<Options>,
    title: String,
}

/// Surface size, never zero.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

/// Wheel distance in pixels, positive when scrolling down. winit reports
/// scroll-up as positive.
fn wheel_delta_y(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_LINE,
        MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
    }
}

/// Follow the first finger down until it lifts. Returns whether the event
/// belongs to that finger.
fn track_touch(active: &mut Option<u64>, id: u64, phase: TouchPhase) -> bool {
    match (phase, *active) {
        (TouchPhase::Started, None) => {
            *active = Some(id);
            true
        }
        (TouchPhase::Ended | TouchPhase::Cancelled, Some(owner)) if owner == id => {
            *active = None;
            true
        }
        (TouchPhase::Moved, Some(owner)) => owner == id,
        _ => false,
    }
}

impl ViewerApp {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), FaceCubeError> {
        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| FaceCubeError::Viewer(e.to_string()))?,
        );
        let (width, height) = viewport_size(window.inner_size());

        let context = pollster::block_on(RenderContext::new(
            window.clone(),
            (width, height),
        ))?;
        let engine = CubeEngine::new(
            self.options.take().unwrap_or_default(),
            Viewport::new(width, height),
        )?;

        window.request_redraw();
        self.renderer = Some(GpuRenderer::new(context));
        self.engine = Some(engine);
        self.window = Some(window);
        Ok(())
    }

    fn redraw(&mut self) {
        let dt = self.frame_timing.begin_frame();
        let (Some(engine), Some(renderer)) = (&mut self.engine, &mut self.renderer)
        else {
            return;
        };

        engine.update(dt);
        match engine.render(renderer) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                if let Some(w) = &self.window {
                    let (width, height) = viewport_size(w.inner_size());
                    renderer.resize(width, height);
                }
                renderer.recover();
            }
            Err(e) => log::error!("render error: {e}"),
        }

        if self.frame_timing.frames() % FPS_LOG_INTERVAL == 0 {
            log::debug!("{:.1} fps", self.frame_timing.fps());
        }
    }

    fn touch(&mut self, touch: Touch) -> Option<InputEvent> {
        let phase = TouchPhase::from(touch.phase);
        track_touch(&mut self.active_touch, touch.id, phase).then(|| {
            InputEvent::Touch {
                phase,
                x: touch.location.x as f32,
                y: touch.location.y as f32,
            }
        })
    }

    fn forward(&mut self, event: InputEvent) {
        if let Some(engine) = &mut self.engine {
            let _ = engine.handle_input(event);
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("Failed to initialize viewer: {e}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                let (width, height) = viewport_size(event_size);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(width, height);
                }
                if let Some(engine) = &mut self.engine {
                    let _ = engine.execute(CubeCommand::Resize { width, height });
                }
            }

            WindowEvent::Occluded(occluded) => {
                if let Some(engine) = &mut self.engine {
                    let _ = engine.execute(CubeCommand::SetVisible(!occluded));
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.forward(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.forward(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::Touch(touch) => {
                if let Some(event) = self.touch(touch) {
                    self.forward(event);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.forward(InputEvent::Wheel {
                    delta_y: wheel_delta_y(delta),
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                use winit::keyboard::PhysicalKey;
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                if let Some(engine) = &mut self.engine {
                    let _ = engine.handle_key(&key_str);
                }
            }

            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalPosition;

    use super::*;

    #[test]
    fn wheel_down_is_positive() {
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, -1.0)), 100.0);
        assert_eq!(wheel_delta_y(MouseScrollDelta::LineDelta(0.0, 2.0)), -200.0);
        let pixels = MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -30.0));
        assert_eq!(wheel_delta_y(pixels), 30.0);
    }

    #[test]
    fn only_first_finger_is_followed() {
        let mut active = None;
        assert!(track_touch(&mut active, 1, TouchPhase::Started));
        assert!(!track_touch(&mut active, 2, TouchPhase::Started));
        assert!(!track_touch(&mut active, 2, TouchPhase::Moved));
        assert!(track_touch(&mut active, 1, TouchPhase::Moved));
        assert!(!track_touch(&mut active, 2, TouchPhase::Ended));
        assert_eq!(active, Some(1));

        assert!(track_touch(&mut active, 1, TouchPhase::Ended));
        assert_eq!(active, None);
        assert!(track_touch(&mut active, 2, TouchPhase::Started));
    }

    #[test]
    fn cancel_releases_the_finger() {
        let mut active = None;
        assert!(track_touch(&mut active, 7, TouchPhase::Started));
        assert!(track_touch(&mut active, 7, TouchPhase::Cancelled));
        assert_eq!(active, None);
        assert!(!track_touch(&mut active, 7, TouchPhase::Moved));
    }
}
