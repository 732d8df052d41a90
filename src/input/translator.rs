//! Converts raw platform events into orientation commands.
//!
//! The `InputTranslator` owns all transient input state (cursor position,
//! the active gesture session, per-modality sensitivities). It sits
//! between raw window events and
//! [`CubeEngine::execute`](crate::engine::CubeEngine::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton, TouchPhase};
use super::gesture::{GestureSource, InputSession, Release, TapThresholds};
use crate::engine::{CubeCommand, NavigationState};
use crate::options::InputOptions;

/// Converts raw input events into [`CubeCommand`]s.
///
/// Drag motion and wheel spins only translate while the navigation state
/// accepts input (the cube screen). On the welcome screen a tap starts the
/// experience, and on an open page a tap closes it. Nothing reacts during
/// the intro. Releases always end the active gesture so a session can
/// never outlive its button or finger.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = translator.handle_event(event, engine.navigation_state()) {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputTranslator {
    session: Option<InputSession>,
    /// Navigation state the active session began in.
    began_in: NavigationState,
    cursor: Vec2,
    pointer_sensitivity: f32,
    touch_sensitivity: f32,
    wheel_sensitivity: f32,
    tap: TapThresholds,
}

impl InputTranslator {
    /// Translator configured from the input options.
    #[must_use]
    pub fn new(options: &InputOptions) -> Self {
        Self {
            session: None,
            began_in: NavigationState::default(),
            cursor: Vec2::ZERO,
            pointer_sensitivity: options.pointer_sensitivity,
            touch_sensitivity: options.touch_sensitivity,
            wheel_sensitivity: options.wheel_sensitivity,
            tap: TapThresholds::from_options(options),
        }
    }

    /// Re-read sensitivities and thresholds. The active gesture survives.
    pub fn apply_options(&mut self, options: &InputOptions) {
        self.pointer_sensitivity = options.pointer_sensitivity;
        self.touch_sensitivity = options.touch_sensitivity;
        self.wheel_sensitivity = options.wheel_sensitivity;
        self.tap = TapThresholds::from_options(options);
    }

    /// Whether a drag or touch gesture is in progress on the cube.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some() && self.began_in.accepts_input()
    }

    /// Whether the host should cancel native scrolling for touch moves.
    #[must_use]
    pub fn suppress_default_scroll(&self) -> bool {
        self.is_dragging()
            && self
                .session
                .as_ref()
                .is_some_and(|s| s.source() == GestureSource::Touch)
    }

    /// Last known cursor position in viewport pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Drop the active gesture without producing a tap.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        state: NavigationState,
    ) -> Option<CubeCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                self.drag_to(GestureSource::Mouse, self.cursor, state)
            }
            InputEvent::MouseButton { button, pressed } => {
                if button != MouseButton::Left {
                    return None;
                }
                if pressed {
                    self.begin(GestureSource::Mouse, self.cursor, state)
                } else {
                    self.end(GestureSource::Mouse, self.cursor, state)
                }
            }
            InputEvent::Touch { phase, x, y } => {
                let at = Vec2::new(x, y);
                match phase {
                    TouchPhase::Started => {
                        self.begin(GestureSource::Touch, at, state)
                    }
                    TouchPhase::Moved => {
                        self.drag_to(GestureSource::Touch, at, state)
                    }
                    TouchPhase::Ended => {
                        self.end(GestureSource::Touch, at, state)
                    }
                    TouchPhase::Cancelled => self.cancel_touch(),
                }
            }
            InputEvent::Wheel { delta_y } => {
                if !state.accepts_input() || delta_y == 0.0 {
                    return None;
                }
                Some(CubeCommand::Spin {
                    delta_yaw: delta_y * self.wheel_sensitivity,
                })
            }
        }
    }

    fn begin(
        &mut self,
        source: GestureSource,
        at: Vec2,
        state: NavigationState,
    ) -> Option<CubeCommand> {
        if state == NavigationState::Intro || self.session.is_some() {
            return None;
        }
        self.session = Some(InputSession::begin(source, at));
        self.began_in = state;
        state.accepts_input().then_some(CubeCommand::BeginGesture)
    }

    fn drag_to(
        &mut self,
        source: GestureSource,
        at: Vec2,
        state: NavigationState,
    ) -> Option<CubeCommand> {
        let sensitivity = self.sensitivity(source);
        let session = self.session.as_mut().filter(|s| s.source() == source)?;
        let delta = session.advance(at);
        if !state.accepts_input() || !self.began_in.accepts_input() || delta == Vec2::ZERO {
            return None;
        }
        Some(CubeCommand::Rotate {
            delta_pitch: delta.y * sensitivity,
            delta_yaw: delta.x * sensitivity,
        })
    }

    fn end(
        &mut self,
        source: GestureSource,
        at: Vec2,
        state: NavigationState,
    ) -> Option<CubeCommand> {
        if self.session.as_ref()?.source() != source {
            return None;
        }
        let session = self.session.take()?;
        let tap = match session.finish(at, self.tap) {
            Release::Tap { at } => Some(at),
            Release::Drag => None,
        };
        match self.began_in {
            NavigationState::Cube => Some(CubeCommand::EndGesture { tap }),
            // The screen changed under the gesture
            began if began != state => None,
            NavigationState::Welcome => tap.map(|_| CubeCommand::Start),
            NavigationState::PageOpen(_) => tap.map(|_| CubeCommand::ClosePage),
            NavigationState::Intro => None,
        }
    }

    fn cancel_touch(&mut self) -> Option<CubeCommand> {
        if self.session.as_ref()?.source() != GestureSource::Touch {
            return None;
        }
        self.session = None;
        self.began_in
            .accepts_input()
            .then_some(CubeCommand::EndGesture { tap: None })
    }

    fn sensitivity(&self, source: GestureSource) -> f32 {
        match source {
            GestureSource::Mouse => self.pointer_sensitivity,
            GestureSource::Touch => self.touch_sensitivity,
        }
    }
}
