//! Input handling: event types, gesture sessions, and the translator that
//! converts raw pointer, touch and wheel events into engine commands.

/// Platform-agnostic input events.
pub mod event;
pub mod gesture;
/// Bindable keyboard actions.
pub mod keyboard;
/// Converts raw events into engine commands.
pub mod translator;

pub use event::{InputEvent, MouseButton, TouchPhase};
pub use gesture::{GestureSource, InputSession, Release, TapThresholds};
pub use keyboard::KeyAction;
pub use translator::InputTranslator;
