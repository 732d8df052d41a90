//! Raw input entry points for CubeEngine

use super::{CubeCommand, CubeEngine};
use crate::input::{InputEvent, KeyAction};

impl KeyAction {
    /// Command a bound key issues.
    #[must_use]
    pub fn command(self) -> CubeCommand {
        match self {
            Self::Start => CubeCommand::Start,
            Self::ClosePage => CubeCommand::ClosePage,
            Self::ToggleReducedMotion => CubeCommand::ToggleReducedMotion,
        }
    }
}

impl CubeEngine {
    /// Process a platform-agnostic input event.
    ///
    /// The event runs through the [`InputTranslator`](crate::input::InputTranslator)
    /// against the live navigation state; any resulting command is executed.
    /// Returns `true` if engine state changed.
    ///
    /// ```ignore
    /// engine.handle_input(InputEvent::CursorMoved { x, y });
    /// engine.handle_input(InputEvent::Wheel { delta_y: 100.0 });
    /// ```
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let state = self.navigator.state();
        self.translator
            .handle_event(event, state)
            .is_some_and(|command| self.execute(command))
    }

    /// Process a key press by its code name (e.g. `"Escape"`). Unbound keys
    /// are ignored.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let Some(action) = self.options.keybindings.lookup(key) else {
            return false;
        };
        log::debug!("key {key} -> {action:?}");
        self.execute(action.command())
    }

    /// Whether the host should cancel native scrolling for the current
    /// touch move.
    #[must_use]
    pub fn suppress_default_scroll(&self) -> bool {
        self.translator.suppress_default_scroll()
    }
}
