use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// close_page = "Escape"
/// toggle_reduced_motion = "KeyM"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Leave the welcome screen, or skip the intro dwell.
    Start,
    /// Close the open content page.
    ClosePage,
    /// Flip the reduced-motion preference.
    ToggleReducedMotion,
}
