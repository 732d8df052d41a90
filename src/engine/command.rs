//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation (key press, pointer gesture, wheel spin,
//! programmatic call) is represented as a `CubeCommand`. Consumers
//! construct commands and pass them to
//! [`CubeEngine::execute`](super::CubeEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// ```ignore
/// engine.execute(CubeCommand::Start);
/// engine.execute(CubeCommand::Spin { delta_yaw: 0.3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CubeCommand {
    // ── Navigation ──────────────────────────────────────────────────
    /// Leave the welcome screen, or skip the intro dwell.
    Start,

    /// Open the content page bound to a face.
    OpenFace {
        /// Face slot (wrapped into range by the engine).
        index: usize,
    },

    /// Close the open content page and return to the cube.
    ClosePage,

    // ── Orientation ─────────────────────────────────────────────────
    /// A drag or touch gesture started.
    BeginGesture,

    /// Accumulate a drag delta into the orientation target.
    Rotate {
        /// Pitch change in radians.
        delta_pitch: f32,
        /// Yaw change in radians.
        delta_yaw: f32,
    },

    /// Wheel spin: yaw-only delta that briefly suspends auto-rotation.
    Spin {
        /// Yaw change in radians.
        delta_yaw: f32,
    },

    /// The active gesture ended.
    EndGesture {
        /// Release position when the gesture qualified as a tap.
        tap: Option<Vec2>,
    },

    // ── Environment ─────────────────────────────────────────────────
    /// Set the reduced-motion preference.
    SetReducedMotion(bool),

    /// Flip the reduced-motion preference.
    ToggleReducedMotion,

    /// The drawing surface became visible or hidden.
    SetVisible(bool),

    /// The viewport changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}
