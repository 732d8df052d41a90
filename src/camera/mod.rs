//! Perspective cameras for the two screens.
//!
//! Each screen has a fixed camera on the +Z axis looking at the origin.
//! The engine updates the aspect ratio on resize.

/// Core camera struct, viewport and GPU uniform types.
pub mod core;
