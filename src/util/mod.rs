//! Shared utilities: frame pacing and cancelable countdown timers.

pub mod frame_timing;
pub mod timer;
