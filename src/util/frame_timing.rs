//! Frame pacing: per-frame delta and a smoothed frames-per-second figure.

use web_time::{Duration, Instant};

/// Longest step handed to the engine. A stall (window drag, debugger)
/// must not fast-forward every timer at once.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Frame-to-frame delta with a smoothed FPS estimate.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    frames: u64,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Start timing from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Mark the start of a frame and return the time since the previous
    /// one, capped at 100 ms.
    pub fn begin_frame(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed);
        elapsed.min(MAX_FRAME_STEP)
    }

    fn record(&mut self, elapsed: Duration) {
        self.frames += 1;
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames counted since creation.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_stalls_are_capped() {
        let mut timing = FrameTiming::new();
        timing.record(Duration::from_secs(2));
        assert_eq!(timing.frames(), 1);
        assert!(timing.fps() < 60.0);
        timing.last_frame = Instant::now() - Duration::from_secs(1);
        assert_eq!(timing.begin_frame(), MAX_FRAME_STEP);
    }

    #[test]
    fn steady_sixty_keeps_estimate() {
        let mut timing = FrameTiming::new();
        for _ in 0..10 {
            timing.record(Duration::from_secs_f32(1.0 / 60.0));
        }
        assert!((timing.fps() - 60.0).abs() < 0.5);
    }
}
