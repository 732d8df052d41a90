//! Target/current rotation pair with per-frame exponential smoothing.

use glam::Mat4;

/// Pitch/yaw pair in radians. Unbounded; angles wrap through the
/// trigonometry downstream.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about the horizontal (X) axis.
    pub pitch: f32,
    /// Rotation about the vertical (Y) axis.
    pub yaw: f32,
}

impl Orientation {
    /// Orientation from explicit angles.
    #[must_use]
    pub const fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    /// Model rotation: pitch applied over yaw (X then Y, intrinsic).
    #[must_use]
    pub fn to_matrix(self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch) * Mat4::from_rotation_y(self.yaw)
    }
}

/// Owns the goal orientation (mutated by input) and the displayed one
/// (mutated once per frame by [`tick`](Self::tick)).
///
/// Smoothing is per frame, not time-scaled: at a fixed factor the
/// displayed orientation closes the same fraction of the gap every frame
/// regardless of frame rate.
#[derive(Debug, Clone)]
pub struct OrientationModel {
    target: Orientation,
    current: Orientation,
    smoothing: f32,
    reduced_motion: bool,
}

impl OrientationModel {
    /// Model resting at `initial`, closing `smoothing` of the gap per tick.
    #[must_use]
    pub fn new(initial: Orientation, smoothing: f32) -> Self {
        Self {
            target: initial,
            current: initial,
            smoothing: smoothing.clamp(0.0, 1.0),
            reduced_motion: false,
        }
    }

    /// Goal orientation.
    #[must_use]
    pub fn target(&self) -> Orientation {
        self.target
    }

    /// Displayed orientation.
    #[must_use]
    pub fn current(&self) -> Orientation {
        self.current
    }

    /// Whether ticks snap instead of smoothing.
    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Snap on every tick when enabled.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    /// Change the smoothing factor (clamped to `[0, 1]`).
    pub fn set_smoothing(&mut self, smoothing: f32) {
        self.smoothing = smoothing.clamp(0.0, 1.0);
    }

    /// Fraction of the remaining gap closed by the next tick.
    #[must_use]
    pub fn factor(&self) -> f32 {
        if self.reduced_motion {
            1.0
        } else {
            self.smoothing
        }
    }

    /// Accumulate a delta into the target. No clamping.
    pub fn set_target(&mut self, delta_pitch: f32, delta_yaw: f32) {
        self.target.pitch += delta_pitch;
        self.target.yaw += delta_yaw;
    }

    /// Replace the target yaw, keeping pitch. Smoothing animates the turn.
    pub fn snap_yaw(&mut self, yaw: f32) {
        self.target.yaw = yaw;
    }

    /// Add `rate` to the target yaw when auto-rotation is enabled.
    pub fn auto_advance(&mut self, rate: f32, enabled: bool) {
        if enabled {
            self.target.yaw += rate;
        }
    }

    /// Move the displayed orientation toward the target by one frame.
    pub fn tick(&mut self) {
        if self.reduced_motion {
            self.current = self.target;
            return;
        }
        let factor = self.smoothing;
        self.current.pitch += (self.target.pitch - self.current.pitch) * factor;
        self.current.yaw += (self.target.yaw - self.current.yaw) * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap(model: &OrientationModel) -> f32 {
        let t = model.target();
        let c = model.current();
        (t.pitch - c.pitch).abs().max((t.yaw - c.yaw).abs())
    }

    #[test]
    fn tick_converges_monotonically() {
        let mut model = OrientationModel::new(Orientation::default(), 0.1);
        model.set_target(1.0, -2.0);
        model.set_target(0.5, 0.0);

        let initial = gap(&model);
        let mut previous = initial;
        for _ in 0..30 {
            model.tick();
            let now = gap(&model);
            assert!(now < previous, "gap grew from {previous} to {now}");
            previous = now;
        }
        // 0.9^30 ≈ 0.042: within 5% of the starting gap
        assert!(previous < initial * 0.05);
    }

    #[test]
    fn reduced_motion_snaps_in_one_tick() {
        let mut model = OrientationModel::new(Orientation::new(0.2, 0.0), 0.1);
        model.set_reduced_motion(true);
        model.set_target(0.37, 5.9);
        model.tick();
        assert_eq!(model.current(), model.target());
        assert_eq!(model.factor(), 1.0);
    }

    #[test]
    fn target_accumulates_without_wrapping() {
        let mut model = OrientationModel::new(Orientation::default(), 0.1);
        for _ in 0..10 {
            model.set_target(0.0, 1.0);
        }
        assert!((model.target().yaw - 10.0).abs() < 1e-5);
        assert_eq!(model.current().yaw, 0.0);
    }

    #[test]
    fn auto_advance_only_when_enabled() {
        let mut model = OrientationModel::new(Orientation::default(), 0.1);
        model.auto_advance(0.005, false);
        assert_eq!(model.target().yaw, 0.0);
        model.auto_advance(0.005, true);
        assert_eq!(model.target().yaw, 0.005);
    }

    #[test]
    fn snap_yaw_keeps_pitch() {
        let mut model = OrientationModel::new(Orientation::new(0.2, 1.0), 0.1);
        model.snap_yaw(3.0);
        assert_eq!(model.target(), Orientation::new(0.2, 3.0));
        assert_eq!(model.current(), Orientation::new(0.2, 1.0));
    }

    #[test]
    fn first_tick_closes_ten_percent() {
        let mut model = OrientationModel::new(Orientation::default(), 0.1);
        model.set_target(0.0, 1.0);
        model.tick();
        assert!((model.current().yaw - 0.1).abs() < 1e-6);
    }
}
