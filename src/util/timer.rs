//! Cancelable countdowns advanced by frame time.
//!
//! Each [`TimerKind`] has at most one pending countdown. Scheduling a kind
//! that is already pending replaces it.

use web_time::Duration;

/// The deferred actions the engine schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Intro screen dwell before the cube appears.
    IntroDwell,
    /// Auto-rotation resumes after wheel input stops.
    WheelResume,
    /// Loading overlay hides after startup.
    LoaderHide,
}

/// Cancelable countdowns advanced by frame time.
///
/// At most one countdown per [`TimerKind`] is pending. Scheduling a kind
/// that is already pending replaces its deadline.
#[derive(Debug, Clone, Default)]
pub struct Timers {
    pending: Vec<(TimerKind, Duration)>,
}

impl Timers {
    /// No pending timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `kind` once `after` has elapsed.
    pub fn schedule(&mut self, kind: TimerKind, after: Duration) {
        if let Some(slot) = self.pending.iter_mut().find(|(k, _)| *k == kind) {
            slot.1 = after;
        } else {
            self.pending.push((kind, after));
        }
    }

    /// Drop a pending timer. Returns whether one was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(k, _)| *k != kind);
        self.pending.len() != before
    }

    /// Whether `kind` is waiting to fire.
    #[must_use]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|(k, _)| *k == kind)
    }

    /// Time left before `kind` fires.
    #[must_use]
    pub fn remaining(&self, kind: TimerKind) -> Option<Duration> {
        self.pending
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, left)| *left)
    }

    /// Count every pending timer down by `dt` and return the ones that
    /// expired, earliest deadline first.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerKind> {
        let mut fired: Vec<(TimerKind, Duration)> = Vec::new();
        self.pending.retain_mut(|(kind, left)| {
            if *left <= dt {
                fired.push((*kind, *left));
                false
            } else {
                *left -= dt;
                true
            }
        });
        fired.sort_by_key(|(_, left)| *left);
        fired.into_iter().map(|(kind, _)| kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_once_deadline_passes() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::IntroDwell, ms(3000));
        assert!(timers.advance(ms(2999)).is_empty());
        assert_eq!(timers.remaining(TimerKind::IntroDwell), Some(ms(1)));
        assert_eq!(timers.advance(ms(1)), vec![TimerKind::IntroDwell]);
        assert!(!timers.is_pending(TimerKind::IntroDwell));
        assert!(timers.advance(ms(5000)).is_empty());
    }

    #[test]
    fn rescheduling_replaces_deadline() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::WheelResume, ms(2000));
        let _ = timers.advance(ms(1500));
        timers.schedule(TimerKind::WheelResume, ms(2000));
        assert!(timers.advance(ms(1000)).is_empty());
        assert_eq!(timers.advance(ms(1000)), vec![TimerKind::WheelResume]);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::IntroDwell, ms(500));
        assert!(timers.cancel(TimerKind::IntroDwell));
        assert!(!timers.cancel(TimerKind::IntroDwell));
        assert!(timers.advance(ms(1000)).is_empty());
    }

    #[test]
    fn simultaneous_expiry_is_ordered_by_deadline() {
        let mut timers = Timers::new();
        timers.schedule(TimerKind::LoaderHide, ms(1500));
        timers.schedule(TimerKind::IntroDwell, ms(500));
        assert_eq!(
            timers.advance(ms(2000)),
            vec![TimerKind::IntroDwell, TimerKind::LoaderHide]
        );
    }
}
