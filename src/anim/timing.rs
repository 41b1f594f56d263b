//! Time arithmetic and tweens.
//!
//! Timestamps are milliseconds on the `requestAnimationFrame` clock
//! (`performance.now()`); durations are seconds.

use super::easing::Ease;

/// Progress of an animation clamped to [0, 1]. A zero duration is already complete.
#[inline]
pub fn progress(elapsed_s: f64, duration_s: f64) -> f64 {
    if duration_s <= 0.0 {
        return 1.0;
    }
    (elapsed_s / duration_s).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[inline]
pub fn elapsed_secs(start_ms: f64, now_ms: f64) -> f64 {
    ((now_ms - start_ms) / 1000.0).max(0.0)
}

/// A single eased transition of one scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_s: f64,
    pub ease: Ease,
}

impl Tween {
    /// A tween already at rest on `value`.
    pub fn at_rest(value: f64, duration_s: f64, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            start_ms: 0.0,
            duration_s,
            ease,
        }
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        let t = progress(elapsed_secs(self.start_ms, now_ms), self.duration_s);
        lerp(self.from, self.to, self.ease.apply(t))
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.from == self.to || elapsed_secs(self.start_ms, now_ms) >= self.duration_s
    }

    /// Restart toward `to` from whatever is displayed at `now_ms`, so a
    /// mid-flight retarget never jumps.
    pub fn retarget(&mut self, now_ms: f64, to: f64) {
        self.from = self.value_at(now_ms);
        self.to = to;
        self.start_ms = now_ms;
    }
}
