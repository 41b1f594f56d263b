//! Eased virtual scroll position driven once per animation frame.
//!
//! Wheel input moves a target; every frame the displayed position is eased
//! toward it. The DOM side lives in `hooks::smooth_scroll`.

use super::timing::{elapsed_secs, lerp, progress};
use crate::config::ScrollConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveScroll {
    from: f64,
    to: f64,
    /// Stamped by the first frame after the animation was requested.
    start_ms: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct SmoothScroll {
    config: ScrollConfig,
    animated: f64,
    target: f64,
    limit: f64,
    stopped: bool,
    animation: Option<ActiveScroll>,
}

impl SmoothScroll {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            animated: 0.0,
            target: 0.0,
            limit: 0.0,
            stopped: false,
            animation: None,
        }
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.animated
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Maximum scroll offset (document height minus viewport height).
    /// An animation heading past a shrunk limit is restarted from the
    /// clamped position toward the clamped target.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.animated = self.animated.min(self.limit);
        self.target = self.target.min(self.limit);
        if let Some(anim) = self.animation {
            if anim.from.max(anim.to) > self.limit {
                self.animate_to(self.target);
            }
        }
    }

    /// Feed one wheel event. Returns whether native scrolling must be suppressed.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        if self.stopped {
            return true;
        }
        let target = self.target + delta_y * self.config.wheel_multiplier;
        self.animate_to(target);
        true
    }

    pub fn scroll_to(&mut self, target: f64) {
        if self.stopped {
            return;
        }
        self.animate_to(target);
    }

    fn animate_to(&mut self, target: f64) {
        self.target = target.clamp(0.0, self.limit);
        if self.target == self.animated {
            self.animation = None;
            return;
        }
        self.animation = Some(ActiveScroll {
            from: self.animated,
            to: self.target,
            start_ms: None,
        });
    }

    /// Advance one frame. Returns the position to write, if it changed.
    pub fn raf(&mut self, now_ms: f64) -> Option<f64> {
        if self.stopped {
            return None;
        }
        let anim = self.animation.as_mut()?;
        let start_ms = *anim.start_ms.get_or_insert(now_ms);
        let t = progress(elapsed_secs(start_ms, now_ms), self.config.duration_s);
        let eased = self.config.easing.apply(t);

        if t >= 1.0 || eased >= 1.0 {
            self.animated = anim.to;
            self.animation = None;
        } else {
            self.animated = lerp(anim.from, anim.to, eased);
        }
        Some(self.animated)
    }

    /// Adopt a position reached natively (scrollbar drag, keyboard, touch).
    /// Ignored while an eased animation owns the position.
    pub fn sync_native(&mut self, position: f64) {
        if self.animation.is_some() || self.stopped {
            return;
        }
        self.animated = position;
        self.target = position;
    }

    /// Freeze at the displayed position and ignore input until `start`.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.animation = None;
        self.target = self.animated;
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> SmoothScroll {
        let mut scroll = SmoothScroll::default();
        scroll.set_limit(5000.0);
        scroll
    }

    #[test]
    fn test_wheel_animates_to_target() {
        let mut scroll = driver();
        assert!(scroll.on_wheel(300.0));
        assert!(scroll.is_animating());
        assert_eq!(scroll.target(), 300.0);

        // The scroll curve starts at 0.001, not exactly zero.
        assert!(scroll.raf(0.0).unwrap() < 1.0);
        let mid = scroll.raf(300.0).unwrap();
        assert!(mid > 0.0 && mid < 300.0);
        assert_eq!(scroll.raf(1200.0), Some(300.0));
        assert!(!scroll.is_animating());
        assert_eq!(scroll.raf(1216.0), None);
    }

    #[test]
    fn test_positions_are_monotonic_toward_target() {
        let mut scroll = driver();
        scroll.on_wheel(1000.0);
        let mut prev = 0.0;
        for frame in 0..80 {
            if let Some(pos) = scroll.raf(frame as f64 * 16.0) {
                assert!(pos >= prev);
                prev = pos;
            }
        }
        assert_eq!(prev, 1000.0);
    }

    #[test]
    fn test_wheel_deltas_accumulate_and_clamp() {
        let mut scroll = driver();
        scroll.on_wheel(100.0);
        scroll.on_wheel(100.0);
        assert_eq!(scroll.target(), 200.0);
        scroll.on_wheel(-1000.0);
        assert_eq!(scroll.target(), 0.0);
        scroll.on_wheel(99_999.0);
        assert_eq!(scroll.target(), 5000.0);
    }

    #[test]
    fn test_retarget_starts_from_displayed_position() {
        let mut scroll = driver();
        scroll.on_wheel(1000.0);
        scroll.raf(0.0);
        let shown = scroll.raf(200.0).unwrap();
        scroll.on_wheel(500.0);
        // The new animation is stamped on this frame and starts where we were.
        assert!((scroll.raf(216.0).unwrap() - shown).abs() < 2.0);
        assert_eq!(scroll.raf(216.0 + 1200.0), Some(1500.0));
    }

    #[test]
    fn test_stop_freezes_and_ignores_input() {
        let mut scroll = driver();
        scroll.on_wheel(1000.0);
        scroll.raf(0.0);
        let frozen = scroll.raf(100.0).unwrap();

        scroll.stop();
        assert!(scroll.is_stopped());
        assert!(scroll.on_wheel(400.0), "wheel must stay suppressed while stopped");
        scroll.scroll_to(3000.0);
        assert_eq!(scroll.raf(500.0), None);
        assert_eq!(scroll.position(), frozen);
        assert_eq!(scroll.target(), frozen);

        scroll.start();
        assert!(!scroll.is_stopped());
        scroll.on_wheel(100.0);
        assert_eq!(scroll.target(), frozen + 100.0);
    }

    #[test]
    fn test_scroll_to_anchor_offset() {
        let mut scroll = driver();
        scroll.scroll_to(2400.0);
        scroll.raf(0.0);
        assert_eq!(scroll.raf(1200.0), Some(2400.0));
        assert_eq!(scroll.position(), 2400.0);
    }

    #[test]
    fn test_sync_native_only_when_idle() {
        let mut scroll = driver();
        scroll.sync_native(800.0);
        assert_eq!(scroll.position(), 800.0);
        assert_eq!(scroll.target(), 800.0);

        scroll.on_wheel(100.0);
        scroll.sync_native(10.0);
        assert_eq!(scroll.target(), 900.0);
    }

    #[test]
    fn test_shrinking_limit_clamps_in_flight_animation() {
        let mut scroll = driver();
        scroll.on_wheel(5000.0);
        let mut written = Vec::new();
        for frame in 0..=6 {
            written.extend(scroll.raf(frame as f64 * 16.0));
        }
        assert!(scroll.position() > 1000.0);

        scroll.set_limit(1000.0);
        assert_eq!(scroll.position(), 1000.0);
        assert_eq!(scroll.target(), 1000.0);
        written.clear();
        for frame in 7..100 {
            written.extend(scroll.raf(frame as f64 * 16.0));
        }
        assert!(written.iter().all(|&y| y <= 1000.0));
        assert_eq!(scroll.position(), 1000.0);

        scroll.on_wheel(-100.0);
        assert_eq!(scroll.target(), 900.0);
        let mut last = None;
        for frame in 100..200 {
            if let Some(y) = scroll.raf(frame as f64 * 16.0) {
                assert!(y <= 1000.0);
                last = Some(y);
            }
        }
        assert_eq!(last, Some(900.0));
    }

    #[test]
    fn test_shrinking_limit_restarts_toward_new_limit() {
        let mut scroll = driver();
        scroll.on_wheel(5000.0);
        scroll.raf(0.0);
        let shown = scroll.raf(16.0).unwrap();
        assert!(shown < 1000.0);

        scroll.set_limit(1000.0);
        assert!(scroll.is_animating());
        let mut last = shown;
        for frame in 2..100 {
            if let Some(y) = scroll.raf(frame as f64 * 16.0) {
                assert!(y >= last && y <= 1000.0);
                last = y;
            }
        }
        assert_eq!(last, 1000.0);
    }

    #[test]
    fn test_growing_limit_keeps_animation() {
        let mut scroll = driver();
        scroll.on_wheel(1000.0);
        scroll.raf(0.0);
        scroll.set_limit(8000.0);
        assert_eq!(scroll.raf(1200.0), Some(1000.0));
    }

    #[test]
    fn test_zero_delta_does_not_animate() {
        let mut scroll = driver();
        scroll.on_wheel(0.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.raf(0.0), None);
    }
}
