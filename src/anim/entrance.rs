//! One-shot staggered entrance for the hero copy.

use std::cell::Cell;

use super::timing::{lerp, progress};
use crate::config::EntranceConfig;

/// Visual state of one element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    pub y: f64,
    pub opacity: f64,
    pub blur: f64,
}

impl EntranceFrame {
    pub const REST: EntranceFrame = EntranceFrame { y: 0.0, opacity: 1.0, blur: 0.0 };

    /// Inline style properties, as (name, value) pairs.
    pub fn properties(&self) -> [(&'static str, String); 3] {
        [
            ("transform", format!("translate3d(0, {:.2}px, 0)", self.y)),
            ("opacity", format!("{:.3}", self.opacity)),
            ("filter", format!("blur({:.2}px)", self.blur)),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct EntranceTimeline {
    config: EntranceConfig,
}

impl EntranceTimeline {
    pub fn new(config: EntranceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EntranceConfig {
        &self.config
    }

    /// Frame for element `index`, `elapsed_s` after the timeline started.
    pub fn frame(&self, index: usize, elapsed_s: f64) -> EntranceFrame {
        let delay = index as f64 * self.config.stagger_s;
        let t = progress(elapsed_s - delay, self.config.duration_s);
        let eased = self.config.easing.apply(t);
        EntranceFrame {
            y: lerp(self.config.offset_y, EntranceFrame::REST.y, eased),
            opacity: lerp(self.config.opacity, EntranceFrame::REST.opacity, eased),
            blur: lerp(self.config.blur_px, EntranceFrame::REST.blur, eased),
        }
    }

    pub fn total_duration(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.config.duration_s + (count - 1) as f64 * self.config.stagger_s
    }

    pub fn is_complete(&self, count: usize, elapsed_s: f64) -> bool {
        elapsed_s >= self.total_duration(count)
    }
}

impl Default for EntranceTimeline {
    fn default() -> Self {
        Self::new(EntranceConfig::default())
    }
}

/// Latch that lets an action fire at most once.
#[derive(Debug, Default)]
pub struct PlayOnce {
    fired: Cell<bool>,
}

impl PlayOnce {
    /// True only on the first call.
    pub fn try_fire(&self) -> bool {
        !self.fired.replace(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_offset_state() {
        let timeline = EntranceTimeline::default();
        let frame = timeline.frame(0, 0.0);
        assert_eq!(frame, EntranceFrame { y: 100.0, opacity: 0.0, blur: 20.0 });
    }

    #[test]
    fn test_settles_at_rest() {
        let timeline = EntranceTimeline::default();
        assert_eq!(timeline.frame(0, 1.5), EntranceFrame::REST);
        assert_eq!(timeline.frame(1, 1.8), EntranceFrame::REST);
    }

    #[test]
    fn test_stagger_delays_later_elements() {
        let timeline = EntranceTimeline::default();
        // Second element has not started 0.1s in.
        assert_eq!(timeline.frame(1, 0.1).opacity, 0.0);
        assert!(timeline.frame(0, 0.1).opacity > 0.0);
        assert!(timeline.frame(0, 0.5).opacity > timeline.frame(1, 0.5).opacity);
    }

    #[test]
    fn test_total_duration_and_completion() {
        let timeline = EntranceTimeline::default();
        assert_eq!(timeline.total_duration(0), 0.0);
        assert!((timeline.total_duration(2) - 1.7).abs() < 1e-9);
        assert!(!timeline.is_complete(2, 1.6));
        assert!(timeline.is_complete(2, 1.71));
    }

    #[test]
    fn test_custom_config() {
        let timeline = EntranceTimeline::new(EntranceConfig {
            stagger_s: 0.5,
            ..Default::default()
        });
        assert!((timeline.total_duration(3) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_play_once_fires_a_single_time() {
        let latch = PlayOnce::default();
        assert!(latch.try_fire());
        assert!(!latch.try_fire());
        assert!(!latch.try_fire());
    }

    #[test]
    fn test_properties() {
        let [transform, opacity, filter] = EntranceFrame { y: 100.0, opacity: 0.0, blur: 20.0 }.properties();
        assert_eq!(transform, ("transform", "translate3d(0, 100.00px, 0)".to_string()));
        assert_eq!(opacity, ("opacity", "0.000".to_string()));
        assert_eq!(filter, ("filter", "blur(20.00px)".to_string()));
    }
}
