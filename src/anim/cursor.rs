//! Pointer follower state for the custom cursor.

use super::timing::Tween;
use crate::config::CursorConfig;

#[derive(Debug, Clone)]
pub struct CursorFollower {
    x: Tween,
    y: Tween,
}

impl CursorFollower {
    pub fn new(config: CursorConfig) -> Self {
        Self {
            x: Tween::at_rest(0.0, config.duration_s, config.easing),
            y: Tween::at_rest(0.0, config.duration_s, config.easing),
        }
    }

    /// Start easing toward the pointer's viewport coordinates.
    pub fn on_pointer_move(&mut self, now_ms: f64, client_x: f64, client_y: f64) {
        self.x.retarget(now_ms, client_x);
        self.y.retarget(now_ms, client_y);
    }

    #[cfg(test)]
    pub fn target(&self) -> (f64, f64) {
        (self.x.to, self.y.to)
    }

    pub fn position_at(&self, now_ms: f64) -> (f64, f64) {
        (self.x.value_at(now_ms), self.y.value_at(now_ms))
    }

    pub fn is_settled(&self, now_ms: f64) -> bool {
        self.x.is_complete(now_ms) && self.y.is_complete(now_ms)
    }

    /// CSS `transform` value placing the follower's centre at its current position.
    pub fn transform_at(&self, now_ms: f64) -> String {
        let (x, y) = self.position_at(now_ms);
        format!("translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%)", x, y)
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CursorConfig::default())
    }
}
