//! Easing curves shared by every animation on the page.
//!
//! Each curve maps progress in [0, 1] to eased progress in [0, 1].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// f(t) = 1 - (1-t)²
    Power2Out,
    /// f(t) = 1 - (1-t)⁴
    Power4Out,
    /// f(t) = min(1, 1.001 - 2^(-10t)), the smooth-scroll curve
    ExpoScroll,
}

impl Ease {
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => power_ease_out(t, 2),
            Ease::Power4Out => power_ease_out(t, 4),
            Ease::ExpoScroll => expo_scroll(t),
        }
    }

    /// Closest CSS `<easing-function>`, for transitions left to the browser.
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power2Out => "cubic-bezier(0.5, 1, 0.89, 1)",
            Ease::Power4Out => "cubic-bezier(0.25, 1, 0.5, 1)",
            Ease::ExpoScroll => "cubic-bezier(0.16, 1, 0.3, 1)",
        }
    }
}

#[inline]
fn power_ease_out(t: f64, power: i32) -> f64 {
    1.0 - (1.0 - t).powi(power)
}

#[inline]
fn expo_scroll(t: f64) -> f64 {
    (1.001 - 2.0_f64.powf(-10.0 * t)).min(1.0)
}
