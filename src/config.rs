use log::Level;

use crate::anim::easing::Ease;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewport width (px) at which the desktop nav replaces the menu button.
pub const BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollConfig {
    pub duration_s: f64,
    pub easing: Ease,
    pub wheel_multiplier: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_s: 1.2,
            easing: Ease::ExpoScroll,
            wheel_multiplier: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorConfig {
    pub duration_s: f64,
    pub easing: Ease,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            duration_s: 0.4,
            easing: Ease::Power2Out,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntranceConfig {
    pub selector: &'static str,
    pub offset_y: f64,
    pub opacity: f64,
    pub blur_px: f64,
    pub duration_s: f64,
    pub stagger_s: f64,
    pub easing: Ease,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            selector: ".hero-text",
            offset_y: 100.0,
            opacity: 0.0,
            blur_px: 20.0,
            duration_s: 1.5,
            stagger_s: 0.2,
            easing: Ease::Power4Out,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    pub trigger: &'static str,
    pub targets: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub color: &'static str,
    pub stagger: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            trigger: ".reveal-section",
            targets: ".reveal-content",
            start: "top 60%",
            end: "bottom 80%",
            color: "#00FF41",
            stagger: 0.1,
        }
    }
}

/// Seconds for one full loop of the CTA marquee.
pub const MARQUEE_DURATION_S: f64 = 20.0;
