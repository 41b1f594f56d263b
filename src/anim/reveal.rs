//! Scroll-scrubbed reveal regions.
//!
//! A region is described by two trigger positions such as `"top 60%"`: the
//! first word picks a point on the trigger element, the second a point on the
//! viewport. Progress is 0 until those points meet at the start position and
//! 1 once they meet at the end position.

use super::timing::lerp;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    /// Fraction of the measured size: `top` = 0, `center` = 0.5, `bottom` = 1.
    Fraction(f64),
    Pixels(f64),
}

impl Edge {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "top" | "left" => Some(Edge::Fraction(0.0)),
            "center" => Some(Edge::Fraction(0.5)),
            "bottom" | "right" => Some(Edge::Fraction(1.0)),
            _ => {
                if let Some(pct) = token.strip_suffix('%') {
                    pct.parse::<f64>().ok().map(|v| Edge::Fraction(v / 100.0))
                } else {
                    token
                        .strip_suffix("px")
                        .unwrap_or(token)
                        .parse::<f64>()
                        .ok()
                        .map(Edge::Pixels)
                }
            }
        }
    }

    #[inline]
    pub fn resolve(&self, size: f64) -> f64 {
        match self {
            Edge::Fraction(f) => f * size,
            Edge::Pixels(px) => *px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPosition {
    pub element: Edge,
    pub viewport: Edge,
}

impl TriggerPosition {
    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts = spec.split_whitespace();
        let element = Edge::parse(parts.next()?)?;
        let viewport = Edge::parse(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { element, viewport })
    }

    /// Document scroll offset at which this position is reached.
    pub fn scroll_offset(&self, element_top: f64, element_height: f64, viewport_height: f64) -> f64 {
        element_top + self.element.resolve(element_height) - self.viewport.resolve(viewport_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealRegion {
    pub start: TriggerPosition,
    pub end: TriggerPosition,
}

impl RevealRegion {
    pub fn parse(start: &str, end: &str) -> Option<Self> {
        Some(Self {
            start: TriggerPosition::parse(start)?,
            end: TriggerPosition::parse(end)?,
        })
    }

    /// (start, end) scroll offsets for an element at `element_top` in document coordinates.
    pub fn scroll_bounds(&self, element_top: f64, element_height: f64, viewport_height: f64) -> (f64, f64) {
        (
            self.start.scroll_offset(element_top, element_height, viewport_height),
            self.end.scroll_offset(element_top, element_height, viewport_height),
        )
    }
}

/// Linear progress of `scroll` through `(start, end)`, clamped to [0, 1].
pub fn region_progress(bounds: (f64, f64), scroll: f64) -> f64 {
    let (start, end) = bounds;
    if end <= start {
        return if scroll >= start { 1.0 } else { 0.0 };
    }
    ((scroll - start) / (end - start)).clamp(0.0, 1.0)
}

/// Progress of element `index` out of `count` when each element's tween is
/// offset by `stagger` on a shared scrubbed timeline.
pub fn stagger_progress(progress: f64, index: usize, count: usize, stagger: f64) -> f64 {
    if count <= 1 {
        return progress.clamp(0.0, 1.0);
    }
    let total = 1.0 + stagger * (count - 1) as f64;
    (progress * total - index as f64 * stagger).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Accepts `#rrggbb`, `#rgb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        let inner = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let mut channels = inner.split(',').map(|c| c.trim().parse::<f64>().ok());
        let r = channels.next()??;
        let g = channels.next()??;
        let b = channels.next()??;
        Some(Rgb(channel(r), channel(g), channel(b)))
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };
        let byte = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
        Some(Rgb(byte(0)?, byte(2)?, byte(4)?))
    }

    pub fn lerp(&self, to: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| channel(lerp(a as f64, b as f64, t.clamp(0.0, 1.0)));
        Rgb(mix(self.0, to.0), mix(self.1, to.1), mix(self.2, to.2))
    }

    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

#[inline]
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> RevealRegion {
        RevealRegion::parse("top 60%", "bottom 80%").unwrap()
    }

    #[test]
    fn test_parse_trigger_positions() {
        let start = TriggerPosition::parse("top 60%").unwrap();
        assert_eq!(start.element, Edge::Fraction(0.0));
        assert_eq!(start.viewport, Edge::Fraction(0.6));

        let px = TriggerPosition::parse("center 120px").unwrap();
        assert_eq!(px.element, Edge::Fraction(0.5));
        assert_eq!(px.viewport, Edge::Pixels(120.0));

        assert!(TriggerPosition::parse("top").is_none());
        assert!(TriggerPosition::parse("middle 50%").is_none());
        assert!(TriggerPosition::parse("top 50% extra").is_none());
    }

    #[test]
    fn test_scroll_bounds() {
        // Section at y=3000, 1200 tall, viewport 1000 tall.
        let (start, end) = region().scroll_bounds(3000.0, 1200.0, 1000.0);
        assert_eq!(start, 3000.0 - 600.0);
        assert_eq!(end, 4200.0 - 800.0);
    }

    #[test]
    fn test_progress_clamps_outside_region() {
        let bounds = (2400.0, 3400.0);
        assert_eq!(region_progress(bounds, 0.0), 0.0);
        assert_eq!(region_progress(bounds, 2400.0), 0.0);
        assert_eq!(region_progress(bounds, 2900.0), 0.5);
        assert_eq!(region_progress(bounds, 3400.0), 1.0);
        assert_eq!(region_progress(bounds, 9000.0), 1.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let bounds = (2400.0, 3400.0);
        let mut prev = 0.0;
        for step in 0..=100 {
            let p = region_progress(bounds, 2000.0 + step as f64 * 20.0);
            assert!(p >= prev);
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
    }

    #[test]
    fn test_degenerate_region_steps() {
        assert_eq!(region_progress((500.0, 500.0), 499.0), 0.0);
        assert_eq!(region_progress((500.0, 500.0), 500.0), 1.0);
    }

    #[test]
    fn test_stagger_progress() {
        assert_eq!(stagger_progress(0.5, 0, 1, 0.1), 0.5);

        // Three elements, stagger 0.1: timeline length 1.2.
        assert_eq!(stagger_progress(0.0, 2, 3, 0.1), 0.0);
        assert_eq!(stagger_progress(1.0, 0, 3, 0.1), 1.0);
        assert_eq!(stagger_progress(1.0, 2, 3, 0.1), 1.0);
        let first = stagger_progress(0.5, 0, 3, 0.1);
        let last = stagger_progress(0.5, 2, 3, 0.1);
        assert!(first > last);
    }

    #[test]
    fn test_rgb_parse() {
        assert_eq!(Rgb::parse("#00FF41"), Some(Rgb(0, 255, 65)));
        assert_eq!(Rgb::parse("#fff"), Some(Rgb(255, 255, 255)));
        assert_eq!(Rgb::parse("rgb(0, 0, 0)"), Some(Rgb(0, 0, 0)));
        assert_eq!(Rgb::parse("rgba(10, 20, 30, 0.5)"), Some(Rgb(10, 20, 30)));
        assert_eq!(Rgb::parse("green"), None);
        assert_eq!(Rgb::parse("#12345"), None);
    }

    #[test]
    fn test_rgb_lerp_and_css() {
        let black = Rgb(0, 0, 0);
        let green = Rgb(0, 255, 65);
        assert_eq!(black.lerp(green, 0.0), black);
        assert_eq!(black.lerp(green, 1.0), green);
        assert_eq!(black.lerp(green, 2.0), green);
        assert_eq!(green.to_css(), "rgb(0, 255, 65)");
    }
}
