use crate::config::BREAKPOINT_PX;

/// Which variant of the page a viewport width gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Menu button plus slide-down overlay.
    Mobile,
    /// Inline nav links, no overlay.
    Desktop,
}

impl Layout {
    pub fn for_width(width: f64) -> Self {
        Self::for_width_with_breakpoint(width, BREAKPOINT_PX)
    }

    pub fn for_width_with_breakpoint(width: f64, breakpoint: f64) -> Self {
        if width >= breakpoint {
            Layout::Desktop
        } else {
            Layout::Mobile
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, Layout::Mobile)
    }
}

/// Media query matching the mobile layout, shared with the stylesheet.
pub fn mobile_media_query() -> String {
    format!("(max-width: {}px)", BREAKPOINT_PX - 1.0)
}

/// Media query matching the desktop layout.
pub fn desktop_media_query() -> String {
    format!("(min-width: {}px)", BREAKPOINT_PX)
}
