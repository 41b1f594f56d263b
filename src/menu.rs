//! Open/closed state of the mobile navigation overlay and its coupling to
//! the smooth-scroll driver.

use log::debug;

/// Something that can freeze and resume page scrolling.
pub trait ScrollControl {
    fn stop(&self);
    fn start(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggle(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn close(self) -> Self {
        MenuState::Closed
    }
}

/// Apply the scroll side effect of moving from `from` to `to`.
/// Opening stops scrolling, closing resumes it, a self-transition does nothing.
pub fn transition(from: MenuState, to: MenuState, scroll: &dyn ScrollControl) {
    match (from, to) {
        (MenuState::Closed, MenuState::Open) => {
            debug!("Menu opened, freezing scroll");
            scroll.stop();
        }
        (MenuState::Open, MenuState::Closed) => {
            debug!("Menu closed, resuming scroll");
            scroll.start();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<&'static str>>,
    }

    impl ScrollControl for Recorder {
        fn stop(&self) {
            self.calls.borrow_mut().push("stop");
        }
        fn start(&self) {
            self.calls.borrow_mut().push("start");
        }
    }

    fn step(state: &mut MenuState, next: MenuState, scroll: &Recorder) {
        transition(*state, next, scroll);
        *state = next;
    }

    #[test]
    fn test_toggle() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert_eq!(MenuState::Closed.toggle(), MenuState::Open);
        assert_eq!(MenuState::Open.toggle(), MenuState::Closed);
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
    }

    #[test]
    fn test_open_stops_and_close_starts() {
        let scroll = Recorder::default();
        let mut state = MenuState::Closed;

        let next = state.toggle();
        step(&mut state, next, &scroll);
        assert!(state.is_open());
        assert_eq!(*scroll.calls.borrow(), vec!["stop"]);

        let next = state.toggle();
        step(&mut state, next, &scroll);
        assert!(!state.is_open());
        assert_eq!(*scroll.calls.borrow(), vec!["stop", "start"]);
    }

    #[test]
    fn test_nav_link_closes_and_resumes() {
        let scroll = Recorder::default();
        let mut state = MenuState::Closed;
        let next = state.toggle();
        step(&mut state, next, &scroll);
        let next = state.close();
        step(&mut state, next, &scroll);
        assert_eq!(*scroll.calls.borrow(), vec!["stop", "start"]);
    }

    #[test]
    fn test_closing_when_closed_is_silent() {
        let scroll = Recorder::default();
        let mut state = MenuState::Closed;
        let next = state.close();
        step(&mut state, next, &scroll);
        assert!(scroll.calls.borrow().is_empty());
    }
}
