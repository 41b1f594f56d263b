use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::WheelEvent;
use yew::prelude::*;

use crate::anim::frame::FrameLoop;
use crate::anim::smooth_scroll::SmoothScroll;
use crate::config::ScrollConfig;
use crate::dom::{self, Listener};
use crate::error::Result;
use crate::menu::ScrollControl;

const LINE_HEIGHT_PX: f64 = 16.0;

/// Freezes native scrolling (wheel, touch, keyboard) while the driver is stopped.
pub trait ScrollLock {
    fn set_locked(&self, locked: bool) -> Result<()>;
}

/// `overflow: hidden` on the root element.
pub struct DocumentLock;

impl ScrollLock for DocumentLock {
    fn set_locked(&self, locked: bool) -> Result<()> {
        dom::set_scroll_lock(locked)
    }
}

/// Shared handle to the page's smooth-scroll state.
#[derive(Clone)]
pub struct ScrollDriver {
    state: Rc<RefCell<SmoothScroll>>,
    lock: Rc<dyn ScrollLock>,
    /// False until the window listeners and frame loop are running.
    attached: Rc<Cell<bool>>,
}

impl PartialEq for ScrollDriver {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl ScrollDriver {
    pub fn new(config: ScrollConfig) -> Self {
        Self::with_lock(config, Rc::new(DocumentLock))
    }

    pub fn with_lock(config: ScrollConfig, lock: Rc<dyn ScrollLock>) -> Self {
        Self {
            state: Rc::new(RefCell::new(SmoothScroll::new(config))),
            lock,
            attached: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.state.borrow().is_stopped()
    }

    /// Ease the page to the section with element id `anchor`.
    /// Falls back to a native jump when the driver never attached.
    pub fn scroll_to_anchor(&self, anchor: &str) -> Result<()> {
        let element = dom::element_by_id(anchor)?;
        if !self.attached.get() {
            element.scroll_into_view();
            return Ok(());
        }
        let top = dom::document_top(&element)?;
        self.scroll_to_offset(top, dom::scroll_limit()?);
        debug!("Scrolling to #{} at {}px", anchor, top);
        Ok(())
    }

    /// Ease to a document offset, with `limit` as the current maximum scroll.
    pub fn scroll_to_offset(&self, offset: f64, limit: f64) {
        let mut state = self.state.borrow_mut();
        state.set_limit(limit);
        state.scroll_to(offset);
        debug!("Smooth scroll {}px -> {}px", state.position(), state.target());
    }

    fn set_locked(&self, locked: bool) {
        if let Err(e) = self.lock.set_locked(locked) {
            warn!("Failed to {} scrolling: {}", if locked { "lock" } else { "unlock" }, e);
        }
    }
}

impl ScrollControl for ScrollDriver {
    fn stop(&self) {
        self.state.borrow_mut().stop();
        self.set_locked(true);
    }

    fn start(&self) {
        self.state.borrow_mut().start();
        self.set_locked(false);
    }
}

/// Listeners and frame loop wiring a driver to the window. Dropping it
/// detaches everything.
struct DriverBinding {
    _listeners: Vec<Listener>,
    _frame: FrameLoop,
}

fn bind(driver: &ScrollDriver) -> Result<DriverBinding> {
    let window = dom::window()?;
    {
        let mut state = driver.state.borrow_mut();
        state.set_limit(dom::scroll_limit()?);
        state.sync_native(dom::scroll_y()?);
    }

    let on_wheel = {
        let state = driver.state.clone();
        move |e: web_sys::Event| {
            let Ok(e) = e.dyn_into::<WheelEvent>() else {
                return;
            };
            // Pinch zoom arrives as ctrl+wheel; leave it to the browser.
            if e.ctrl_key() {
                return;
            }
            let delta = match e.delta_mode() {
                WheelEvent::DOM_DELTA_LINE => e.delta_y() * LINE_HEIGHT_PX,
                WheelEvent::DOM_DELTA_PAGE => e.delta_y() * dom::viewport_height().unwrap_or(800.0),
                _ => e.delta_y(),
            };
            let mut state = state.borrow_mut();
            if let Ok(limit) = dom::scroll_limit() {
                state.set_limit(limit);
            }
            if state.on_wheel(delta) {
                e.prevent_default();
            }
        }
    };

    let on_scroll = {
        let state = driver.state.clone();
        move |_: web_sys::Event| {
            if let Ok(y) = dom::scroll_y() {
                state.borrow_mut().sync_native(y);
            }
        }
    };

    let on_resize = {
        let state = driver.state.clone();
        move |_: web_sys::Event| {
            if let Ok(limit) = dom::scroll_limit() {
                state.borrow_mut().set_limit(limit);
            }
        }
    };

    let listeners = vec![
        Listener::with_passive(&window, "wheel", false, on_wheel)?,
        Listener::new(&window, "scroll", on_scroll)?,
        Listener::new(&window, "resize", on_resize)?,
    ];

    let frame = {
        let state = driver.state.clone();
        let window = window.clone();
        FrameLoop::start(move |now| {
            let next = state.borrow_mut().raf(now);
            if let Some(y) = next {
                window.scroll_to_with_x_and_y(0.0, y);
            }
            true
        })?
    };

    Ok(DriverBinding {
        _listeners: listeners,
        _frame: frame,
    })
}

/// Take over wheel scrolling for the lifetime of the calling component.
/// If the host refuses, the page keeps native scrolling.
#[hook]
pub fn use_smooth_scroll(config: ScrollConfig) -> ScrollDriver {
    let driver = use_state(|| ScrollDriver::new(config));

    {
        let driver = (*driver).clone();
        use_effect_with_deps(
            move |_| {
                let binding = match bind(&driver) {
                    Ok(binding) => {
                        driver.attached.set(true);
                        debug!("Smooth scroll attached");
                        Some(binding)
                    }
                    Err(e) => {
                        warn!("Smooth scroll unavailable, using native scrolling: {}", e);
                        None
                    }
                };
                move || {
                    drop(binding);
                    driver.attached.set(false);
                    if driver.is_stopped() {
                        driver.set_locked(false);
                    }
                    debug!("Smooth scroll detached");
                }
            },
            (),
        );
    }

    (*driver).clone()
}
