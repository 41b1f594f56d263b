//! Self-rescheduling animation-frame loop.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::dom;
use crate::error::Result;

/// Host capability for running a callback on the next display frame.
pub trait FrameScheduler {
    /// Install the callback every requested frame invokes with its timestamp (ms).
    fn install(&self, callback: Box<dyn FnMut(f64)>);
    /// Ask for one more frame. Returns an id for `cancel`.
    fn request(&self) -> Result<i32>;
    fn cancel(&self, id: i32);
    /// Drop the installed callback.
    fn release(&self);
}

/// `requestAnimationFrame` on the global window.
#[derive(Default)]
pub struct RafScheduler {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameScheduler for RafScheduler {
    fn install(&self, callback: Box<dyn FnMut(f64)>) {
        *self.callback.borrow_mut() = Some(Closure::wrap(callback));
    }

    fn request(&self) -> Result<i32> {
        let window = dom::window()?;
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Err(crate::error::DomError::Js("no frame callback installed".into()));
        };
        Ok(window.request_animation_frame(callback.as_ref().unchecked_ref())?)
    }

    fn cancel(&self, id: i32) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }

    fn release(&self) {
        self.callback.borrow_mut().take();
    }
}

struct LoopInner<S: FrameScheduler> {
    alive: Cell<bool>,
    pending: Cell<Option<i32>>,
    scheduler: S,
}

impl<S: FrameScheduler> LoopInner<S> {
    fn request(&self) -> Result<()> {
        let id = self.scheduler.request()?;
        self.pending.set(Some(id));
        Ok(())
    }
}

/// Runs `tick(timestamp_ms)` every display frame until it returns `false`
/// or the loop is dropped. Dropping cancels the pending frame, so nothing
/// runs after teardown.
pub struct FrameLoop<S: FrameScheduler + 'static = RafScheduler> {
    inner: Rc<LoopInner<S>>,
}

impl FrameLoop<RafScheduler> {
    pub fn start<F>(tick: F) -> Result<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        Self::start_with(RafScheduler::default(), tick)
    }
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn start_with<F>(scheduler: S, mut tick: F) -> Result<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let inner = Rc::new(LoopInner {
            alive: Cell::new(true),
            pending: Cell::new(None),
            scheduler,
        });

        let weak: Weak<LoopInner<S>> = Rc::downgrade(&inner);
        inner.scheduler.install(Box::new(move |now: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if !inner.alive.get() {
                return;
            }
            if !tick(now) {
                inner.alive.set(false);
                return;
            }
            if let Err(e) = inner.request() {
                warn!("Animation frame loop halted: {}", e);
                inner.alive.set(false);
            }
        }));
        if let Err(e) = inner.request() {
            inner.alive.set(false);
            inner.scheduler.release();
            return Err(e);
        }

        Ok(Self { inner })
    }

    pub fn is_running(&self) -> bool {
        self.inner.alive.get()
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.inner.alive.set(false);
        if let Some(id) = self.inner.pending.take() {
            self.inner.scheduler.cancel(id);
        }
        self.inner.scheduler.release();
    }
}

/// Scheduler driven by hand, one frame per `fire`.
#[cfg(test)]
pub mod manual {
    use super::*;
    use crate::error::DomError;

    #[derive(Default)]
    pub struct ManualScheduler {
        callback: RefCell<Option<Box<dyn FnMut(f64)>>>,
        next_id: Cell<i32>,
        pending: Cell<Option<i32>>,
        pub cancelled: RefCell<Vec<i32>>,
        pub released: Cell<bool>,
        pub fail_requests: Cell<bool>,
    }

    impl ManualScheduler {
        pub fn has_pending(&self) -> bool {
            self.pending.get().is_some()
        }

        /// Run the pending frame, if any. Returns whether a callback ran.
        pub fn fire(&self, now: f64) -> bool {
            if self.pending.take().is_none() {
                return false;
            }
            let Some(mut callback) = self.callback.borrow_mut().take() else {
                return false;
            };
            callback(now);
            if !self.released.get() && self.callback.borrow().is_none() {
                *self.callback.borrow_mut() = Some(callback);
            }
            true
        }
    }

    impl FrameScheduler for Rc<ManualScheduler> {
        fn install(&self, callback: Box<dyn FnMut(f64)>) {
            self.released.set(false);
            *self.callback.borrow_mut() = Some(callback);
        }

        fn request(&self) -> Result<i32> {
            if self.fail_requests.get() {
                return Err(DomError::NoWindow);
            }
            let id = self.next_id.get() + 1;
            self.next_id.set(id);
            self.pending.set(Some(id));
            Ok(id)
        }

        fn cancel(&self, id: i32) {
            if self.pending.get() == Some(id) {
                self.pending.set(None);
            }
            self.cancelled.borrow_mut().push(id);
        }

        fn release(&self) {
            self.released.set(true);
            self.callback.borrow_mut().take();
        }
    }
}
