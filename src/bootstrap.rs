//! Process-wide setup that must happen exactly once, before the first render.

use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

/// One-shot latch for global registration.
pub struct Registration {
    done: AtomicBool,
}

impl Registration {
    pub const fn new() -> Self {
        Self {
            done: AtomicBool::new(false),
        }
    }

    /// Run `register` if nothing has registered yet. Returns whether it ran.
    pub fn register<F: FnOnce()>(&self, register: F) -> bool {
        if self
            .done
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        register();
        true
    }
}

impl Default for Registration {
    fn default() -> Self {
        Self::new()
    }
}

static RUNTIME: Registration = Registration::new();

/// Install the panic hook and the console logger. Later calls are no-ops.
pub fn init() -> bool {
    RUNTIME.register(|| {
        // Better error messages in the browser console
        console_error_panic_hook::set_once();

        if let Err(e) = console_log::init_with_level(crate::config::log_level()) {
            web_sys::console::error_1(&format!("error initializing log: {}", e).into());
            return;
        }
        info!("Runtime initialized");
    })
}
