use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::anim::cursor::CursorFollower;
use crate::anim::frame::{FrameLoop, FrameScheduler, RafScheduler};
use crate::config::CursorConfig;
use crate::dom::{self, Listener, ListenerHost};
use crate::error::Result;

/// Host capability for asking how the user points. `None` means the probe failed.
pub trait InputProbe {
    fn max_touch_points(&self) -> Option<i32>;
    fn has_touch_events(&self) -> Option<bool>;
    fn coarse_pointer(&self) -> Option<bool>;
}

pub struct BrowserProbe;

impl InputProbe for BrowserProbe {
    fn max_touch_points(&self) -> Option<i32> {
        web_sys::window().map(|w| w.navigator().max_touch_points())
    }

    fn has_touch_events(&self) -> Option<bool> {
        let window = web_sys::window()?;
        web_sys::js_sys::Reflect::has(&window, &"ontouchstart".into()).ok()
    }

    fn coarse_pointer(&self) -> Option<bool> {
        dom::media_matches("(pointer: coarse)").ok()
    }
}

/// Whether the primary input is touch. Any probe failure counts as "no".
pub fn is_touch(probe: &dyn InputProbe) -> bool {
    probe.max_touch_points().unwrap_or(0) > 0
        || probe.has_touch_events().unwrap_or(false)
        || probe.coarse_pointer().unwrap_or(false)
}

/// Touch capability, probed on first read and fixed afterwards.
#[derive(Default)]
pub struct TouchCapability {
    detected: OnceCell<bool>,
}

impl TouchCapability {
    pub fn get(&self, probe: &dyn InputProbe) -> bool {
        *self.detected.get_or_init(|| is_touch(probe))
    }
}

/// Mousemove subscription plus the frame loop painting the follower.
/// Dropping it detaches both.
pub struct PointerTracking<H: ListenerHost = web_sys::EventTarget, S: FrameScheduler + 'static = RafScheduler> {
    follower: Rc<RefCell<CursorFollower>>,
    _listener: Listener<H>,
    _frame: FrameLoop<S>,
}

impl<H: ListenerHost, S: FrameScheduler + 'static> PointerTracking<H, S> {
    pub fn start<P>(host: H, scheduler: S, config: CursorConfig, mut paint: P) -> Result<Self>
    where
        P: FnMut(&str) + 'static,
    {
        let follower = Rc::new(RefCell::new(CursorFollower::new(config)));

        let listener = {
            let follower = follower.clone();
            Listener::attach(host, "mousemove", true, move |e| {
                if let Ok(e) = e.dyn_into::<MouseEvent>() {
                    follower
                        .borrow_mut()
                        .on_pointer_move(dom::now_ms(), e.client_x() as f64, e.client_y() as f64);
                }
            })?
        };

        // Once the follower has been painted at rest, frames are free until the next move.
        let mut painted_at_rest = false;
        let frame = {
            let follower = follower.clone();
            FrameLoop::start_with(scheduler, move |now| {
                let follower = follower.borrow();
                let settled = follower.is_settled(now);
                if !(settled && painted_at_rest) {
                    paint(&follower.transform_at(now));
                    painted_at_rest = settled;
                }
                true
            })?
        };

        Ok(Self {
            follower,
            _listener: listener,
            _frame: frame,
        })
    }

    pub fn pointer_moved(&self, now_ms: f64, x: f64, y: f64) {
        self.follower.borrow_mut().on_pointer_move(now_ms, x, y);
    }
}

fn bind(element: HtmlElement, config: CursorConfig) -> Result<PointerTracking> {
    let window = dom::window()?;
    PointerTracking::start(
        window.into(),
        RafScheduler::default(),
        config,
        move |transform| {
            let _ = dom::set_style(&element, "transform", transform);
        },
    )
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let touch = use_memo(|_| TouchCapability::default(), ());
    let is_touch = touch.get(&BrowserProbe);
    let cursor_ref = use_node_ref();

    {
        let cursor_ref = cursor_ref.clone();
        use_effect_with_deps(
            move |is_touch: &bool| {
                let binding = if *is_touch {
                    debug!("Touch device, custom cursor disabled");
                    None
                } else {
                    cursor_ref
                        .cast::<HtmlElement>()
                        .map(|el| bind(el, CursorConfig::default()))
                        .and_then(|binding| {
                            binding
                                .map_err(|e| warn!("Custom cursor disabled: {}", e))
                                .ok()
                        })
                };
                move || drop(binding)
            },
            is_touch,
        );
    }

    if is_touch {
        return html! {};
    }

    html! {
        <div ref={cursor_ref} class="custom-cursor" aria-hidden="true">
            <div class="custom-cursor-dot"></div>
        </div>
    }
}
