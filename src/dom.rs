//! Thin helpers over `web_sys` that report failures as `DomError`
//! instead of panicking.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, HtmlElement, Window};

use crate::error::{DomError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn query(selector: &str) -> Result<HtmlElement> {
    document()?
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::MissingAnchor(selector.to_string()))
}

/// All matches in document order. An empty result is not an error.
pub fn query_all(selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn element_by_id(id: &str) -> Result<HtmlElement> {
    document()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::MissingAnchor(format!("#{}", id)))
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> Result<f64> {
    Ok(window()?.scroll_y()?)
}

pub fn viewport_height() -> Result<f64> {
    window()?
        .inner_height()?
        .as_f64()
        .ok_or_else(|| DomError::Js("innerHeight is not a number".into()))
}

/// Largest reachable scroll offset.
pub fn scroll_limit() -> Result<f64> {
    let root = document()?
        .document_element()
        .ok_or(DomError::NoDocument)?;
    Ok((root.scroll_height() as f64 - viewport_height()?).max(0.0))
}

/// Top edge of `el` in document coordinates.
pub fn document_top(el: &HtmlElement) -> Result<f64> {
    Ok(el.get_bounding_client_rect().top() + scroll_y()?)
}

pub fn computed_color(el: &HtmlElement) -> Result<String> {
    let style = window()?
        .get_computed_style(el)?
        .ok_or_else(|| DomError::Js("no computed style".into()))?;
    Ok(style.get_property_value("color")?)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<()> {
    Ok(el.style().set_property(property, value)?)
}

pub fn clear_style(el: &HtmlElement, property: &str) -> Result<()> {
    el.style().remove_property(property)?;
    Ok(())
}

/// Toggle `overflow: hidden` on the root element.
pub fn set_scroll_lock(locked: bool) -> Result<()> {
    let root = document()?
        .document_element()
        .ok_or(DomError::NoDocument)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::NoDocument)?;
    if locked {
        set_style(&root, "overflow", "hidden")
    } else {
        clear_style(&root, "overflow")
    }
}

/// Rewrite the URL fragment without the browser jumping to it.
pub fn replace_hash(anchor: &str) -> Result<()> {
    let history = window()?.history()?;
    history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&format!("#{}", anchor)))?;
    Ok(())
}

/// Does `(pointer: coarse)` or similar match?
pub fn media_matches(query: &str) -> Result<bool> {
    Ok(window()?
        .match_media(query)?
        .map(|list| list.matches())
        .unwrap_or(false))
}

/// Host capability for subscribing callbacks to named events.
pub trait ListenerHost {
    /// Keeps the subscribed callback alive until `detach`.
    type Token;

    fn attach(&self, event: &'static str, passive: bool, callback: Box<dyn FnMut(Event)>) -> Result<Self::Token>;
    fn detach(&self, event: &'static str, token: &Self::Token);
}

impl ListenerHost for EventTarget {
    type Token = Closure<dyn FnMut(Event)>;

    fn attach(&self, event: &'static str, passive: bool, callback: Box<dyn FnMut(Event)>) -> Result<Self::Token> {
        let callback = Closure::wrap(callback);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        self.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(callback)
    }

    fn detach(&self, event: &'static str, token: &Self::Token) {
        let _ = self.remove_event_listener_with_callback(event, token.as_ref().unchecked_ref());
    }
}

/// An event listener removed from its host on drop.
pub struct Listener<H: ListenerHost = EventTarget> {
    host: H,
    event: &'static str,
    token: H::Token,
}

impl Listener<EventTarget> {
    pub fn new<F>(target: &EventTarget, event: &'static str, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::with_passive(target, event, true, callback)
    }

    /// `passive: false` is needed for listeners that call `prevent_default`.
    pub fn with_passive<F>(target: &EventTarget, event: &'static str, passive: bool, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::attach(target.clone(), event, passive, callback)
    }
}

impl<H: ListenerHost> Listener<H> {
    pub fn attach<F>(host: H, event: &'static str, passive: bool, callback: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let token = host.attach(event, passive, Box::new(callback))?;
        Ok(Self { host, event, token })
    }
}

impl<H: ListenerHost> Drop for Listener<H> {
    fn drop(&mut self) {
        self.host.detach(self.event, &self.token);
    }
}

/// Host that records subscriptions instead of touching the browser.
#[cfg(test)]
pub mod recording {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    pub struct RecordingHost {
        pub attached: RefCell<Vec<&'static str>>,
        pub detached: RefCell<Vec<&'static str>>,
    }

    impl RecordingHost {
        pub fn live(&self) -> usize {
            self.attached.borrow().len() - self.detached.borrow().len()
        }
    }

    impl ListenerHost for Rc<RecordingHost> {
        type Token = ();

        fn attach(&self, event: &'static str, _passive: bool, _callback: Box<dyn FnMut(Event)>) -> Result<()> {
            self.attached.borrow_mut().push(event);
            Ok(())
        }

        fn detach(&self, event: &'static str, _token: &()) {
            self.detached.borrow_mut().push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::recording::RecordingHost;
    use super::*;

    #[test]
    fn test_listener_detaches_on_drop() {
        let host = Rc::new(RecordingHost::default());
        let listener = Listener::attach(host.clone(), "mousemove", true, |_| {}).unwrap();
        assert_eq!(*host.attached.borrow(), vec!["mousemove"]);
        assert_eq!(host.live(), 1);

        drop(listener);
        assert_eq!(*host.detached.borrow(), vec!["mousemove"]);
        assert_eq!(host.live(), 0);
    }
}
