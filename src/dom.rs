//! DOM Helpers
//!
//! Small wrappers over web-sys used by every page feature.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// All elements matching `selector`, in document order. Invalid selectors match nothing.
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        tracing::warn!(selector, "invalid selector");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query<T: JsCast>(root: &Document, selector: &str) -> Option<T> {
    root.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

pub fn by_id<T: JsCast>(root: &Document, id: &str) -> Option<T> {
    root.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Attach a listener for the rest of the page view
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), JsValue> {
    element.style().set_property(property, value)
}

/// Run `f` once the document is parsed
pub fn when_ready<F: FnOnce() + 'static>(document: &Document, f: F) -> Result<(), JsValue> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    listen(document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}

/// Completion shared by the `transitionend` listener and the fallback timer.
/// Whichever path settles first gets the callback and the listener to release.
struct Pending<F, L> {
    done: Option<F>,
    listener: Option<L>,
}

impl<F, L> Pending<F, L> {
    fn new(done: F) -> Self {
        Self { done: Some(done), listener: None }
    }

    fn settle(&mut self) -> (Option<F>, Option<L>) {
        (self.done.take(), self.listener.take())
    }
}

/// Run `done` once: on the element's own `transitionend`, or after `fallback_ms`
/// if no transition finishes first (none running, or the page is hidden).
/// The listener is removed and freed on either path.
pub fn after_transition<F>(element: &HtmlElement, fallback_ms: u32, done: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let pending: Rc<RefCell<Pending<F, Closure<dyn FnMut(Event)>>>> =
        Rc::new(RefCell::new(Pending::new(done)));

    let fire = {
        let pending = pending.clone();
        let element = element.clone();
        move || {
            let (done, listener) = pending.borrow_mut().settle();
            if let Some(listener) = listener {
                let _ = element.remove_event_listener_with_callback(
                    "transitionend",
                    listener.as_ref().unchecked_ref(),
                );
            }
            if let Some(f) = done {
                f();
            }
        }
    };

    let own_target = JsValue::from(element.clone());
    let on_end_fire = fire.clone();
    let on_end = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        // Bubbled ends from child transitions are left to the timer
        if ev.target().map(JsValue::from).as_ref() == Some(&own_target) {
            on_end_fire();
        }
    });
    element.add_event_listener_with_callback("transitionend", on_end.as_ref().unchecked_ref())?;
    pending.borrow_mut().listener = Some(on_end);

    Timeout::new(fallback_ms, fire).forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_settles_once() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let mut pending = Pending::new(move || *counter.borrow_mut() += 1);
        pending.listener = Some("listener");

        let (done, listener) = pending.settle();
        done.expect("first settle gets the callback")();
        assert_eq!(listener, Some("listener"));

        let (done, listener) = pending.settle();
        assert!(done.is_none());
        assert!(listener.is_none());
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_timer_path_releases_listener() {
        // No transitionend ever arrives; the timer settling must still drop the listener
        let listener = Rc::new(());
        let mut pending = Pending::new(|| {});
        pending.listener = Some(listener.clone());
        assert_eq!(Rc::strong_count(&listener), 2);

        let (_, released) = pending.settle();
        drop(released);
        assert_eq!(Rc::strong_count(&listener), 1);
    }
}
