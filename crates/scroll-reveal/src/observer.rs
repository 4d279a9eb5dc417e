//! Visibility Observer
//!
//! Thin wrapper over `IntersectionObserver` that hands visible elements to a callback.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// How often a callback may fire for the same element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Stop observing the element after its first crossing
    Once,
    /// Fire on every crossing into view
    EveryCrossing,
}

pub struct VisibilityObserver {
    observer: IntersectionObserver,
    callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// `threshold` is the visible fraction (0.0..=1.0) an element must reach.
    pub fn new<F>(threshold: f64, trigger: Trigger, mut on_visible: F) -> Result<Self, JsValue>
    where
        F: FnMut(Element) + 'static,
    {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if trigger == Trigger::Once {
                        observer.unobserve(&target);
                    }
                    on_visible(target);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin("0px");

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        tracing::debug!(threshold, ?trigger, "visibility observer created");

        Ok(Self { observer, callback })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Keep observing for the rest of the page view
    pub fn forget(self) {
        self.callback.forget();
    }
}
