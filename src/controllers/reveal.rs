//! Scroll Reveal
//!
//! Cards and content blocks fade in the first time they scroll into view.

use std::rc::Rc;

use scroll_reveal::{prepare_reveal, reveal, Trigger, VisibilityObserver};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use super::Feature;
use crate::config::SiteConfig;
use crate::dom;

pub struct ScrollReveal {
    elements: Vec<HtmlElement>,
    threshold: f64,
}

impl Feature for ScrollReveal {
    const NAME: &'static str = "scroll-reveal";

    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self> {
        let elements: Vec<HtmlElement> = dom::query_all(document, &config.reveal_selector)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        (!elements.is_empty()).then(|| Self {
            elements,
            threshold: config.reveal_threshold,
        })
    }

    fn install(self) -> Result<(), JsValue> {
        let observer = VisibilityObserver::new(self.threshold, Trigger::Once, |el| {
            if let Err(err) = reveal(&el) {
                tracing::warn!(error = ?err, "reveal failed");
            }
        })?;
        for element in &self.elements {
            prepare_reveal(element)?;
            observer.observe(element);
        }
        tracing::debug!(count = self.elements.len(), "reveal targets prepared");
        observer.forget();
        Ok(())
    }
}
