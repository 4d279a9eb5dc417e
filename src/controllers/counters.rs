//! Statistic Counters
//!
//! Counts each statistic up from zero the first time it is half visible,
//! then puts the original text (with suffixes like "+" or "kg") back.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use scroll_reveal::{animate_counter, mark_once, CounterTarget, Trigger, VisibilityObserver, COUNTED_CLASS};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::Feature;
use crate::config::SiteConfig;
use crate::dom;

pub struct StatCounters {
    counters: Vec<Element>,
    config: Rc<SiteConfig>,
}

/// What to do when a counter comes into view
#[derive(Clone, Debug, PartialEq)]
pub enum CounterPlan {
    /// Already counted earlier in this page view
    Skip,
    /// Text has no number to count to
    Static,
    Animate(CounterTarget),
}

impl CounterPlan {
    /// `first_time` is the result of setting the counted guard
    pub fn decide(first_time: bool, text: &str) -> Self {
        if !first_time {
            return CounterPlan::Skip;
        }
        CounterTarget::parse(text).map_or(CounterPlan::Static, CounterPlan::Animate)
    }
}

fn start_counter(element: Element, config: &SiteConfig) -> Result<(), JsValue> {
    let first_time = mark_once(&element, COUNTED_CLASS)?;
    let text = element.text_content().unwrap_or_default();
    let target = match CounterPlan::decide(first_time, &text) {
        CounterPlan::Animate(target) => target,
        CounterPlan::Skip => return Ok(()),
        CounterPlan::Static => {
            tracing::debug!(%text, "counter has no number, left as-is");
            return Ok(());
        }
    };

    // Restore on a fixed delay, and again after the last frame in case
    // slow frames ran past the delay
    let restored = element.clone();
    let original = target.original.clone();
    Timeout::new(config.counter_restore_ms, move || {
        restored.set_text_content(Some(&original));
    })
    .forget();

    element.set_text_content(Some("0"));
    let finished = element.clone();
    let original = target.original.clone();
    animate_counter(element, &target, config.counter_duration_ms, move || {
        finished.set_text_content(Some(&original));
    })
}

impl Feature for StatCounters {
    const NAME: &'static str = "stat-counters";

    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self> {
        let counters = dom::query_all(document, &config.counter_selector);
        (!counters.is_empty()).then(|| Self { counters, config: config.clone() })
    }

    fn install(self) -> Result<(), JsValue> {
        let config = self.config.clone();
        let observer = VisibilityObserver::new(config.counter_threshold, Trigger::Once, move |el| {
            if let Err(err) = start_counter(el, &config) {
                tracing::warn!(error = ?err, "counter animation failed");
            }
        })?;
        for counter in &self.counters {
            observer.observe(counter);
        }
        observer.forget();
        Ok(())
    }
}
