//! Reveal Styling
//!
//! Elements start invisible and lowered; adding `revealed` settles them.
//! The state is one-way for the lifetime of the page.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

pub const REVEALED_CLASS: &str = "revealed";

/// Idempotency marker for counters that already ran
pub const COUNTED_CLASS: &str = "counted";

/// Rule injected once into the document head
pub const REVEALED_CSS: &str = "
    .revealed {
        opacity: 1 !important;
        transform: translateY(0) !important;
    }
";

/// Pre-style an element so it can fade in later
pub fn prepare_reveal(element: &HtmlElement) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("opacity", "0")?;
    style.set_property("transform", "translateY(30px)")?;
    style.set_property("transition", "opacity 0.6s ease, transform 0.6s ease")?;
    Ok(())
}

pub fn reveal(element: &Element) -> Result<(), JsValue> {
    element.class_list().add_1(REVEALED_CLASS)
}

/// Add `class` unless already present. Returns true only the first time.
pub fn mark_once(element: &Element, class: &str) -> Result<bool, JsValue> {
    let classes = element.class_list();
    if classes.contains(class) {
        return Ok(false);
    }
    classes.add_1(class)?;
    Ok(true)
}
