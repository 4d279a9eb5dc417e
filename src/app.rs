//! GreenSpark Frontend App
//!
//! Wires every page feature once the document is parsed.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::TOAST_KEYFRAMES;
use crate::config::SiteConfig;
use crate::controllers::{
    register, ActiveLink, CampaignFilter, CampaignLoader, FlashMessage, FormValidation, MobileMenu,
    NavbarController, ScrollReveal, SmoothScroll, StatCounters,
};
use crate::dom;
use crate::error::js_error_text;
use crate::exports;

/// Add the reveal rule and toast keyframes to `<head>`
fn inject_styles(document: &Document) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(&format!("{}\n{}", scroll_reveal::REVEALED_CSS, TOAST_KEYFRAMES)));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    }
    Ok(())
}

fn install_features(document: &Document, config: &Rc<SiteConfig>) {
    register::<MobileMenu>(document, config);
    register::<SmoothScroll>(document, config);
    register::<NavbarController>(document, config);
    register::<ActiveLink>(document, config);
    register::<StatCounters>(document, config);
    register::<ScrollReveal>(document, config);
    register::<FormValidation>(document, config);
    register::<CampaignFilter>(document, config);
    register::<CampaignLoader>(document, config);
    register::<FlashMessage>(document, config);
}

pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = Rc::new(SiteConfig::from_window(&window));

    if let Err(err) = inject_styles(&document) {
        tracing::warn!(error = %js_error_text(&err), "could not inject styles");
    }
    if let Err(err) = exports::install(&window, config.clone()) {
        tracing::warn!(error = %js_error_text(&err), "could not expose window.GreenSpark");
    }

    let ready_document = document.clone();
    let result = dom::when_ready(&document, move || {
        install_features(&ready_document, &config);
        tracing::info!("[APP] page features ready");
    });
    if let Err(err) = result {
        tracing::error!(error = %js_error_text(&err), "could not wait for DOMContentLoaded");
    }
}
