//! Page Features
//!
//! Each feature looks for the elements it needs and installs its listeners only
//! when they are all present. Features never depend on each other's state.

mod active_link;
mod counters;
mod filter;
mod flash;
mod forms;
mod loader;
mod menu;
mod navbar;
mod reveal;
mod smooth_scroll;

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config::SiteConfig;
use crate::error::js_error_text;

pub use active_link::ActiveLink;
pub use counters::StatCounters;
pub use filter::CampaignFilter;
pub use flash::FlashMessage;
pub use forms::{validate_email, FormValidation};
pub use loader::CampaignLoader;
pub use menu::MobileMenu;
pub use navbar::NavbarController;
pub use reveal::ScrollReveal;
pub use smooth_scroll::SmoothScroll;

pub trait Feature: Sized + 'static {
    const NAME: &'static str;

    /// Collect the required elements, or None when this page lacks them
    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self>;

    fn install(self) -> Result<(), JsValue>;
}

/// Discover and install one feature. Failures are logged and contained.
pub fn register<F: Feature>(document: &Document, config: &Rc<SiteConfig>) {
    let Some(feature) = F::discover(document, config) else {
        tracing::debug!(feature = F::NAME, "required elements missing, skipped");
        return;
    };
    match feature.install() {
        Ok(()) => tracing::info!(feature = F::NAME, "installed"),
        Err(err) => tracing::error!(feature = F::NAME, error = %js_error_text(&err), "install failed"),
    }
}
