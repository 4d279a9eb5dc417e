//! Smooth Scrolling
//!
//! In-page anchor links glide to their section, stopping just below the fixed navbar.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{Feature, MobileMenu};
use crate::config::SiteConfig;
use crate::dom;

/// Selector for an in-page anchor, or None for bare "#" and external links
pub fn anchor_target(href: &str) -> Option<&str> {
    (href != "#" && href.starts_with('#')).then_some(href)
}

/// Scroll position that puts `target_top` right under a navbar of `navbar_height`
pub fn scroll_top(target_top: i32, navbar_height: i32) -> f64 {
    f64::from(target_top - navbar_height)
}

pub struct SmoothScroll {
    window: Window,
    document: Document,
    anchors: Vec<Element>,
    navbar_selector: String,
    menu: Option<MobileMenu>,
}

impl SmoothScroll {
    fn follow(&self, anchor: &Element, ev: &web_sys::Event) -> Result<(), JsValue> {
        let Some(href) = anchor.get_attribute("href") else {
            return Ok(());
        };
        let Some(selector) = anchor_target(&href) else {
            return Ok(());
        };
        ev.prevent_default();

        // Hrefs that are not valid selectors behave like missing targets
        let Ok(Some(target)) = self.document.query_selector(selector) else {
            return Ok(());
        };
        let Ok(target) = target.dyn_into::<HtmlElement>() else {
            return Ok(());
        };

        let navbar_height = dom::query::<HtmlElement>(&self.document, &self.navbar_selector)
            .map_or(0, |nav| nav.offset_height());

        let options = ScrollToOptions::new();
        options.set_top(scroll_top(target.offset_top(), navbar_height));
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);

        if let Some(menu) = &self.menu {
            menu.close()?;
        }
        Ok(())
    }
}

impl Feature for SmoothScroll {
    const NAME: &'static str = "smooth-scroll";

    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self> {
        let anchors = dom::query_all(document, &config.anchor_selector);
        if anchors.is_empty() {
            return None;
        }
        Some(Self {
            window: web_sys::window()?,
            document: document.clone(),
            anchors,
            navbar_selector: config.navbar_selector.clone(),
            menu: MobileMenu::discover(document, config),
        })
    }

    fn install(self) -> Result<(), JsValue> {
        let scroll = Rc::new(self);
        for anchor in &scroll.anchors {
            let scroll = scroll.clone();
            let link = anchor.clone();
            dom::listen(anchor, "click", move |ev| {
                if let Err(err) = scroll.follow(&link, &ev) {
                    tracing::warn!(error = ?err, "smooth scroll failed");
                }
            })?;
        }
        Ok(())
    }
}
