//! Navbar Controller
//!
//! Shadow depth follows the scroll position; the bar slides away while
//! scrolling down past a threshold and returns on any upward scroll.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use super::Feature;
use crate::config::SiteConfig;
use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shadow {
    AtTop,
    Scrolled,
}

impl Shadow {
    pub fn css(self) -> &'static str {
        match self {
            Shadow::AtTop => "0 4px 6px rgba(0, 0, 0, 0.1)",
            Shadow::Scrolled => "0 4px 12px rgba(0, 0, 0, 0.15)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarState {
    pub shadow: Shadow,
    pub hidden: bool,
}

impl NavbarState {
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// Last seen scroll offset; the only scroll state on the page
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    last_offset: f64,
    hide_after: f64,
}

impl ScrollTracker {
    pub fn new(hide_after: f64) -> Self {
        Self { last_offset: 0.0, hide_after }
    }

    pub fn on_scroll(&mut self, offset: f64) -> NavbarState {
        let shadow = if offset <= 0.0 { Shadow::AtTop } else { Shadow::Scrolled };
        let hidden = offset > self.last_offset && offset > self.hide_after;
        self.last_offset = offset;
        NavbarState { shadow, hidden }
    }
}

pub struct NavbarController {
    window: Window,
    navbar: HtmlElement,
    tracker: ScrollTracker,
}

impl NavbarController {
    fn on_scroll(&mut self) -> Result<(), JsValue> {
        let offset = self.window.page_y_offset()?;
        let state = self.tracker.on_scroll(offset);
        dom::set_style(&self.navbar, "box-shadow", state.shadow.css())?;
        dom::set_style(&self.navbar, "transform", state.transform())?;
        Ok(())
    }
}

impl Feature for NavbarController {
    const NAME: &'static str = "navbar";

    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self> {
        Some(Self {
            window: web_sys::window()?,
            navbar: dom::query(document, &config.navbar_selector)?,
            tracker: ScrollTracker::new(config.navbar_hide_after_px),
        })
    }

    fn install(mut self) -> Result<(), JsValue> {
        let window = self.window.clone();
        dom::listen(&window, "scroll", move |_| {
            if let Err(err) = self.on_scroll() {
                tracing::warn!(error = ?err, "navbar update failed");
            }
        })
    }
}
