//! Mobile Menu
//!
//! Hamburger toggle for the collapsed navigation.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::Feature;
use crate::config::SiteConfig;
use crate::dom;

const OPEN_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Times,
}

impl MenuIcon {
    pub fn class(self) -> &'static str {
        match self {
            MenuIcon::Bars => "fa-bars",
            MenuIcon::Times => "fa-times",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuIcon::Bars => MenuIcon::Times,
            MenuIcon::Times => MenuIcon::Bars,
        }
    }
}

/// Toggle, link list and button group of the navigation bar
#[derive(Clone)]
pub struct MobileMenu {
    toggle: Element,
    links: Option<Element>,
    buttons: Option<Element>,
}

impl MobileMenu {
    fn current_icon(icon: &Element) -> MenuIcon {
        if icon.class_list().contains(MenuIcon::Bars.class()) {
            MenuIcon::Bars
        } else {
            MenuIcon::Times
        }
    }

    fn set_icon(&self, icon: MenuIcon) -> Result<(), JsValue> {
        if let Some(el) = self.toggle.query_selector("i")? {
            el.class_list().remove_1(icon.toggled().class())?;
            el.class_list().add_1(icon.class())?;
        }
        Ok(())
    }

    fn toggle_open(&self) -> Result<(), JsValue> {
        for panel in self.links.iter().chain(self.buttons.iter()) {
            panel.class_list().toggle(OPEN_CLASS)?;
        }
        if let Some(el) = self.toggle.query_selector("i")? {
            self.set_icon(Self::current_icon(&el).toggled())?;
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.links
            .as_ref()
            .map_or(false, |links| links.class_list().contains(OPEN_CLASS))
    }

    /// Collapse the menu if it is open
    pub fn close(&self) -> Result<(), JsValue> {
        if !self.is_open() {
            return Ok(());
        }
        for panel in self.links.iter().chain(self.buttons.iter()) {
            panel.class_list().remove_1(OPEN_CLASS)?;
        }
        self.set_icon(MenuIcon::Bars)
    }
}

impl Feature for MobileMenu {
    const NAME: &'static str = "mobile-menu";

    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self> {
        Some(Self {
            toggle: dom::query(document, &config.menu_toggle_selector)?,
            links: dom::query(document, &config.nav_links_selector),
            buttons: dom::query(document, &config.nav_buttons_selector),
        })
    }

    fn install(self) -> Result<(), JsValue> {
        let toggle = self.toggle.clone();
        dom::listen(&toggle, "click", move |_| {
            if let Err(err) = self.toggle_open() {
                tracing::warn!(error = ?err, "menu toggle failed");
            }
        })
    }
}
