//! Active Link Highlighting
//!
//! Marks the in-page nav link of the section currently scrolled into.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::Feature;
use crate::config::SiteConfig;
use crate::dom;

/// Id of the last section whose top (minus `lead`) has been scrolled past
pub fn current_section<'a>(sections: &'a [(String, f64)], offset: f64, lead: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| offset >= top - lead)
        .last()
        .map(|(id, _)| id.as_str())
}

pub struct ActiveLink {
    window: Window,
    sections: Vec<HtmlElement>,
    links: Vec<Element>,
    lead: f64,
}

impl ActiveLink {
    fn update(&self) -> Result<(), JsValue> {
        let offset = self.window.page_y_offset()?;
        let sections: Vec<(String, f64)> = self
            .sections
            .iter()
            .map(|s| (s.id(), f64::from(s.offset_top())))
            .collect();
        let wanted = format!("#{}", current_section(&sections, offset, self.lead).unwrap_or(""));

        for link in &self.links {
            let classes = link.class_list();
            classes.remove_1("active")?;
            if link.get_attribute("href").as_deref() == Some(wanted.as_str()) {
                classes.add_1("active")?;
            }
        }
        Ok(())
    }
}

impl Feature for ActiveLink {
    const NAME: &'static str = "active-link";

    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self> {
        let sections: Vec<HtmlElement> = dom::query_all(document, &config.section_selector)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        let links = dom::query_all(document, &config.section_link_selector);
        if sections.is_empty() || links.is_empty() {
            return None;
        }

        Some(Self {
            window: web_sys::window()?,
            sections,
            links,
            lead: config.active_section_lead_px,
        })
    }

    fn install(self) -> Result<(), JsValue> {
        let window = self.window.clone();
        dom::listen(&window, "scroll", move |_| {
            if let Err(err) = self.update() {
                tracing::warn!(error = ?err, "active link update failed");
            }
        })
    }
}
