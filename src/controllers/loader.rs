//! Campaign Loader
//!
//! "Load more" button: fetches the next page of campaigns, starting after the
//! cards already on the page, and appends them to the grid.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlButtonElement};

use super::Feature;
use crate::api;
use crate::components::create_campaign_card;
use crate::config::SiteConfig;
use crate::dom;
use crate::error::{js_error_text, LoadError};
use crate::models::CampaignPage;

const FAILURE_MESSAGE: &str = "Failed to load more campaigns. Please try again.";

/// What one fetched page does to the grid and the button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageOutcome {
    pub appended: usize,
    pub hide_button: bool,
}

impl PageOutcome {
    pub fn of(page: &CampaignPage) -> Self {
        Self {
            appended: page.campaigns.len(),
            hide_button: !page.has_more,
        }
    }
}

/// Label to put back after a request; blank labels fall back to the configured one
fn restored_label(original: Option<String>, fallback: &str) -> String {
    original
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

pub struct CampaignLoader {
    document: Document,
    button: HtmlButtonElement,
    grid: Element,
    config: Rc<SiteConfig>,
    /// Button text captured when a request starts
    label: RefCell<Option<String>>,
}

impl CampaignLoader {
    fn begin(&self) {
        *self.label.borrow_mut() = self.button.text_content();
        self.button.set_disabled(true);
        self.button.set_text_content(Some(&self.config.loading_label));
    }

    fn finish(&self) {
        let label = restored_label(self.label.borrow_mut().take(), &self.config.load_more_label);
        self.button.set_disabled(false);
        self.button.set_text_content(Some(&label));
    }

    pub async fn load_more(&self) {
        // Everything already rendered counts, including earlier pages
        let offset = dom::query_all(&self.document, &self.config.card_selector).len();

        if let Err(err) = self.fetch_and_append(offset).await {
            tracing::error!(error = %err, offset, "error loading campaigns");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(FAILURE_MESSAGE);
            }
        }

        self.finish();
    }

    async fn fetch_and_append(&self, offset: usize) -> Result<(), LoadError> {
        let page = api::fetch_campaigns(&self.config.campaigns_endpoint, offset).await?;
        let outcome = PageOutcome::of(&page);

        // Render everything before touching the grid so a failure appends nothing
        let cards = page
            .campaigns
            .iter()
            .map(|c| create_campaign_card(&self.document, c, &self.config.default_card_image))
            .collect::<Result<Vec<_>, JsValue>>()
            .map_err(|e| LoadError::Render(js_error_text(&e)))?;

        for card in &cards {
            self.grid
                .append_child(card)
                .map_err(|e| LoadError::Render(js_error_text(&e)))?;
        }

        if outcome.hide_button {
            dom::set_style(&self.button, "display", "none")
                .map_err(|e| LoadError::Render(js_error_text(&e)))?;
        }

        tracing::info!(offset, appended = outcome.appended, hide_button = outcome.hide_button, "campaigns loaded");
        Ok(())
    }
}

impl Feature for CampaignLoader {
    const NAME: &'static str = "campaign-loader";

    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self> {
        Some(Self {
            document: document.clone(),
            button: dom::by_id(document, &config.load_more_id)?,
            grid: dom::query(document, &config.grid_selector)?,
            config: config.clone(),
            label: RefCell::new(None),
        })
    }

    fn install(self) -> Result<(), JsValue> {
        let loader = Rc::new(self);
        let button = loader.button.clone();

        dom::listen(&button, "click", move |_| {
            // The disabled flag is set synchronously, so a second click during a
            // request never starts another one
            if loader.button.disabled() {
                return;
            }
            loader.begin();
            let loader = loader.clone();
            spawn_local(async move { loader.load_more().await });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_page_after_eight_cards() {
        let offset = 8;
        assert_eq!(api::page_url("/api/campaigns", offset), "/api/campaigns?offset=8");

        let page = api::parse_page(
            r#"{"campaigns": [{"id": 9, "title": "Urban Reforestation"}, {"id": 10, "title": "Beach Cleanup"}], "has_more": false}"#,
        )
        .unwrap();
        assert_eq!(
            PageOutcome::of(&page),
            PageOutcome { appended: 2, hide_button: true }
        );
    }

    #[test]
    fn test_button_stays_while_more_pages() {
        let page = api::parse_page(r#"{"campaigns": [{"id": 1}], "has_more": true}"#).unwrap();
        assert!(!PageOutcome::of(&page).hide_button);
    }

    #[test]
    fn test_missing_has_more_hides_button() {
        let page = api::parse_page(r#"{"campaigns": []}"#).unwrap();
        assert_eq!(
            PageOutcome::of(&page),
            PageOutcome { appended: 0, hide_button: true }
        );
    }

    #[test]
    fn test_original_label_is_restored() {
        assert_eq!(restored_label(Some("Show more campaigns".into()), "Load More"), "Show more campaigns");
        assert_eq!(restored_label(Some("  ".into()), "Load More"), "Load More");
        assert_eq!(restored_label(None, "Load More"), "Load More");
    }
}
