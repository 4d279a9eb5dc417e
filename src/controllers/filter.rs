//! Campaign Filter
//!
//! Narrows the rendered campaign cards by title text, category and location.
//! Hidden cards fade out first and leave the layout once their transition ends.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement};

use super::Feature;
use crate::config::SiteConfig;
use crate::dom;

/// Card attribute stamped with the filter pass that last touched it
const PASS_ATTR: &str = "data-filter-pass";

/// Current state of the three filter controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Lower-cased search text
    pub search_term: String,
    pub category: String,
    pub location: String,
}

impl FilterCriteria {
    pub fn new(search_term: &str, category: &str, location: &str) -> Self {
        Self {
            search_term: search_term.to_lowercase(),
            category: category.to_string(),
            location: location.to_string(),
        }
    }

    pub fn matches(&self, card: &CardKeys) -> bool {
        card.title.to_lowercase().contains(&self.search_term)
            && (self.category.is_empty() || card.category == self.category)
            && (self.location.is_empty() || card.location == self.location)
    }
}

/// The parts of a card the filter looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardKeys {
    pub title: String,
    pub category: String,
    pub location: String,
}

impl CardKeys {
    fn read(card: &HtmlElement) -> Self {
        let title = card
            .query_selector("h3")
            .ok()
            .flatten()
            .and_then(|h| h.text_content())
            .unwrap_or_default();
        Self {
            title,
            category: card.get_attribute("data-category").unwrap_or_default(),
            location: card.get_attribute("data-location").unwrap_or_default(),
        }
    }
}

pub struct CampaignFilter {
    document: Document,
    search: Option<HtmlInputElement>,
    category: Option<HtmlSelectElement>,
    location: Option<HtmlSelectElement>,
    config: Rc<SiteConfig>,
    pass: Cell<u32>,
}

/// True while no later filter pass has re-stamped the card
fn is_current_pass(stamp: Option<&str>, pass: u32) -> bool {
    stamp.and_then(|s| s.parse::<u32>().ok()) == Some(pass)
}

fn still_current(card: &HtmlElement, pass: u32) -> bool {
    is_current_pass(card.get_attribute(PASS_ATTR).as_deref(), pass)
}

impl CampaignFilter {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            &self.search.as_ref().map(|s| s.value()).unwrap_or_default(),
            &self.category.as_ref().map(|s| s.value()).unwrap_or_default(),
            &self.location.as_ref().map(|s| s.value()).unwrap_or_default(),
        )
    }

    /// Re-evaluate every card currently on the page, including loaded ones
    pub fn apply(&self) {
        let criteria = self.criteria();
        let pass = self.pass.get().wrapping_add(1);
        self.pass.set(pass);

        let cards = dom::query_all(&self.document, &self.config.card_selector);
        let mut shown = 0usize;
        for card in cards {
            let Ok(card) = card.dyn_into::<HtmlElement>() else {
                continue;
            };
            let result = if criteria.matches(&CardKeys::read(&card)) {
                shown += 1;
                self.show(&card, pass)
            } else {
                self.hide(&card, pass)
            };
            if let Err(err) = result {
                tracing::warn!(error = ?err, "card transition failed");
            }
        }
        tracing::debug!(?criteria, shown, "campaigns filtered");
    }

    fn show(&self, card: &HtmlElement, pass: u32) -> Result<(), JsValue> {
        card.set_attribute(PASS_ATTR, &pass.to_string())?;
        dom::set_style(card, "display", "block")?;

        // Let the display change land before transitioning in
        let card = card.clone();
        Timeout::new(self.config.filter_show_delay_ms, move || {
            if !still_current(&card, pass) {
                return;
            }
            let _ = dom::set_style(&card, "opacity", "1");
            let _ = dom::set_style(&card, "transform", "translateY(0)");
        })
        .forget();
        Ok(())
    }

    fn hide(&self, card: &HtmlElement, pass: u32) -> Result<(), JsValue> {
        card.set_attribute(PASS_ATTR, &pass.to_string())?;
        dom::set_style(card, "opacity", "0")?;
        dom::set_style(card, "transform", "translateY(20px)")?;

        let target = card.clone();
        dom::after_transition(card, self.config.filter_transition_ms, move || {
            if still_current(&target, pass) {
                let _ = dom::set_style(&target, "display", "none");
            }
        })
    }
}

impl Feature for CampaignFilter {
    const NAME: &'static str = "campaign-filter";

    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self> {
        let search = dom::by_id::<HtmlInputElement>(document, &config.search_input_id);
        let category = dom::by_id::<HtmlSelectElement>(document, &config.category_filter_id);
        let location = dom::by_id::<HtmlSelectElement>(document, &config.location_filter_id);
        if search.is_none() && category.is_none() && location.is_none() {
            return None;
        }

        Some(Self {
            document: document.clone(),
            search,
            category,
            location,
            config: config.clone(),
            pass: Cell::new(0),
        })
    }

    fn install(self) -> Result<(), JsValue> {
        let filter = Rc::new(self);

        if let Some(search) = &filter.search {
            let f = filter.clone();
            dom::listen(search, "input", move |_| f.apply())?;
        }
        for select in filter.category.iter().chain(filter.location.iter()) {
            let f = filter.clone();
            dom::listen(select, "change", move |_| f.apply())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, category: &str, location: &str) -> CardKeys {
        CardKeys {
            title: title.to_string(),
            category: category.to_string(),
            location: location.to_string(),
        }
    }

    fn cards() -> Vec<CardKeys> {
        vec![
            card("Community Food Drive", "awareness", "Community Center"),
            card("Coastal Cleanup Drive", "cleanup", "Mumbai Beach"),
            card("FOOD Waste Composting", "cleanup", "City Park"),
            card("Urban Reforestation", "tree-planting", "City Park"),
        ]
    }

    fn visible<'a>(criteria: &FilterCriteria, cards: &'a [CardKeys]) -> Vec<&'a str> {
        cards
            .iter()
            .filter(|c| criteria.matches(c))
            .map(|c| c.title.as_str())
            .collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let criteria = FilterCriteria::new("food", "", "");
        assert_eq!(
            visible(&criteria, &cards()),
            vec!["Community Food Drive", "FOOD Waste Composting"]
        );
    }

    #[test]
    fn test_search_term_is_lowercased() {
        let criteria = FilterCriteria::new("DRIVE", "", "");
        assert_eq!(criteria.search_term, "drive");
        assert_eq!(visible(&criteria, &cards()).len(), 2);
    }

    #[test]
    fn test_category_must_match_exactly() {
        let criteria = FilterCriteria::new("", "cleanup", "");
        assert_eq!(
            visible(&criteria, &cards()),
            vec!["Coastal Cleanup Drive", "FOOD Waste Composting"]
        );

        let criteria = FilterCriteria::new("", "Cleanup", "");
        assert!(visible(&criteria, &cards()).is_empty());
    }

    #[test]
    fn test_all_criteria_combine() {
        let criteria = FilterCriteria::new("food", "cleanup", "City Park");
        assert_eq!(visible(&criteria, &cards()), vec!["FOOD Waste Composting"]);
    }

    #[test]
    fn test_empty_criteria_show_everything() {
        let criteria = FilterCriteria::default();
        assert_eq!(visible(&criteria, &cards()).len(), 4);
    }

    #[test]
    fn test_hide_completes_for_current_pass() {
        // Pass 1 hides a non-matching card and stamps it
        let stamp = 1u32.to_string();
        assert!(is_current_pass(Some(&stamp), 1));
    }

    #[test]
    fn test_stale_hide_is_ignored() {
        // Pass 1 hid the card, then pass 2 showed it again before the fade ended
        let stamp = 2u32.to_string();
        assert!(!is_current_pass(Some(&stamp), 1));
        assert!(is_current_pass(Some(&stamp), 2));
    }

    #[test]
    fn test_unstamped_card_is_never_current() {
        assert!(!is_current_pass(None, 0));
        assert!(!is_current_pass(Some("garbage"), 1));
    }

    #[test]
    fn test_category_filter_hides_after_transition() {
        let criteria = FilterCriteria::new("", "tree-planting", "");
        let hidden: Vec<_> = cards().into_iter().filter(|c| !criteria.matches(c)).collect();
        assert_eq!(hidden.len(), 3);
        assert_eq!(SiteConfig::default().filter_transition_ms, 300);
    }

    #[test]
    fn test_card_without_category_only_matches_empty_filter() {
        let bare = card("Beach Day", "", "");
        assert!(FilterCriteria::new("", "", "").matches(&bare));
        assert!(!FilterCriteria::new("", "cleanup", "").matches(&bare));
    }
}
