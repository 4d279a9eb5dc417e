//! Site Configuration
//!
//! Selectors, timings and endpoints used by the page features.
//! Defaults match the server-rendered templates; a page can override any field
//! by defining `window.GreenSparkConfig` before the module loads.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::components::ToastTiming;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Navigation
    pub navbar_selector: String,
    pub menu_toggle_selector: String,
    pub nav_links_selector: String,
    pub nav_buttons_selector: String,
    pub anchor_selector: String,
    pub section_selector: String,
    pub section_link_selector: String,
    pub navbar_hide_after_px: f64,
    pub active_section_lead_px: f64,

    // Counters and reveal
    pub counter_selector: String,
    pub reveal_selector: String,
    pub counter_threshold: f64,
    pub reveal_threshold: f64,
    pub counter_duration_ms: f64,
    pub counter_restore_ms: u32,

    // Campaigns
    pub card_selector: String,
    pub grid_selector: String,
    pub search_input_id: String,
    pub category_filter_id: String,
    pub location_filter_id: String,
    pub load_more_id: String,
    pub campaigns_endpoint: String,
    pub default_card_image: String,
    pub filter_transition_ms: u32,
    pub filter_show_delay_ms: u32,
    pub loading_label: String,
    pub load_more_label: String,

    // Forms
    pub form_ids: Vec<String>,

    // Notifications
    pub toast_visible_ms: u32,
    pub toast_exit_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navbar_selector: ".navbar".into(),
            menu_toggle_selector: ".mobile-menu-toggle".into(),
            nav_links_selector: ".nav-links".into(),
            nav_buttons_selector: ".nav-buttons".into(),
            anchor_selector: r##"a[href^="#"]"##.into(),
            section_selector: "section[id]".into(),
            section_link_selector: r##".nav-links a[href^="#"]"##.into(),
            navbar_hide_after_px: 100.0,
            active_section_lead_px: 200.0,

            counter_selector: ".stat-item h3, .impact-card h3".into(),
            reveal_selector: ".feature-card, .campaign-card, .impact-card, .about-text, .about-image".into(),
            counter_threshold: 0.5,
            reveal_threshold: 0.15,
            counter_duration_ms: scroll_reveal::DEFAULT_DURATION_MS,
            counter_restore_ms: 2000,

            card_selector: ".campaign-card".into(),
            grid_selector: ".campaigns-grid".into(),
            search_input_id: "campaign-search".into(),
            category_filter_id: "category-filter".into(),
            location_filter_id: "location-filter".into(),
            load_more_id: "load-more-campaigns".into(),
            campaigns_endpoint: "/api/campaigns".into(),
            default_card_image: "static/images/default-campaign.jpg".into(),
            filter_transition_ms: 300,
            filter_show_delay_ms: 10,
            loading_label: "Loading...".into(),
            load_more_label: "Load More".into(),

            form_ids: vec!["login-form".into(), "register-form".into()],

            toast_visible_ms: 3000,
            toast_exit_ms: 300,
        }
    }
}

impl SiteConfig {
    /// Read overrides from `window.GreenSparkConfig`, falling back to defaults
    pub fn from_window(window: &web_sys::Window) -> Self {
        let overrides = match js_sys::Reflect::get(window, &JsValue::from_str("GreenSparkConfig")) {
            Ok(value) if value.is_object() => value,
            _ => return Self::default(),
        };

        match serde_wasm_bindgen::from_value::<SiteConfig>(overrides) {
            Ok(config) => {
                tracing::info!("using page-provided configuration");
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed GreenSparkConfig");
                Self::default()
            }
        }
    }

    pub fn toast_timing(&self) -> ToastTiming {
        ToastTiming {
            visible_ms: self.toast_visible_ms,
            exit_ms: self.toast_exit_ms,
        }
    }
}
