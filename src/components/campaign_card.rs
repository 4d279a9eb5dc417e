//! Campaign Card
//!
//! Markup for one campaign entry, matching the server-rendered cards so the
//! filter treats loaded cards exactly like the original ones.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::models::Campaign;

pub const CARD_CLASS: &str = "campaign-card";

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn count_text(count: Option<i64>) -> String {
    count.map(|n| n.to_string()).unwrap_or_default()
}

/// Inner markup of a card
pub fn card_markup(campaign: &Campaign, default_image: &str) -> String {
    let image = campaign.image.as_deref().unwrap_or(default_image);
    let title = escape_html(&campaign.title);
    let badge = if campaign.featured {
        r#"<div class="campaign-badge">Featured</div>"#
    } else {
        ""
    };

    format!(
        r#"
        <div class="campaign-image">
            <img src="{image}" alt="{title}">
            {badge}
        </div>
        <div class="campaign-content">
            <div class="campaign-meta">
                <span><i class="fas fa-calendar"></i> {date}</span>
                <span><i class="fas fa-map-marker-alt"></i> {location}</span>
            </div>
            <h3>{title}</h3>
            <p>{description}</p>
            <div class="campaign-footer">
                <div class="campaign-volunteers">
                    <i class="fas fa-users"></i>
                    <span>{joined}/{needed} Volunteers</span>
                </div>
                <a href="/campaigns/{id}" class="btn btn-small btn-primary">Join Now</a>
            </div>
        </div>
    "#,
        image = escape_html(image),
        title = title,
        badge = badge,
        date = escape_html(&campaign.date),
        location = escape_html(&campaign.location),
        description = escape_html(&campaign.description),
        joined = count_text(campaign.volunteers_joined),
        needed = count_text(campaign.volunteers_needed),
        id = escape_html(&campaign.id),
    )
}

/// Build a detached `div.campaign-card` carrying the filter attributes
pub fn create_campaign_card(
    document: &Document,
    campaign: &Campaign,
    default_image: &str,
) -> Result<HtmlElement, JsValue> {
    let card = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    card.set_class_name(CARD_CLASS);
    card.set_attribute("data-category", &campaign.category)?;
    card.set_attribute("data-location", &campaign.location)?;
    card.set_inner_html(&card_markup(campaign, default_image));
    Ok(card)
}
