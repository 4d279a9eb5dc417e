//! Campaign API
//!
//! Frontend binding to the paginated campaign listing.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{js_error_text, LoadError};
use crate::models::CampaignPage;

pub fn page_url(endpoint: &str, offset: usize) -> String {
    format!("{}?offset={}", endpoint, offset)
}

pub fn parse_page(body: &str) -> Result<CampaignPage, LoadError> {
    Ok(serde_json::from_str(body)?)
}

/// `GET {endpoint}?offset={offset}`
pub async fn fetch_campaigns(endpoint: &str, offset: usize) -> Result<CampaignPage, LoadError> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".into()))?;
    let url = page_url(endpoint, offset);
    tracing::debug!(%url, "fetching campaigns");

    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| LoadError::Network(js_error_text(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| LoadError::Network(js_error_text(&e)))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text = response.text().map_err(|e| LoadError::Body(js_error_text(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| LoadError::Body(js_error_text(&e)))?
        .as_string()
        .ok_or_else(|| LoadError::Body("response body is not text".into()))?;

    parse_page(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_uses_offset() {
        assert_eq!(page_url("/api/campaigns", 8), "/api/campaigns?offset=8");
        assert_eq!(page_url("/api/campaigns", 0), "/api/campaigns?offset=0");
    }

    #[test]
    fn test_parse_page() {
        let body = r#"{
            "campaigns": [
                { "id": 9, "title": "Urban Reforestation", "category": "tree-planting", "location": "City Park" },
                { "id": 10, "title": "Waste Segregation Workshop", "category": "awareness", "location": "Community Center" }
            ],
            "has_more": false
        }"#;
        let page = parse_page(body).unwrap();

        assert_eq!(page.campaigns.len(), 2);
        assert_eq!(page.campaigns[0].id, "9");
        assert_eq!(page.campaigns[1].location, "Community Center");
        assert!(!page.has_more);
    }

    #[test]
    fn test_parse_page_rejects_html() {
        let err = parse_page("<!doctype html><p>Not Found</p>").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
