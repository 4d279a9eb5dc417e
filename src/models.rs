//! Frontend Models
//!
//! Data structures matching the campaign listing endpoint.
//! Decoding is lenient: a malformed entry renders with empty text instead of failing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Campaign entry (matches backend row)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "optional_string")]
    pub image: Option<String>,
    #[serde(deserialize_with = "truthy")]
    pub featured: bool,
    #[serde(deserialize_with = "lenient_count")]
    pub volunteers_joined: Option<i64>,
    #[serde(deserialize_with = "lenient_count")]
    pub volunteers_needed: Option<i64>,
}

/// One page of `GET /api/campaigns?offset=N`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignPage {
    pub campaigns: Vec<Campaign>,
    #[serde(default, deserialize_with = "truthy")]
    pub has_more: bool,
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    // f64 Display prints integral values without a trailing ".0"
    n.as_f64().map(|f| f.to_string()).unwrap_or_default()
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => number_text(&n),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(de)?))
}

fn optional_string<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
    let text = value_text(Value::deserialize(de)?);
    Ok((!text.is_empty()).then_some(text))
}

/// Integer counts; SQLite rows and JS numbers may arrive as floats or strings
fn lenient_count<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// JavaScript truthiness, so 0/1 flags from SQLite work like booleans
fn truthy<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_entry() {
        let json = r#"{
            "id": 7, "title": "Coastal Cleanup Drive", "description": "Beach cleanup",
            "category": "cleanup", "location": "Mumbai Beach", "date": "2025-12-20",
            "image": "static/images/beach.jpg", "featured": 1,
            "volunteers_joined": 45, "volunteers_needed": 100
        }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();

        assert_eq!(campaign.id, "7");
        assert_eq!(campaign.title, "Coastal Cleanup Drive");
        assert_eq!(campaign.image.as_deref(), Some("static/images/beach.jpg"));
        assert!(campaign.featured);
        assert_eq!(campaign.volunteers_joined, Some(45));
        assert_eq!(campaign.volunteers_needed, Some(100));
    }

    #[test]
    fn test_malformed_entry_renders_empty() {
        let json = r#"{ "title": null, "featured": 0, "image": "", "volunteers_joined": "12" }"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();

        assert_eq!(campaign.id, "");
        assert_eq!(campaign.title, "");
        assert!(!campaign.featured);
        assert_eq!(campaign.image, None);
        assert_eq!(campaign.volunteers_joined, Some(12));
        assert_eq!(campaign.volunteers_needed, None);
    }

    #[test]
    fn test_page_has_more_defaults_false() {
        let page: CampaignPage = serde_json::from_str(r#"{ "campaigns": [] }"#).unwrap();
        assert!(page.campaigns.is_empty());
        assert!(!page.has_more);
    }

    #[test]
    fn test_page_requires_campaigns() {
        assert!(serde_json::from_str::<CampaignPage>(r#"{ "has_more": true }"#).is_err());
    }
}
