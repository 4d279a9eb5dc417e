//! Flash Messages
//!
//! Server redirects may carry `?message=...&type=error`; show it once as a
//! toast and strip it from the address bar without reloading.

use std::rc::Rc;

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::Feature;
use crate::components::{show_notification, Severity, ToastTiming};
use crate::config::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub message: String,
    pub severity: Severity,
}

/// First value of `key` in a query string (with or without the leading '?')
fn query_param(search: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Messages are encoded once more by the server, so decode twice
pub fn parse_flash(search: &str) -> Option<Flash> {
    let message = query_param(search, "message")?;
    if message.is_empty() {
        return None;
    }
    let message = percent_decode_str(&message).decode_utf8_lossy().into_owned();
    let severity = Severity::from_param(query_param(search, "type").as_deref());
    Some(Flash { message, severity })
}

pub struct FlashMessage {
    window: Window,
    document: Document,
    flash: Flash,
    timing: ToastTiming,
}

impl Feature for FlashMessage {
    const NAME: &'static str = "flash-message";

    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self> {
        let window = web_sys::window()?;
        let search = window.location().search().ok()?;
        Some(Self {
            flash: parse_flash(&search)?,
            window,
            document: document.clone(),
            timing: config.toast_timing(),
        })
    }

    fn install(self) -> Result<(), JsValue> {
        show_notification(&self.flash.message, self.flash.severity, self.timing);

        let path = self.window.location().pathname()?;
        self.window
            .history()?
            .replace_state_with_url(&JsValue::NULL, &self.document.title(), Some(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_message() {
        assert_eq!(parse_flash(""), None);
        assert_eq!(parse_flash("?type=error"), None);
        assert_eq!(parse_flash("?message="), None);
    }

    #[test]
    fn test_message_defaults_to_success() {
        let flash = parse_flash("?message=Saved%21").unwrap();
        assert_eq!(flash.message, "Saved!");
        assert_eq!(flash.severity, Severity::Success);
    }

    #[test]
    fn test_error_type_and_plus_spaces() {
        let flash = parse_flash("?message=Invalid+credentials&type=error").unwrap();
        assert_eq!(flash.message, "Invalid credentials");
        assert_eq!(flash.severity, Severity::Error);
    }

    #[test]
    fn test_double_encoded_message() {
        // "Joined%20campaign" encoded again by the redirect
        let flash = parse_flash("?message=Joined%2520campaign").unwrap();
        assert_eq!(flash.message, "Joined campaign");
    }

    #[test]
    fn test_malformed_escapes_are_kept() {
        let flash = parse_flash("?message=100%25%20done%ZZ&type=success").unwrap();
        assert_eq!(flash.message, "100% done%ZZ");
        assert_eq!(flash.severity, Severity::Success);
    }

    #[test]
    fn test_encoded_keys_match() {
        let flash = parse_flash("?%6Dessage=Welcome+back").unwrap();
        assert_eq!(flash.message, "Welcome back");
    }

    #[test]
    fn test_first_value_wins() {
        let flash = parse_flash("?message=first&message=second").unwrap();
        assert_eq!(flash.message, "first");
    }
}
