//! Form Validation
//!
//! Client-side checks for the login and registration forms. Errors render
//! inline under the offending field; a valid form is submitted normally.

use std::rc::Rc;
use std::sync::OnceLock;

use regex::Regex;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::Feature;
use crate::config::SiteConfig;
use crate::dom;

pub const MIN_PASSWORD_LEN: usize = 6;

const ERROR_CLASS: &str = "error-message";
const ERROR_COLOR: &str = "#ef4444";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

pub fn validate_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    InvalidEmail,
    ShortPassword,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::InvalidEmail => "Please enter a valid email address",
            FieldError::ShortPassword => "Password must be at least 6 characters",
        }
    }
}

/// Check the fields a form actually has; absent fields are not errors
pub fn check_credentials(email: Option<&str>, password: Option<&str>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if email.is_some_and(|e| !validate_email(e)) {
        errors.push(FieldError::InvalidEmail);
    }
    // Length in UTF-16 units, as the browser counts it
    if password.is_some_and(|p| p.encode_utf16().count() < MIN_PASSWORD_LEN) {
        errors.push(FieldError::ShortPassword);
    }
    errors
}

fn show_error(document: &Document, input: &HtmlInputElement, error: FieldError) -> Result<(), JsValue> {
    let message = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    message.set_class_name(ERROR_CLASS);
    dom::set_style(&message, "color", ERROR_COLOR)?;
    dom::set_style(&message, "font-size", "0.875rem")?;
    dom::set_style(&message, "margin-top", "0.25rem")?;
    message.set_text_content(Some(error.message()));

    if let Some(parent) = input.parent_element() {
        parent.append_child(&message)?;
    }
    dom::set_style(input, "border-color", ERROR_COLOR)
}

fn on_submit(document: &Document, form: &HtmlFormElement, ev: &web_sys::Event) -> Result<(), JsValue> {
    ev.prevent_default();

    for stale in dom::query_all(document, &format!(".{}", ERROR_CLASS)) {
        stale.remove();
    }

    let field = |selector: &str| {
        form.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    };
    let email = field(r#"input[type="email"]"#);
    let password = field(r#"input[type="password"]"#);

    let email_value = email.as_ref().map(|e| e.value());
    let password_value = password.as_ref().map(|p| p.value());
    let errors = check_credentials(email_value.as_deref(), password_value.as_deref());

    if errors.is_empty() {
        return form.submit();
    }

    for error in &errors {
        let input = match error {
            FieldError::InvalidEmail => email.as_ref(),
            FieldError::ShortPassword => password.as_ref(),
        };
        if let Some(input) = input {
            show_error(document, input, *error)?;
        }
    }
    tracing::debug!(form = %form.id(), errors = errors.len(), "form rejected");
    Ok(())
}

/// Validation for every configured form present on the page
pub struct FormValidation {
    document: Document,
    forms: Vec<HtmlFormElement>,
}

impl Feature for FormValidation {
    const NAME: &'static str = "form-validation";

    fn discover(document: &Document, config: &Rc<SiteConfig>) -> Option<Self> {
        let forms: Vec<HtmlFormElement> = config
            .form_ids
            .iter()
            .filter_map(|id| dom::by_id(document, id))
            .collect();
        (!forms.is_empty()).then(|| Self {
            document: document.clone(),
            forms,
        })
    }

    fn install(self) -> Result<(), JsValue> {
        for form in self.forms {
            let document = self.document.clone();
            let target = form.clone();
            dom::listen(&form, "submit", move |ev| {
                if let Err(err) = on_submit(&document, &target, &ev) {
                    tracing::warn!(error = ?err, "form validation failed");
                }
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("volunteer@greenspark.org"));
        assert!(validate_email("a.b+c@mail.example.co"));
        assert!(!validate_email("volunteer@greenspark"));
        assert!(!validate_email("volunteer greenspark@org.in"));
        assert!(!validate_email("@greenspark.org"));
        assert!(!validate_email("a@@b.org"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_valid_credentials() {
        assert!(check_credentials(Some("ngo@example.org"), Some("secret1")).is_empty());
    }

    #[test]
    fn test_both_errors_reported() {
        assert_eq!(
            check_credentials(Some("not-an-email"), Some("12345")),
            vec![FieldError::InvalidEmail, FieldError::ShortPassword]
        );
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        assert!(check_credentials(None, None).is_empty());
        assert_eq!(check_credentials(None, Some("")), vec![FieldError::ShortPassword]);
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // Two astral characters are four UTF-16 units
        assert_eq!(check_credentials(None, Some("😀😀")), vec![FieldError::ShortPassword]);
        assert!(check_credentials(None, Some("😀😀😀")).is_empty());
    }
}
