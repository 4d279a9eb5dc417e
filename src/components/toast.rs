//! Toast Notification Component
//!
//! Transient, auto-dismissing message in the top-right corner.
//! Each toast is its own Leptos mount; dropping the mount handle removes it.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Keyframes referenced by the toast style, injected once into the document head
pub const TOAST_KEYFRAMES: &str = "
    @keyframes slideIn {
        from { transform: translateX(400px); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }

    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(400px); opacity: 0; }
    }
";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    /// Anything other than "success" (or nothing) is shown as an error
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("success") => Severity::Success,
            Some(_) => Severity::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Success => "#22c55e",
            Severity::Error => "#ef4444",
        }
    }
}

/// How long a toast stays, then how long its exit animation runs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTiming {
    pub visible_ms: u32,
    pub exit_ms: u32,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self { visible_ms: 3000, exit_ms: 300 }
    }
}

impl ToastTiming {
    /// Time from creation until the element is gone
    pub fn lifetime_ms(&self) -> u32 {
        self.visible_ms + self.exit_ms
    }
}

pub fn toast_style(severity: Severity, leaving: bool, exit_ms: u32) -> String {
    let animation = if leaving {
        format!("slideOut {}ms ease forwards", exit_ms)
    } else {
        "slideIn 0.3s ease".to_string()
    };
    format!(
        "position: fixed; top: 100px; right: 20px; padding: 1rem 1.5rem; \
         background-color: {}; color: white; border-radius: 8px; \
         box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); z-index: 9999; animation: {};",
        severity.color(),
        animation
    )
}

#[component]
fn Toast(
    message: String,
    severity: Severity,
    leaving: ReadSignal<bool>,
    exit_ms: u32,
) -> impl IntoView {
    view! {
        <div
            class=format!("notification notification-{}", severity.as_str())
            style=move || toast_style(severity, leaving.get(), exit_ms)
        >
            {message}
        </div>
    }
}

/// Show a toast; it removes itself after `timing.lifetime_ms()`
pub fn show_notification(message: &str, severity: Severity, timing: ToastTiming) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        tracing::warn!("no document body, notification dropped");
        return;
    };

    let (leaving, set_leaving) = signal(false);
    let message = message.to_string();
    let exit_ms = timing.exit_ms;
    let handle = leptos::mount::mount_to(body, move || {
        view! { <Toast message=message severity=severity leaving=leaving exit_ms=exit_ms /> }
    });
    tracing::debug!(severity = severity.as_str(), lifetime_ms = timing.lifetime_ms(), "notification shown");

    spawn_local(async move {
        TimeoutFuture::new(timing.visible_ms).await;
        set_leaving.set(true);
        TimeoutFuture::new(timing.exit_ms).await;
        drop(handle);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_param() {
        assert_eq!(Severity::from_param(None), Severity::Success);
        assert_eq!(Severity::from_param(Some("")), Severity::Success);
        assert_eq!(Severity::from_param(Some("success")), Severity::Success);
        assert_eq!(Severity::from_param(Some("error")), Severity::Error);
        assert_eq!(Severity::from_param(Some("warning")), Severity::Error);
    }

    #[test]
    fn test_default_toast_is_green() {
        let style = toast_style(Severity::default(), false, 300);
        assert!(style.contains("background-color: #22c55e"));
        assert!(style.contains("slideIn"));
    }

    #[test]
    fn test_error_toast_is_red() {
        let style = toast_style(Severity::Error, false, 300);
        assert!(style.contains("background-color: #ef4444"));
    }

    #[test]
    fn test_leaving_toast_slides_out() {
        let style = toast_style(Severity::Success, true, 300);
        assert!(style.contains("slideOut 300ms ease forwards"));
    }

    #[test]
    fn test_toast_gone_within_3300ms() {
        assert!(ToastTiming::default().lifetime_ms() <= 3300);
    }
}
