//! UI Components
//!
//! Markup produced on the client: campaign cards and toast notifications.

mod campaign_card;
mod toast;

pub use campaign_card::create_campaign_card;
pub use toast::{show_notification, Severity, ToastTiming, TOAST_KEYFRAMES};
