//! Programmatic Surface
//!
//! `window.GreenSpark` for other scripts on the same page:
//! `showNotification(message, type)`, `validateEmail(email)`, `createCampaignCard(campaign)`.

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::components::{create_campaign_card, show_notification, Severity};
use crate::config::SiteConfig;
use crate::controllers::validate_email;
use crate::models::Campaign;

pub fn install(window: &web_sys::Window, config: Rc<SiteConfig>) -> Result<(), JsValue> {
    let api = js_sys::Object::new();

    let timing = config.toast_timing();
    let notify = Closure::<dyn Fn(JsValue, JsValue)>::new(move |message: JsValue, kind: JsValue| {
        let message = message.as_string().unwrap_or_default();
        let severity = Severity::from_param(kind.as_string().as_deref());
        show_notification(&message, severity, timing);
    });
    js_sys::Reflect::set(&api, &"showNotification".into(), &notify.into_js_value())?;

    let validate = Closure::<dyn Fn(JsValue) -> bool>::new(|email: JsValue| {
        validate_email(&email.as_string().unwrap_or_default())
    });
    js_sys::Reflect::set(&api, &"validateEmail".into(), &validate.into_js_value())?;

    let create = Closure::<dyn Fn(JsValue) -> Result<JsValue, JsValue>>::new(move |campaign: JsValue| {
        let campaign: Campaign = serde_wasm_bindgen::from_value(campaign)?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let card = create_campaign_card(&document, &campaign, &config.default_card_image)?;
        Ok(card.into())
    });
    js_sys::Reflect::set(&api, &"createCampaignCard".into(), &create.into_js_value())?;

    js_sys::Reflect::set(window, &"GreenSpark".into(), &api)?;
    Ok(())
}
