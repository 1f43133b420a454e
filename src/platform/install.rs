//! Deferred Install Prompt
//!
//! `beforeinstallprompt` is not modelled by web-sys, so the event is driven
//! through `js_sys::Reflect`.

use js_sys::{Function, Promise, Reflect};
use list_store::InstallOutcome;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// A `beforeinstallprompt` event held back until the user asks to install
pub struct DeferredPrompt(JsValue);

impl DeferredPrompt {
    /// Suppress the browser's own mini-infobar and keep the event
    pub fn capture(event: web_sys::Event) -> Self {
        event.prevent_default();
        Self(event.into())
    }

    /// Show the platform dialog and wait for the user's answer
    pub async fn show(self) -> Result<InstallOutcome, String> {
        let prompt = self.field("prompt")?
            .dyn_into::<Function>()
            .map_err(|_| "prompt() is not callable".to_string())?;
        prompt.call0(&self.0).map_err(js_error)?;

        let choice = self.field("userChoice")?
            .dyn_into::<Promise>()
            .map_err(|_| "userChoice is not a promise".to_string())?;
        let choice = JsFuture::from(choice).await.map_err(js_error)?;

        let outcome = Reflect::get(&choice, &JsValue::from_str("outcome"))
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();
        Ok(InstallOutcome::from_platform(&outcome))
    }

    fn field(&self, name: &str) -> Result<JsValue, String> {
        Reflect::get(&self.0, &JsValue::from_str(name)).map_err(js_error)
    }
}

fn js_error(e: JsValue) -> String {
    format!("{:?}", e)
}
