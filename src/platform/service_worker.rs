//! Service Worker Registration

use log::{debug, error, info};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::ServiceWorkerRegistration;

/// Register the offline/update worker. Failure only gets logged.
pub async fn register_service_worker(script_url: &'static str) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let navigator = win.navigator();
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        debug!("Service workers are not supported");
        return;
    }

    match JsFuture::from(navigator.service_worker().register(script_url)).await {
        Ok(registration) => {
            let scope = registration
                .dyn_into::<ServiceWorkerRegistration>()
                .map(|registration| registration.scope())
                .unwrap_or_default();
            info!("Service Worker registered for scope {}", scope);
        }
        Err(e) => error!("Service Worker registration failed: {:?}", e),
    }
}
