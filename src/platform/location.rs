//! Address Bar Adapter

use list_store::AddressBar;
use log::warn;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl AddressBar for BrowserLocation {
    fn query(&self) -> String {
        web_sys::window()
            .and_then(|win| win.location().search().ok())
            .unwrap_or_default()
    }

    fn base_url(&self) -> String {
        let Some(win) = web_sys::window() else {
            return String::new();
        };
        let location = win.location();
        format!(
            "{}{}",
            location.origin().unwrap_or_default(),
            location.pathname().unwrap_or_default()
        )
    }

    fn strip_query(&mut self) {
        let Some(win) = web_sys::window() else {
            return;
        };
        let path = win.location().pathname().unwrap_or_default();
        let title = win.document().map(|doc| doc.title()).unwrap_or_default();
        let replaced = win
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, &title, Some(&path)));
        if let Err(e) = replaced {
            warn!("Could not remove shared list from address: {:?}", e);
        }
    }
}
