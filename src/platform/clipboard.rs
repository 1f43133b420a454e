//! Clipboard
//!
//! Async Clipboard API with a synchronous select-and-copy fallback for
//! browsers that lack it or reject the write.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlInputElement};

/// Write text through `navigator.clipboard`
pub async fn write_text(text: &str) -> Result<(), String> {
    let win = web_sys::window().ok_or("no window")?;
    let navigator = win.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);
    if !supported {
        return Err("Clipboard API unavailable".to_string());
    }

    JsFuture::from(navigator.clipboard().write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write rejected: {:?}", e))
}

/// Select the input's contents and run the legacy `copy` command
pub fn copy_from_input(input: &HtmlInputElement) -> Result<(), String> {
    input.select();
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or("no document")?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| "not an HTML document")?;

    match document.exec_command("copy") {
        Ok(true) => Ok(()),
        Ok(false) => Err("copy command was refused".to_string()),
        Err(e) => Err(format!("copy command failed: {:?}", e)),
    }
}
