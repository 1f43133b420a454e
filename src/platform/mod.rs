//! Browser Platform Adapters
//!
//! Implementations of the list-store seams on top of web-sys, plus the
//! clipboard, install prompt and service worker glue.

mod clipboard;
mod dialogs;
mod install;
mod location;
mod service_worker;
mod storage;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub use clipboard::{copy_from_input, write_text};
pub use dialogs::BrowserDialogs;
pub use install::DeferredPrompt;
pub use location::BrowserLocation;
pub use service_worker::register_service_worker;
pub use storage::BrowserStorage;

/// Bind a window event listener for the lifetime of the page
pub fn listen(event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    }
    cb.forget();
}

/// Whether the browser currently reports a network connection
pub fn is_online() -> bool {
    web_sys::window().map(|win| win.navigator().on_line()).unwrap_or(true)
}

/// Toggle the `offline` class on `<body>`
pub fn set_offline_class(offline: bool) {
    let body = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body());
    if let Some(body) = body {
        let _ = body.class_list().toggle_with_force("offline", offline);
    }
}
