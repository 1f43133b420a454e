//! Native browser dialogs behind the `Dialogs` seam.

use list_store::Dialogs;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&mut self, question: &str) -> bool {
        web_sys::window()
            .and_then(|win| win.confirm_with_message(question).ok())
            .unwrap_or(false)
    }

    fn prompt_field(&mut self, label: &str, default: &str) -> Option<String> {
        web_sys::window()?
            .prompt_with_message_and_default(label, default)
            .ok()
            .flatten()
    }

    fn alert(&mut self, message: &str) {
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message(message);
        }
    }
}
