//! Dialog Seam
//!
//! Typed requests to the presentation layer, so flows that ask the user
//! something can run against scripted answers in tests.

pub trait Dialogs {
    /// Yes/no question
    fn confirm(&mut self, question: &str) -> bool;

    /// Ask for a text value pre-filled with `default`; `None` when cancelled
    fn prompt_field(&mut self, label: &str, default: &str) -> Option<String>;

    /// One-way notice
    fn alert(&mut self, message: &str);
}
