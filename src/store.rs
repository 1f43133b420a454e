//! UI State Store
//!
//! Uses Leptos reactive_stores for the view state that does not belong to
//! the grocery list itself.

use leptos::prelude::*;
use list_store::{InstallOutcome, InstallState};
use reactive_stores::Store;

/// Presentation state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Link shown in the share modal; the modal is open while this is set
    pub share_url: Option<String>,
    /// "Copied!" feedback on the copy button
    pub copied: bool,
    /// Install button and banner visibility
    pub install: InstallState,
    /// Browser reports no network
    pub offline: bool,
}

impl UiState {
    pub fn new(install_dismissed: bool, offline: bool) -> Self {
        Self {
            install: InstallState::new(install_dismissed),
            offline,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_open_share(store: &UiStore, url: String) {
    *store.copied().write() = false;
    *store.share_url().write() = Some(url);
}

pub fn store_close_share(store: &UiStore) {
    *store.share_url().write() = None;
}

pub fn store_set_copied(store: &UiStore, copied: bool) {
    *store.copied().write() = copied;
}

pub fn store_set_offline(store: &UiStore, offline: bool) {
    *store.offline().write() = offline;
}

/// Returns true when the install banner should be scheduled
pub fn store_install_available(store: &UiStore) -> bool {
    store.install().write().prompt_available()
}

pub fn store_show_install_banner(store: &UiStore) {
    store.install().write().show_banner();
}

pub fn store_install_finished(store: &UiStore, outcome: InstallOutcome) {
    store.install().write().prompt_finished(outcome);
}

pub fn store_banner_install_finished(store: &UiStore, outcome: Option<InstallOutcome>) {
    store.install().write().banner_install_finished(outcome);
}

pub fn store_installed(store: &UiStore) {
    store.install().write().installed();
}

pub fn store_dismiss_install_banner(store: &UiStore) {
    store.install().write().dismiss_banner();
}
