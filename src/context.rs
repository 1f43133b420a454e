//! Application Context
//!
//! Holds the grocery list store and renderer, provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use list_store::{
    Dialogs, InstallOutcome, ListError, ListStore, ListView, RowAction, ShareError, StatsView,
    StoreConfig, ViewRenderer,
};
use log::{error, info, warn};

use crate::platform::{BrowserDialogs, BrowserLocation, BrowserStorage, DeferredPrompt};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The list; every write re-renders its readers
    list: RwSignal<ListStore<BrowserStorage>>,
    renderer: StoredValue<ViewRenderer>,
    /// Held `beforeinstallprompt` event, if the browser offered one
    deferred_prompt: StoredValue<Option<DeferredPrompt>, LocalStorage>,
}

impl AppContext {
    /// Load the persisted list and offer any list shared through the URL
    pub fn initialize(config: StoreConfig, renderer: ViewRenderer) -> Self {
        let list = ListStore::initialize(
            BrowserStorage,
            config,
            &mut BrowserLocation,
            &mut BrowserDialogs,
        );
        Self {
            list: RwSignal::new(list),
            renderer: StoredValue::new(renderer),
            deferred_prompt: StoredValue::new_local(None),
        }
    }

    pub fn list_view(&self) -> ListView {
        let renderer = self.renderer;
        self.list.with(|list| renderer.with_value(|r| r.render(list.items())))
    }

    pub fn stats_view(&self) -> StatsView {
        let renderer = self.renderer;
        self.list.with(|list| renderer.with_value(|r| r.render_stats(&list.compute_stats())))
    }

    pub fn add_item(&self, name: &str, price: &str, quantity: &str) -> Result<(), ListError> {
        self.list
            .try_update(|list| list.add_item(name, price, quantity).map(|_| ()))
            .unwrap_or_else(|| {
                error!("List store disposed; item {:?} was not added", name);
                Ok(())
            })
    }

    /// Run a row affordance (edit, delete, toggle) for an item
    pub fn dispatch(&self, id: &str, action: RowAction) {
        self.list.update(|list| {
            list.dispatch(id, action, &mut BrowserDialogs);
        });
    }

    pub fn share_link(&self) -> Result<String, ShareError> {
        self.list.with_untracked(|list| list.share_link(&BrowserLocation))
    }

    pub fn install_prompt_dismissed(&self) -> bool {
        self.list.with_untracked(|list| list.install_prompt_dismissed())
    }

    pub fn dismiss_install_prompt(&self) {
        // the flag lives beside the list but no view reads it
        self.list.update_untracked(|list| list.dismiss_install_prompt());
    }

    pub fn alert(&self, message: &str) {
        BrowserDialogs.alert(message);
    }

    pub fn hold_install_prompt(&self, prompt: DeferredPrompt) {
        self.deferred_prompt.set_value(Some(prompt));
    }

    pub fn drop_install_prompt(&self) {
        self.deferred_prompt.set_value(None);
    }

    /// Show the held install prompt, once. `None` when there was nothing to
    /// show or the platform call failed.
    pub async fn install_app(&self) -> Option<InstallOutcome> {
        let mut held = None;
        self.deferred_prompt.update_value(|prompt| held = prompt.take());
        let prompt = held?;
        match prompt.show().await {
            Ok(outcome) => {
                info!("Install prompt outcome: {:?}", outcome);
                Some(outcome)
            }
            Err(e) => {
                warn!("Install prompt failed: {}", e);
                None
            }
        }
    }
}
