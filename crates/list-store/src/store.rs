//! List Store
//!
//! Single source of truth for the grocery list. Every mutation writes the
//! whole list back to durable storage before returning; storage and decode
//! failures are logged and never escape as errors.

use log::{debug, error, info, warn};

use crate::config::StoreConfig;
use crate::dialogs::Dialogs;
use crate::error::{ListError, ShareError};
use crate::item::{parse_price, parse_quantity, Item};
use crate::location::AddressBar;
use crate::render::RowAction;
use crate::share::{decode_list, parse_list_json, query_param, share_url};
use crate::stats::ListStats;
use crate::storage::KeyValueStore;

const CONFIRM_IMPORT: &str = "A shared list was found. Do you want to load it?";
const CONFIRM_DELETE: &str = "Do you want to delete this item?";
const PROMPT_NAME: &str = "Edit item name:";
const PROMPT_PRICE: &str = "Edit price:";
const PROMPT_QUANTITY: &str = "Edit quantity:";

/// Owns the item list and its persistence
#[derive(Debug)]
pub struct ListStore<S> {
    items: Vec<Item>,
    storage: S,
    config: StoreConfig,
}

impl<S: KeyValueStore> ListStore<S> {
    /// Load the persisted list, then offer to import a list shared through
    /// the page address.
    pub fn initialize(
        storage: S,
        config: StoreConfig,
        address: &mut impl AddressBar,
        dialogs: &mut impl Dialogs,
    ) -> Self {
        let mut store = Self::load(storage, config);
        store.import_shared(address, dialogs);
        store
    }

    /// Load the persisted list. Unreadable or corrupt data yields an empty list.
    pub fn load(storage: S, config: StoreConfig) -> Self {
        let items = match storage.get(&config.list_key) {
            Ok(Some(json)) => parse_list_json(&json).unwrap_or_else(|e| {
                error!("Error loading from storage: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                error!("Error loading from storage: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} items", items.len());
        Self {
            items,
            storage,
            config,
        }
    }

    /// Replace the list with the one carried in the address, if there is one,
    /// it decodes, and the user agrees. Returns true when the list was replaced.
    pub fn import_shared(&mut self, address: &mut impl AddressBar, dialogs: &mut impl Dialogs) -> bool {
        let query = address.query();
        let raw = match query_param(&query, &self.config.share_param) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return false,
        };

        let shared = match Self::decode_shareable(raw) {
            Ok(items) => items,
            Err(e) => {
                error!("Error loading shared list: {}", e);
                return false;
            }
        };

        if !dialogs.confirm(CONFIRM_IMPORT) {
            info!("Shared list with {} items declined", shared.len());
            return false;
        }

        info!("Imported shared list with {} items", shared.len());
        self.replace_all(shared);
        address.strip_query();
        true
    }

    /// Append a new item.
    ///
    /// A blank name is rejected; unparsable price falls back to 0 and
    /// unparsable or non-positive quantity to 1.
    pub fn add_item(
        &mut self,
        name: &str,
        price_input: &str,
        quantity_input: &str,
    ) -> Result<&Item, ListError> {
        let price = parse_price(price_input).unwrap_or(0.0);
        let quantity = parse_quantity(quantity_input).unwrap_or(1);
        let item = Item::new(name, price, quantity)?;
        debug!("Adding item {} ({})", item.id(), item.name());

        let index = self.items.len();
        self.items.push(item);
        self.persist();
        Ok(&self.items[index])
    }

    /// Update the fields of an item. Missing, blank or unparsable values keep
    /// the current value. Returns true when anything changed.
    pub fn edit_item(
        &mut self,
        id: &str,
        new_name: Option<&str>,
        new_price: Option<&str>,
        new_quantity: Option<&str>,
    ) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        let before = item.clone();

        if let Some(name) = new_name {
            item.set_name(name);
        }
        if let Some(price) = new_price.and_then(parse_price) {
            item.set_price(price);
        }
        if let Some(quantity) = new_quantity.and_then(parse_quantity) {
            item.set_quantity(quantity);
        }

        let changed = *item != before;
        if changed {
            debug!("Edited item {}", id);
            self.persist();
        }
        changed
    }

    /// Remove an item. Unknown ids are ignored.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        let removed = self.items.len() != before;
        if removed {
            debug!("Deleted item {}", id);
            self.persist();
        }
        removed
    }

    /// Flip the completed flag of an item. Unknown ids are ignored.
    pub fn toggle_item(&mut self, id: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id() == id) else {
            return false;
        };
        item.toggle();
        self.persist();
        true
    }

    /// Ask for name, price and quantity in turn, each pre-filled with the
    /// current value. Cancelling any prompt abandons the edit.
    pub fn edit_with_prompts(&mut self, id: &str, dialogs: &mut impl Dialogs) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        let name = item.name().to_string();
        let price = item.price().to_string();
        let quantity = item.quantity().to_string();

        let Some(new_name) = dialogs.prompt_field(PROMPT_NAME, &name) else {
            return false;
        };
        let Some(new_price) = dialogs.prompt_field(PROMPT_PRICE, &price) else {
            return false;
        };
        let Some(new_quantity) = dialogs.prompt_field(PROMPT_QUANTITY, &quantity) else {
            return false;
        };

        self.edit_item(id, Some(&new_name), Some(&new_price), Some(&new_quantity))
    }

    /// Delete after the user confirms
    pub fn delete_with_confirm(&mut self, id: &str, dialogs: &mut impl Dialogs) -> bool {
        if !self.contains(id) {
            return false;
        }
        dialogs.confirm(CONFIRM_DELETE) && self.delete_item(id)
    }

    /// Route a row affordance to the matching operation
    pub fn dispatch(&mut self, id: &str, action: RowAction, dialogs: &mut impl Dialogs) -> bool {
        match action {
            RowAction::Edit => self.edit_with_prompts(id, dialogs),
            RowAction::Delete => self.delete_with_confirm(id, dialogs),
            RowAction::Toggle => self.toggle_item(id),
        }
    }

    /// Replace the whole list, e.g. with an imported one
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
        self.persist();
    }

    pub fn compute_stats(&self) -> ListStats {
        ListStats::from_items(&self.items)
    }

    /// Share link for the current list rooted at `base`
    pub fn encode_shareable(&self, base: &str) -> Result<String, ShareError> {
        share_url(base, &self.config.share_param, &self.items)
    }

    /// Share link rooted at the current page
    pub fn share_link(&self, address: &impl AddressBar) -> Result<String, ShareError> {
        self.encode_shareable(&address.base_url())
    }

    /// Decode a raw query value. Never touches any store.
    pub fn decode_shareable(raw: &str) -> Result<Vec<Item>, ShareError> {
        decode_list(raw)
    }

    pub fn install_prompt_dismissed(&self) -> bool {
        match self.storage.get(&self.config.dismissed_key) {
            Ok(value) => value.is_some_and(|v| !v.is_empty()),
            Err(e) => {
                warn!("Could not read install prompt flag: {}", e);
                false
            }
        }
    }

    pub fn dismiss_install_prompt(&mut self) {
        if let Err(e) = self.storage.set(&self.config.dismissed_key, "true") {
            warn!("Could not save install prompt flag: {}", e);
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.items) {
            Ok(json) => json,
            Err(e) => {
                error!("Error serializing list: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.config.list_key, &json) {
            error!("Error saving to storage: {}", e);
        }
    }
}
