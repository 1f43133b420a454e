//! List Store
//!
//! State, persistence and sharing for the grocery list, independent of the
//! browser. The front end plugs in adapters for the three platform seams:
//! - [`KeyValueStore`]: durable storage (localStorage in the browser)
//! - [`AddressBar`]: the page URL carrying a shared list
//! - [`Dialogs`]: yes/no confirmation, text prompts and notices

mod config;
mod dialogs;
mod error;
mod install;
mod item;
mod location;
mod render;
mod share;
mod stats;
mod storage;
mod store;

#[cfg(test)]
mod testing;

pub use config::{DisplayConfig, StoreConfig};
pub use dialogs::Dialogs;
pub use error::{ListError, ShareError, StorageError};
pub use install::{InstallOutcome, InstallState};
pub use item::{parse_price, parse_quantity, Item, ItemId};
pub use location::AddressBar;
pub use render::{escape_html, EmptyPlaceholder, ItemRow, ListView, RowAction, StatsView, ViewRenderer};
pub use share::{decode_list, encode_list, query_param, share_url};
pub use stats::ListStats;
pub use storage::{KeyValueStore, MemoryStore};
pub use store::ListStore;
