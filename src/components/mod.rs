//! UI Components
//!
//! Leptos components over the list store and UI store.

mod add_item_form;
mod grocery_row;
mod install_banner;
mod item_list;
mod share_modal;
mod stats_bar;

pub use add_item_form::AddItemForm;
pub use grocery_row::GroceryRow;
pub use install_banner::InstallBanner;
pub use item_list::ItemList;
pub use share_modal::ShareModal;
pub use stats_bar::StatsBar;
