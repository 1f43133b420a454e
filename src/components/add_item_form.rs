//! Add Item Form Component
//!
//! Name, price and quantity fields for appending a new item.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::AppContext;

/// Form for appending a new item
#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (quantity, set_quantity) = signal(String::from("1"));
    let name_ref = NodeRef::<Input>::new();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.add_item(&name.get(), &price.get(), &quantity.get()) {
            Ok(()) => {
                set_name.set(String::new());
                set_price.set(String::new());
                set_quantity.set(String::from("1"));
                if let Some(input) = name_ref.get() {
                    let _ = input.focus();
                }
            }
            Err(e) => ctx.alert(&e.to_string()),
        }
    };

    view! {
        <form id="addItemForm" class="add-item-form" on:submit=add_item>
            <input
                id="itemName"
                type="text"
                placeholder="Item name"
                node_ref=name_ref
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                id="itemPrice"
                type="number"
                step="0.01"
                min="0"
                placeholder="Price"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <input
                id="itemQuantity"
                type="number"
                min="1"
                placeholder="Qty"
                prop:value=move || quantity.get()
                on:input=move |ev| set_quantity.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">"Add"</button>
        </form>
    }
}
