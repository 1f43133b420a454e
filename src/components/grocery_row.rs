//! Grocery Row Component
//!
//! One rendered item with its edit/delete buttons and completion checkbox.

use leptos::prelude::*;
use list_store::{ItemRow, RowAction};

use crate::context::AppContext;

/// A single item row
#[component]
pub fn GroceryRow(row: ItemRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let class = row.css_class();
    let completed = row.completed;
    let toggle_id = row.id.clone();

    let buttons = row
        .actions
        .iter()
        .filter_map(|&action| {
            let (button_class, icon, title) = match action {
                RowAction::Edit => ("btn btn-edit", "✏️", "Edit"),
                RowAction::Delete => ("btn btn-danger", "🗑️", "Delete"),
                RowAction::Toggle => return None,
            };
            let id = row.id.clone();
            Some(view! {
                <button class=button_class title=title on:click=move |_| ctx.dispatch(&id, action)>
                    {icon}
                </button>
            })
        })
        .collect_view();

    view! {
        <div class=class>
            <div class="item-header">
                <div class="item-info">
                    // Already escaped by the renderer
                    <div class="item-name" inner_html=row.name_html></div>
                    <div class="item-details">
                        <span>"Price: " {row.price}</span>
                        <span>"Qty: " {row.quantity}</span>
                        <span>"Subtotal: " {row.subtotal}</span>
                    </div>
                </div>
                <div class="item-actions">{buttons}</div>
            </div>
            <label class="checkbox-container">
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| ctx.dispatch(&toggle_id, RowAction::Toggle)
                />
                "Done"
            </label>
        </div>
    }
}
