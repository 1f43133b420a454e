//! Item List Component
//!
//! The list container: placeholder when empty, one row per item otherwise.

use leptos::prelude::*;
use list_store::ListView;

use crate::components::GroceryRow;
use crate::context::AppContext;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div id="groceryList" class="grocery-list">
            {move || match ctx.list_view() {
                ListView::Empty(placeholder) => view! {
                    <div class="empty-state">
                        <p>{placeholder.title}</p>
                        <p>{placeholder.hint}</p>
                    </div>
                }.into_any(),
                ListView::Rows(rows) => rows
                    .into_iter()
                    .map(|row| view! { <GroceryRow row=row /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
