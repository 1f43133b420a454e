//! Stats Bar Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Item count and running total
#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let stats = Memo::new(move |_| ctx.stats_view());

    view! {
        <div class="stats">
            <span id="itemCount">{move || stats.get().item_count}</span>
            <span id="totalPrice">{move || stats.get().total_price}</span>
        </div>
    }
}
