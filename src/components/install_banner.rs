//! Install Banner Component
//!
//! Delayed invitation to install the app, shown until installed or dismissed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::store::{
    store_banner_install_finished, store_dismiss_install_banner, use_ui_store, UiStateStoreFields,
};

#[component]
pub fn InstallBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = use_ui_store();

    let install = move |_| {
        spawn_local(async move {
            let outcome = ctx.install_app().await;
            store_banner_install_finished(&ui, outcome);
        });
    };

    let dismiss = move |_| {
        store_dismiss_install_banner(&ui);
        ctx.dismiss_install_prompt();
    };

    view! {
        <Show when=move || ui.install().get().banner_visible()>
            <div id="installPrompt" class="install-prompt">
                <p>"Install Grocery List on your home screen for quick access, even offline."</p>
                <div class="install-actions">
                    <button id="installBtn" class="btn btn-primary" on:click=install>"Install"</button>
                    <button id="dismissBtn" class="btn btn-secondary" on:click=dismiss>"Not now"</button>
                </div>
            </div>
        </Show>
    }
}
