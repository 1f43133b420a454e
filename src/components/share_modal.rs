//! Share Modal Component
//!
//! Shows the share link with a copy button. Clicking the backdrop closes it.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, warn};
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::platform;
use crate::store::{store_close_share, store_set_copied, use_ui_store, UiStateStoreFields};

/// How long the copy button reads "Copied!"
const COPY_FEEDBACK_MS: u32 = 2_000;

#[component]
pub fn ShareModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = use_ui_store();
    let url_ref = NodeRef::<Input>::new();

    let close_on_backdrop = move |ev: web_sys::MouseEvent| {
        let on_backdrop = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| el.class_list().contains("modal"));
        if on_backdrop {
            store_close_share(&ui);
        }
    };

    let copy = move |_| {
        let Some(url) = ui.share_url().get_untracked() else {
            return;
        };
        spawn_local(async move {
            match platform::write_text(&url).await {
                Ok(()) => {
                    store_set_copied(&ui, true);
                    TimeoutFuture::new(COPY_FEEDBACK_MS).await;
                    store_set_copied(&ui, false);
                }
                Err(e) => {
                    warn!("{}, falling back to copy command", e);
                    let Some(input) = url_ref.get_untracked() else {
                        warn!("Share modal closed before the link could be copied");
                        return;
                    };
                    match platform::copy_from_input(&input) {
                        Ok(()) => ctx.alert("Link copied!"),
                        Err(e) => error!("Could not copy share link: {}", e),
                    }
                }
            }
        });
    };

    view! {
        <Show when=move || ui.share_url().with(Option::is_some)>
            <div id="shareModal" class="modal show" on:click=close_on_backdrop>
                <div class="modal-content">
                    <button class="close" title="Close" on:click=move |_| store_close_share(&ui)>
                        "×"
                    </button>
                    <h2>"Share this list"</h2>
                    <p>"Anyone opening this link can load a copy of your list."</p>
                    <input
                        id="shareUrl"
                        type="text"
                        readonly=true
                        node_ref=url_ref
                        prop:value=move || ui.share_url().get().unwrap_or_default()
                    />
                    <button
                        id="copyUrlBtn"
                        class=move || if ui.copied().get() { "btn btn-copy copied" } else { "btn btn-copy" }
                        on:click=copy
                    >
                        {move || if ui.copied().get() { "Copied!" } else { "Copy link" }}
                    </button>
                </div>
            </div>
        </Show>
    }
}
