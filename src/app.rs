//! Grocery List App
//!
//! Root component: wires the list store, UI store and platform events.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use list_store::{DisplayConfig, StoreConfig, ViewRenderer};
use log::{error, info};
use reactive_stores::Store;

use crate::components::{AddItemForm, InstallBanner, ItemList, ShareModal, StatsBar};
use crate::context::AppContext;
use crate::platform::{self, DeferredPrompt};
use crate::store::{
    store_install_available, store_install_finished, store_installed, store_open_share,
    store_set_offline, store_show_install_banner, UiState, UiStateStoreFields, UiStore,
};

/// Background update/offline worker script
const SERVICE_WORKER_PATH: &str = "/sw.js";
/// Delay before the install banner appears after the browser offers a prompt
const INSTALL_BANNER_DELAY_MS: u32 = 3_000;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::initialize(StoreConfig::default(), ViewRenderer::new(DisplayConfig::default()));
    let ui: UiStore = Store::new(UiState::new(ctx.install_prompt_dismissed(), !platform::is_online()));
    platform::set_offline_class(!platform::is_online());

    // Provide context to all children
    provide_context(ctx);
    provide_context(ui);

    spawn_local(platform::register_service_worker(SERVICE_WORKER_PATH));
    bind_install_events(ctx, ui);
    bind_network_events(ui);

    let open_share = move |_| match ctx.share_link() {
        Ok(url) => store_open_share(&ui, url),
        Err(e) => error!("Could not build share link: {}", e),
    };

    let install = move |_| {
        spawn_local(async move {
            if let Some(outcome) = ctx.install_app().await {
                store_install_finished(&ui, outcome);
            }
        });
    };

    view! {
        <div class="container">
            <header class="header">
                <h1>"Grocery List"</h1>
                <div class="header-actions">
                    <Show when=move || ui.offline().get()>
                        <span class="offline-badge">"Offline"</span>
                    </Show>
                    <Show when=move || ui.install().get().button_visible()>
                        <button id="installAppBtn" class="btn btn-install" on:click=install>
                            "Install app"
                        </button>
                    </Show>
                    <button id="shareBtn" class="btn btn-share" on:click=open_share>
                        "Share"
                    </button>
                </div>
            </header>

            <main>
                <AddItemForm />
                <StatsBar />
                <ItemList />
            </main>

            <ShareModal />
            <InstallBanner />
        </div>
    }
}

/// `beforeinstallprompt` / `appinstalled` handling
fn bind_install_events(ctx: AppContext, ui: UiStore) {
    platform::listen("beforeinstallprompt", move |event| {
        ctx.hold_install_prompt(DeferredPrompt::capture(event));
        if store_install_available(&ui) {
            spawn_local(async move {
                TimeoutFuture::new(INSTALL_BANNER_DELAY_MS).await;
                store_show_install_banner(&ui);
            });
        }
    });

    platform::listen("appinstalled", move |_| {
        info!("PWA was installed");
        ctx.drop_install_prompt();
        store_installed(&ui);
    });
}

fn bind_network_events(ui: UiStore) {
    platform::listen("online", move |_| {
        info!("App is online");
        platform::set_offline_class(false);
        store_set_offline(&ui, false);
    });

    platform::listen("offline", move |_| {
        info!("App is offline");
        platform::set_offline_class(true);
        store_set_offline(&ui, true);
    });
}
