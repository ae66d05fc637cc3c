#![allow(non_snake_case)]

use dioxus::prelude::*;
use stores::{auth_store, notifications};

// Modules
mod components;
mod config;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

use components::toast::ToastProvider;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting artmarket client against {}", config::config().api_url);

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Initialize stores on mount
    use_effect(move || {
        auth_store::init_auth();

        spawn(async move {
            // Validate the stored token, then fill the nav badge
            auth_store::restore_session_async().await;
            if auth_store::is_authenticated() {
                notifications::refresh_unread_count().await;
            }
        });
    });

    rsx! {
        ToastProvider {
            Router::<routes::Route> {}
        }
    }
}
