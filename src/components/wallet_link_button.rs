use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions};
use std::time::Duration;

use crate::components::icons::{SpinnerIcon, WalletIcon};
use crate::services::ethereum::BrowserProvider;
use crate::services::wallet_link;
use crate::stores::auth_store;
use crate::utils::truncate_address;

/// Shows the linked address, or links the browser wallet by signature
#[component]
pub fn WalletLinkButton() -> Element {
    let toasts = consume_toast();
    let mut busy = use_signal(|| false);
    let linked = auth_store::AUTH_STATE
        .read()
        .user
        .as_ref()
        .and_then(|u| u.wallet_address.clone());

    let link_toasts = toasts.clone();
    let link = move |_| {
        let toasts = link_toasts.clone();
        if *busy.peek() {
            return;
        }
        let Some(provider) = BrowserProvider::detect() else {
            toasts.error(
                "Install a browser wallet such as MetaMask first".to_string(),
                ToastOptions::new().duration(Duration::from_secs(5)),
            );
            return;
        };

        busy.set(true);
        spawn(async move {
            match wallet_link::link_wallet(&provider).await {
                Ok(user) => {
                    auth_store::set_user(user);
                    toasts.success("Wallet linked".to_string(), ToastOptions::new().duration(Duration::from_secs(3)));
                }
                Err(e) => {
                    log::error!("Wallet link failed: {}", e);
                    toasts.error(e, ToastOptions::new().duration(Duration::from_secs(5)));
                }
            }
            busy.set(false);
        });
    };

    let unlink = move |_| {
        if *busy.peek() {
            return;
        }
        let toasts = toasts.clone();
        busy.set(true);
        spawn(async move {
            match wallet_link::unlink_wallet().await {
                Ok(()) => {
                    if let Some(mut user) = auth_store::get_user() {
                        user.wallet_address = None;
                        auth_store::set_user(user);
                    }
                }
                Err(e) => {
                    log::error!("Wallet unlink failed: {}", e);
                    toasts.error(e.into(), ToastOptions::new().duration(Duration::from_secs(5)));
                }
            }
            busy.set(false);
        });
    };

    match linked {
        Some(address) => rsx! {
            div {
                class: "flex items-center gap-3",
                span {
                    class: "inline-flex items-center gap-2 px-3 py-1.5 rounded-lg bg-muted font-mono text-sm",
                    title: "{address}",
                    WalletIcon { class: "w-4 h-4".to_string() }
                    "{truncate_address(&address)}"
                }
                button {
                    class: "text-sm text-muted-foreground hover:text-destructive disabled:opacity-50",
                    disabled: *busy.read(),
                    onclick: unlink,
                    "Unlink"
                }
            }
        },
        None => rsx! {
            button {
                class: "inline-flex items-center gap-2 px-4 py-2 rounded-lg border border-border hover:bg-accent transition disabled:opacity-50",
                disabled: *busy.read(),
                onclick: link,
                if *busy.read() {
                    SpinnerIcon { class: "w-4 h-4".to_string() }
                    "Waiting for wallet..."
                } else {
                    WalletIcon { class: "w-4 h-4".to_string() }
                    "Link wallet"
                }
            }
        },
    }
}
