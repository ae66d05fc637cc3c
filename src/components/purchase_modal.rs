use dioxus::prelude::*;

use crate::components::icons::{
    AlertTriangleIcon, CheckIcon, ExternalLinkIcon, RefreshIcon, ShoppingBagIcon, SpinnerIcon, XIcon,
};
use crate::config::config;
use crate::hooks::{use_payment, UsePayment};
use crate::routes::Route;
use crate::services::collections::Collection;
use crate::services::ethereum::is_wallet_installed;
use crate::stores::auth_store;
use crate::stores::payment::{self, PaymentStatus, PurchaseState};
use crate::utils::{format_price, truncate_address};

/// "Buy" entry point on a collection page.
///
/// Owned and free collections render a badge instead of a button.
#[component]
pub fn PurchaseButton(collection: Collection) -> Element {
    let payment = use_payment();
    let mut show_modal = use_signal(|| false);
    let navigator = navigator();

    let owned = collection.is_purchased
        || payment::is_purchased_in_session(&collection.id)
        || payment.state.read().is_purchased();

    if owned {
        return rsx! {
            span {
                class: "inline-flex items-center gap-2 px-4 py-2 rounded-lg bg-green-600/10 text-green-600 font-medium",
                CheckIcon { class: "w-4 h-4".to_string() }
                "You own this collection"
            }
        };
    }

    if !collection.is_paid() {
        return rsx! {
            span { class: "px-4 py-2 rounded-lg bg-muted font-medium", "Free collection" }
        };
    }

    let price = format_price(collection.price.as_deref(), &config().network.native_currency.symbol);
    let busy = *payment.is_purchasing.read();
    let resumable = payment.state.read().is_resumable();

    rsx! {
        button {
            class: "inline-flex items-center gap-2 px-5 py-2.5 rounded-lg bg-primary text-primary-foreground font-medium hover:bg-primary/90 transition disabled:opacity-50",
            disabled: busy,
            onclick: move |_| {
                if !auth_store::is_authenticated() {
                    navigator.push(Route::Login {});
                    return;
                }
                show_modal.set(true);
            },
            if busy {
                SpinnerIcon { class: "w-4 h-4".to_string() }
                "Purchasing..."
            } else if resumable {
                AlertTriangleIcon { class: "w-4 h-4".to_string() }
                "Resume purchase"
            } else {
                ShoppingBagIcon { class: "w-4 h-4".to_string() }
                "Buy for {price}"
            }
        }

        if *show_modal.read() {
            PurchaseModal {
                payment,
                collection: collection.clone(),
                on_close: move |_| show_modal.set(false),
            }
        }
    }
}

/// Step list with the current purchase phase highlighted
#[component]
fn PurchaseSteps(state: PurchaseState) -> Element {
    let current = state.status();
    let failed = state.is_failed();

    rsx! {
        ol {
            class: "space-y-3",
            for step in PaymentStatus::all() {
                {
                    let done = current.map(|c| step < c || (c == PaymentStatus::Purchased && !failed)).unwrap_or(false);
                    let active = current == Some(step) && !done;
                    let errored = active && failed;
                    rsx! {
                        li {
                            key: "{step.step()}",
                            class: "flex items-center gap-3 text-sm",
                            span {
                                class: "w-6 h-6 rounded-full flex items-center justify-center border",
                                class: if done { "bg-green-600 border-green-600 text-white" },
                                class: if errored { "border-destructive text-destructive" },
                                if done {
                                    CheckIcon { class: "w-3.5 h-3.5".to_string() }
                                } else if errored {
                                    XIcon { class: "w-3.5 h-3.5".to_string() }
                                } else if active {
                                    SpinnerIcon { class: "w-3.5 h-3.5".to_string() }
                                } else {
                                    "{step.step() + 1}"
                                }
                            }
                            span {
                                class: if active || done { "font-medium" } else { "text-muted-foreground" },
                                "{step.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PurchaseModal(payment: UsePayment, collection: Collection, on_close: EventHandler<()>) -> Element {
    let state = payment.state.read().clone();
    let busy = *payment.is_purchasing.read();
    let network = &config().network;
    let price = format_price(collection.price.as_deref(), &network.native_currency.symbol);
    let wallet_installed = is_wallet_installed();
    let artist_wallet = collection.artist_wallet_address.clone().unwrap_or_default();
    let explorer = state.tx_hash().and_then(|hash| network.explorer_tx_url(hash));
    let tx_short = state.tx_hash().map(truncate_address);
    // Closing keeps a resumable state; `reset` ignores it
    let can_close = !busy;

    let collection_id = collection.id.clone();
    let wallet_for_buy = artist_wallet.clone();
    let start = move |_| {
        payment.purchase_collection.call((collection_id.clone(), wallet_for_buy.clone()));
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| {
                if can_close {
                    payment.reset.call(());
                    on_close.call(());
                }
            },

            div {
                class: "bg-card border border-border rounded-xl max-w-md w-full p-6 shadow-xl space-y-5",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "purchase-title",
                onclick: move |e| e.stop_propagation(),

                div {
                    h2 { id: "purchase-title", class: "text-lg font-bold", "Buy {collection.name}" }
                    p {
                        class: "text-sm text-muted-foreground",
                        "{price} on {network.chain_name}"
                    }
                }

                if !wallet_installed {
                    div {
                        class: "flex gap-2 p-3 rounded-lg bg-yellow-500/10 text-sm",
                        AlertTriangleIcon { class: "w-5 h-5 text-yellow-600 flex-shrink-0".to_string() }
                        "A browser wallet such as MetaMask is required to buy collections."
                    }
                }

                if artist_wallet.is_empty() {
                    div {
                        class: "p-3 rounded-lg bg-muted text-sm",
                        "This artist has not linked a wallet yet, so the collection cannot be bought."
                    }
                }

                if !matches!(state, PurchaseState::Idle) {
                    PurchaseSteps { state: state.clone() }
                }

                if let PurchaseState::Failed { error, .. } = &state {
                    p { class: "text-sm text-destructive", "{error}" }
                }

                if let (Some(short), Some(url)) = (tx_short.clone(), explorer.clone()) {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "inline-flex items-center gap-1 text-sm text-primary hover:underline",
                        "Transaction {short}"
                        ExternalLinkIcon { class: "w-3.5 h-3.5".to_string() }
                    }
                }

                div {
                    class: "flex gap-3 justify-end",

                    if can_close {
                        button {
                            class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                            onclick: move |_| {
                                payment.reset.call(());
                                on_close.call(());
                            },
                            if state.is_purchased() {
                                "Done"
                            } else if state.is_resumable() {
                                "Close"
                            } else {
                                "Cancel"
                            }
                        }
                    }

                    if state.can_retry_completion() {
                        button {
                            class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition disabled:opacity-50",
                            disabled: busy,
                            onclick: move |_| payment.retry_verification.call(()),
                            "Retry verification"
                        }
                    } else if state.can_check_receipt() {
                        button {
                            class: "inline-flex items-center gap-2 px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition disabled:opacity-50",
                            disabled: busy || !wallet_installed,
                            onclick: move |_| payment.check_receipt.call(()),
                            RefreshIcon { class: "w-4 h-4".to_string() }
                            "Check again"
                        }
                    } else if state.can_start() {
                        button {
                            class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition disabled:opacity-50",
                            disabled: busy || !wallet_installed || artist_wallet.is_empty(),
                            onclick: start,
                            if state.is_failed() { "Try again" } else { "Confirm purchase" }
                        }
                    }
                }
            }
        }
    }
}
