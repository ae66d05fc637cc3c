use dioxus::prelude::*;

use crate::components::{CollectionCard, CollectionCardSkeleton, PaginatedFooter};
use crate::config::config;
use crate::hooks::{use_infinite_scroll, use_purchased_collections};
use crate::routes::Route;
use crate::utils::time::format_date;
use crate::utils::truncate_address;

#[component]
pub fn Purchased() -> Element {
    let list = use_purchased_collections();
    let sentinel_id = use_infinite_scroll(list.load_more, list.has_more, list.loading);
    let state = list.state.read();
    let network = &config().network;

    rsx! {
        div {
            class: "p-4 space-y-5",
            h1 { class: "text-2xl font-bold", "Purchased collections" }

            if state.is_initial_load() {
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    for i in 0..4 {
                        CollectionCardSkeleton { key: "{i}" }
                    }
                }
            } else if state.is_empty() && state.error().is_none() {
                div {
                    class: "py-12 text-center text-muted-foreground space-y-2",
                    p { "You haven't bought any collections yet." }
                    Link { to: Route::Collections {}, class: "text-primary hover:underline", "Browse collections" }
                }
            } else {
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    for purchase in state.items().iter().cloned() {
                        div {
                            key: "{purchase.id}",
                            class: "space-y-1.5",
                            CollectionCard { collection: purchase.collection.clone() }
                            div {
                                class: "flex items-center justify-between px-1 text-xs text-muted-foreground",
                                if let Some(date) = purchase.purchased_at.as_deref().map(format_date).filter(|d| !d.is_empty()) {
                                    span { "Bought {date}" }
                                }
                                if let Some(hash) = purchase.tx_hash.as_deref() {
                                    if let Some(url) = network.explorer_tx_url(hash) {
                                        a {
                                            href: "{url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            class: "font-mono hover:underline",
                                            "{truncate_address(hash)}"
                                        }
                                    } else {
                                        span { class: "font-mono", "{truncate_address(hash)}" }
                                    }
                                }
                            }
                        }
                    }
                }
                PaginatedFooter {
                    sentinel_id,
                    loading: state.is_loading(),
                    has_more: state.has_more(),
                    error: state.error().map(str::to_string),
                    on_retry: move |_| list.retry.call(()),
                }
            }
        }
    }
}
