use dioxus::prelude::*;

use crate::components::icons::{ImageIcon, LockIcon};
use crate::config::config;
use crate::routes::Route;
use crate::services::collections::Collection;
use crate::stores::payment;
use crate::utils::format_price;

#[component]
pub fn CollectionCard(collection: Collection) -> Element {
    let symbol = &config().network.native_currency.symbol;
    let price = format_price(collection.price.as_deref(), symbol);
    let owned = collection.is_purchased || payment::is_purchased_in_session(&collection.id);
    let artist = collection.artist_name.clone().unwrap_or_else(|| "Unknown artist".to_string());

    rsx! {
        Link {
            to: Route::CollectionDetail { id: collection.id.clone() },
            class: "block rounded-xl border border-border bg-card overflow-hidden hover:shadow-lg transition group",

            // Cover
            div {
                class: "relative aspect-[4/3] bg-muted",
                if let Some(cover) = collection.cover_image_url.as_ref().filter(|u| !u.is_empty()) {
                    img {
                        src: "{cover}",
                        alt: "{collection.name}",
                        class: "w-full h-full object-cover group-hover:scale-105 transition",
                        loading: "lazy"
                    }
                } else {
                    div {
                        class: "w-full h-full flex items-center justify-center",
                        ImageIcon { class: "w-10 h-10 text-muted-foreground".to_string() }
                    }
                }

                if owned {
                    span {
                        class: "absolute top-2 right-2 px-2 py-0.5 rounded-full text-xs font-medium bg-green-600 text-white",
                        "Owned"
                    }
                } else if collection.is_paid() {
                    span {
                        class: "absolute top-2 right-2 p-1 rounded-full bg-black/60 text-white",
                        LockIcon { class: "w-3.5 h-3.5".to_string() }
                    }
                }
            }

            div {
                class: "p-3 space-y-1",
                div { class: "font-semibold truncate", "{collection.name}" }
                div { class: "text-sm text-muted-foreground truncate", "{artist}" }
                div {
                    class: "flex items-center justify-between text-sm pt-1",
                    span { class: "font-medium", "{price}" }
                    span { class: "text-muted-foreground", "{collection.artwork_count} works" }
                }
            }
        }
    }
}

#[component]
pub fn CollectionCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-border overflow-hidden animate-pulse",
            div { class: "aspect-[4/3] bg-muted" }
            div {
                class: "p-3 space-y-2",
                div { class: "h-4 bg-muted rounded w-3/4" }
                div { class: "h-3 bg-muted rounded w-1/2" }
                div { class: "h-3 bg-muted rounded w-1/3" }
            }
        }
    }
}
