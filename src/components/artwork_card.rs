use dioxus::prelude::*;

use crate::components::icons::{HeartIcon, LockIcon};
use crate::hooks::{use_like, ToggleState};
use crate::routes::Route;
use crate::services::artworks::Artwork;
use crate::utils::format_count;

#[component]
pub fn ArtworkCard(artwork: Artwork) -> Element {
    let like = use_like(artwork.id.clone(), artwork.is_liked, artwork.like_count as u64);
    let pending = matches!(*like.state.read(), ToggleState::Pending);
    let liked = *like.active.read();
    let count = format_count(*like.count.read());
    let artist = artwork.artist_name.clone().unwrap_or_default();
    let heart_class = if liked { "w-4 h-4 text-red-500" } else { "w-4 h-4" };

    rsx! {
        div {
            class: "rounded-xl border border-border bg-card overflow-hidden",

            div {
                class: "relative aspect-square bg-muted",
                img {
                    src: "{artwork.preview_url()}",
                    alt: "{artwork.title}",
                    class: if artwork.is_locked { "w-full h-full object-cover blur-md" } else { "w-full h-full object-cover" },
                    loading: "lazy"
                }
                if artwork.is_locked {
                    div {
                        class: "absolute inset-0 flex items-center justify-center",
                        LockIcon { class: "w-8 h-8 text-white drop-shadow".to_string() }
                    }
                }
            }

            div {
                class: "p-3 flex items-start justify-between gap-2",
                div {
                    class: "min-w-0",
                    div { class: "font-medium truncate", "{artwork.title}" }
                    Link {
                        to: Route::ArtistProfile { id: artwork.artist_id.clone() },
                        class: "text-xs text-muted-foreground hover:underline truncate",
                        "{artist}"
                    }
                }
                button {
                    class: "flex items-center gap-1 text-sm hover:text-red-500 transition disabled:opacity-50",
                    disabled: pending,
                    aria_label: if liked { "Unlike" } else { "Like" },
                    onclick: move |_| like.toggle.call(()),
                    HeartIcon { class: heart_class.to_string(), filled: liked }
                    "{count}"
                }
            }
        }
    }
}

#[component]
pub fn ArtworkCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-border overflow-hidden animate-pulse",
            div { class: "aspect-square bg-muted" }
            div {
                class: "p-3 space-y-2",
                div { class: "h-4 bg-muted rounded w-2/3" }
                div { class: "h-3 bg-muted rounded w-1/3" }
            }
        }
    }
}
