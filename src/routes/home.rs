use dioxus::prelude::*;

use crate::components::{
    ArtistCard, ArtistCardSkeleton, ArtworkCard, ArtworkCardSkeleton, CollectionCard, PaginatedFooter,
};
use crate::hooks::{use_home_feed, use_infinite_scroll};
use crate::routes::Route;
use crate::services::artists::{self, Artist};
use crate::services::feed::FeedItem;
use crate::stores::auth_store;
use crate::utils::DataState;

const FEATURED_ARTISTS: u32 = 6;

#[component]
pub fn Home() -> Element {
    let authenticated = auth_store::is_authenticated();

    rsx! {
        div {
            class: "p-4 space-y-8",
            if authenticated {
                HomeFeed {}
            } else {
                Welcome {}
            }
            FeaturedArtists {}
        }
    }
}

/// Signed-out landing
#[component]
fn Welcome() -> Element {
    rsx! {
        section {
            class: "rounded-2xl bg-gradient-to-br from-primary/20 to-primary/5 p-8 space-y-4",
            h1 { class: "text-3xl font-bold", "Collect art straight from the artists" }
            p {
                class: "text-muted-foreground max-w-lg",
                "Follow artists you love, unlock their collections with your wallet and keep everything in one place."
            }
            div {
                class: "flex gap-3",
                Link {
                    to: Route::Register {},
                    class: "px-5 py-2 rounded-full bg-primary text-primary-foreground font-medium hover:bg-primary/90 transition",
                    "Get started"
                }
                Link {
                    to: Route::Explore {},
                    class: "px-5 py-2 rounded-full border border-border hover:bg-accent transition",
                    "Explore art"
                }
            }
        }
    }
}

/// New work from followed artists
#[component]
fn HomeFeed() -> Element {
    let feed = use_home_feed();
    let sentinel_id = use_infinite_scroll(feed.load_more, feed.has_more, feed.loading);
    let state = feed.state.read();

    rsx! {
        section {
            class: "space-y-4",
            div {
                class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold", "Your feed" }
                button {
                    class: "text-sm text-primary hover:underline disabled:opacity-50",
                    disabled: state.is_loading(),
                    onclick: move |_| feed.refresh.call(()),
                    "Refresh"
                }
            }

            if state.is_initial_load() {
                div {
                    class: "grid grid-cols-2 md:grid-cols-3 gap-4",
                    for i in 0..6 {
                        ArtworkCardSkeleton { key: "{i}" }
                    }
                }
            } else if state.is_empty() && state.error().is_none() {
                div {
                    class: "py-12 text-center text-muted-foreground space-y-2",
                    p { "Your feed is empty." }
                    Link { to: Route::Explore {}, class: "text-primary hover:underline", "Find artists to follow" }
                }
            } else {
                div {
                    class: "grid grid-cols-2 md:grid-cols-3 gap-4",
                    for item in state.items().iter().cloned() {
                        match item {
                            FeedItem::Artwork(artwork) => rsx! { ArtworkCard { key: "a-{artwork.id}", artwork } },
                            FeedItem::Collection(collection) => rsx! { CollectionCard { key: "c-{collection.id}", collection } },
                        }
                    }
                }
                PaginatedFooter {
                    sentinel_id,
                    loading: state.is_loading(),
                    has_more: state.has_more(),
                    error: state.error().map(str::to_string),
                    on_retry: move |_| feed.retry.call(()),
                }
            }
        }
    }
}

#[component]
fn FeaturedArtists() -> Element {
    let mut artists_state = use_signal(|| DataState::<Vec<Artist>>::Pending);

    use_effect(move || {
        spawn(async move {
            artists_state.set(DataState::Loading);
            match artists::featured_artists(FEATURED_ARTISTS).await {
                Ok(list) => artists_state.set(DataState::Loaded(list)),
                Err(e) => {
                    log::warn!("Failed to load featured artists: {}", e);
                    artists_state.set(DataState::Error(e.into()));
                }
            }
        });
    });

    rsx! {
        section {
            class: "space-y-4",
            h2 { class: "text-xl font-bold", "Featured artists" }
            match &*artists_state.read() {
                DataState::Loaded(list) if !list.is_empty() => rsx! {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                        for artist in list.iter().cloned() {
                            ArtistCard { key: "{artist.id}", artist }
                        }
                    }
                },
                DataState::Loaded(_) | DataState::Error(_) => rsx! {
                    p { class: "text-sm text-muted-foreground", "No featured artists right now." }
                },
                _ => rsx! {
                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                        for i in 0..4 {
                            ArtistCardSkeleton { key: "{i}" }
                        }
                    }
                },
            }
        }
    }
}
