use dioxus::prelude::*;

use crate::components::icons::ExternalLinkIcon;
use crate::components::{ArtistAvatar, ArtworkGrid, CollectionGrid, FollowButton};
use crate::hooks::{use_artist_artworks, use_artist_collections};
use crate::routes::Route;
use crate::services::artists::{self, Artist};
use crate::stores::auth_store;
use crate::utils::{format_count, DataState};

#[derive(Clone, Copy, PartialEq)]
enum ProfileTab {
    Artworks,
    Collections,
}

#[component]
pub fn ArtistProfile(id: String) -> Element {
    let mut artist = use_signal(|| DataState::<Artist>::Pending);
    let mut tab = use_signal(|| ProfileTab::Artworks);

    use_effect(use_reactive(&id, move |id| {
        artist.set(DataState::Loading);
        tab.set(ProfileTab::Artworks);
        spawn(async move {
            let result = artists::get_artist(&id).await;
            if let Err(e) = &result {
                log::error!("Failed to load artist {}: {}", id, e);
            }
            artist.set(result.into());
        });
    }));

    let current = match &*artist.read() {
        DataState::Loaded(a) => a.clone(),
        DataState::Error(e) => {
            return rsx! {
                div { class: "p-8 text-center text-destructive", "{e}" }
            };
        }
        _ => {
            return rsx! {
                div {
                    class: "animate-pulse",
                    div { class: "h-40 bg-muted" }
                    div { class: "p-4 space-y-3",
                        div { class: "w-24 h-24 -mt-16 rounded-full bg-muted border-4 border-background" }
                        div { class: "h-6 w-40 bg-muted rounded" }
                    }
                }
            };
        }
    };

    let is_self = auth_store::get_user_id().as_deref() == Some(current.id.as_str());
    let active_tab = *tab.read();

    rsx! {
        div {
            // Banner
            div {
                class: "h-40 bg-gradient-to-r from-primary/30 to-primary/10",
                if let Some(banner) = current.banner_url.as_ref().filter(|u| !u.is_empty()) {
                    img { src: "{banner}", alt: "", class: "w-full h-full object-cover" }
                }
            }

            div {
                class: "px-4 space-y-3",
                div {
                    class: "flex items-end justify-between -mt-12",
                    div {
                        class: "rounded-full border-4 border-background",
                        ArtistAvatar { artist: current.clone(), size: "w-24 h-24 text-2xl".to_string() }
                    }
                    if is_self {
                        Link {
                            to: Route::ProfileSettings {},
                            class: "px-4 py-1.5 rounded-full border border-border text-sm hover:bg-accent transition",
                            "Edit profile"
                        }
                    } else {
                        FollowButton { artist: current.clone() }
                    }
                }

                div {
                    h1 { class: "text-2xl font-bold", "{current.name()}" }
                    p { class: "text-sm text-muted-foreground", "@{current.username}" }
                }

                if let Some(bio) = current.bio.as_ref().filter(|b| !b.is_empty()) {
                    p { class: "whitespace-pre-line", "{bio}" }
                }

                div {
                    class: "flex flex-wrap items-center gap-4 text-sm text-muted-foreground",
                    span { strong { class: "text-foreground", "{format_count(current.follower_count as u64)}" } " followers" }
                    span { strong { class: "text-foreground", "{format_count(current.following_count as u64)}" } " following" }
                    span { strong { class: "text-foreground", "{format_count(current.artwork_count as u64)}" } " works" }
                    if let Some(site) = current.website.as_ref().filter(|w| !w.is_empty()) {
                        a {
                            href: "{site}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "inline-flex items-center gap-1 text-primary hover:underline",
                            "{site}"
                            ExternalLinkIcon { class: "w-3.5 h-3.5".to_string() }
                        }
                    }
                }
            }

            div {
                class: "flex border-b border-border mt-4",
                for (label, value) in [("Artworks", ProfileTab::Artworks), ("Collections", ProfileTab::Collections)] {
                    button {
                        key: "{label}",
                        class: "flex-1 py-3 text-sm font-medium transition hover:bg-accent/40",
                        class: if active_tab == value { "border-b-2 border-primary" } else { "text-muted-foreground" },
                        onclick: move |_| tab.set(value),
                        "{label}"
                    }
                }
            }

            div {
                class: "p-4",
                match active_tab {
                    ProfileTab::Artworks => rsx! { ArtistArtworks { key: "art-{current.id}", artist_id: current.id.clone() } },
                    ProfileTab::Collections => rsx! { ArtistCollections { key: "col-{current.id}", artist_id: current.id.clone() } },
                }
            }
        }
    }
}

#[component]
fn ArtistArtworks(artist_id: String) -> Element {
    let list = use_artist_artworks(artist_id);
    rsx! { ArtworkGrid { list } }
}

#[component]
fn ArtistCollections(artist_id: String) -> Element {
    let list = use_artist_collections(artist_id);
    rsx! { CollectionGrid { list } }
}
