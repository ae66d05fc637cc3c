use dioxus::prelude::*;

use crate::hooks::{use_follow, ToggleState};
use crate::routes::Route;
use crate::services::artists::Artist;
use crate::stores::auth_store;
use crate::utils::format_count;

#[component]
pub fn ArtistAvatar(artist: Artist, #[props(default = "w-14 h-14".to_string())] size: String) -> Element {
    rsx! {
        if let Some(url) = artist.avatar_url.as_ref().filter(|u| !u.is_empty()) {
            img {
                src: "{url}",
                alt: "{artist.name()}",
                class: "{size} rounded-full object-cover flex-shrink-0",
                loading: "lazy"
            }
        } else {
            div {
                class: "{size} rounded-full bg-muted flex items-center justify-center font-semibold text-muted-foreground flex-shrink-0",
                "{artist.initials()}"
            }
        }
    }
}

#[component]
pub fn FollowButton(artist: Artist) -> Element {
    let follow = use_follow(artist.id.clone(), artist.is_following, artist.follower_count as u64);
    let is_self = auth_store::get_user_id().as_deref() == Some(artist.id.as_str());
    let following = *follow.active.read();
    let pending = matches!(*follow.state.read(), ToggleState::Pending);

    if is_self {
        return rsx! {};
    }

    rsx! {
        button {
            class: if following {
                "px-4 py-1.5 rounded-full border border-border text-sm hover:bg-accent transition"
            } else {
                "px-4 py-1.5 rounded-full bg-primary text-primary-foreground text-sm hover:bg-primary/90 transition"
            },
            disabled: pending,
            onclick: move |e: MouseEvent| {
                e.prevent_default();
                e.stop_propagation();
                follow.toggle.call(());
            },
            if following { "Following" } else { "Follow" }
        }
    }
}

#[component]
pub fn ArtistCard(artist: Artist) -> Element {
    let followers = format_count(artist.follower_count as u64);

    rsx! {
        Link {
            to: Route::ArtistProfile { id: artist.id.clone() },
            class: "flex items-center gap-3 p-3 hover:bg-muted/50 rounded-lg transition",

            ArtistAvatar { artist: artist.clone() }

            div {
                class: "flex-1 min-w-0",
                div { class: "font-medium text-sm truncate", "{artist.name()}" }
                div { class: "text-xs text-muted-foreground", "@{artist.username} · {followers} followers" }
            }

            FollowButton { artist: artist.clone() }
        }
    }
}

#[component]
pub fn ArtistCardSkeleton() -> Element {
    rsx! {
        div {
            class: "flex items-center gap-3 p-3 rounded-lg animate-pulse",
            div { class: "w-14 h-14 bg-muted rounded-full flex-shrink-0" }
            div {
                class: "flex-1 min-w-0 space-y-2",
                div { class: "h-4 bg-muted rounded w-3/4" }
                div { class: "h-3 bg-muted rounded w-1/4" }
            }
        }
    }
}
