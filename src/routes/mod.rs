use dioxus::prelude::*;

pub mod artist_profile;
pub mod artwork_new;
pub mod auth;
pub mod collection_detail;
pub mod collection_edit;
pub mod collection_new;
pub mod collections;
pub mod explore;
pub mod home;
pub mod my_collections;
pub mod not_found;
pub mod notifications;
pub mod purchased;
pub mod search;
pub mod settings;

use artist_profile::ArtistProfile;
use artwork_new::ArtworkNew;
use auth::{Login, Register};
use collection_detail::CollectionDetail;
use collection_edit::CollectionEdit;
use collection_new::CollectionNew;
use collections::Collections;
use explore::Explore;
use home::Home;
use my_collections::MyCollections;
use not_found::NotFound;
use notifications::Notifications;
use purchased::Purchased;
use search::Search;
use settings::ProfileSettings;

use crate::components::icons::{
    BellIcon, CompassIcon, HomeIcon, ImageIcon, LogOutIcon, PlusIcon, SearchIcon, ShoppingBagIcon, UserIcon,
};
use crate::stores::{auth_store, notifications as notif_store};

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/explore")]
        Explore {},

        #[route("/collections")]
        Collections {},

        #[route("/collections/new")]
        CollectionNew {},

        #[route("/collections/:id")]
        CollectionDetail { id: String },

        #[route("/collections/:id/edit")]
        CollectionEdit { id: String },

        #[route("/artworks/new")]
        ArtworkNew {},

        #[route("/artists/:id")]
        ArtistProfile { id: String },

        #[route("/search")]
        Search {},

        #[route("/purchased")]
        Purchased {},

        #[route("/my/collections")]
        MyCollections {},

        #[route("/notifications")]
        Notifications {},

        #[route("/settings/profile")]
        ProfileSettings {},

        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Pages that redirect to login when signed out
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::CollectionNew {}
                | Route::CollectionEdit { .. }
                | Route::ArtworkNew {}
                | Route::Purchased {}
                | Route::MyCollections {}
                | Route::Notifications {}
                | Route::ProfileSettings {}
        )
    }
}

#[component]
fn Layout() -> Element {
    let auth = auth_store::AUTH_STATE.read();
    let restoring = *auth_store::AUTH_RESTORING.read();
    let notif_count = use_memo(move || notif_store::get_unread_count());
    let current_route = use_route::<Route>();
    let navigator = navigator();

    let is_authenticated = auth.is_authenticated;
    let guarded = current_route.requires_auth();
    use_effect(use_reactive((&is_authenticated, &guarded, &restoring), move |(authed, guarded, restoring)| {
        if guarded && !authed && !restoring {
            log::info!("Signed out on a protected page, redirecting to login");
            navigator.replace(Route::Login {});
        }
    }));

    let is_artist = auth.user.as_ref().map(|u| u.is_artist).unwrap_or(false);
    let user_id = auth.user.as_ref().map(|u| u.id.clone());
    let user_label = auth
        .user
        .as_ref()
        .map(|u| u.display_name.clone().unwrap_or_else(|| u.username.clone()));

    rsx! {
        div {
            class: "min-h-screen bg-background text-foreground transition-colors",

            div {
                class: "flex justify-center max-w-[1400px] mx-auto",

                // Left sidebar (navigation)
                aside {
                    class: "w-[250px] flex-shrink-0 border-r border-border sticky top-0 h-screen hidden lg:block",
                    div {
                        class: "h-full flex flex-col p-4 overflow-y-auto",

                        Link {
                            to: Route::Home {},
                            class: "flex items-center gap-2 mb-6 hover:opacity-80 transition",
                            div {
                                class: "w-11 h-11 bg-primary rounded-xl flex items-center justify-center text-primary-foreground font-bold text-xl",
                                "A"
                            }
                            span { class: "text-xl font-bold", "artmarket" }
                        }

                        nav {
                            class: "flex flex-col gap-1",

                            NavLink {
                                to: Route::Home {},
                                icon: rsx! { HomeIcon { class: "w-6 h-6".to_string() } },
                                label: "Home"
                            }
                            NavLink {
                                to: Route::Explore {},
                                icon: rsx! { CompassIcon { class: "w-6 h-6".to_string() } },
                                label: "Explore"
                            }
                            NavLink {
                                to: Route::Collections {},
                                icon: rsx! { ImageIcon { class: "w-6 h-6".to_string() } },
                                label: "Collections"
                            }
                            NavLink {
                                to: Route::Search {},
                                icon: rsx! { SearchIcon { class: "w-6 h-6".to_string() } },
                                label: "Search"
                            }

                            if is_authenticated {
                                NavLink {
                                    to: Route::Notifications {},
                                    icon: rsx! { BellIcon { class: "w-6 h-6".to_string() } },
                                    label: "Notifications",
                                    badge: Some(*notif_count.read())
                                }
                                NavLink {
                                    to: Route::Purchased {},
                                    icon: rsx! { ShoppingBagIcon { class: "w-6 h-6".to_string() } },
                                    label: "Purchased"
                                }
                                if is_artist {
                                    NavLink {
                                        to: Route::MyCollections {},
                                        icon: rsx! { ImageIcon { class: "w-6 h-6".to_string() } },
                                        label: "My collections"
                                    }
                                }
                                if let Some(id) = user_id.clone() {
                                    NavLink {
                                        to: Route::ArtistProfile { id },
                                        icon: rsx! { UserIcon { class: "w-6 h-6".to_string() } },
                                        label: "Profile"
                                    }
                                }
                            }
                        }

                        if is_authenticated && is_artist {
                            Link {
                                to: Route::ArtworkNew {},
                                class: "mt-4 w-full py-3 bg-primary hover:bg-primary/90 text-primary-foreground font-semibold rounded-full transition flex items-center justify-center gap-2",
                                PlusIcon { class: "w-5 h-5".to_string() }
                                "Upload"
                            }
                        }

                        div { class: "flex-1" }

                        if is_authenticated {
                            div {
                                class: "flex items-center justify-between gap-2 px-3 py-2 rounded-lg",
                                Link {
                                    to: Route::ProfileSettings {},
                                    class: "text-sm font-medium truncate hover:underline",
                                    "{user_label.clone().unwrap_or_default()}"
                                }
                                button {
                                    class: "p-2 rounded-full hover:bg-accent transition",
                                    aria_label: "Log out",
                                    onclick: move |_| {
                                        auth_store::logout();
                                        navigator.push(Route::Home {});
                                    },
                                    LogOutIcon { class: "w-5 h-5".to_string() }
                                }
                            }
                        } else {
                            div {
                                class: "flex flex-col gap-2",
                                Link {
                                    to: Route::Login {},
                                    class: "w-full py-2 text-center rounded-full border border-border hover:bg-accent transition",
                                    "Log in"
                                }
                                Link {
                                    to: Route::Register {},
                                    class: "w-full py-2 text-center rounded-full bg-primary text-primary-foreground hover:bg-primary/90 transition",
                                    "Sign up"
                                }
                            }
                        }
                    }
                }

                // Main content
                main {
                    class: "flex-1 min-w-0 max-w-[900px] pb-20 lg:pb-0",
                    Outlet::<Route> {}
                }
            }

            // Mobile bottom navigation
            nav {
                class: "fixed bottom-0 inset-x-0 lg:hidden bg-background border-t border-border flex justify-around py-2 z-40",
                Link { to: Route::Home {}, class: "p-2", HomeIcon { class: "w-6 h-6".to_string() } span { class: "sr-only", "Home" } }
                Link { to: Route::Explore {}, class: "p-2", CompassIcon { class: "w-6 h-6".to_string() } span { class: "sr-only", "Explore" } }
                Link { to: Route::Search {}, class: "p-2", SearchIcon { class: "w-6 h-6".to_string() } span { class: "sr-only", "Search" } }
                if is_authenticated {
                    Link {
                        to: Route::Notifications {},
                        class: "p-2 relative",
                        span { class: "sr-only", "Notifications" }
                        BellIcon { class: "w-6 h-6".to_string() }
                        if *notif_count.read() > 0 {
                            span { class: "absolute top-1 right-1 w-2 h-2 rounded-full bg-red-500" }
                        }
                    }
                    Link { to: Route::ProfileSettings {}, class: "p-2", UserIcon { class: "w-6 h-6".to_string() } span { class: "sr-only", "Settings" } }
                } else {
                    Link { to: Route::Login {}, class: "p-2", UserIcon { class: "w-6 h-6".to_string() } span { class: "sr-only", "Log in" } }
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, icon: Element, label: &'static str, #[props(default)] badge: Option<u32>) -> Element {
    let current_route = use_route::<Route>();
    let is_active = current_route == to;
    let weight = if is_active { "font-bold bg-accent/60" } else { "" };

    rsx! {
        Link {
            to: to.clone(),
            class: "flex items-center gap-4 px-4 py-2.5 rounded-full hover:bg-accent transition text-lg {weight}",
            div {
                class: "relative",
                {icon}
                if let Some(count) = badge.filter(|c| *c > 0) {
                    span {
                        class: "absolute -top-1.5 -right-2 min-w-[18px] h-[18px] px-1 bg-red-500 text-white text-[11px] font-bold rounded-full flex items-center justify-center",
                        if count > 99 { "99+" } else { "{count}" }
                    }
                }
            }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_routes() {
        assert!(Route::Purchased {}.requires_auth());
        assert!(Route::CollectionEdit { id: "c1".into() }.requires_auth());
        assert!(!Route::CollectionDetail { id: "c1".into() }.requires_auth());
        assert!(!Route::Login {}.requires_auth());
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::CollectionDetail { id: "c1".into() }.to_string(), "/collections/c1");
        assert_eq!(Route::ArtistProfile { id: "a9".into() }.to_string(), "/artists/a9");
        assert_eq!(Route::MyCollections {}.to_string(), "/my/collections");
    }
}
