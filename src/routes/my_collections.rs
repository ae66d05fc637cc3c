use dioxus::prelude::*;

use crate::components::icons::PlusIcon;
use crate::components::{CollectionCard, CollectionCardSkeleton};
use crate::routes::Route;
use crate::stores::query_cache::{self, PENDING_ID_PREFIX, MY_COLLECTIONS};
use crate::utils::DataState;

#[component]
pub fn MyCollections() -> Element {
    let mut status = use_signal(|| DataState::<()>::Pending);

    let mut load = move |force: bool| {
        status.set(DataState::Loading);
        spawn(async move {
            let result = query_cache::load_my_collections(force).await.map(|_| ());
            status.set(result.into());
        });
    };

    use_effect(move || load(false));

    // Rendered from the cache so optimistic edits show up immediately
    let items = MY_COLLECTIONS
        .read()
        .peek(&query_cache::my_collections_key())
        .map(|items| items.to_vec())
        .unwrap_or_default();
    let loading = status.read().is_loading();
    let error = status.read().error().map(str::to_string);

    rsx! {
        div {
            class: "p-4 space-y-5",

            div {
                class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold", "My collections" }
                div {
                    class: "flex items-center gap-3",
                    button {
                        class: "text-sm text-primary hover:underline disabled:opacity-50",
                        disabled: loading,
                        onclick: move |_| load(true),
                        "Refresh"
                    }
                    Link {
                        to: Route::CollectionNew {},
                        class: "inline-flex items-center gap-1.5 px-4 py-2 rounded-full bg-primary text-primary-foreground text-sm font-medium hover:bg-primary/90 transition",
                        PlusIcon { class: "w-4 h-4".to_string() }
                        "New"
                    }
                }
            }

            if let Some(err) = error {
                p { class: "text-sm text-destructive", "{err}" }
            }

            if loading && items.is_empty() {
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    for i in 0..4 {
                        CollectionCardSkeleton { key: "{i}" }
                    }
                }
            } else if items.is_empty() {
                p { class: "py-12 text-center text-muted-foreground", "You haven't created any collections yet." }
            } else {
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    for collection in items {
                        div {
                            key: "{collection.id}",
                            class: if collection.id.starts_with(PENDING_ID_PREFIX) { "opacity-60 pointer-events-none" },
                            CollectionCard { collection }
                        }
                    }
                }
            }
        }
    }
}
