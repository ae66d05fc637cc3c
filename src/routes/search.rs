use dioxus::prelude::*;

use crate::components::{ArtistCard, ArtworkCard, CollectionCard, PaginatedFooter, SearchInput};
use crate::hooks::{use_infinite_scroll, use_search};
use crate::services::search::{SearchHit, SearchScope};

#[component]
pub fn Search() -> Element {
    let mut query = use_signal(String::new);
    let mut scope = use_signal(SearchScope::default);

    let results = use_search(query.read().clone(), *scope.read());
    let sentinel_id = use_infinite_scroll(results.load_more, results.has_more, results.loading);
    let state = results.state.read();
    let current_scope = *scope.read();
    let has_query = !query.read().is_empty();

    rsx! {
        div {
            class: "p-4 space-y-4",

            SearchInput { on_search: move |q: String| query.set(q) }

            div {
                class: "flex border-b border-border",
                for option in SearchScope::all() {
                    button {
                        key: "{option.as_str()}",
                        class: "flex-1 py-2.5 text-sm font-medium transition hover:bg-accent/40",
                        class: if option == current_scope { "border-b-2 border-primary" } else { "text-muted-foreground" },
                        onclick: move |_| scope.set(option),
                        "{option.label()}"
                    }
                }
            }

            if !has_query {
                p { class: "py-12 text-center text-muted-foreground", "Search for artworks, artists or collections" }
            } else if state.is_initial_load() {
                div { class: "py-12 text-center text-muted-foreground", "Searching..." }
            } else if state.is_empty() && state.error().is_none() {
                p { class: "py-12 text-center text-muted-foreground", "No results for \"{query}\"" }
            } else {
                div {
                    class: if current_scope == SearchScope::Artists { "grid grid-cols-1 sm:grid-cols-2 gap-3" } else { "grid grid-cols-2 md:grid-cols-3 gap-4" },
                    for hit in state.items().iter().cloned() {
                        match hit {
                            SearchHit::Art(artwork) => rsx! { ArtworkCard { key: "{artwork.id}", artwork } },
                            SearchHit::Artist(artist) => rsx! { ArtistCard { key: "{artist.id}", artist } },
                            SearchHit::Collection(collection) => rsx! { CollectionCard { key: "{collection.id}", collection } },
                        }
                    }
                }
                PaginatedFooter {
                    sentinel_id,
                    loading: state.is_loading(),
                    has_more: state.has_more(),
                    error: state.error().map(str::to_string),
                    on_retry: move |_| results.retry.call(()),
                    show_end: false,
                }
            }
        }
    }
}
