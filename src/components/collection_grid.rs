use dioxus::prelude::*;

use crate::components::{CollectionCard, CollectionCardSkeleton, PaginatedFooter};
use crate::hooks::{use_infinite_scroll, UsePaginatedList};
use crate::services::collections::Collection;

#[component]
pub fn CollectionGrid(
    list: UsePaginatedList<Collection>,
    #[props(default = "No collections yet".to_string())] empty_text: String,
) -> Element {
    let sentinel_id = use_infinite_scroll(list.load_more, list.has_more, list.loading);
    let state = list.state.read();

    if state.is_initial_load() {
        return rsx! {
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                for i in 0..4 {
                    CollectionCardSkeleton { key: "{i}" }
                }
            }
        };
    }

    if state.is_empty() && state.error().is_none() {
        return rsx! {
            div { class: "py-16 text-center text-muted-foreground", "{empty_text}" }
        };
    }

    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
            for collection in state.items().iter().cloned() {
                CollectionCard { key: "{collection.id}", collection }
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
