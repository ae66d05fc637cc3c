use dioxus::prelude::*;

use crate::components::CollectionForm;
use crate::routes::Route;
use crate::services::collections::{self, Collection};
use crate::stores::auth_store;
use crate::utils::DataState;

#[component]
pub fn CollectionEdit(id: String) -> Element {
    let navigator = navigator();
    let mut existing = use_signal(|| DataState::<Collection>::Pending);

    use_effect(use_reactive(&id, move |id| {
        existing.set(DataState::Loading);
        spawn(async move {
            existing.set(collections::get_collection(&id).await.into());
        });
    }));

    let body = match &*existing.read() {
        DataState::Loaded(c) if auth_store::get_user_id().as_deref() != Some(c.artist_id.as_str()) => rsx! {
            p { class: "text-muted-foreground", "You can only edit your own collections." }
        },
        DataState::Loaded(c) => rsx! {
            CollectionForm {
                existing: Some(c.clone()),
                on_saved: move |saved: Collection| {
                    navigator.push(Route::CollectionDetail { id: saved.id });
                },
            }
        },
        DataState::Error(e) => rsx! { p { class: "text-destructive", "{e}" } },
        _ => rsx! { div { class: "h-64 bg-muted rounded-xl animate-pulse" } },
    };

    rsx! {
        div {
            class: "p-4 max-w-2xl space-y-6",
            h1 { class: "text-2xl font-bold", "Edit collection" }
            {body}
        }
    }
}
