use dioxus::prelude::*;

use crate::components::CollectionForm;
use crate::routes::Route;
use crate::stores::auth_store;

#[component]
pub fn CollectionNew() -> Element {
    let navigator = navigator();
    let is_artist = auth_store::get_user().map(|u| u.is_artist).unwrap_or(false);

    rsx! {
        div {
            class: "p-4 max-w-2xl space-y-6",
            h1 { class: "text-2xl font-bold", "New collection" }
            if is_artist {
                CollectionForm {
                    on_saved: move |created: crate::services::collections::Collection| {
                        navigator.replace(Route::CollectionDetail { id: created.id });
                    },
                }
            } else {
                p { class: "text-muted-foreground", "Only artist accounts can create collections." }
            }
        }
    }
}
