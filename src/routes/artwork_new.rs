use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions};
use std::time::Duration;

use crate::components::ArtworkUploadForm;
use crate::routes::Route;
use crate::services::artworks::Artwork;
use crate::stores::auth_store;

#[component]
pub fn ArtworkNew() -> Element {
    let navigator = navigator();
    let toasts = consume_toast();
    let user = auth_store::get_user();
    let is_artist = user.as_ref().map(|u| u.is_artist).unwrap_or(false);
    let user_id = user.map(|u| u.id).unwrap_or_default();

    rsx! {
        div {
            class: "p-4 max-w-2xl space-y-6",
            h1 { class: "text-2xl font-bold", "Upload artwork" }
            if is_artist {
                ArtworkUploadForm {
                    on_uploaded: move |artwork: Artwork| {
                        toasts.success(
                            format!("\"{}\" uploaded", artwork.title),
                            ToastOptions::new().duration(Duration::from_secs(3)),
                        );
                        match artwork.collection_id {
                            Some(id) => navigator.push(Route::CollectionDetail { id }),
                            None => navigator.push(Route::ArtistProfile { id: user_id.clone() }),
                        };
                    },
                }
            } else {
                p { class: "text-muted-foreground", "Only artist accounts can upload artworks." }
            }
        }
    }
}
