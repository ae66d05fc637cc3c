use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions};
use std::time::Duration;

use crate::components::icons::ImageIcon;
use crate::components::{ArtworkGrid, ConfirmModal, DropdownMenu, MenuItem, PurchaseButton};
use crate::config::config;
use crate::hooks::use_collection_artworks;
use crate::routes::Route;
use crate::services::collections::{self, Collection};
use crate::stores::{auth_store, payment, query_cache};
use crate::utils::time::format_date;
use crate::utils::{format_price, DataState};

#[component]
pub fn CollectionDetail(id: String) -> Element {
    let mut collection = use_signal(|| DataState::<Collection>::Pending);
    let artworks = use_collection_artworks(id.clone());
    let mut confirm_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let toasts = consume_toast();
    let navigator = navigator();

    use_effect(use_reactive(&id, move |id| {
        collection.set(DataState::Loading);
        spawn(async move {
            let result = collections::get_collection(&id).await;
            if let Err(e) = &result {
                log::error!("Failed to load collection {}: {}", id, e);
            }
            collection.set(result.into());
        });
    }));

    // Locked artworks unlock once the purchase lands
    let purchased_now = payment::is_purchased_in_session(&id);
    use_effect(use_reactive(&purchased_now, move |purchased| {
        if purchased {
            collection.write().update(|c| c.is_purchased = true);
            artworks.refresh.call(());
        }
    }));

    let state = collection.read();
    let current = match &*state {
        DataState::Loaded(c) => c.clone(),
        DataState::Error(e) => {
            return rsx! {
                div {
                    class: "p-8 text-center space-y-3",
                    p { class: "text-destructive", "{e}" }
                    Link { to: Route::Collections {}, class: "text-primary hover:underline", "Back to collections" }
                }
            };
        }
        _ => {
            return rsx! {
                div {
                    class: "p-4 space-y-4 animate-pulse",
                    div { class: "aspect-[3/1] bg-muted rounded-2xl" }
                    div { class: "h-8 w-1/2 bg-muted rounded" }
                    div { class: "h-4 w-1/3 bg-muted rounded" }
                }
            };
        }
    };
    drop(state);

    let is_owner = auth_store::get_user_id().as_deref() == Some(current.artist_id.as_str());
    let price = format_price(current.price.as_deref(), &config().network.native_currency.symbol);
    let created = current.created_at.as_deref().map(format_date).filter(|d| !d.is_empty());
    let collection_id = current.id.clone();

    let on_menu = move |choice: &'static str| match choice {
        "edit" => {
            navigator.push(Route::CollectionEdit { id: collection_id.clone() });
        }
        "delete" => confirm_delete.set(true),
        _ => {}
    };

    let delete_id = current.id.clone();
    let on_delete = move |_| {
        if *deleting.peek() {
            return;
        }
        deleting.set(true);
        let id = delete_id.clone();
        let toasts = toasts.clone();
        spawn(async move {
            match query_cache::delete_collection(&id).await {
                Ok(()) => {
                    toasts.success("Collection deleted".to_string(), ToastOptions::new().duration(Duration::from_secs(3)));
                    navigator.replace(Route::MyCollections {});
                }
                Err(e) => {
                    toasts.error(e, ToastOptions::new().duration(Duration::from_secs(5)));
                    deleting.set(false);
                    confirm_delete.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "p-4 space-y-6",

            div {
                class: "relative aspect-[3/1] rounded-2xl overflow-hidden bg-muted",
                if let Some(cover) = current.cover_image_url.as_ref().filter(|u| !u.is_empty()) {
                    img { src: "{cover}", alt: "{current.name}", class: "w-full h-full object-cover" }
                } else {
                    div {
                        class: "w-full h-full flex items-center justify-center",
                        ImageIcon { class: "w-12 h-12 text-muted-foreground".to_string() }
                    }
                }
            }

            div {
                class: "flex flex-wrap items-start justify-between gap-4",
                div {
                    class: "space-y-1",
                    h1 { class: "text-3xl font-bold", "{current.name}" }
                    div {
                        class: "text-sm text-muted-foreground flex flex-wrap gap-x-3",
                        Link {
                            to: Route::ArtistProfile { id: current.artist_id.clone() },
                            class: "hover:underline",
                            "by {current.artist_name.clone().unwrap_or_else(|| \"Unknown artist\".to_string())}"
                        }
                        span { "{current.artwork_count} works" }
                        span { "{price}" }
                        if let Some(date) = created {
                            span { "Released {date}" }
                        }
                    }
                }
                div {
                    class: "flex items-center gap-2",
                    if !is_owner {
                        PurchaseButton { collection: current.clone() }
                    }
                    if is_owner {
                        DropdownMenu {
                            items: vec![
                                MenuItem::new("edit", "Edit collection"),
                                MenuItem::new("delete", "Delete collection").destructive(),
                            ],
                            on_select: on_menu,
                        }
                    }
                }
            }

            if let Some(description) = current.description.as_ref().filter(|d| !d.is_empty()) {
                p { class: "whitespace-pre-line text-foreground/90", "{description}" }
            }

            if !current.tags.is_empty() {
                div {
                    class: "flex flex-wrap gap-2",
                    for tag in current.tags.iter() {
                        span { key: "{tag}", class: "px-2 py-0.5 rounded-full bg-muted text-xs", "#{tag}" }
                    }
                }
            }

            section {
                class: "space-y-3",
                h2 { class: "text-xl font-bold", "Artworks" }
                ArtworkGrid { list: artworks, empty_text: "This collection has no artworks yet".to_string() }
            }

            if *confirm_delete.read() {
                ConfirmModal {
                    title: "Delete collection?".to_string(),
                    message: format!("\"{}\" will be removed. Buyers keep access to what they bought.", current.name),
                    confirm_text: "Delete".to_string(),
                    destructive: true,
                    busy: *deleting.read(),
                    on_confirm: on_delete,
                    on_cancel: move |_| confirm_delete.set(false),
                }
            }
        }
    }
}
