use dioxus::prelude::*;

use crate::components::icons::{BellIcon, HeartIcon, ShoppingBagIcon, UserIcon};
use crate::routes::Route;
use crate::services::notifications::{Notification, NotificationKind};
use crate::stores::notifications as notification_store;
use crate::utils::format_relative_time;

/// Where clicking a notification leads
fn destination(notification: &Notification) -> Option<Route> {
    match notification.kind {
        NotificationKind::Purchase => notification
            .target_id
            .clone()
            .map(|id| Route::CollectionDetail { id }),
        NotificationKind::Follow | NotificationKind::Like | NotificationKind::Comment => notification
            .actor_id
            .clone()
            .map(|id| Route::ArtistProfile { id }),
        NotificationKind::System => None,
    }
}

#[component]
pub fn NotificationItem(notification: Notification, on_read: EventHandler<String>) -> Element {
    let navigator = navigator();
    let target = destination(&notification);
    let unread = !notification.is_read;
    let id = notification.id.clone();

    let open = move |_| {
        if unread {
            let id = id.clone();
            on_read.call(id.clone());
            spawn(async move {
                if let Err(e) = notification_store::mark_read(&id).await {
                    log::warn!("Failed to mark notification {} read: {}", id, e);
                }
            });
        }
        if let Some(route) = target.clone() {
            navigator.push(route);
        }
    };

    rsx! {
        button {
            class: "w-full flex items-start gap-3 p-4 text-left border-b border-border hover:bg-accent/40 transition",
            class: if unread { "bg-primary/5" },
            onclick: open,

            div {
                class: "w-9 h-9 rounded-full bg-muted flex items-center justify-center flex-shrink-0 overflow-hidden",
                if let Some(url) = notification.actor_avatar_url.as_ref().filter(|u| !u.is_empty()) {
                    img { src: "{url}", alt: "", class: "w-full h-full object-cover" }
                } else {
                    match notification.kind {
                        NotificationKind::Follow => rsx! { UserIcon { class: "w-4 h-4".to_string() } },
                        NotificationKind::Like => rsx! { HeartIcon { class: "w-4 h-4 text-red-500".to_string(), filled: true } },
                        NotificationKind::Purchase => rsx! { ShoppingBagIcon { class: "w-4 h-4 text-green-600".to_string() } },
                        _ => rsx! { BellIcon { class: "w-4 h-4".to_string() } },
                    }
                }
            }

            div {
                class: "flex-1 min-w-0",
                p {
                    class: "text-sm",
                    if let Some(name) = &notification.actor_name {
                        span { class: "font-semibold", "{name} " }
                    }
                    "{notification.message}"
                }
                p { class: "text-xs text-muted-foreground mt-1", "{format_relative_time(&notification.created_at)}" }
            }

            if unread {
                span { class: "w-2 h-2 rounded-full bg-primary mt-2", aria_label: "Unread" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notification(kind: &str) -> Notification {
        serde_json::from_value(json!({
            "id": "n1",
            "kind": kind,
            "message": "hello",
            "actorId": "a1",
            "targetId": "c1",
            "createdAt": "2026-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_destination_by_kind() {
        assert_eq!(destination(&notification("purchase")), Some(Route::CollectionDetail { id: "c1".into() }));
        assert_eq!(destination(&notification("follow")), Some(Route::ArtistProfile { id: "a1".into() }));
        assert_eq!(destination(&notification("announcement")), None);
    }
}
