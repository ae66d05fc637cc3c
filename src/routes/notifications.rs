use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions};
use std::time::Duration;

use crate::components::{NotificationItem, PaginatedFooter};
use crate::hooks::{use_infinite_scroll, use_notifications};
use crate::stores::notifications as notif_store;

#[component]
pub fn Notifications() -> Element {
    let list = use_notifications();
    let sentinel_id = use_infinite_scroll(list.load_more, list.has_more, list.loading);
    let toasts = consume_toast();
    let mut marking = use_signal(|| false);

    use_effect(move || {
        spawn(notif_store::refresh_unread_count());
    });

    let mut state_signal = list.state;
    let mark_one = move |id: String| {
        state_signal.write().update_items(|items| {
            if let Some(n) = items.iter_mut().find(|n| n.id == id) {
                n.is_read = true;
            }
        });
    };

    let mark_all = move |_| {
        if *marking.peek() {
            return;
        }
        marking.set(true);
        let toasts = toasts.clone();
        spawn(async move {
            match notif_store::mark_all_read().await {
                Ok(()) => state_signal.write().update_items(|items| {
                    for n in items.iter_mut() {
                        n.is_read = true;
                    }
                }),
                Err(e) => {
                    toasts.error(e, ToastOptions::new().duration(Duration::from_secs(5)));
                }
            }
            marking.set(false);
        });
    };

    let state = list.state.read();
    let any_unread = state.items().iter().any(|n| !n.is_read) || notif_store::get_unread_count() > 0;

    rsx! {
        div {
            div {
                class: "flex items-center justify-between p-4 border-b border-border",
                h1 { class: "text-2xl font-bold", "Notifications" }
                button {
                    class: "text-sm text-primary hover:underline disabled:opacity-50",
                    disabled: !any_unread || *marking.read(),
                    onclick: mark_all,
                    "Mark all as read"
                }
            }

            if state.is_initial_load() {
                for i in 0..6 {
                    div {
                        key: "{i}",
                        class: "flex gap-3 p-4 border-b border-border animate-pulse",
                        div { class: "w-9 h-9 rounded-full bg-muted" }
                        div { class: "flex-1 space-y-2",
                            div { class: "h-3 w-3/4 bg-muted rounded" }
                            div { class: "h-3 w-1/4 bg-muted rounded" }
                        }
                    }
                }
            } else if state.is_empty() && state.error().is_none() {
                p { class: "py-16 text-center text-muted-foreground", "No notifications yet" }
            } else {
                for notification in state.items().iter().cloned() {
                    NotificationItem { key: "{notification.id}", notification, on_read: mark_one }
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
    }
}
