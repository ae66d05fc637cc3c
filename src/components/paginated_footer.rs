use dioxus::prelude::*;

use crate::components::icons::{RefreshIcon, SpinnerIcon};

/// Bottom of an infinite list: sentinel, spinner, end marker or retry
#[component]
pub fn PaginatedFooter(
    sentinel_id: String,
    loading: bool,
    has_more: bool,
    error: Option<String>,
    on_retry: EventHandler<()>,
    #[props(default = true)] show_end: bool,
) -> Element {
    if let Some(error) = error {
        return rsx! {
            div {
                class: "flex flex-col items-center gap-2 py-6 text-sm",
                p { class: "text-destructive", "{error}" }
                button {
                    class: "inline-flex items-center gap-2 px-4 py-2 rounded-lg border border-border hover:bg-accent transition",
                    onclick: move |_| on_retry.call(()),
                    RefreshIcon { class: "w-4 h-4".to_string() }
                    "Try again"
                }
            }
        };
    }

    rsx! {
        if has_more {
            div {
                id: "{sentinel_id}",
                class: "h-12 flex items-center justify-center",
                if loading {
                    SpinnerIcon { class: "w-5 h-5 text-muted-foreground".to_string() }
                }
            }
        } else if show_end && !loading {
            div { class: "py-6 text-center text-xs text-muted-foreground", "You've reached the end" }
        }
    }
}
