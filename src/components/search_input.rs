use dioxus::prelude::*;

use crate::components::icons::{SearchIcon, XIcon};
use crate::services::search::clean_query;

/// Wait after the last keystroke before searching
const DEBOUNCE_MS: u32 = 350;

/// Text box that reports the cleaned query once typing pauses
#[component]
pub fn SearchInput(
    #[props(default)] initial: String,
    #[props(default = "Search art, artists, collections".to_string())] placeholder: String,
    on_search: EventHandler<String>,
) -> Element {
    let mut value = use_signal(|| initial.clone());
    // Bumped per keystroke; a pending search only fires if still current
    let mut revision = use_signal(|| 0u64);

    let mut schedule = move |text: String| {
        let current = *revision.peek() + 1;
        revision.set(current);
        spawn(async move {
            crate::utils::sleep_ms(DEBOUNCE_MS).await;
            if *revision.peek() == current {
                on_search.call(clean_query(&text));
            }
        });
    };

    rsx! {
        div {
            class: "relative",

            div {
                class: "absolute left-3 top-1/2 -translate-y-1/2 text-muted-foreground",
                SearchIcon { class: "w-4 h-4".to_string() }
            }

            input {
                r#type: "search",
                value: "{value}",
                placeholder: "{placeholder}",
                class: "w-full pl-9 pr-9 py-2 bg-muted border border-border rounded-full text-sm focus:outline-none focus:ring-2 focus:ring-primary",
                oninput: move |e| {
                    let text = e.value();
                    value.set(text.clone());
                    schedule(text);
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        revision += 1;
                        on_search.call(clean_query(&value.peek()));
                    }
                },
            }

            if !value.read().is_empty() {
                button {
                    class: "absolute right-2 top-1/2 -translate-y-1/2 p-1 rounded-full hover:bg-accent",
                    aria_label: "Clear search",
                    onclick: move |_| {
                        value.set(String::new());
                        revision += 1;
                        on_search.call(String::new());
                    },
                    XIcon { class: "w-3.5 h-3.5".to_string() }
                }
            }
        }
    }
}
