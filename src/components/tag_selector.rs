use dioxus::prelude::*;

use crate::components::icons::{PlusIcon, XIcon};
use crate::services::tags::{normalize_tag, Tag};
use crate::stores::query_cache;

/// Most tags one item may carry
pub const MAX_TAGS: usize = 8;

/// Chip picker over the shared tag list, with inline creation
#[component]
pub fn TagSelector(selected: Signal<Vec<String>>) -> Element {
    let mut available = use_signal(Vec::<Tag>::new);
    let mut draft = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut creating = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            match query_cache::load_tags(false).await {
                Ok(tags) => available.set(tags),
                Err(e) => log::warn!("Failed to load tags: {}", e),
            }
        });
    });

    let mut toggle = move |name: String| {
        let mut current = selected.write();
        if let Some(pos) = current.iter().position(|t| *t == name) {
            current.remove(pos);
        } else if current.len() < MAX_TAGS {
            current.push(name);
        }
    };

    let mut add_draft = move || {
        let name = normalize_tag(&draft.peek());
        if name.is_empty() || *creating.peek() {
            return;
        }
        if selected.peek().len() >= MAX_TAGS {
            error.set(Some(format!("Up to {} tags", MAX_TAGS)));
            return;
        }

        creating.set(true);
        error.set(None);
        spawn(async move {
            match query_cache::create_tag(&name).await {
                Ok(tag) => {
                    if !selected.peek().contains(&tag.name) {
                        selected.write().push(tag.name.clone());
                    }
                    if !available.peek().iter().any(|t| t.id == tag.id) {
                        available.write().push(tag);
                    }
                    draft.set(String::new());
                }
                Err(e) => error.set(Some(e)),
            }
            creating.set(false);
        });
    };

    let chosen = selected.read().clone();

    rsx! {
        div {
            class: "space-y-2",

            if !chosen.is_empty() {
                div {
                    class: "flex flex-wrap gap-2",
                    for name in chosen.iter().cloned() {
                        span {
                            key: "sel-{name}",
                            class: "inline-flex items-center gap-1 px-2 py-1 rounded-full bg-primary/10 text-primary text-xs",
                            "#{name}"
                            button {
                                r#type: "button",
                                aria_label: "Remove tag",
                                onclick: move |_| toggle(name.clone()),
                                XIcon { class: "w-3 h-3".to_string() }
                            }
                        }
                    }
                }
            }

            div {
                class: "flex gap-2",
                input {
                    r#type: "text",
                    value: "{draft}",
                    placeholder: "Add a tag",
                    class: "flex-1 px-3 py-1.5 bg-muted border border-border rounded-lg text-sm",
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e: KeyboardEvent| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            add_draft();
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "p-2 rounded-lg border border-border hover:bg-accent disabled:opacity-50",
                    disabled: *creating.read(),
                    aria_label: "Add tag",
                    onclick: move |_| add_draft(),
                    PlusIcon { class: "w-4 h-4".to_string() }
                }
            }

            if let Some(err) = error.read().as_ref() {
                p { class: "text-xs text-destructive", "{err}" }
            }

            div {
                class: "flex flex-wrap gap-1.5",
                for tag in available.read().iter().filter(|t| !chosen.contains(&t.name)).take(20).cloned() {
                    button {
                        key: "{tag.id}",
                        r#type: "button",
                        class: "px-2 py-0.5 rounded-full border border-border text-xs hover:bg-accent",
                        onclick: move |_| toggle(tag.name.clone()),
                        "#{tag.name}"
                    }
                }
            }
        }
    }
}
