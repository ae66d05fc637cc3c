use dioxus::prelude::*;

use crate::components::ArtworkGrid;
use crate::hooks::use_explore;
use crate::services::feed::ExploreSort;
use crate::services::tags::{self, Tag};

const TAG_CHIPS: u32 = 12;

#[component]
pub fn Explore() -> Element {
    let mut sort = use_signal(ExploreSort::default);
    let mut active_tag = use_signal(|| None::<String>);
    let mut popular = use_signal(Vec::<Tag>::new);

    use_effect(move || {
        spawn(async move {
            match tags::popular_tags(TAG_CHIPS).await {
                Ok(list) => popular.set(list),
                Err(e) => log::warn!("Failed to load popular tags: {}", e),
            }
        });
    });

    let list = use_explore(*sort.read(), active_tag.read().clone());
    let current_sort = *sort.read();
    let current_tag = active_tag.read().clone();

    rsx! {
        div {
            class: "p-4 space-y-5",

            div {
                class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold", "Explore" }
                div {
                    class: "flex rounded-full border border-border p-0.5 text-sm",
                    for option in [ExploreSort::Trending, ExploreSort::Latest] {
                        button {
                            key: "{option.as_str()}",
                            class: "px-3 py-1 rounded-full transition",
                            class: if option == current_sort { "bg-primary text-primary-foreground" },
                            onclick: move |_| sort.set(option),
                            if option == ExploreSort::Trending { "Trending" } else { "Latest" }
                        }
                    }
                }
            }

            if !popular.read().is_empty() {
                div {
                    class: "flex flex-wrap gap-2",
                    button {
                        class: "px-3 py-1 rounded-full border border-border text-sm transition",
                        class: if current_tag.is_none() { "bg-accent font-medium" },
                        onclick: move |_| active_tag.set(None),
                        "All"
                    }
                    for tag in popular.read().iter().cloned() {
                        button {
                            key: "{tag.id}",
                            class: "px-3 py-1 rounded-full border border-border text-sm transition",
                            class: if current_tag.as_deref() == Some(tag.name.as_str()) { "bg-accent font-medium" },
                            onclick: {
                                let name = tag.name.clone();
                                move |_| active_tag.set(Some(name.clone()))
                            },
                            "#{tag.name}"
                        }
                    }
                }
            }

            ArtworkGrid { list, empty_text: "Nothing here yet. Try another tag.".to_string() }
        }
    }
}
