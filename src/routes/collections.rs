use dioxus::prelude::*;

use crate::components::CollectionGrid;
use crate::hooks::use_collections;
use crate::services::tags::Tag;
use crate::stores::query_cache;

#[component]
pub fn Collections() -> Element {
    let mut tag = use_signal(|| None::<String>);
    let mut all_tags = use_signal(Vec::<Tag>::new);

    use_effect(move || {
        spawn(async move {
            match query_cache::load_tags(false).await {
                Ok(list) => all_tags.set(list),
                Err(e) => log::warn!("Failed to load tags: {}", e),
            }
        });
    });

    let list = use_collections(tag.read().clone());
    let selected = tag.read().clone().unwrap_or_default();

    rsx! {
        div {
            class: "p-4 space-y-5",

            div {
                class: "flex items-center justify-between gap-4",
                h1 { class: "text-2xl font-bold", "Collections" }
                select {
                    class: "px-3 py-1.5 bg-muted border border-border rounded-lg text-sm",
                    value: "{selected}",
                    onchange: move |e| {
                        let value = e.value();
                        tag.set((!value.is_empty()).then_some(value));
                    },
                    option { value: "", "All tags" }
                    for t in all_tags.read().iter() {
                        option { key: "{t.id}", value: "{t.name}", "#{t.name}" }
                    }
                }
            }

            CollectionGrid { list }
        }
    }
}
