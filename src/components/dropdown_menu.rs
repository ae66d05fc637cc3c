use dioxus::prelude::*;

use crate::components::icons::MoreHorizontalIcon;

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: String,
    pub destructive: bool,
}

impl MenuItem {
    pub fn new(id: &'static str, label: impl Into<String>) -> Self {
        Self { id, label: label.into(), destructive: false }
    }

    pub fn destructive(mut self) -> Self {
        self.destructive = true;
        self
    }
}

/// Kebab menu; reports the id of the chosen item
#[component]
pub fn DropdownMenu(items: Vec<MenuItem>, on_select: EventHandler<&'static str>) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "relative inline-block",

            button {
                class: "p-2 rounded-full hover:bg-accent transition",
                aria_label: "More options",
                aria_expanded: "{open.read()}",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    let next = !*open.peek();
                    open.set(next);
                },
                MoreHorizontalIcon { class: "w-5 h-5".to_string() }
            }

            if *open.read() {
                // Click-away layer
                div {
                    class: "fixed inset-0 z-40",
                    onclick: move |_| open.set(false),
                }
                div {
                    class: "absolute right-0 mt-1 w-44 z-50 bg-card border border-border rounded-lg shadow-lg py-1",
                    role: "menu",
                    for item in items.iter().cloned() {
                        button {
                            key: "{item.id}",
                            role: "menuitem",
                            class: if item.destructive {
                                "w-full text-left px-3 py-2 text-sm text-destructive hover:bg-accent"
                            } else {
                                "w-full text-left px-3 py-2 text-sm hover:bg-accent"
                            },
                            onclick: move |e: MouseEvent| {
                                e.stop_propagation();
                                open.set(false);
                                on_select.call(item.id);
                            },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
