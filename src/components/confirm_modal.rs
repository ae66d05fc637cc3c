use dioxus::prelude::*;

use crate::components::icons::SpinnerIcon;

/// Yes/no dialog; backdrop click cancels unless `busy`
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_text: String,
    #[props(default = "Cancel".to_string())] cancel_text: String,
    #[props(default = false)] destructive: bool,
    #[props(default = false)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_class = if destructive {
        "bg-destructive text-destructive-foreground hover:bg-destructive/90"
    } else {
        "bg-primary text-primary-foreground hover:bg-primary/90"
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| {
                if !busy {
                    on_cancel.call(());
                }
            },

            div {
                class: "bg-card border border-border rounded-xl max-w-sm w-full p-6 shadow-xl",
                role: "alertdialog",
                aria_modal: "true",
                aria_labelledby: "confirm-title",
                aria_describedby: "confirm-message",
                onclick: move |e| e.stop_propagation(),

                h2 { id: "confirm-title", class: "text-lg font-bold mb-2", "{title}" }
                p { id: "confirm-message", class: "text-muted-foreground mb-6", "{message}" }

                div {
                    class: "flex gap-3 justify-end",
                    button {
                        class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_text}"
                    }
                    button {
                        class: "inline-flex items-center gap-2 px-4 py-2 rounded-lg transition disabled:opacity-50 {confirm_class}",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy {
                            SpinnerIcon { class: "w-4 h-4".to_string() }
                        }
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}
