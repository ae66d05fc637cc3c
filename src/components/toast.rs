use dioxus::prelude::*;
use dioxus_primitives::toast;

/// App-wide toast region; hooks reach it through `consume_toast()`
#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        toast::ToastProvider {
            {children}
        }
    }
}
