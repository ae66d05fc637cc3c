use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("No route for /{}", path);

    rsx! {
        div {
            class: "p-12 text-center space-y-3",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "text-muted-foreground", "Nothing lives at /{path}" }
            Link { to: Route::Home {}, class: "text-primary hover:underline", "Go home" }
        }
    }
}
