use dioxus::prelude::*;

use crate::components::icons::{SpinnerIcon, UploadIcon};
use crate::components::tag_selector::TagSelector;
use crate::services::artworks::{Artwork, ArtworkUpload};
use crate::services::collections::Collection;
use crate::stores::query_cache;
use crate::utils::validation::{self, first_error};

const FILE_INPUT_ID: &str = "artwork-file";

/// Name, type and size of the picked file
#[derive(Debug, Clone, PartialEq)]
struct PickedFile {
    name: String,
    mime: String,
    size: u64,
}

fn check_upload(title: &str, file: Option<&PickedFile>) -> Result<(), String> {
    let mut rules = vec![validation::required("Title", title), validation::length("Title", title, 1, 120)];
    match file {
        Some(f) => rules.push(validation::image_file(&f.mime, f.size)),
        None => return Err("Choose an image to upload".to_string()),
    }
    first_error(rules).map_or(Ok(()), Err)
}

#[cfg(target_family = "wasm")]
fn selected_file() -> Result<web_sys::File, String> {
    use wasm_bindgen::JsCast;
    use web_sys::HtmlInputElement;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let input = document
        .get_element_by_id(FILE_INPUT_ID)
        .ok_or("File input not found")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| "Not an input element")?;
    input
        .files()
        .and_then(|list| list.get(0))
        .ok_or_else(|| "No file selected".to_string())
}

#[cfg(target_family = "wasm")]
fn inspect_selected() -> Option<PickedFile> {
    selected_file().ok().map(|f| PickedFile { name: f.name(), mime: f.type_(), size: f.size() as u64 })
}

#[cfg(not(target_family = "wasm"))]
fn inspect_selected() -> Option<PickedFile> {
    None
}

#[cfg(target_family = "wasm")]
async fn send(meta: ArtworkUpload) -> Result<Artwork, String> {
    let file = selected_file()?;
    crate::services::artworks::upload_artwork(file, &meta).await.map_err(String::from)
}

#[cfg(not(target_family = "wasm"))]
async fn send(_meta: ArtworkUpload) -> Result<Artwork, String> {
    Err("Uploads are only available in the browser".to_string())
}

/// Image upload with title, description, tags and an optional collection
#[component]
pub fn ArtworkUploadForm(
    #[props(default)] collection_id: Option<String>,
    on_uploaded: EventHandler<Artwork>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let tags = use_signal(Vec::<String>::new);
    let mut target = use_signal(|| collection_id.clone().unwrap_or_default());
    let mut picked = use_signal(|| None::<PickedFile>);
    let mut collections = use_signal(Vec::<Collection>::new);
    let mut error = use_signal(|| None::<String>);
    let mut uploading = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            match query_cache::load_my_collections(false).await {
                Ok(items) => collections.set(items),
                Err(e) => log::warn!("Could not load collections for upload form: {}", e),
            }
        });
    });

    let on_file_change = move |_| {
        error.set(None);
        let file = inspect_selected();
        if let Some(f) = &file {
            if let Err(e) = validation::image_file(&f.mime, f.size) {
                error.set(Some(e.to_string()));
            }
        }
        picked.set(file);
    };

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if *uploading.peek() {
            return;
        }
        if let Err(msg) = check_upload(&title.peek(), picked.peek().as_ref()) {
            error.set(Some(msg));
            return;
        }

        let description = description.peek().trim().to_string();
        let target = target.peek().clone();
        let meta = ArtworkUpload {
            title: title.peek().trim().to_string(),
            description: (!description.is_empty()).then_some(description),
            tags: tags.peek().clone(),
            collection_id: (!target.is_empty()).then_some(target),
        };

        uploading.set(true);
        error.set(None);
        spawn(async move {
            let result = send(meta).await;
            uploading.set(false);
            match result {
                Ok(artwork) => {
                    log::info!("Uploaded artwork {}", artwork.id);
                    on_uploaded.call(artwork);
                }
                Err(e) => {
                    log::error!("Upload failed: {}", e);
                    error.set(Some(e));
                }
            }
        });
    };

    rsx! {
        form {
            class: "space-y-5",
            onsubmit: submit,

            label {
                r#for: FILE_INPUT_ID,
                class: "flex flex-col items-center justify-center w-full h-40 border-2 border-dashed border-border rounded-xl cursor-pointer hover:bg-accent/40 transition",
                UploadIcon { class: "w-8 h-8 text-muted-foreground mb-2".to_string() }
                match picked.read().as_ref() {
                    Some(f) => rsx! { span { class: "text-sm font-medium", "{f.name}" } },
                    None => rsx! { span { class: "text-sm text-muted-foreground", "Click to choose an image (JPEG, PNG, GIF, WebP)" } },
                }
                input {
                    id: FILE_INPUT_ID,
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden",
                    onchange: on_file_change,
                }
            }

            div {
                label { class: "block text-sm font-medium mb-1", r#for: "artwork-title", "Title" }
                input {
                    id: "artwork-title",
                    r#type: "text",
                    value: "{title}",
                    class: "w-full px-3 py-2 bg-muted border border-border rounded-lg",
                    oninput: move |e| title.set(e.value()),
                }
            }

            div {
                label { class: "block text-sm font-medium mb-1", r#for: "artwork-description", "Description" }
                textarea {
                    id: "artwork-description",
                    rows: "3",
                    value: "{description}",
                    class: "w-full px-3 py-2 bg-muted border border-border rounded-lg resize-y",
                    oninput: move |e| description.set(e.value()),
                }
            }

            div {
                label { class: "block text-sm font-medium mb-1", r#for: "artwork-collection", "Collection" }
                select {
                    id: "artwork-collection",
                    class: "w-full px-3 py-2 bg-muted border border-border rounded-lg",
                    value: "{target}",
                    onchange: move |e| target.set(e.value()),
                    option { value: "", "None" }
                    for c in collections.read().iter() {
                        option { key: "{c.id}", value: "{c.id}", "{c.name}" }
                    }
                }
            }

            div {
                span { class: "block text-sm font-medium mb-1", "Tags" }
                TagSelector { selected: tags }
            }

            if let Some(err) = error.read().as_ref() {
                p { class: "text-sm text-destructive", role: "alert", "{err}" }
            }

            button {
                r#type: "submit",
                class: "inline-flex items-center gap-2 px-5 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition disabled:opacity-50",
                disabled: *uploading.read(),
                if *uploading.read() {
                    SpinnerIcon { class: "w-4 h-4".to_string() }
                    "Uploading..."
                } else {
                    "Upload artwork"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mime: &str, size: u64) -> PickedFile {
        PickedFile { name: "a.png".into(), mime: mime.into(), size }
    }

    #[test]
    fn test_upload_needs_file_and_title() {
        assert_eq!(check_upload("Dawn", None), Err("Choose an image to upload".to_string()));
        assert_eq!(check_upload("", Some(&file("image/png", 10))), Err("Title is required".to_string()));
        assert!(check_upload("Dawn", Some(&file("image/png", 10))).is_ok());
    }

    #[test]
    fn test_upload_rejects_non_images() {
        assert_eq!(
            check_upload("Dawn", Some(&file("application/pdf", 10))),
            Err("Unsupported file type: application/pdf".to_string())
        );
    }
}
