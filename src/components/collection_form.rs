use dioxus::prelude::*;

use crate::components::icons::SpinnerIcon;
use crate::components::tag_selector::TagSelector;
use crate::config::config;
use crate::services::collections::{Collection, CollectionInput};
use crate::stores::query_cache;
use crate::utils::validation::{self, first_error};

const NAME_MAX: usize = 80;
const DESCRIPTION_MAX: usize = 2000;

/// Validate the raw form fields into a request body.
///
/// An empty price means a free collection.
pub fn build_input(name: &str, description: &str, price: &str, tags: Vec<String>) -> Result<CollectionInput, String> {
    let price = price.trim();
    let mut rules = vec![
        validation::required("Name", name),
        validation::length("Name", name, 1, NAME_MAX),
        validation::length("Description", description, 0, DESCRIPTION_MAX),
    ];
    if !price.is_empty() {
        rules.push(validation::price(price));
    }
    if let Some(error) = first_error(rules) {
        return Err(error);
    }

    let description = description.trim();
    Ok(CollectionInput {
        name: name.trim().to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        price: (!price.is_empty()).then(|| price.to_string()),
        tags,
        artwork_ids: Vec::new(),
    })
}

/// Create form, or edit form when `existing` is set
#[component]
pub fn CollectionForm(existing: Option<Collection>, on_saved: EventHandler<Collection>) -> Element {
    let initial = existing.clone();
    let mut name = use_signal(|| initial.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let mut description = use_signal(|| {
        initial.as_ref().and_then(|c| c.description.clone()).unwrap_or_default()
    });
    let mut price = use_signal(|| initial.as_ref().and_then(|c| c.price.clone()).unwrap_or_default());
    let tags = use_signal(|| initial.as_ref().map(|c| c.tags.clone()).unwrap_or_default());
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let editing_id = existing.as_ref().map(|c| c.id.clone());
    let is_edit = editing_id.is_some();
    let symbol = config().network.native_currency.symbol.clone();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if *saving.peek() {
            return;
        }

        let input = match build_input(&name.peek(), &description.peek(), &price.peek(), tags.peek().clone()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };

        saving.set(true);
        error.set(None);
        let editing_id = editing_id.clone();
        spawn(async move {
            let result = match &editing_id {
                Some(id) => query_cache::update_collection(id, input).await,
                None => query_cache::create_collection(input).await,
            };
            saving.set(false);
            match result {
                Ok(collection) => on_saved.call(collection),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    rsx! {
        form {
            class: "space-y-5",
            onsubmit: submit,

            div {
                label { class: "block text-sm font-medium mb-1", r#for: "collection-name", "Name" }
                input {
                    id: "collection-name",
                    r#type: "text",
                    maxlength: "{NAME_MAX}",
                    value: "{name}",
                    class: "w-full px-3 py-2 bg-muted border border-border rounded-lg",
                    oninput: move |e| name.set(e.value()),
                }
            }

            div {
                label { class: "block text-sm font-medium mb-1", r#for: "collection-description", "Description" }
                textarea {
                    id: "collection-description",
                    rows: "4",
                    value: "{description}",
                    class: "w-full px-3 py-2 bg-muted border border-border rounded-lg resize-y",
                    oninput: move |e| description.set(e.value()),
                }
            }

            div {
                label { class: "block text-sm font-medium mb-1", r#for: "collection-price", "Price ({symbol})" }
                input {
                    id: "collection-price",
                    r#type: "text",
                    inputmode: "decimal",
                    placeholder: "Leave empty for free",
                    value: "{price}",
                    class: "w-full px-3 py-2 bg-muted border border-border rounded-lg",
                    oninput: move |e| price.set(e.value()),
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
                disabled: *saving.read(),
                if *saving.read() {
                    SpinnerIcon { class: "w-4 h-4".to_string() }
                }
                if is_edit { "Save changes" } else { "Create collection" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_trims_and_drops_empty_fields() {
        let input = build_input("  Night Studies ", "  ", "", vec!["ink".into()]).unwrap();
        assert_eq!(input.name, "Night Studies");
        assert_eq!(input.description, None);
        assert_eq!(input.price, None);
        assert_eq!(input.tags, vec!["ink".to_string()]);
    }

    #[test]
    fn test_build_input_rejects_bad_price() {
        assert_eq!(
            build_input("Dusk", "", "1,5", vec![]),
            Err("Enter a price like 0.05".to_string())
        );
        assert_eq!(build_input("Dusk", "", "0.25", vec![]).unwrap().price.as_deref(), Some("0.25"));
    }

    #[test]
    fn test_build_input_requires_name() {
        assert_eq!(build_input(" ", "", "", vec![]), Err("Name is required".to_string()));
    }
}
