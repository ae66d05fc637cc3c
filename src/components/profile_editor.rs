use dioxus::prelude::*;
use dioxus_primitives::toast::{consume_toast, ToastOptions};
use std::time::Duration;

use crate::components::icons::SpinnerIcon;
use crate::services::artists::{self, ProfileUpdate};
use crate::services::auth::CurrentUser;
use crate::stores::auth_store;
use crate::utils::validation::{self, first_error};

const BIO_MAX: usize = 500;

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Validated patch body. Empty fields are sent as empty strings so they clear.
pub fn build_update(display_name: &str, bio: &str, website: &str) -> Result<ProfileUpdate, String> {
    let mut rules = vec![
        validation::length("Display name", display_name, 0, 50),
        validation::length("Bio", bio, 0, BIO_MAX),
    ];
    if let Some(site) = optional(website) {
        rules.push(validation::http_url(&site));
    }
    if let Some(error) = first_error(rules) {
        return Err(error);
    }

    Ok(ProfileUpdate {
        display_name: Some(display_name.trim().to_string()),
        bio: Some(bio.trim().to_string()),
        website: Some(website.trim().to_string()),
    })
}

#[component]
pub fn ProfileEditor(user: CurrentUser) -> Element {
    let toasts = consume_toast();
    let mut display_name = use_signal(|| user.display_name.clone().unwrap_or_default());
    let mut bio = use_signal(String::new);
    let mut website = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    // Bio and website live on the public artist record
    let user_id = user.id.clone();
    use_effect(use_reactive(&user_id, move |id| {
        spawn(async move {
            match artists::get_artist(&id).await {
                Ok(artist) => {
                    bio.set(artist.bio.unwrap_or_default());
                    website.set(artist.website.unwrap_or_default());
                }
                Err(e) => log::warn!("Could not load profile details: {}", e),
            }
        });
    }));

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if *saving.peek() {
            return;
        }
        let update = match build_update(&display_name.peek(), &bio.peek(), &website.peek()) {
            Ok(update) => update,
            Err(msg) => {
                error.set(Some(msg));
                return;
            }
        };

        saving.set(true);
        error.set(None);
        let toasts = toasts.clone();
        spawn(async move {
            match artists::update_profile(&update).await {
                Ok(artist) => {
                    if let Some(mut current) = auth_store::get_user() {
                        current.display_name = artist.display_name.clone();
                        current.avatar_url = artist.avatar_url.clone();
                        auth_store::set_user(current);
                    }
                    toasts.success("Profile saved".to_string(), ToastOptions::new().duration(Duration::from_secs(3)));
                }
                Err(e) => {
                    log::error!("Profile update failed: {}", e);
                    error.set(Some(e.into()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "space-y-5",
            onsubmit: submit,

            div {
                label { class: "block text-sm font-medium mb-1", r#for: "profile-name", "Display name" }
                input {
                    id: "profile-name",
                    r#type: "text",
                    value: "{display_name}",
                    placeholder: "{user.username}",
                    class: "w-full px-3 py-2 bg-muted border border-border rounded-lg",
                    oninput: move |e| display_name.set(e.value()),
                }
            }

            div {
                label { class: "block text-sm font-medium mb-1", r#for: "profile-bio", "Bio" }
                textarea {
                    id: "profile-bio",
                    rows: "4",
                    value: "{bio}",
                    class: "w-full px-3 py-2 bg-muted border border-border rounded-lg resize-y",
                    oninput: move |e| bio.set(e.value()),
                }
                p { class: "text-xs text-muted-foreground mt-1", "{bio.read().chars().count()}/{BIO_MAX}" }
            }

            div {
                label { class: "block text-sm font-medium mb-1", r#for: "profile-website", "Website" }
                input {
                    id: "profile-website",
                    r#type: "url",
                    value: "{website}",
                    placeholder: "https://",
                    class: "w-full px-3 py-2 bg-muted border border-border rounded-lg",
                    oninput: move |e| website.set(e.value()),
                }
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
                "Save profile"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_update_rejects_bad_website() {
        assert_eq!(
            build_update("Mira", "", "ftp://mira.art"),
            Err("Enter a valid http(s) URL".to_string())
        );
    }

    #[test]
    fn test_build_update_clears_empty_fields() {
        let update = build_update(" Mira ", "", "").unwrap();
        assert_eq!(update.display_name.as_deref(), Some("Mira"));
        assert_eq!(update.bio.as_deref(), Some(""));
        assert_eq!(update.website.as_deref(), Some(""));
    }
}
