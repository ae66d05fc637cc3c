use dioxus::prelude::*;

use crate::components::icons::SpinnerIcon;
use crate::routes::Route;
use crate::stores::auth_store;
use crate::utils::validation::{self, first_error};

const PASSWORD_MIN: usize = 8;

fn check_login(email: &str, password: &str) -> Option<String> {
    first_error([validation::email(email), validation::required("Password", password)])
}

fn check_register(username: &str, email: &str, password: &str, confirm: &str) -> Option<String> {
    first_error([
        validation::username(username),
        validation::email(email),
        validation::length("Password", password, PASSWORD_MIN, 128),
    ])
    .or_else(|| (password != confirm).then(|| "Passwords do not match".to_string()))
}

#[component]
pub fn Login() -> Element {
    let navigator = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        if auth_store::is_authenticated() {
            navigator.replace(Route::Home {});
        }
    });

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if *submitting.peek() {
            return;
        }
        if let Some(msg) = check_login(&email.peek(), &password.peek()) {
            error.set(Some(msg));
            return;
        }

        submitting.set(true);
        error.set(None);
        let (email, password) = (email.peek().clone(), password.peek().clone());
        spawn(async move {
            let result = auth_store::login(&email, &password).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    spawn(crate::stores::notifications::refresh_unread_count());
                    navigator.replace(Route::Home {});
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Log in",
            form {
                class: "space-y-4",
                onsubmit: submit,
                Field { id: "login-email", label: "Email", kind: "email", value: email }
                Field { id: "login-password", label: "Password", kind: "password", value: password }
                if let Some(err) = error.read().as_ref() {
                    p { class: "text-sm text-destructive", role: "alert", "{err}" }
                }
                SubmitButton { busy: *submitting.read(), label: "Log in" }
            }
            p {
                class: "text-sm text-center text-muted-foreground",
                "No account? "
                Link { to: Route::Register {}, class: "text-primary hover:underline", "Sign up" }
            }
        }
    }
}

#[component]
pub fn Register() -> Element {
    let navigator = navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut is_artist = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if *submitting.peek() {
            return;
        }
        if let Some(msg) = check_register(&username.peek(), &email.peek(), &password.peek(), &confirm.peek()) {
            error.set(Some(msg));
            return;
        }

        submitting.set(true);
        error.set(None);
        let (username, email, password) = (username.peek().clone(), email.peek().clone(), password.peek().clone());
        let is_artist = *is_artist.peek();
        spawn(async move {
            let result = auth_store::register(&username, &email, &password, is_artist).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    navigator.replace(Route::Home {});
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    rsx! {
        AuthCard {
            title: "Create account",
            form {
                class: "space-y-4",
                onsubmit: submit,
                Field { id: "register-username", label: "Username", kind: "text", value: username }
                Field { id: "register-email", label: "Email", kind: "email", value: email }
                Field { id: "register-password", label: "Password", kind: "password", value: password }
                Field { id: "register-confirm", label: "Confirm password", kind: "password", value: confirm }
                label {
                    class: "flex items-center gap-2 text-sm",
                    input {
                        r#type: "checkbox",
                        checked: *is_artist.read(),
                        onchange: move |e| is_artist.set(e.checked()),
                    }
                    "I'm an artist and want to sell my work"
                }
                if let Some(err) = error.read().as_ref() {
                    p { class: "text-sm text-destructive", role: "alert", "{err}" }
                }
                SubmitButton { busy: *submitting.read(), label: "Sign up" }
            }
            p {
                class: "text-sm text-center text-muted-foreground",
                "Already have an account? "
                Link { to: Route::Login {}, class: "text-primary hover:underline", "Log in" }
            }
        }
    }
}

#[component]
fn AuthCard(title: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-[70vh] flex items-center justify-center p-4",
            div {
                class: "w-full max-w-sm bg-card border border-border rounded-2xl p-6 space-y-5 shadow-sm",
                h1 { class: "text-2xl font-bold text-center", "{title}" }
                {children}
            }
        }
    }
}

#[component]
fn Field(id: &'static str, label: &'static str, kind: &'static str, value: Signal<String>) -> Element {
    rsx! {
        div {
            label { class: "block text-sm font-medium mb-1", r#for: id, "{label}" }
            input {
                id,
                r#type: kind,
                value: "{value}",
                class: "w-full px-3 py-2 bg-muted border border-border rounded-lg",
                oninput: move |e| value.set(e.value()),
            }
        }
    }
}

#[component]
fn SubmitButton(busy: bool, label: &'static str) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: "w-full inline-flex items-center justify-center gap-2 py-2.5 bg-primary text-primary-foreground rounded-lg font-medium hover:bg-primary/90 transition disabled:opacity-50",
            disabled: busy,
            if busy {
                SpinnerIcon { class: "w-4 h-4".to_string() }
            }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_checks() {
        assert_eq!(check_login("nope", "x"), Some("Enter a valid email address".to_string()));
        assert_eq!(check_login("a@b.co", ""), Some("Password is required".to_string()));
        assert_eq!(check_login("a@b.co", "secret"), None);
    }

    #[test]
    fn test_register_checks() {
        assert_eq!(
            check_register("mira", "a@b.co", "short", "short"),
            Some("Password must be at least 8 characters".to_string())
        );
        assert_eq!(
            check_register("mira", "a@b.co", "longenough", "different"),
            Some("Passwords do not match".to_string())
        );
        assert_eq!(check_register("mira", "a@b.co", "longenough", "longenough"), None);
    }
}
