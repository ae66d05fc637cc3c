use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::services::auth::{self as auth_api, CurrentUser, RegisterRequest};
use crate::stores::{notifications, payment, query_cache};
use crate::utils::cookie;

/// Cookie holding the bearer token
pub const AUTH_COOKIE: &str = "auth_token";

/// Token lifetime on the client, 7 days
const AUTH_COOKIE_MAX_AGE: i64 = 60 * 60 * 24 * 7;

/// Last known user, so the UI can render before /users/me answers
const STORAGE_KEY_USER: &str = "artmarket_user";

/// Authentication state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub is_authenticated: bool,
}

/// Global authentication state
pub static AUTH_STATE: GlobalSignal<AuthState> = Signal::global(AuthState::default);

/// Set while the stored session is being validated against the backend
pub static AUTH_RESTORING: GlobalSignal<bool> = Signal::global(|| false);

/// Initialize authentication from the cookie and cached user.
/// Validation happens in restore_session_async().
pub fn init_auth() {
    log::info!("Initializing authentication...");

    if get_token().is_none() {
        LocalStorage::delete(STORAGE_KEY_USER);
        return;
    }

    match LocalStorage::get::<CurrentUser>(STORAGE_KEY_USER) {
        Ok(user) => {
            log::info!("Found stored session for {}", user.username);
            *AUTH_STATE.write() = AuthState {
                user: Some(user),
                is_authenticated: true,
            };
        }
        Err(_) => {
            log::debug!("Auth token present without cached user");
        }
    }
}

/// Confirm the stored token is still valid and refresh the user record
pub async fn restore_session_async() {
    if get_token().is_none() {
        return;
    }

    *AUTH_RESTORING.write() = true;
    match auth_api::me().await {
        Ok(user) => {
            log::info!("Session restored for {}", user.username);
            set_user(user);
        }
        Err(e) if e.is_unauthorized() => {
            // handle_unauthorized already ran inside the api client
            log::info!("Stored session expired");
        }
        Err(e) => {
            // Offline or backend hiccup: keep the optimistic session
            log::warn!("Could not validate session: {}", e);
        }
    }
    *AUTH_RESTORING.write() = false;
}

pub async fn login(email: &str, password: &str) -> Result<(), String> {
    log::info!("Logging in...");
    let response = auth_api::login(email.trim(), password).await?;
    start_session(response.access_token, response.user);
    Ok(())
}

pub async fn register(username: &str, email: &str, password: &str, is_artist: bool) -> Result<(), String> {
    log::info!("Registering new account...");
    let response = auth_api::register(&RegisterRequest {
        username: username.trim(),
        email: email.trim(),
        password,
        is_artist,
    })
    .await?;
    start_session(response.access_token, response.user);
    Ok(())
}

fn start_session(token: String, user: CurrentUser) {
    cookie::set_cookie(AUTH_COOKIE, &token, Some(AUTH_COOKIE_MAX_AGE));
    log::info!("Logged in as {}", user.username);
    set_user(user);
}

/// Replace the current user record (after profile or wallet changes)
pub fn set_user(user: CurrentUser) {
    if let Err(e) = LocalStorage::set(STORAGE_KEY_USER, &user) {
        log::warn!("Failed to cache user: {}", e);
    }
    *AUTH_STATE.write() = AuthState {
        user: Some(user),
        is_authenticated: true,
    };
}

pub fn logout() {
    log::info!("Logging out");
    clear_auth();
}

/// Called by the api client on any 401
pub fn handle_unauthorized() {
    clear_auth();
}

fn clear_auth() {
    cookie::remove_cookie(AUTH_COOKIE);
    LocalStorage::delete(STORAGE_KEY_USER);
    *AUTH_STATE.write() = AuthState::default();

    // Per-user client state
    notifications::clear_unread_count();
    query_cache::clear_all();
    payment::clear_purchases();
}

/// Bearer token from the cookie
pub fn get_token() -> Option<String> {
    cookie::get_cookie(AUTH_COOKIE)
}

pub fn is_authenticated() -> bool {
    AUTH_STATE.read().is_authenticated
}

pub fn get_user() -> Option<CurrentUser> {
    AUTH_STATE.read().user.clone()
}

/// Buyer identity for purchases
pub fn get_user_id() -> Option<String> {
    AUTH_STATE.read().user.as_ref().map(|u| u.id.clone())
}
