//! Optimistic toggles: follow an artist, like an artwork
//!
//! The UI flips immediately; the count and flag roll back if the request fails.

use dioxus::prelude::*;
use futures::future::LocalBoxFuture;
use std::rc::Rc;

use crate::services::api::ApiError;
use crate::services::{artists, artworks};
use crate::stores::auth_store;

#[derive(Clone, Debug, PartialEq)]
pub enum ToggleState {
    Idle,
    Pending,
    Error(String),
}

/// Flag + count pair after a toggle
pub fn toggled(active: bool, count: u64) -> (bool, u64) {
    if active {
        (false, count.saturating_sub(1))
    } else {
        (true, count.saturating_add(1))
    }
}

/// Return type for the toggle hooks
#[derive(Clone, Copy)]
pub struct UseToggle {
    pub active: Signal<bool>,
    pub count: Signal<u64>,
    pub state: Signal<ToggleState>,
    pub toggle: Callback<()>,
}

type ToggleRequest = Rc<dyn Fn(String, bool) -> LocalBoxFuture<'static, Result<(), ApiError>>>;

/// Shared optimistic toggle. `request(id, activate)` performs the server call.
fn use_optimistic_toggle(id: String, initially_active: bool, initial_count: u64, request: ToggleRequest) -> UseToggle {
    let mut active = use_signal(|| initially_active);
    let mut count = use_signal(|| initial_count);
    let mut state = use_signal(|| ToggleState::Idle);

    // Follow server values when the parent re-renders with new props
    use_effect(use_reactive((&initially_active, &initial_count), move |(a, c)| {
        if !matches!(*state.peek(), ToggleState::Pending) {
            active.set(a);
            count.set(c);
        }
    }));

    let toggle = use_callback(move |_: ()| {
        if !auth_store::is_authenticated() {
            state.set(ToggleState::Error("Sign in first".to_string()));
            return;
        }
        if matches!(*state.peek(), ToggleState::Pending) {
            return;
        }

        let was_active = *active.peek();
        let prev_count = *count.peek();
        let (next_active, next_count) = toggled(was_active, prev_count);

        state.set(ToggleState::Pending);
        active.set(next_active);
        count.set(next_count);

        let call = request(id.clone(), next_active);
        spawn(async move {
            match call.await {
                Ok(()) => state.set(ToggleState::Idle),
                Err(e) => {
                    log::error!("Toggle failed: {}", e);
                    active.set(was_active);
                    count.set(prev_count);
                    state.set(ToggleState::Error(e.message));
                }
            }
        });
    });

    UseToggle { active, count, state, toggle }
}

pub fn use_follow(artist_id: String, is_following: bool, follower_count: u64) -> UseToggle {
    let request: ToggleRequest = use_hook(|| {
        Rc::new(|id: String, follow: bool| -> LocalBoxFuture<'static, Result<(), ApiError>> {
            Box::pin(async move {
                if follow {
                    artists::follow_artist(&id).await
                } else {
                    artists::unfollow_artist(&id).await
                }
            })
        }) as ToggleRequest
    });
    use_optimistic_toggle(artist_id, is_following, follower_count, request)
}

pub fn use_like(artwork_id: String, is_liked: bool, like_count: u64) -> UseToggle {
    let request: ToggleRequest = use_hook(|| {
        Rc::new(|id: String, like: bool| -> LocalBoxFuture<'static, Result<(), ApiError>> {
            Box::pin(async move {
                if like {
                    artworks::like_artwork(&id).await
                } else {
                    artworks::unlike_artwork(&id).await
                }
            })
        }) as ToggleRequest
    });
    use_optimistic_toggle(artwork_id, is_liked, like_count, request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled() {
        assert_eq!(toggled(false, 3), (true, 4));
        assert_eq!(toggled(true, 3), (false, 2));
        assert_eq!(toggled(true, 0), (false, 0));
    }
}
