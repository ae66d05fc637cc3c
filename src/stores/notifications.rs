use dioxus::prelude::*;

use crate::services::notifications as notifications_api;

/// Unread notification count shown in the nav badge
pub static UNREAD_COUNT: GlobalSignal<u32> = Signal::global(|| 0);

pub fn get_unread_count() -> u32 {
    *UNREAD_COUNT.read()
}

pub fn set_unread_count(count: u32) {
    *UNREAD_COUNT.write() = count;
}

/// Clear on logout
pub fn clear_unread_count() {
    *UNREAD_COUNT.write() = 0;
}

/// Fetch the unread count from the backend
pub async fn refresh_unread_count() {
    match notifications_api::unread_count().await {
        Ok(count) => set_unread_count(count),
        Err(e) => log::warn!("Failed to fetch unread count: {}", e),
    }
}

/// Mark one notification read; the badge drops immediately and is restored on failure
pub async fn mark_read(id: &str) -> Result<(), String> {
    let previous = get_unread_count();
    set_unread_count(previous.saturating_sub(1));

    if let Err(e) = notifications_api::mark_read(id).await {
        log::error!("Failed to mark notification {} read: {}", id, e);
        set_unread_count(previous);
        return Err(e.into());
    }
    Ok(())
}

pub async fn mark_all_read() -> Result<(), String> {
    let previous = get_unread_count();
    clear_unread_count();

    if let Err(e) = notifications_api::mark_all_read().await {
        log::error!("Failed to mark all notifications read: {}", e);
        set_unread_count(previous);
        return Err(e.into());
    }
    Ok(())
}
