use serde::{Deserialize, Serialize};

use crate::services::api::{page_query, ApiClient, ApiError, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Follow,
    Like,
    Purchase,
    Comment,
    #[serde(other)]
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    #[serde(default)]
    pub actor_name: Option<String>,
    #[serde(default)]
    pub actor_avatar_url: Option<String>,
    /// Artwork or collection the notification points at
    #[serde(default)]
    pub target_id: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnreadCount {
    count: u32,
}

pub async fn list_notifications(page: u32, limit: u32) -> Result<Page<Notification>, ApiError> {
    ApiClient::new()
        .get(&format!("/notifications{}", page_query(page, limit, &[])))
        .await
}

pub async fn unread_count() -> Result<u32, ApiError> {
    ApiClient::new()
        .get::<UnreadCount>("/notifications/unread-count")
        .await
        .map(|c| c.count)
}

pub async fn mark_read(id: &str) -> Result<(), ApiError> {
    ApiClient::new()
        .post_empty(&format!("/notifications/{}/read", urlencoding::encode(id)))
        .await
}

pub async fn mark_all_read() -> Result<(), ApiError> {
    ApiClient::new().post_empty("/notifications/read-all").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_kind_maps_to_system() {
        let n: Notification = serde_json::from_value(json!({
            "id": "n1",
            "kind": "maintenance",
            "message": "Scheduled downtime",
            "createdAt": "2025-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(n.kind, NotificationKind::System);
        assert!(!n.is_read);
    }
}
