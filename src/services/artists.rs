use serde::{Deserialize, Serialize};

use crate::services::api::{page_query, ApiClient, ApiError, Page};
use crate::services::collections::Collection;

/// Public artist profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub banner_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub wallet_address: Option<String>,
    #[serde(default)]
    pub follower_count: u32,
    #[serde(default)]
    pub following_count: u32,
    #[serde(default)]
    pub artwork_count: u32,
    #[serde(default)]
    pub is_following: bool,
}

impl Artist {
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }

    /// One or two letters for the avatar placeholder
    pub fn initials(&self) -> String {
        let words: Vec<&str> = self.name().split_whitespace().collect();
        let letters: String = match words.as_slice() {
            [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
            [only] => only.chars().take(1).collect(),
            [] => "?".to_string(),
        };
        letters.to_uppercase()
    }
}

/// Editable profile fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

pub async fn get_artist(id: &str) -> Result<Artist, ApiError> {
    ApiClient::new().get(&format!("/artists/{}", urlencoding::encode(id))).await
}

pub async fn artist_collections(id: &str, page: u32, limit: u32) -> Result<Page<Collection>, ApiError> {
    ApiClient::new()
        .get(&format!(
            "/artists/{}/collections{}",
            urlencoding::encode(id),
            page_query(page, limit, &[])
        ))
        .await
}

/// Artists to show on the explore page
pub async fn featured_artists(limit: u32) -> Result<Vec<Artist>, ApiError> {
    ApiClient::new().get(&format!("/artists/featured?limit={}", limit)).await
}

pub async fn follow_artist(id: &str) -> Result<(), ApiError> {
    ApiClient::new()
        .post_empty(&format!("/artists/{}/follow", urlencoding::encode(id)))
        .await
}

pub async fn unfollow_artist(id: &str) -> Result<(), ApiError> {
    ApiClient::new()
        .delete(&format!("/artists/{}/follow", urlencoding::encode(id)))
        .await
}

pub async fn update_profile(update: &ProfileUpdate) -> Result<Artist, ApiError> {
    ApiClient::new().patch("/users/me", update).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn artist(display_name: Option<&str>) -> Artist {
        let mut a: Artist = serde_json::from_value(json!({ "id": "1", "username": "mira" })).unwrap();
        a.display_name = display_name.map(str::to_string);
        a
    }

    #[test]
    fn test_name_falls_back_to_username() {
        assert_eq!(artist(None).name(), "mira");
        assert_eq!(artist(Some("  ")).name(), "mira");
        assert_eq!(artist(Some("Mira Okafor")).name(), "Mira Okafor");
    }

    #[test]
    fn test_initials() {
        assert_eq!(artist(Some("mira okafor")).initials(), "MO");
        assert_eq!(artist(None).initials(), "M");
    }

    #[test]
    fn test_profile_update_skips_unset() {
        let update = ProfileUpdate { bio: Some("hi".into()), ..Default::default() };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "bio": "hi" }));
    }
}
