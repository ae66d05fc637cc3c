use serde::{Deserialize, Serialize};

use crate::services::api::{ApiClient, ApiError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub usage_count: u32,
}

#[derive(Serialize)]
struct NewTag<'a> {
    name: &'a str,
}

/// Lowercase, trimmed, inner whitespace collapsed to a hyphen
pub fn normalize_tag(raw: &str) -> String {
    raw.trim()
        .trim_start_matches('#')
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub async fn list_tags() -> Result<Vec<Tag>, ApiError> {
    ApiClient::new().get("/tags").await
}

pub async fn popular_tags(limit: u32) -> Result<Vec<Tag>, ApiError> {
    ApiClient::new().get(&format!("/tags/popular?limit={}", limit)).await
}

pub async fn create_tag(name: &str) -> Result<Tag, ApiError> {
    let name = normalize_tag(name);
    ApiClient::new().post("/tags", &NewTag { name: &name }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("  #Digital Art "), "digital-art");
        assert_eq!(normalize_tag("Oil"), "oil");
        assert_eq!(normalize_tag("generative   glitch  art"), "generative-glitch-art");
        assert_eq!(normalize_tag("   "), "");
    }
}
