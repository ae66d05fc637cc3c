use serde::{Deserialize, Serialize};

use crate::services::api::{page_query, ApiClient, ApiError, Page};
use crate::services::artists::Artist;
use crate::services::artworks::Artwork;
use crate::services::collections::Collection;

/// Which index to search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    Artworks,
    Artists,
    Collections,
}

impl SearchScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artworks => "art",
            Self::Artists => "artists",
            Self::Collections => "collections",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Artworks => "Artworks",
            Self::Artists => "Artists",
            Self::Collections => "Collections",
        }
    }

    pub fn all() -> [SearchScope; 3] {
        [Self::Artworks, Self::Artists, Self::Collections]
    }
}

/// One search hit; the backend tags results by scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "item", rename_all = "lowercase")]
pub enum SearchHit {
    Art(Artwork),
    Artist(Artist),
    Collection(Collection),
}

impl SearchHit {
    pub fn id(&self) -> &str {
        match self {
            Self::Art(a) => &a.id,
            Self::Artist(a) => &a.id,
            Self::Collection(c) => &c.id,
        }
    }
}

/// Strip surrounding whitespace and collapse runs of spaces
pub fn clean_query(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub async fn search(query: &str, scope: SearchScope, page: u32, limit: u32) -> Result<Page<SearchHit>, ApiError> {
    let query = clean_query(query);
    if query.is_empty() {
        return Ok(Page::new(Vec::new(), 0, page, limit));
    }
    ApiClient::new()
        .get(&format!(
            "/search{}",
            page_query(page, limit, &[("q", &query), ("type", scope.as_str())])
        ))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_query() {
        assert_eq!(clean_query("  blue   hour "), "blue hour");
        assert_eq!(clean_query("   "), "");
    }

    #[test]
    fn test_hit_tagging() {
        let hit: SearchHit = serde_json::from_value(json!({
            "type": "artist",
            "item": { "id": "a9", "username": "lu" }
        }))
        .unwrap();
        assert_eq!(hit.id(), "a9");
        assert!(matches!(hit, SearchHit::Artist(_)));
    }

    #[tokio::test]
    async fn test_empty_query_short_circuits() {
        let page = search("   ", SearchScope::Artists, 1, 20).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}
