//! Home feed and explore listings

use serde::{Deserialize, Serialize};

use crate::services::api::{page_query, ApiClient, ApiError, Page};
use crate::services::artworks::Artwork;
use crate::services::collections::Collection;

/// Feed entries are either a new artwork or a newly released collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeedItem {
    Artwork(Artwork),
    Collection(Collection),
}

impl FeedItem {
    pub fn id(&self) -> &str {
        match self {
            Self::Artwork(a) => &a.id,
            Self::Collection(c) => &c.id,
        }
    }
}

/// Explore sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExploreSort {
    #[default]
    Trending,
    Latest,
}

impl ExploreSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Latest => "latest",
        }
    }
}

/// Artworks and collections from followed artists
pub async fn home_feed(page: u32, limit: u32) -> Result<Page<FeedItem>, ApiError> {
    ApiClient::new()
        .get(&format!("/feed{}", page_query(page, limit, &[])))
        .await
}

pub async fn explore(sort: ExploreSort, tag: Option<&str>, page: u32, limit: u32) -> Result<Page<Artwork>, ApiError> {
    ApiClient::new()
        .get(&format!(
            "/explore{}",
            page_query(page, limit, &[("sort", sort.as_str()), ("tag", tag.unwrap_or(""))])
        ))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feed_item_kinds() {
        let items: Vec<FeedItem> = serde_json::from_value(json!([
            { "kind": "artwork", "id": "a1", "title": "T", "imageUrl": "u", "artistId": "x" },
            { "kind": "collection", "id": "c1", "name": "C", "artistId": "x" }
        ]))
        .unwrap();

        assert_eq!(items.len(), 2);
        assert!(matches!(items[0], FeedItem::Artwork(_)));
        assert_eq!(items[1].id(), "c1");
    }
}
