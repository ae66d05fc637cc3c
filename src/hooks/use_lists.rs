//! Paginated list hooks for each listing page

use crate::config::config;
use crate::hooks::use_paginated::{use_paginated_list, UsePaginatedList};
use crate::services::artworks::{self, Artwork};
use crate::services::collections::{self, Collection, PurchasedCollection};
use crate::services::feed::{self, ExploreSort, FeedItem};
use crate::services::notifications::{self, Notification};
use crate::services::search::{self, SearchHit, SearchScope};
use crate::services::artists;

fn page_size() -> u32 {
    config().page_size
}

/// Artworks and collections from followed artists
pub fn use_home_feed() -> UsePaginatedList<FeedItem> {
    use_paginated_list("feed".to_string(), page_size(), |page, limit| feed::home_feed(page, limit))
}

pub fn use_explore(sort: ExploreSort, tag: Option<String>) -> UsePaginatedList<Artwork> {
    let key = format!("explore:{}:{}", sort.as_str(), tag.as_deref().unwrap_or(""));
    use_paginated_list(key, page_size(), move |page, limit| {
        let tag = tag.clone();
        async move { feed::explore(sort, tag.as_deref(), page, limit).await }
    })
}

pub fn use_collections(tag: Option<String>) -> UsePaginatedList<Collection> {
    let key = format!("collections:{}", tag.as_deref().unwrap_or(""));
    use_paginated_list(key, page_size(), move |page, limit| {
        let tag = tag.clone();
        async move { collections::list_collections(page, limit, tag.as_deref()).await }
    })
}

pub fn use_collection_artworks(collection_id: String) -> UsePaginatedList<Artwork> {
    let key = format!("collection-art:{}", collection_id);
    use_paginated_list(key, page_size(), move |page, limit| {
        let id = collection_id.clone();
        async move { collections::collection_artworks(&id, page, limit).await }
    })
}

pub fn use_artist_artworks(artist_id: String) -> UsePaginatedList<Artwork> {
    let key = format!("artist-art:{}", artist_id);
    use_paginated_list(key, page_size(), move |page, limit| {
        let id = artist_id.clone();
        async move { artworks::artist_artworks(&id, page, limit).await }
    })
}

pub fn use_artist_collections(artist_id: String) -> UsePaginatedList<Collection> {
    let key = format!("artist-collections:{}", artist_id);
    use_paginated_list(key, page_size(), move |page, limit| {
        let id = artist_id.clone();
        async move { artists::artist_collections(&id, page, limit).await }
    })
}

pub fn use_purchased_collections() -> UsePaginatedList<PurchasedCollection> {
    use_paginated_list("purchased".to_string(), page_size(), |page, limit| {
        collections::purchased_collections(page, limit)
    })
}

pub fn use_notifications() -> UsePaginatedList<Notification> {
    use_paginated_list("notifications".to_string(), page_size(), |page, limit| {
        notifications::list_notifications(page, limit)
    })
}

/// Results for an already debounced query; an empty query yields an empty page
pub fn use_search(query: String, scope: SearchScope) -> UsePaginatedList<SearchHit> {
    let key = format!("search:{}:{}", scope.as_str(), query);
    use_paginated_list(key, page_size(), move |page, limit| {
        let query = query.clone();
        async move { search::search(&query, scope, page, limit).await }
    })
}
