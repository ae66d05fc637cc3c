//! Client-side query cache for small owner-scoped lists
//!
//! Lists are keyed by query and held in an LRU with a freshness window.
//! Writes go through typed `ListMutation`s so an optimistic edit can be
//! rolled back by replaying the snapshot taken before it.

use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;
use lru::LruCache;
use std::num::NonZeroUsize;

use crate::services::collections::{self, Collection, CollectionInput};
use crate::services::tags::{self, normalize_tag, Tag};
use crate::stores::auth_store;

/// Queries kept per store before the least recently used is evicted
const QUERY_CACHE_CAPACITY: usize = 32;

/// Data younger than this is served without refetching
const QUERY_TTL_SECS: i64 = 60;

/// Prefix of ids given to optimistic inserts until the server answers
pub const PENDING_ID_PREFIX: &str = "pending-";

/// Entity with a stable identity inside a cached list
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Collection {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Tag {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Cache key of a list query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new(scope: &str, params: &[&str]) -> Self {
        let mut key = scope.to_string();
        for p in params {
            key.push(':');
            key.push_str(p);
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListMutation<T> {
    Replace(Vec<T>),
    /// Prepends, or replaces in place when the key already exists
    Add(T),
    /// No-op when the key is absent
    Update(T),
    Remove(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CachedList<T> {
    pub items: Vec<T>,
    pub fetched_at: DateTime<Utc>,
    /// Forces a refetch regardless of age
    pub invalidated: bool,
}

impl<T: Keyed + Clone> CachedList<T> {
    pub fn new(items: Vec<T>, fetched_at: DateTime<Utc>) -> Self {
        Self { items, fetched_at, invalidated: false }
    }

    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        !self.invalidated && now - self.fetched_at < ttl
    }

    pub fn apply(&mut self, mutation: ListMutation<T>) {
        match mutation {
            ListMutation::Replace(items) => self.items = items,
            ListMutation::Add(item) => {
                if let Some(existing) = self.items.iter_mut().find(|i| i.key() == item.key()) {
                    *existing = item;
                } else {
                    self.items.insert(0, item);
                }
            }
            ListMutation::Update(item) => {
                if let Some(existing) = self.items.iter_mut().find(|i| i.key() == item.key()) {
                    *existing = item;
                }
            }
            ListMutation::Remove(key) => self.items.retain(|i| i.key() != key),
        }
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|i| i.key() == key)
    }
}

/// LRU of cached lists for one entity type
pub struct QueryStore<T> {
    entries: LruCache<QueryKey, CachedList<T>>,
    ttl: Duration,
}

impl<T: Keyed + Clone> QueryStore<T> {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self { entries: LruCache::new(capacity), ttl }
    }

    /// Items for `key` if cached and still fresh
    pub fn fresh(&mut self, key: &QueryKey, now: DateTime<Utc>) -> Option<Vec<T>> {
        let ttl = self.ttl;
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, ttl))
            .map(|entry| entry.items.clone())
    }

    /// Cached items regardless of age
    pub fn peek(&self, key: &QueryKey) -> Option<&[T]> {
        self.entries.peek(key).map(|entry| entry.items.as_slice())
    }

    pub fn insert(&mut self, key: QueryKey, items: Vec<T>, now: DateTime<Utc>) {
        self.entries.put(key, CachedList::new(items, now));
    }

    /// Apply `mutation` and return the items as they were before it, for rollback.
    /// Returns `None` when nothing is cached under `key`.
    pub fn mutate(&mut self, key: &QueryKey, mutation: ListMutation<T>) -> Option<Vec<T>> {
        let entry = self.entries.get_mut(key)?;
        let snapshot = entry.items.clone();
        entry.apply(mutation);
        Some(snapshot)
    }

    pub fn invalidate(&mut self, key: &QueryKey) {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.invalidated = true;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn default_store<T: Keyed + Clone>() -> QueryStore<T> {
    QueryStore::new(QUERY_CACHE_CAPACITY, Duration::seconds(QUERY_TTL_SECS))
}

/// Collections owned by the signed-in artist
pub static MY_COLLECTIONS: GlobalSignal<QueryStore<Collection>> = Signal::global(default_store);

/// Tag vocabulary
pub static TAGS: GlobalSignal<QueryStore<Tag>> = Signal::global(default_store);

pub fn my_collections_key() -> QueryKey {
    QueryKey::new("my-collections", &[&auth_store::get_user_id().unwrap_or_default()])
}

fn tags_key() -> QueryKey {
    QueryKey::new("tags", &[])
}

// ============================================================================
// My collections
// ============================================================================

/// Cached list of my collections; `force` skips the freshness check
pub async fn load_my_collections(force: bool) -> Result<Vec<Collection>, String> {
    let key = my_collections_key();
    if !force {
        if let Some(items) = MY_COLLECTIONS.write().fresh(&key, Utc::now()) {
            log::debug!("Serving {} cached collections", items.len());
            return Ok(items);
        }
    }

    let items = collections::my_collections().await?;
    log::info!("Fetched {} of my collections", items.len());
    MY_COLLECTIONS.write().insert(key, items.clone(), Utc::now());
    Ok(items)
}

/// Create a collection, showing it immediately under a pending id
pub async fn create_collection(input: CollectionInput) -> Result<Collection, String> {
    let key = my_collections_key();
    let pending_id = format!("{}{}", PENDING_ID_PREFIX, uuid::Uuid::new_v4());
    let placeholder = placeholder_collection(&pending_id, &input);
    let snapshot = MY_COLLECTIONS.write().mutate(&key, ListMutation::Add(placeholder));

    match collections::create_collection(&input).await {
        Ok(created) => {
            let mut store = MY_COLLECTIONS.write();
            store.mutate(&key, ListMutation::Remove(pending_id));
            store.mutate(&key, ListMutation::Add(created.clone()));
            store.invalidate(&key);
            Ok(created)
        }
        Err(e) => {
            log::error!("Failed to create collection: {}", e);
            rollback(&key, snapshot);
            Err(e.into())
        }
    }
}

pub async fn update_collection(id: &str, input: CollectionInput) -> Result<Collection, String> {
    let key = my_collections_key();
    let optimistic = MY_COLLECTIONS
        .read()
        .peek(&key)
        .and_then(|items| items.iter().find(|c| c.id == id).cloned())
        .map(|mut current| {
            current.name = input.name.clone();
            current.description = input.description.clone();
            current.price = input.price.clone();
            current.tags = input.tags.clone();
            current
        });
    let snapshot = optimistic.and_then(|c| MY_COLLECTIONS.write().mutate(&key, ListMutation::Update(c)));

    match collections::update_collection(id, &input).await {
        Ok(updated) => {
            MY_COLLECTIONS.write().mutate(&key, ListMutation::Update(updated.clone()));
            Ok(updated)
        }
        Err(e) => {
            log::error!("Failed to update collection {}: {}", id, e);
            rollback(&key, snapshot);
            Err(e.into())
        }
    }
}

pub async fn delete_collection(id: &str) -> Result<(), String> {
    let key = my_collections_key();
    let snapshot = MY_COLLECTIONS.write().mutate(&key, ListMutation::Remove(id.to_string()));

    if let Err(e) = collections::delete_collection(id).await {
        log::error!("Failed to delete collection {}: {}", id, e);
        rollback(&key, snapshot);
        return Err(e.into());
    }
    Ok(())
}

fn rollback(key: &QueryKey, snapshot: Option<Vec<Collection>>) {
    if let Some(items) = snapshot {
        MY_COLLECTIONS.write().mutate(key, ListMutation::Replace(items));
    }
}

fn placeholder_collection(id: &str, input: &CollectionInput) -> Collection {
    Collection {
        id: id.to_string(),
        name: input.name.clone(),
        description: input.description.clone(),
        price: input.price.clone(),
        cover_image_url: None,
        artist_id: auth_store::get_user_id().unwrap_or_default(),
        artist_name: None,
        artist_wallet_address: None,
        artwork_count: input.artwork_ids.len() as u32,
        is_purchased: false,
        tags: input.tags.clone(),
        created_at: None,
    }
}

// ============================================================================
// Tags
// ============================================================================

pub async fn load_tags(force: bool) -> Result<Vec<Tag>, String> {
    let key = tags_key();
    if !force {
        if let Some(items) = TAGS.write().fresh(&key, Utc::now()) {
            return Ok(items);
        }
    }

    let items = tags::list_tags().await?;
    TAGS.write().insert(key, items.clone(), Utc::now());
    Ok(items)
}

/// Create a tag, reusing an existing one with the same normalized name
pub async fn create_tag(raw: &str) -> Result<Tag, String> {
    let name = normalize_tag(raw);
    if name.is_empty() {
        return Err("Tag name is required".to_string());
    }

    let key = tags_key();
    if let Some(existing) = TAGS
        .read()
        .peek(&key)
        .and_then(|items| items.iter().find(|t| t.name == name).cloned())
    {
        return Ok(existing);
    }

    let pending = Tag {
        id: format!("{}{}", PENDING_ID_PREFIX, name),
        name: name.clone(),
        usage_count: 0,
    };
    let snapshot = TAGS.write().mutate(&key, ListMutation::Add(pending.clone()));

    match tags::create_tag(&name).await {
        Ok(tag) => {
            let mut store = TAGS.write();
            store.mutate(&key, ListMutation::Remove(pending.id));
            store.mutate(&key, ListMutation::Add(tag.clone()));
            Ok(tag)
        }
        Err(e) => {
            if let Some(items) = snapshot {
                TAGS.write().mutate(&key, ListMutation::Replace(items));
            }
            Err(e.into())
        }
    }
}

/// Drop everything cached for the previous user
pub fn clear_all() {
    MY_COLLECTIONS.write().clear();
    TAGS.write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        label: &'static str,
    }

    impl Keyed for Item {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, label: &'static str) -> Item {
        Item { id: id.to_string(), label }
    }

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).single().unwrap()
    }

    #[test]
    fn test_reducers() {
        let mut list = CachedList::new(vec![item("a", "A"), item("b", "B")], t0());

        list.apply(ListMutation::Add(item("c", "C")));
        assert_eq!(list.items[0].id, "c");

        list.apply(ListMutation::Add(item("a", "A2")));
        assert_eq!(list.items.len(), 3);
        assert_eq!(list.find("a").unwrap().label, "A2");

        list.apply(ListMutation::Update(item("b", "B2")));
        assert_eq!(list.find("b").unwrap().label, "B2");

        list.apply(ListMutation::Update(item("zzz", "nope")));
        assert!(list.find("zzz").is_none());

        list.apply(ListMutation::Remove("a".into()));
        assert!(list.find("a").is_none());

        list.apply(ListMutation::Replace(vec![item("x", "X")]));
        assert_eq!(list.items, vec![item("x", "X")]);
    }

    #[test]
    fn test_freshness() {
        let mut store = QueryStore::new(4, Duration::seconds(60));
        let key = QueryKey::new("items", &["u1"]);
        store.insert(key.clone(), vec![item("a", "A")], t0());

        assert!(store.fresh(&key, t0() + Duration::seconds(59)).is_some());
        assert!(store.fresh(&key, t0() + Duration::seconds(61)).is_none());

        store.invalidate(&key);
        assert!(store.fresh(&key, t0()).is_none());
        assert_eq!(store.peek(&key).map(|i| i.len()), Some(1));
    }

    #[test]
    fn test_mutate_returns_snapshot_for_rollback() {
        let mut store = QueryStore::new(4, Duration::seconds(60));
        let key = QueryKey::new("items", &[]);
        assert!(store.mutate(&key, ListMutation::Remove("a".into())).is_none());

        store.insert(key.clone(), vec![item("a", "A"), item("b", "B")], t0());
        let snapshot = store.mutate(&key, ListMutation::Remove("a".into())).unwrap();
        assert_eq!(store.peek(&key).unwrap().len(), 1);

        store.mutate(&key, ListMutation::Replace(snapshot));
        assert_eq!(store.peek(&key).unwrap(), &[item("a", "A"), item("b", "B")]);
    }

    #[test]
    fn test_lru_eviction() {
        let mut store = QueryStore::new(2, Duration::seconds(60));
        for scope in ["a", "b", "c"] {
            store.insert(QueryKey::new(scope, &[]), vec![item(scope, "")], t0());
        }
        assert_eq!(store.len(), 2);
        assert!(store.peek(&QueryKey::new("a", &[])).is_none());
    }

    #[test]
    fn test_query_key() {
        assert_eq!(QueryKey::new("my-collections", &["u1"]).as_str(), "my-collections:u1");
        assert_eq!(QueryKey::new("tags", &[]).as_str(), "tags");
    }
}
