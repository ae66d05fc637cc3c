//! Page-numbered list loading with refresh, load-more and retry

use dioxus::prelude::*;
use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::services::api::{ApiError, Page};

/// One page fetch issued by a `PageAccumulator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    generation: u64,
}

/// Accumulated pages of a list.
///
/// A refresh starts a new generation; responses belonging to an older
/// generation are dropped so a slow page 3 can never land on top of a fresh
/// page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAccumulator<T> {
    items: Vec<T>,
    /// Last page applied, 0 before the first response
    page: u32,
    limit: u32,
    total: u64,
    loading: bool,
    error: Option<String>,
    generation: u64,
    exhausted: bool,
    /// Page 1 of the current generation has not landed yet
    refresh_pending: bool,
}

impl<T> PageAccumulator<T> {
    pub fn new(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            page: 0,
            limit: limit.max(1),
            total: 0,
            loading: false,
            error: None,
            generation: 0,
            exhausted: false,
            refresh_pending: false,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Nothing loaded yet and a load is running
    pub fn is_initial_load(&self) -> bool {
        self.loading && self.page == 0
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.page > 0 && self.items.is_empty()
    }

    /// False until the latest refresh has succeeded, so nothing is appended
    /// to items from an older generation
    pub fn has_more(&self) -> bool {
        self.page > 0
            && !self.refresh_pending
            && !self.exhausted
            && (self.items.len() as u64) < self.total
    }

    /// Page 1 of a new generation. Always issued, even mid-load.
    pub fn request_refresh(&mut self) -> PageRequest {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.refresh_pending = true;
        PageRequest { page: 1, limit: self.limit, generation: self.generation }
    }

    /// Next page, or `None` when there is nothing more or a load is running
    pub fn request_more(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(PageRequest { page: self.page + 1, limit: self.limit, generation: self.generation })
    }

    /// Re-issue whatever failed last
    pub fn request_retry(&mut self) -> Option<PageRequest> {
        if self.error.is_none() || self.loading {
            return None;
        }
        if self.page == 0 || self.refresh_pending {
            Some(self.request_refresh())
        } else {
            self.exhausted = false;
            self.request_more()
        }
    }

    /// Apply a response. Returns false when it was stale and ignored.
    pub fn receive(&mut self, request: PageRequest, result: Result<Page<T>, String>) -> bool {
        if request.generation != self.generation {
            log::debug!("Dropping stale page {} (generation {})", request.page, request.generation);
            return false;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.exhausted = page.items.is_empty();
                self.total = page.total;
                if request.page == 1 {
                    self.items = page.items;
                } else {
                    self.items.extend(page.items);
                }
                self.page = request.page;
                self.error = None;
                if request.page == 1 {
                    self.refresh_pending = false;
                }
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
        true
    }

    /// Edit loaded items in place (optimistic updates)
    pub fn update_items(&mut self, f: impl FnOnce(&mut Vec<T>)) {
        let before = self.items.len();
        f(&mut self.items);
        let after = self.items.len();
        if after < before {
            self.total = self.total.saturating_sub((before - after) as u64);
        }
    }
}

type Fetcher<T> = Rc<dyn Fn(u32, u32) -> LocalBoxFuture<'static, Result<Page<T>, ApiError>>>;

/// Return type of `use_paginated_list`
pub struct UsePaginatedList<T: 'static> {
    pub state: Signal<PageAccumulator<T>>,
    /// Mirrors of the accumulator flags, for `use_infinite_scroll`
    pub loading: Signal<bool>,
    pub has_more: Signal<bool>,
    pub refresh: Callback<()>,
    pub load_more: Callback<()>,
    pub retry: Callback<()>,
}

impl<T: 'static> Clone for UsePaginatedList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for UsePaginatedList<T> {}

impl<T: 'static> PartialEq for UsePaginatedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.refresh == other.refresh
    }
}

/// Paginated list driven by `fetcher(page, limit)`.
///
/// Reloads from page 1 whenever `key` changes, including on mount.
///
/// ```rust
/// let list = use_paginated_list(collection_id.clone(), DEFAULT_PAGE_SIZE, move |page, limit| {
///     let id = collection_id.clone();
///     async move { collections::collection_artworks(&id, page, limit).await }
/// });
/// ```
pub fn use_paginated_list<T, F, Fut>(key: String, limit: u32, fetcher: F) -> UsePaginatedList<T>
where
    T: 'static,
    F: Fn(u32, u32) -> Fut + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + 'static,
{
    let mut state = use_signal(|| PageAccumulator::new(limit));
    let mut loading = use_signal(|| false);
    let mut has_more = use_signal(|| false);

    // Latest fetcher wins, so captured props stay current between renders
    let fetcher: Fetcher<T> = Rc::new(move |page, limit| fetcher(page, limit).boxed_local());
    let slot = use_hook(|| Rc::new(RefCell::new(fetcher.clone())));
    *slot.borrow_mut() = fetcher;

    let run = use_callback(move |request: PageRequest| {
        let fetch = slot.borrow().clone();
        loading.set(true);

        spawn(async move {
            let result = fetch(request.page, request.limit).await.map_err(String::from);
            if let Err(e) = &result {
                log::error!("Failed to load page {}: {}", request.page, e);
            }

            let applied = state.write().receive(request, result);
            if applied {
                let current = state.peek();
                loading.set(current.is_loading());
                has_more.set(current.has_more());
            }
        });
    });

    let refresh = use_callback(move |_: ()| {
        let request = state.write().request_refresh();
        has_more.set(false);
        run.call(request);
    });

    let load_more = use_callback(move |_: ()| {
        let request = state.write().request_more();
        match request {
            Some(request) => run.call(request),
            None => log::debug!("load_more skipped"),
        }
    });

    let retry = use_callback(move |_: ()| {
        let request = state.write().request_retry();
        if let Some(request) = request {
            run.call(request);
        }
    });

    use_effect(use_reactive(&key, move |_key| {
        refresh.call(());
    }));

    UsePaginatedList { state, loading, has_more, refresh, load_more, retry }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &[u32], total: u64, number: u32) -> Result<Page<u32>, String> {
        Ok(Page::new(items.to_vec(), total, number, 2))
    }

    #[test]
    fn test_refresh_resets_to_first_page() {
        let mut acc = PageAccumulator::new(2);
        let r1 = acc.request_refresh();
        acc.receive(r1, page(&[1, 2], 5, 1));
        let r2 = acc.request_more().unwrap();
        assert_eq!(r2.page, 2);
        acc.receive(r2, page(&[3, 4], 5, 2));
        assert_eq!(acc.items(), &[1, 2, 3, 4]);

        let r = acc.request_refresh();
        assert_eq!(r.page, 1);
        acc.receive(r, page(&[9, 8], 5, 1));
        assert_eq!(acc.items(), &[9, 8]);
        assert_eq!(acc.page(), 1);
    }

    #[test]
    fn test_load_more_without_more_issues_nothing() {
        let mut acc = PageAccumulator::new(2);
        // Nothing loaded yet
        assert!(acc.request_more().is_none());

        let r = acc.request_refresh();
        acc.receive(r, page(&[1, 2], 2, 1));
        assert!(!acc.has_more());
        assert!(acc.request_more().is_none());
        assert!(!acc.is_loading());
    }

    #[test]
    fn test_load_more_blocked_while_loading() {
        let mut acc = PageAccumulator::new(2);
        let r = acc.request_refresh();
        acc.receive(r, page(&[1, 2], 6, 1));

        assert!(acc.request_more().is_some());
        assert!(acc.request_more().is_none());
    }

    #[test]
    fn test_stale_generation_dropped() {
        let mut acc = PageAccumulator::new(2);
        let r = acc.request_refresh();
        acc.receive(r, page(&[1, 2], 6, 1));
        let more = acc.request_more().unwrap();

        let fresh = acc.request_refresh();
        assert!(!acc.receive(more, page(&[3, 4], 6, 2)));
        assert!(acc.receive(fresh, page(&[7, 8], 6, 1)));
        assert_eq!(acc.items(), &[7, 8]);
    }

    #[test]
    fn test_empty_page_stops_paging() {
        let mut acc = PageAccumulator::new(2);
        let r = acc.request_refresh();
        acc.receive(r, page(&[1, 2], 10, 1));
        let more = acc.request_more().unwrap();
        acc.receive(more, page(&[], 10, 2));
        assert!(!acc.has_more());
    }

    #[test]
    fn test_error_then_retry() {
        let mut acc: PageAccumulator<u32> = PageAccumulator::new(2);
        let r = acc.request_refresh();
        acc.receive(r, Err("Network error".into()));
        assert_eq!(acc.error(), Some("Network error"));
        assert!(!acc.is_loading());

        let retry = acc.request_retry().unwrap();
        assert_eq!(retry.page, 1);
        acc.receive(retry, page(&[1, 2], 4, 1));
        assert!(acc.error().is_none());

        let more = acc.request_more().unwrap();
        acc.receive(more, Err("Timeout".into()));
        assert_eq!(acc.request_retry().map(|r| r.page), Some(2));
    }

    #[test]
    fn test_failed_refresh_retries_first_page() {
        let mut acc = PageAccumulator::new(2);
        let r = acc.request_refresh();
        acc.receive(r, page(&[1, 2], 6, 1));
        let more = acc.request_more().unwrap();
        acc.receive(more, page(&[3, 4], 6, 2));

        let refresh = acc.request_refresh();
        acc.receive(refresh, Err("offline".into()));
        assert!(!acc.has_more());
        assert!(acc.request_more().is_none());

        let retry = acc.request_retry().unwrap();
        assert_eq!(retry.page, 1);
        acc.receive(retry, page(&[5, 6], 6, 1));
        assert_eq!(acc.items(), &[5, 6]);
        assert!(acc.has_more());
        assert_eq!(acc.request_more().map(|r| r.page), Some(2));
    }

    #[test]
    fn test_update_items_adjusts_total() {
        let mut acc = PageAccumulator::new(2);
        let r = acc.request_refresh();
        acc.receive(r, page(&[1, 2], 3, 1));
        acc.update_items(|items| items.retain(|i| *i != 1));
        assert_eq!(acc.total(), 2);
        assert_eq!(acc.items(), &[2]);
    }
}
