//! # Paginated List Controller
//!
//! "Load more" state for one list-bearing screen. Each [`PagedList`] owns
//! its own state; nothing is shared between lists.
//!
//! ## Guarantees
//!
//! - `items` never holds two entries with the same id, and keeps the order
//!   in which each id was first seen.
//! - While a fetch is in flight (`is_loading`), further load calls are
//!   no-ops, so a double-tapped "load more" issues one request.
//! - Fetch errors are kept in the list state (with the previous items
//!   intact) for the screen to show a retry affordance; they are not
//!   returned to the caller.

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{Investment, Paginated, Video};
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use crate::core::error::{ApiError, Result};
use crate::core::service::ApiService;

/// Stable identity used for de-duplication across pages
pub trait Identifiable {
    type Id: Eq + Hash + Clone;

    fn id(&self) -> Self::Id;
}

impl Identifiable for Investment {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Identifiable for Video {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Fetches one page (1-based) of a list
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<Paginated<T>>;
}

/// The signed-in user's investments
pub struct InvestmentPages {
    service: Arc<dyn ApiService>,
    per_page: u32,
}

impl InvestmentPages {
    pub fn new(service: Arc<dyn ApiService>, per_page: u32) -> Self {
        Self { service, per_page }
    }
}

#[async_trait]
impl PageSource<Investment> for InvestmentPages {
    async fn fetch_page(&self, page: u32) -> Result<Paginated<Investment>> {
        self.service.get_my_investments(page, self.per_page).await
    }
}

/// One creator's videos
pub struct CreatorVideoPages {
    service: Arc<dyn ApiService>,
    creator_id: i64,
    per_page: u32,
}

impl CreatorVideoPages {
    pub fn new(service: Arc<dyn ApiService>, creator_id: i64, per_page: u32) -> Self {
        Self {
            service,
            creator_id,
            per_page,
        }
    }
}

#[async_trait]
impl PageSource<Video> for CreatorVideoPages {
    async fn fetch_page(&self, page: u32) -> Result<Paginated<Video>> {
        self.service
            .get_videos_by_creator(self.creator_id, page, self.per_page)
            .await
    }
}

/// Outcome of a load call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Page applied; `added` new (non-duplicate) items
    Loaded { added: usize },
    /// Another load was in flight, or there is nothing more to load
    Skipped,
    /// Fetch failed; see [`ListSnapshot::error`]
    Failed,
}

/// Copy of a list's state for rendering
#[derive(Debug, Clone)]
pub struct ListSnapshot<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub has_more: bool,
    pub is_loading: bool,
    pub error: Option<Arc<ApiError>>,
}

struct ListState<T: Identifiable> {
    items: Vec<T>,
    seen: HashSet<T::Id>,
    page: u32,
    has_more: bool,
    is_loading: bool,
    error: Option<Arc<ApiError>>,
}

impl<T: Identifiable> ListState<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            page: 0,
            has_more: true,
            is_loading: false,
            error: None,
        }
    }

    /// Append items whose id has not been seen yet; returns how many.
    fn append(&mut self, incoming: Vec<T>) -> usize {
        let before = self.items.len();
        for item in incoming {
            if self.seen.insert(item.id()) {
                self.items.push(item);
            }
        }
        self.items.len() - before
    }

    fn reset(&mut self) {
        self.items.clear();
        self.seen.clear();
        self.page = 0;
        self.has_more = true;
    }
}

/// Resets `is_loading` when a load finishes or its future is dropped.
struct LoadingGuard<'a, T: Identifiable> {
    state: &'a Mutex<ListState<T>>,
}

impl<T: Identifiable> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.state.lock().is_loading = false;
    }
}

/// Paginated list bound to one [`PageSource`]
pub struct PagedList<T: Identifiable, S> {
    source: S,
    state: Mutex<ListState<T>>,
}

impl<T, S> PagedList<T, S>
where
    T: Identifiable + Clone,
    S: PageSource<T>,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: Mutex::new(ListState::new()),
        }
    }

    /// Claim the loading flag, or `None` when a load is already running.
    fn begin(&self, require_more: bool, clear: bool) -> Option<(LoadingGuard<'_, T>, u32)> {
        let mut state = self.state.lock();
        if state.is_loading || (require_more && !state.has_more) {
            return None;
        }
        state.is_loading = true;
        if clear {
            state.reset();
            state.error = None;
        }
        let next = state.page + 1;
        Some((LoadingGuard { state: &self.state }, next))
    }

    /// Replace the list with page 1.
    pub async fn load_first_page(&self) -> LoadStatus {
        let Some((_guard, _)) = self.begin(false, true) else {
            return LoadStatus::Skipped;
        };
        self.fetch_and_replace().await
    }

    /// Reload page 1, keeping the current items until it arrives.
    pub async fn refresh(&self) -> LoadStatus {
        let Some((_guard, _)) = self.begin(false, false) else {
            return LoadStatus::Skipped;
        };
        self.fetch_and_replace().await
    }

    /// Append the next page. No-op while loading or when the end was reached.
    pub async fn load_next_page(&self) -> LoadStatus {
        let Some((_guard, next)) = self.begin(true, false) else {
            return LoadStatus::Skipped;
        };

        match self.source.fetch_page(next).await {
            Ok(page) => {
                let mut state = self.state.lock();
                let has_more = page.has_more();
                let added = state.append(page.items);
                state.page = next;
                state.has_more = has_more;
                state.error = None;
                tracing::debug!(page = next, added, has_more, "Page appended");
                LoadStatus::Loaded { added }
            }
            Err(e) => self.record_failure(e, next),
        }
    }

    async fn fetch_and_replace(&self) -> LoadStatus {
        match self.source.fetch_page(1).await {
            Ok(page) => {
                let mut state = self.state.lock();
                let has_more = page.has_more();
                state.reset();
                let added = state.append(page.items);
                state.page = 1;
                state.has_more = has_more;
                state.error = None;
                tracing::debug!(added, has_more, "First page loaded");
                LoadStatus::Loaded { added }
            }
            Err(e) => self.record_failure(e, 1),
        }
    }

    fn record_failure(&self, err: ApiError, page: u32) -> LoadStatus {
        tracing::warn!(page, error = %err, "Page load failed");
        self.state.lock().error = Some(Arc::new(err));
        LoadStatus::Failed
    }

    pub fn snapshot(&self) -> ListSnapshot<T> {
        let state = self.state.lock();
        ListSnapshot {
            items: state.items.clone(),
            page: state.page,
            has_more: state.has_more,
            is_loading: state.is_loading,
            error: state.error.clone(),
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.state.lock().items.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading
    }

    pub fn has_more(&self) -> bool {
        self.state.lock().has_more
    }

    pub fn error(&self) -> Option<Arc<ApiError>> {
        self.state.lock().error.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        label: &'static str,
    }

    impl Identifiable for Row {
        type Id = i64;

        fn id(&self) -> i64 {
            self.id
        }
    }

    fn rows(ids: &[i64]) -> Vec<Row> {
        ids.iter().map(|&id| Row { id, label: "x" }).collect()
    }

    fn page(ids: &[i64], more: bool) -> Paginated<Row> {
        let mut page = Paginated::last(rows(ids));
        if more {
            page.next_page_url = Some("next".to_string());
        }
        page
    }

    /// Replays scripted responses and records requested page numbers.
    struct Scripted {
        responses: Mutex<VecDeque<Result<Paginated<Row>>>>,
        requested: Mutex<Vec<u32>>,
        gate: Option<Arc<Notify>>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn new(responses: Vec<Result<Paginated<Row>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requested: Mutex::new(Vec::new()),
                gate: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn gated(mut self, gate: Arc<Notify>) -> Self {
            self.gate = Some(gate);
            self
        }
    }

    #[async_trait]
    impl PageSource<Row> for Scripted {
        async fn fetch_page(&self, page: u32) -> Result<Paginated<Row>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requested.lock().push(page);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.responses
                .lock()
                .pop_front()
                .unwrap_or_else(|| Ok(Paginated::last(Vec::new())))
        }
    }

    fn ids(list: &PagedList<Row, Scripted>) -> Vec<i64> {
        list.items().iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn test_pages_are_deduplicated_in_first_seen_order() {
        let list = PagedList::new(Scripted::new(vec![
            Ok(page(&[1, 2, 3, 2], true)),
            Ok(page(&[3, 4, 1, 5], true)),
            Ok(page(&[5, 6], false)),
        ]));

        assert_eq!(list.load_first_page().await, LoadStatus::Loaded { added: 3 });
        assert_eq!(list.load_next_page().await, LoadStatus::Loaded { added: 2 });
        assert_eq!(list.load_next_page().await, LoadStatus::Loaded { added: 1 });

        assert_eq!(ids(&list), vec![1, 2, 3, 4, 5, 6]);
        assert!(!list.has_more());
        assert_eq!(list.snapshot().page, 3);
        assert_eq!(*list.source.requested.lock(), vec![1, 2, 3]);

        // End reached: no further request.
        assert_eq!(list.load_next_page().await, LoadStatus::Skipped);
        assert_eq!(list.source.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_failed_reload_after_end_allows_paging_again() {
        let list = PagedList::new(Scripted::new(vec![
            Ok(page(&[1], false)),
            Err(ApiError::new(ErrorKind::Server)),
            Ok(page(&[1, 2], true)),
        ]));

        list.load_first_page().await;
        assert!(!list.has_more());

        assert_eq!(list.load_first_page().await, LoadStatus::Failed);
        assert!(list.items().is_empty());
        assert!(list.has_more());

        assert_eq!(list.load_next_page().await, LoadStatus::Loaded { added: 2 });
        assert_eq!(*list.source.requested.lock(), vec![1, 1, 1]);
    }

    #[tokio::test]
    async fn test_concurrent_load_next_issues_one_request() {
        let gate = Arc::new(Notify::new());
        let list = PagedList::new(Scripted::new(vec![Ok(page(&[1, 2], true))]).gated(gate.clone()));

        let (first, second, _) = tokio::join!(list.load_next_page(), list.load_next_page(), async {
            gate.notify_one();
        });

        assert_eq!(first, LoadStatus::Loaded { added: 2 });
        assert_eq!(second, LoadStatus::Skipped);
        assert_eq!(list.source.calls.load(Ordering::SeqCst), 1);
        assert!(!list.is_loading());
    }

    #[tokio::test]
    async fn test_failed_next_page_keeps_items_and_exposes_error() {
        let list = PagedList::new(Scripted::new(vec![
            Ok(page(&[1, 2], true)),
            Err(ApiError::new(ErrorKind::Network)),
            Ok(page(&[3], false)),
        ]));

        list.load_first_page().await;
        assert_eq!(list.load_next_page().await, LoadStatus::Failed);

        let snapshot = list.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.page, 1);
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.error.as_ref().unwrap().kind, ErrorKind::Network);

        // Retry asks for the same page again and clears the error.
        assert_eq!(list.load_next_page().await, LoadStatus::Loaded { added: 1 });
        assert!(list.error().is_none());
        assert_eq!(*list.source.requested.lock(), vec![1, 2, 2]);
    }

    #[tokio::test]
    async fn test_refresh_failure_retains_items() {
        let list = PagedList::new(Scripted::new(vec![
            Ok(page(&[1, 2], false)),
            Err(ApiError::new(ErrorKind::Server)),
            Ok(page(&[9], false)),
        ]));

        list.load_first_page().await;
        assert_eq!(list.refresh().await, LoadStatus::Failed);
        assert_eq!(ids(&list), vec![1, 2]);
        assert!(list.error().is_some());

        assert_eq!(list.refresh().await, LoadStatus::Loaded { added: 1 });
        assert_eq!(ids(&list), vec![9]);
        assert_eq!(list.snapshot().page, 1);
    }

    #[tokio::test]
    async fn test_load_first_page_clears_before_fetching() {
        let gate = Arc::new(Notify::new());
        let list = PagedList::new(
            Scripted::new(vec![Ok(page(&[1], false)), Ok(page(&[2], false))]).gated(gate.clone()),
        );

        gate.notify_one();
        list.load_first_page().await;
        assert_eq!(ids(&list), vec![1]);

        let observed = tokio::join!(list.load_first_page(), async {
            let during = list.snapshot();
            gate.notify_one();
            during
        });
        assert!(observed.1.items.is_empty());
        assert!(observed.1.is_loading);
        assert_eq!(ids(&list), vec![2]);
    }

    #[tokio::test]
    async fn test_dropped_load_releases_flag() {
        let gate = Arc::new(Notify::new());
        let list = PagedList::new(Scripted::new(vec![]).gated(gate));

        let pending = list.load_next_page();
        tokio::select! {
            _ = pending => unreachable!("gate is never opened"),
            _ = tokio::task::yield_now() => {}
        }
        assert!(!list.is_loading());
    }
}
