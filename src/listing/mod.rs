//! Paginated, sortable URL list state
//!
//! [`ListQuery`] is the single source of truth for what to fetch. Mutating it
//! through the view-model re-issues the fetch; a resolution that arrives after
//! a newer fetch was issued is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::client::{ListUrlsParams, ShortenerApi, UrlScope};
use crate::errors::ClientError;
use crate::models::{PerPage, SortField, SortOrder, SortSpec, UrlListResponse};
use crate::session::{AuthSession, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: PerPage,
    pub sort: SortSpec,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PerPage::default(),
            sort: SortSpec::default(),
        }
    }
}

impl ListQuery {
    pub fn new(per_page: PerPage, sort: SortSpec) -> Self {
        Self {
            page: 1,
            per_page,
            sort,
        }
    }

    /// Same sort and page size, different page
    pub fn with_page(self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    /// New sort, back to the first page
    pub fn with_sort(self, sort: SortSpec) -> Self {
        Self {
            page: 1,
            sort,
            ..self
        }
    }

    /// New page size, back to the first page
    pub fn with_per_page(self, per_page: PerPage) -> Self {
        Self {
            page: 1,
            per_page,
            ..self
        }
    }

    pub fn to_params(&self) -> ListUrlsParams {
        ListUrlsParams {
            page: Some(self.page),
            per_page: Some(self.per_page),
            sort_by: Some(self.sort.sort_by),
            order: Some(self.sort.order),
        }
    }
}

/// Result of a [`ListViewModel::refresh`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Scope needs a session and there is none; nothing was sent
    Skipped,
    /// Navigation was a no-op (already on the first/last page)
    Unchanged,
    /// The response (data or error) is now the visible state
    Applied,
    /// A newer fetch was issued while this one was in flight
    Stale,
}

/// Point-in-time copy of the list state for rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListSnapshot {
    pub scope: UrlScope,
    pub query: ListQuery,
    pub loading: bool,
    pub error: Option<ClientError>,
    pub data: Option<UrlListResponse>,
}

impl ListSnapshot {
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_none_or(|d| d.urls.is_empty())
    }
}

pub struct ListViewModel {
    api: Arc<dyn ShortenerApi>,
    session: Arc<AuthSession>,
    state: Mutex<ListSnapshot>,
    generation: AtomicU64,
}

impl ListViewModel {
    pub fn new(
        api: Arc<dyn ShortenerApi>,
        session: Arc<AuthSession>,
        scope: UrlScope,
        query: ListQuery,
    ) -> Self {
        Self {
            api,
            session,
            state: Mutex::new(ListSnapshot {
                scope,
                query,
                ..Default::default()
            }),
            generation: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> ListSnapshot {
        self.state.lock().clone()
    }

    pub fn query(&self) -> ListQuery {
        self.state.lock().query
    }

    pub fn scope(&self) -> UrlScope {
        self.state.lock().scope
    }

    pub async fn set_sort_by(&self, sort_by: SortField) -> FetchOutcome {
        self.update_query(|q| q.with_sort(SortSpec::new(sort_by, q.sort.order)));
        self.refresh().await
    }

    pub async fn set_order(&self, order: SortOrder) -> FetchOutcome {
        self.update_query(|q| q.with_sort(SortSpec::new(q.sort.sort_by, order)));
        self.refresh().await
    }

    pub async fn set_sort(&self, sort: SortSpec) -> FetchOutcome {
        self.update_query(|q| q.with_sort(sort));
        self.refresh().await
    }

    pub async fn set_per_page(&self, per_page: PerPage) -> FetchOutcome {
        self.update_query(|q| q.with_per_page(per_page));
        self.refresh().await
    }

    /// Jump to `page`, clamped to the last known page count
    pub async fn set_page(&self, page: u32) -> FetchOutcome {
        self.update_query(|q| q.with_page(page));
        self.refresh().await
    }

    pub async fn next_page(&self) -> FetchOutcome {
        let target = {
            let state = self.state.lock();
            match &state.data {
                Some(data) if data.pagination.has_next => Some(state.query.page + 1),
                _ => None,
            }
        };
        match target {
            Some(page) => self.set_page(page).await,
            None => FetchOutcome::Unchanged,
        }
    }

    pub async fn prev_page(&self) -> FetchOutcome {
        let target = {
            let state = self.state.lock();
            match &state.data {
                Some(data) if data.pagination.has_prev => Some(state.query.page.saturating_sub(1)),
                _ => None,
            }
        };
        match target {
            Some(page) => self.set_page(page).await,
            None => FetchOutcome::Unchanged,
        }
    }

    /// Switch between "all" and "mine"; resets to the first page
    pub async fn set_scope(&self, scope: UrlScope) -> FetchOutcome {
        {
            let mut state = self.state.lock();
            state.scope = scope;
            state.query = state.query.with_page(1);
            state.data = None;
            state.error = None;
        }
        self.refresh().await
    }

    /// React to a session transition
    pub async fn handle_session_change(&self, state: &SessionState) -> FetchOutcome {
        match state {
            SessionState::Unknown => FetchOutcome::Unchanged,
            SessionState::Authenticated { .. } | SessionState::Anonymous => self.refresh().await,
        }
    }

    /// Fetch the current query
    pub async fn refresh(&self) -> FetchOutcome {
        let (scope, params, generation) = {
            let mut state = self.state.lock();
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

            if state.scope.requires_auth() && !self.session.is_authenticated() {
                debug!("Skipping {} fetch: not authenticated", state.scope.path());
                state.loading = false;
                // a 401 that ended the session stays visible until the next fetch
                state.error = state.error.take().filter(ClientError::is_unauthorized);
                state.data = None;
                return FetchOutcome::Skipped;
            }

            state.loading = true;
            state.error = None;
            (state.scope, state.query.to_params(), generation)
        };

        let result = self.api.list_urls(scope, &params).await;

        if let Err(e) = &result
            && e.is_unauthorized()
        {
            warn!("List request rejected with 401, ending session");
            self.session.logout().await;
        }

        let mut state = self.state.lock();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Discarding stale list response (generation {})", generation);
            return FetchOutcome::Stale;
        }

        state.loading = false;
        match result {
            Ok(data) => {
                state.error = None;
                state.data = Some(data);
            }
            Err(e) => {
                state.error = Some(e);
            }
        }
        FetchOutcome::Applied
    }

    fn update_query(&self, f: impl FnOnce(ListQuery) -> ListQuery) {
        let mut state = self.state.lock();
        let mut next = f(state.query);
        if let Some(data) = &state.data
            && data.pagination.pages > 0
            && next.per_page == state.query.per_page
        {
            next.page = next.page.min(data.pagination.pages);
        }
        state.query = next;
    }
}
