use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::client::applied_store::AppliedStore;
use crate::client::error::{ClientError, ClientResult};
use crate::client::pagination::{filter_applied, paginate, total_pages, DEFAULT_PAGE_SIZE};
use crate::client::render::TableView;
use crate::client::search_client::SearchClient;
use crate::client::storage::{FileStorage, Storage};
use crate::config::ClientConfig;
use crate::dto::search_dto::{SearchQuery, SearchResponse};
use crate::models::job::Job;
use crate::utils::time::now;

/// Where the search flow is: `Idle -> Loading -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
}

/// What happened to a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Results arrived and the first page is ready.
    Loaded { jobs: usize },
    /// The search failed; the error panel carries the message.
    Failed,
    /// Nothing was sent because the form was invalid.
    Rejected,
    /// A search was already running, so this submit was dropped.
    Ignored,
}

/// Application state behind the search page: the last results, the applied
/// set, the current page and the panels the UI shows.
pub struct JobSearchApp<S: Storage> {
    client: SearchClient,
    applied: AppliedStore<S>,
    all_jobs: Vec<Job>,
    current_page: usize,
    page_size: usize,
    phase: SearchPhase,
    error_message: Option<String>,
    results_visible: bool,
}

impl<S: Storage> JobSearchApp<S> {
    pub fn new(client: SearchClient, storage: S) -> Self {
        Self {
            client,
            applied: AppliedStore::load(storage),
            all_jobs: Vec::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            phase: SearchPhase::Idle,
            error_message: None,
            results_visible: false,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn all_jobs(&self) -> &[Job] {
        &self.all_jobs
    }

    pub fn applied(&self) -> &AppliedStore<S> {
        &self.applied
    }

    /// Validates the form and enters `Loading`, hiding the old error and
    /// results. Returns the query to send, or why nothing should be sent.
    pub fn begin_search(&mut self, query: SearchQuery) -> Result<SearchQuery, SubmitOutcome> {
        if self.is_loading() {
            debug!("Search already in flight, ignoring submit");
            return Err(SubmitOutcome::Ignored);
        }

        let query = query.normalized();
        if let Err(err) = SearchClient::check_query(&query) {
            warn!(error = %err, "Search form rejected");
            self.error_message = Some(err.user_message());
            return Err(SubmitOutcome::Rejected);
        }

        self.phase = SearchPhase::Loading;
        self.error_message = None;
        self.results_visible = false;
        Ok(query)
    }

    /// Applies the outcome of the request started by [`Self::begin_search`]
    /// and returns to `Idle`.
    pub fn finish_search(&mut self, result: ClientResult<SearchResponse>) -> SubmitOutcome {
        self.phase = SearchPhase::Idle;

        match result {
            Ok(response) => {
                info!(jobs = response.jobs.len(), "Received jobs");
                self.all_jobs = response.jobs;
                self.current_page = 1;
                self.results_visible = true;
                SubmitOutcome::Loaded {
                    jobs: self.all_jobs.len(),
                }
            }
            Err(err) => {
                warn!(error = %err, "Search failed");
                self.error_message = Some(err.user_message());
                self.results_visible = false;
                SubmitOutcome::Failed
            }
        }
    }

    /// Runs a whole search: validate, send, apply the answer.
    pub async fn submit(&mut self, query: SearchQuery) -> SubmitOutcome {
        let query = match self.begin_search(query) {
            Ok(query) => query,
            Err(outcome) => return outcome,
        };
        let result = self.client.search(&query).await;
        self.finish_search(result)
    }

    fn filtered_len(&self) -> usize {
        filter_applied(&self.all_jobs, self.applied.ids()).len()
    }

    /// Moves one page back or forward. Returns `false` when already at the edge.
    pub fn change_page(&mut self, direction: isize) -> bool {
        let total = total_pages(self.filtered_len(), self.page_size);
        let Some(target) = self.current_page.checked_add_signed(direction) else {
            return false;
        };
        if target < 1 || target > total {
            return false;
        }
        self.current_page = target;
        true
    }

    /// Marks a job as applied; it disappears from the next view.
    pub fn mark_applied(&mut self, job_id: &str) -> ClientResult<bool> {
        let added = self.applied.add(job_id)?;
        if added {
            info!(job_id, "Marked job as applied");
        }
        Ok(added)
    }

    /// Forgets every applied job once `confirm` agrees.
    pub fn clear_applied(&mut self, confirm: impl FnOnce() -> bool) -> ClientResult<bool> {
        let cleared = self.applied.clear(confirm)?;
        if cleared {
            info!("Cleared applied jobs");
        }
        Ok(cleared)
    }

    /// Builds the view for the current page, filtering applied jobs afresh.
    pub fn view(&mut self) -> TableView {
        self.view_at(now())
    }

    pub fn view_at(&mut self, now: DateTime<Utc>) -> TableView {
        let filtered = filter_applied(&self.all_jobs, self.applied.ids());
        let page = paginate(&filtered, self.current_page, self.page_size);
        self.current_page = page.number;
        TableView::build(&page, self.applied.len(), now)
    }

    /// Surfaces a storage failure from an action the same way a failed search is.
    pub fn report_error(&mut self, err: &ClientError) {
        self.error_message = Some(err.user_message());
    }
}

impl JobSearchApp<FileStorage> {
    /// App persisting its applied set to the configured file.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            SearchClient::new(config.search_endpoint.clone()),
            FileStorage::new(&config.applied_store_path),
        )
        .with_page_size(config.jobs_per_page)
    }
}
