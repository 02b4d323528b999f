//! HTTP request handlers for the portal API.
//!
//! Implements the request workflow, filtered browsing, mock matching, and
//! PII findings lookup endpoints using axum.

use crate::config::ApiConfig;
use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, patch, post},
    Router,
};
use rand::Rng;
use recordsdesk_domain::{
    NewRequest, PiiFinding, RequestId, RequestRecord, RequestStatus, RequestStore, SavedRequest,
    Timestamp,
};
use recordsdesk_matcher::{Jitter, MatchOutcome, Matcher};
use recordsdesk_pii::FindingsIndex;
use recordsdesk_search::{filter, query_state, DebouncedSync};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tracing::{debug, info};

/// Shared application state
pub struct AppState<S> {
    /// Request store behind a lock; handlers never hold it across awaits
    pub store: Arc<Mutex<S>>,
    /// PII findings index, read-only after startup
    pub findings: Arc<FindingsIndex>,
    /// The mock matcher and its candidate pool
    pub matcher: Arc<Matcher>,
    /// Last persisted browse-view query string
    pub view_query: Arc<RwLock<String>>,
    /// Debounced writer that keeps `view_query` in step with filter changes
    pub view_sync: Arc<DebouncedSync<String>>,
    /// Simulated match latency window (ms)
    pub match_delay_ms: (u64, u64),
    /// Fixed jitter seed, when configured
    pub match_seed: Option<u64>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            findings: Arc::clone(&self.findings),
            matcher: Arc::clone(&self.matcher),
            view_query: Arc::clone(&self.view_query),
            view_sync: Arc::clone(&self.view_sync),
            match_delay_ms: self.match_delay_ms,
            match_seed: self.match_seed,
        }
    }
}

impl<S> AppState<S> {
    /// Assemble application state; must run inside a tokio runtime because
    /// the debounced writer spawns its timer worker
    pub fn new(store: S, findings: FindingsIndex, matcher: Matcher, config: &ApiConfig) -> Self {
        let view_query = Arc::new(RwLock::new(String::new()));
        let sink_target = Arc::clone(&view_query);
        let view_sync = DebouncedSync::new(
            Duration::from_millis(config.view_debounce_ms),
            move |encoded: String| {
                if let Ok(mut slot) = sink_target.write() {
                    *slot = encoded;
                }
            },
        );

        Self {
            store: Arc::new(Mutex::new(store)),
            findings: Arc::new(findings),
            matcher: Arc::new(matcher),
            view_query,
            view_sync: Arc::new(view_sync),
            match_delay_ms: (config.match_delay_min_ms, config.match_delay_max_ms),
            match_seed: config.match_seed,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Number of stored requests
    pub request_count: usize,
}

/// Status update payload
#[derive(Debug, Serialize, Deserialize)]
pub struct SetStatusBody {
    /// The status to move the request to; any status may follow any other
    pub status: RequestStatus,
}

/// Internal note payload
#[derive(Debug, Serialize, Deserialize)]
pub struct AddNoteBody {
    /// Staff member writing the note
    pub author: String,
    /// Note text
    pub body: String,
}

/// Accept-candidate payload
#[derive(Debug, Serialize, Deserialize)]
pub struct AcceptCandidateBody {
    /// Candidate id from a previous match response
    pub candidate_id: String,
    /// Score the matcher reported for this candidate
    pub relevance_score: f64,
    /// Staff member accepting the candidate
    pub accepted_by: String,
}

/// Match request payload
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchBody {
    /// Free-text description to extract terms from
    pub description: String,
    /// Extra search terms appended to the extracted ones
    #[serde(default)]
    pub extra_terms: Vec<String>,
    /// Jitter seed override for reproducible scoring
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Persisted browse-view response
#[derive(Debug, Serialize, Deserialize)]
pub struct ViewResponse {
    /// The query string of the most recently persisted view
    pub query: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Storage failure, surfaced as a plain message
    Store(String),
    /// Request or resource not found
    NotFound(String),
    /// Accept referenced a candidate id the pool does not contain
    UnknownCandidate(String),
    /// Store lock poisoned by a panicking handler
    LockPoisoned,
}

impl AppError {
    fn store(e: impl Display) -> Self {
        AppError::Store(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Store(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::NotFound(what) => (StatusCode::NOT_FOUND, format!("{} not found", what)),
            AppError::UnknownCandidate(id) => {
                (StatusCode::NOT_FOUND, format!("unknown candidate: {}", id))
            }
            AppError::LockPoisoned => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store lock poisoned".to_string(),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

/// Build the application router
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    Router::new()
        .route("/health", get(health::<S>))
        .route(
            "/requests",
            get(list_requests::<S>).post(submit_request::<S>),
        )
        .route("/requests/track/:code", get(track_request::<S>))
        .route("/requests/:id/status", patch(set_status::<S>))
        .route("/requests/:id/notes", post(add_note::<S>))
        .route("/requests/:id/associations", post(accept_candidate::<S>))
        .route("/match", post(run_match::<S>))
        .route("/pii/:record_id", get(pii_findings::<S>))
        .route("/views/current", get(current_view::<S>))
        .with_state(state)
}

/// Fetch a request by id, apply a mutation, and persist it
fn mutate_record<S, F>(state: &AppState<S>, id: &str, mutate: F) -> Result<RequestRecord, AppError>
where
    S: RequestStore,
    S::Error: Display,
    F: FnOnce(&mut RequestRecord),
{
    let mut store = state.store.lock().map_err(|_| AppError::LockPoisoned)?;
    let rid = RequestId::from_raw(id);
    let mut record = store
        .get(&rid)
        .map_err(AppError::store)?
        .ok_or_else(|| AppError::NotFound(format!("request {}", id)))?;

    mutate(&mut record);
    store.update(&record).map_err(AppError::store)?;
    Ok(record)
}

async fn health<S>(State(state): State<AppState<S>>) -> Result<Json<HealthCheckResponse>, AppError>
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    let request_count = {
        let store = state.store.lock().map_err(|_| AppError::LockPoisoned)?;
        store.list_all().map_err(AppError::store)?.len()
    };

    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        request_count,
    }))
}

/// Filtered browse over all requests
///
/// Decodes the five filter parameters leniently (a malformed date is an
/// unset bound, never an error), derives the filtered view from a snapshot
/// of the full list, and schedules a debounced write of the active view.
async fn list_requests<S>(
    State(state): State<AppState<S>>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<RequestRecord>>, AppError>
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    let criteria = query_state::decode(query.as_deref().unwrap_or(""));

    let records = {
        let store = state.store.lock().map_err(|_| AppError::LockPoisoned)?;
        store.list_all().map_err(AppError::store)?
    };
    let filtered = filter::apply(&records, &criteria);
    debug!(
        total = records.len(),
        filtered = filtered.len(),
        "browse view computed"
    );

    // Replace (not stack) the persisted view; earlier pending writes in
    // the quiet window are discarded
    state.view_sync.update(query_state::encode(&criteria));

    Ok(Json(filtered))
}

async fn submit_request<S>(
    State(state): State<AppState<S>>,
    Json(new): Json<NewRequest>,
) -> Result<(StatusCode, Json<SavedRequest>), AppError>
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    let saved = {
        let mut store = state.store.lock().map_err(|_| AppError::LockPoisoned)?;
        store.save(new).map_err(AppError::store)?
    };
    info!(tracking_code = %saved.tracking_code, "request submitted");

    Ok((StatusCode::CREATED, Json(saved)))
}

async fn track_request<S>(
    State(state): State<AppState<S>>,
    Path(code): Path<String>,
) -> Result<Json<RequestRecord>, AppError>
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    let record = {
        let store = state.store.lock().map_err(|_| AppError::LockPoisoned)?;
        store.find_by_tracking_code(&code).map_err(AppError::store)?
    };

    record
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("tracking code {}", code)))
}

async fn set_status<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(body): Json<SetStatusBody>,
) -> Result<Json<RequestRecord>, AppError>
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    let record = mutate_record(&state, &id, |record| {
        record.set_status(body.status, Timestamp::now());
    })?;
    info!(id = %record.id, status = %record.status, "status updated");

    Ok(Json(record))
}

async fn add_note<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(body): Json<AddNoteBody>,
) -> Result<Json<RequestRecord>, AppError>
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    let AddNoteBody { author, body } = body;
    let record = mutate_record(&state, &id, |record| {
        record.add_note(author, body, Timestamp::now());
    })?;

    Ok(Json(record))
}

async fn accept_candidate<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(body): Json<AcceptCandidateBody>,
) -> Result<Json<RequestRecord>, AppError>
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    let AcceptCandidateBody {
        candidate_id,
        relevance_score,
        accepted_by,
    } = body;

    let entry = state
        .matcher
        .candidate(&candidate_id)
        .ok_or_else(|| AppError::UnknownCandidate(candidate_id.clone()))?
        .clone();
    let candidate = entry.into_candidate(relevance_score, 1.0 - relevance_score);

    let record = mutate_record(&state, &id, |record| {
        record.accept_candidate(&candidate, accepted_by, Timestamp::now());
    })?;
    info!(id = %record.id, candidate = %candidate_id, "candidate accepted");

    Ok(Json(record))
}

/// Run the mock matcher
///
/// Sleeps for a configured interval first; the delay is a UX placeholder
/// for a future real search call and is zero in tests.
async fn run_match<S>(
    State(state): State<AppState<S>>,
    Json(body): Json<MatchBody>,
) -> Result<Json<MatchOutcome>, AppError>
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    let (min_ms, max_ms) = state.match_delay_ms;
    if max_ms > 0 {
        let delay = if min_ms == max_ms {
            min_ms
        } else {
            rand::thread_rng().gen_range(min_ms..=max_ms)
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let mut jitter = match body.seed.or(state.match_seed) {
        Some(seed) => Jitter::seeded(seed),
        None => Jitter::seeded(rand::random()),
    };
    let outcome = state
        .matcher
        .search(&body.description, &body.extra_terms, &mut jitter);
    debug!(results = outcome.results.len(), "match completed");

    Ok(Json(outcome))
}

async fn pii_findings<S>(
    State(state): State<AppState<S>>,
    Path(record_id): Path<String>,
) -> Result<Json<Vec<PiiFinding>>, AppError>
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    Ok(Json(state.findings.for_record(&record_id).to_vec()))
}

async fn current_view<S>(State(state): State<AppState<S>>) -> Result<Json<ViewResponse>, AppError>
where
    S: RequestStore + Send + 'static,
    S::Error: Display,
{
    let query = state
        .view_query
        .read()
        .map_err(|_| AppError::LockPoisoned)?
        .clone();

    Ok(Json(ViewResponse { query }))
}
