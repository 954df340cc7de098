//! Dashboard view state and the transitions that drive it.
//!
//! [`reduce`] is a pure `(state, action) -> state` function; [`Dashboard`]
//! owns the state behind a mutex, performs the network calls, and feeds
//! their outcomes back through `reduce`. The lock is never held across a
//! request, so completions apply in the order responses arrive.

use crate::client::ClassificationClient;
use crate::errors::ValidationError;
use crate::export::build_report;
use crate::log::ResultLog;
use crate::models::{AnalysisRecord, CurrentResult, ExportReport, ViewMode, ViewSnapshot};
use crate::stats::{build_dashboard, probability_breakdown};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

pub const EMPTY_REVIEW: ValidationError = ValidationError("Please enter a review to analyze");
pub const EMPTY_BULK: ValidationError = ValidationError("Please enter reviews to analyze");

const SINGLE_FAILED: &str =
    "Failed to analyze sentiment. Make sure the classification service is running.";
const BULK_FAILED: &str =
    "Failed to analyze reviews. Make sure the classification service is running.";

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub mode: ViewMode,
    pub review_input: String,
    pub bulk_input: String,
    pub loading: bool,
    pub error: Option<String>,
    pub current_result: Option<AnalysisRecord>,
    pub log: ResultLog,
}

impl ViewState {
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            mode: self.mode,
            review_input: self.review_input.clone(),
            bulk_input: self.bulk_input.clone(),
            loading: self.loading,
            error: self.error.clone(),
            current: self.current_result.as_ref().map(|record| CurrentResult {
                confidence: record.confidence(),
                breakdown: probability_breakdown(record),
                record: record.clone(),
            }),
            stats: build_dashboard(&self.log),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Single,
    Bulk,
}

#[derive(Debug, Clone)]
pub enum Action {
    EditReview(String),
    EditBulk(String),
    SwitchTab(ViewMode),
    SubmitRejected(ValidationError),
    SubmitStarted,
    SingleSucceeded(AnalysisRecord),
    BulkSucceeded(Vec<AnalysisRecord>),
    RequestFailed(Flow),
}

pub fn reduce(state: ViewState, action: Action) -> ViewState {
    match action {
        Action::EditReview(review_input) => ViewState {
            review_input,
            ..state
        },
        Action::EditBulk(bulk_input) => ViewState { bulk_input, ..state },
        Action::SwitchTab(mode) => ViewState { mode, ..state },
        Action::SubmitRejected(err) => ViewState {
            error: Some(err.to_string()),
            ..state
        },
        Action::SubmitStarted => ViewState {
            loading: true,
            error: None,
            ..state
        },
        Action::SingleSucceeded(record) => ViewState {
            review_input: String::new(),
            current_result: Some(record.clone()),
            log: state.log.prepend([record]),
            loading: false,
            ..state
        },
        Action::BulkSucceeded(records) => ViewState {
            bulk_input: String::new(),
            log: state.log.prepend(records),
            loading: false,
            ..state
        },
        Action::RequestFailed(flow) => ViewState {
            error: Some(
                match flow {
                    Flow::Single => SINGLE_FAILED,
                    Flow::Bulk => BULK_FAILED,
                }
                .to_string(),
            ),
            loading: false,
            ..state
        },
    }
}

pub fn validate_review(input: &str) -> Result<&str, ValidationError> {
    if input.trim().is_empty() {
        return Err(EMPTY_REVIEW);
    }
    Ok(input)
}

/// One review per non-blank line, in input order.
pub fn split_reviews(input: &str) -> Result<Vec<String>, ValidationError> {
    let reviews: Vec<String> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    if reviews.is_empty() {
        return Err(EMPTY_BULK);
    }
    Ok(reviews)
}

#[derive(Clone)]
pub struct Dashboard {
    state: Arc<Mutex<ViewState>>,
    client: ClassificationClient,
}

impl Dashboard {
    pub fn new(client: ClassificationClient) -> Self {
        Self {
            state: Arc::new(Mutex::new(ViewState::default())),
            client,
        }
    }

    async fn dispatch<I>(&self, actions: I) -> ViewSnapshot
    where
        I: IntoIterator<Item = Action>,
    {
        let mut guard = self.state.lock().await;
        let mut next = std::mem::take(&mut *guard);
        for action in actions {
            next = reduce(next, action);
        }
        *guard = next;
        guard.snapshot()
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn history(&self) -> ResultLog {
        self.state.lock().await.log.clone()
    }

    pub async fn switch_tab(&self, mode: ViewMode) -> ViewSnapshot {
        self.dispatch([Action::SwitchTab(mode)]).await
    }

    pub async fn submit_single(&self, input: String) -> ViewSnapshot {
        if let Err(err) = validate_review(&input) {
            return self
                .dispatch([Action::EditReview(input), Action::SubmitRejected(err)])
                .await;
        }

        let text = input.clone();
        self.dispatch([Action::EditReview(input), Action::SubmitStarted])
            .await;

        match self.client.classify_one(&text).await {
            Ok(record) => {
                info!("classified review as {}", record.label);
                self.dispatch([Action::SingleSucceeded(record)]).await
            }
            Err(err) => {
                warn!("single classification failed: {err}");
                self.dispatch([Action::RequestFailed(Flow::Single)]).await
            }
        }
    }

    pub async fn submit_bulk(&self, input: String) -> ViewSnapshot {
        let reviews = match split_reviews(&input) {
            Ok(reviews) => reviews,
            Err(err) => {
                return self
                    .dispatch([Action::EditBulk(input), Action::SubmitRejected(err)])
                    .await;
            }
        };

        self.dispatch([Action::EditBulk(input), Action::SubmitStarted])
            .await;

        match self.client.classify_batch(&reviews).await {
            Ok(records) => {
                info!("classified batch of {} reviews", records.len());
                self.dispatch([Action::BulkSucceeded(records)]).await
            }
            Err(err) => {
                warn!("batch classification failed: {err}");
                self.dispatch([Action::RequestFailed(Flow::Bulk)]).await
            }
        }
    }

    pub async fn export(&self, exported_at: DateTime<Utc>) -> ExportReport {
        let state = self.state.lock().await;
        build_report(&state.log, exported_at)
    }
}
