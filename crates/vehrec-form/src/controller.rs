//! Page controller: form, phase, and the latest recommendations
//!
//! # Workflow
//! 1. Input events edit the form (refused while pending)
//! 2. `submit` validates, builds the payload and enters `Pending`
//! 3. The caller sends the payload and hands the outcome to `complete`
//! 4. A matching completion replaces the displayed results wholesale
//!
//! Each submission carries a fresh [`RequestToken`]. A completion whose
//! token is not the one pending is dropped, so a late response can never
//! overwrite newer state.

use crate::form::{FormError, FormEvent, FormState};
use crate::state::{validate_transition, Phase, StateError};
use serde::Serialize;
use std::fmt;
use vehrec_client::{RecommendationClient, RequestError};
use vehrec_core::{
    validate_query, Field, PayloadError, PredictionResult, ValidationErrors, VehicleQueryPayload,
};
use vehrec_render::RecommendationView;

/// Submit button label while idle
pub const SUBMIT_LABEL: &str = "Get Recommendation";

/// Submit button label while pending
pub const PENDING_LABEL: &str = "Loading...";

/// Monotonic submission identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(pub u64);

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where the page wants focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Focus {
    /// The form
    Form,
    /// The recommendations section
    Recommendations,
}

/// Accepted submission, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Token to hand back to `complete`
    pub token: RequestToken,
    /// Request body
    pub payload: VehicleQueryPayload,
}

/// What `complete` did with an outcome
#[derive(Debug)]
pub enum Completion {
    /// Results replaced
    Applied,
    /// Request failed; page is now `Failed`
    Failed(RequestError),
    /// Token was not the pending one; nothing changed
    Stale,
}

/// Submission errors
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// A request is already outstanding
    #[error("a request is already pending")]
    Pending,

    /// Field constraints not met; shown inline
    #[error("{0}")]
    Invalid(#[from] ValidationErrors),

    /// Numeric field did not convert
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),

    /// Phase table refused the move
    #[error("state error: {0}")]
    State(#[from] StateError),

    /// Request pipeline failed
    #[error("request failed: {0}")]
    Request(#[from] RequestError),

    /// Completion was dropped as stale
    #[error("response superseded by a newer submission")]
    Superseded,
}

#[derive(Debug, Clone)]
struct Displayed {
    token: RequestToken,
    predictions: Option<Vec<PredictionResult>>,
}

/// Page-level view state
#[derive(Debug, Clone)]
pub struct FormController {
    form: FormState,
    phase: Phase,
    last_token: u64,
    pending: Option<RequestToken>,
    displayed: Option<Displayed>,
    last_error: Option<String>,
    focus: Focus,
}

impl FormController {
    /// Fresh page
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: FormState::new(),
            phase: Phase::Idle,
            last_token: 0,
            pending: None,
            displayed: None,
            last_error: None,
            focus: Focus::Form,
        }
    }

    /// Apply an input event
    ///
    /// # Errors
    /// - `FormError::Locked` while a request is pending
    /// - `FormError::UnknownOption` for a value outside a dropdown catalog
    pub fn apply(&mut self, event: FormEvent) -> Result<(), FormError> {
        if self.inputs_disabled() {
            return Err(FormError::Locked);
        }
        self.form.apply(event)
    }

    /// Shorthand for an edit event
    ///
    /// # Errors
    /// See [`FormController::apply`].
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        self.apply(FormEvent::edit(field, value))
    }

    /// Validate and enter `Pending`
    ///
    /// An invalid form leaves the phase unchanged and makes the inline
    /// errors visible.
    ///
    /// # Errors
    /// `SubmitError::Pending`, `Invalid`, `Payload` or `State`.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        if self.phase.is_locked() {
            return Err(SubmitError::Pending);
        }

        self.form.mark_submitted();
        let query = validate_query(self.form.values()).map_err(|errors| {
            tracing::debug!("Submission blocked: {}", errors);
            errors
        })?;
        let payload = VehicleQueryPayload::from_query(&query)?;

        validate_transition(self.phase, Phase::Pending)?;
        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.phase = Phase::Pending;
        self.pending = Some(token);
        self.last_error = None;

        tracing::info!(
            "Submitting {} {} {} ({} / {}) as {}",
            payload.company,
            payload.fuel,
            payload.transmission,
            payload.price,
            payload.year,
            token
        );
        Ok(Submission { token, payload })
    }

    /// Hand back the outcome of a submission
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<Option<Vec<PredictionResult>>, RequestError>,
    ) -> Completion {
        if self.pending != Some(token) {
            tracing::warn!(
                "Ignoring stale completion {} (pending: {:?})",
                token,
                self.pending.map(|t| t.0)
            );
            return Completion::Stale;
        }

        let next = if outcome.is_ok() { Phase::Ready } else { Phase::Failed };
        if let Err(e) = validate_transition(self.phase, next) {
            tracing::error!("Dropping completion {}: {}", token, e);
            return Completion::Stale;
        }
        self.phase = next;
        self.pending = None;

        match outcome {
            Ok(predictions) => {
                tracing::info!(
                    "Completion {} shows {} recommendations",
                    token,
                    predictions.as_ref().map_or(0, Vec::len)
                );
                self.displayed = Some(Displayed { token, predictions });
                self.focus = Focus::Recommendations;
                Completion::Applied
            }
            Err(e) => {
                tracing::error!("Completion {} failed: {}", token, e);
                self.last_error = Some(e.to_string());
                Completion::Failed(e)
            }
        }
    }

    /// Submit, send through `client`, and apply the response
    ///
    /// # Errors
    /// Any [`SubmitError`]; a request failure also moves the page to `Failed`.
    pub async fn submit_with<C>(&mut self, client: &C) -> Result<RecommendationView, SubmitError>
    where
        C: RecommendationClient + ?Sized,
    {
        let Submission { token, payload } = self.submit()?;
        let outcome = client.recommend(&payload).await;

        match self.complete(token, outcome) {
            Completion::Applied => Ok(self.recommendations().unwrap_or_else(|| {
                RecommendationView::from_predictions(None)
            })),
            Completion::Failed(e) => Err(SubmitError::Request(e)),
            Completion::Stale => Err(SubmitError::Superseded),
        }
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Form values and inline errors
    #[inline]
    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Inputs, reset and submit are all disabled
    #[inline]
    #[must_use]
    pub fn inputs_disabled(&self) -> bool {
        self.phase.is_locked()
    }

    /// Submit button label
    #[inline]
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.inputs_disabled() {
            PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Token of the outstanding request
    #[inline]
    #[must_use]
    pub fn pending_token(&self) -> Option<RequestToken> {
        self.pending
    }

    /// Token whose response is on display
    #[must_use]
    pub fn displayed_token(&self) -> Option<RequestToken> {
        self.displayed.as_ref().map(|d| d.token)
    }

    /// Predictions from the latest accepted response
    #[must_use]
    pub fn predictions(&self) -> Option<&[PredictionResult]> {
        self.displayed
            .as_ref()
            .and_then(|d| d.predictions.as_deref())
    }

    /// Recommendations section; `None` until a response has been accepted
    #[must_use]
    pub fn recommendations(&self) -> Option<RecommendationView> {
        self.displayed
            .as_ref()
            .map(|d| RecommendationView::from_predictions(d.predictions.as_deref()))
    }

    /// Message of the last failed request
    #[inline]
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Requested focus
    #[inline]
    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
