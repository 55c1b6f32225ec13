//! Improvement feedback form controller.
//!
//! [`FeedbackSubmitter`] reads the four contact fields, posts them and tells
//! the user how it went. There is no client-side validation; any 2xx reply
//! counts as success and everything else leaves the form as it was.

use std::sync::Arc;

use tokio::time::Instant;

use crate::error::ReviewKitError;
use crate::events::{DomEvent, EventBinding, feedback_bindings, resolve};
use crate::messages::FeedbackMsg;
use crate::models::{FeedbackPayload, FormKind};
use crate::page::{ElementId, PageSurface};
use crate::submission::SubmissionLatch;
use crate::telemetry::{NoopTelemetrySink, SubmissionStatus, TelemetryEvent, TelemetrySink};
use crate::transport::{FEEDBACK_ENDPOINT, FormTransport};

/// Notice shown after the server accepted the feedback.
pub const CONFIRMATION_NOTICE: &str = "Thank you for your feedback. We will contact you soon.";
/// Notice shown when the feedback could not be delivered.
pub const ERROR_NOTICE: &str = "There was an error submitting your feedback. Please try again.";
/// Where the page goes after a successful submission.
pub const HOME_LOCATION: &str = "/";

const MAX_ERROR_BODY_CHARS: usize = 160;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// The server accepted the feedback; the page moved to `/`.
    Confirmed,
    /// A previous submission is still in flight; nothing was sent.
    AlreadySubmitting,
    /// The request failed or the server refused it; the form is untouched.
    Failed(ReviewKitError),
}

/// Controller for the feedback form.
pub struct FeedbackSubmitter {
    page: Arc<dyn PageSurface>,
    transport: Arc<dyn FormTransport>,
    telemetry: Arc<dyn TelemetrySink>,
    bindings: Vec<EventBinding<FeedbackMsg>>,
    latch: SubmissionLatch,
}

impl std::fmt::Debug for FeedbackSubmitter {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FeedbackSubmitter")
            .field("latch", &self.latch)
            .finish_non_exhaustive()
    }
}

impl FeedbackSubmitter {
    /// Attaches a submitter to `page`.
    #[must_use]
    pub fn new(page: Arc<dyn PageSurface>, transport: Arc<dyn FormTransport>) -> Self {
        Self {
            page,
            transport,
            telemetry: Arc::new(NoopTelemetrySink),
            bindings: feedback_bindings(),
            latch: SubmissionLatch::default(),
        }
    }

    /// Routes telemetry events to `sink`.
    #[must_use]
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    /// Returns this submitter's listener table.
    #[must_use]
    pub fn bindings(&self) -> &[EventBinding<FeedbackMsg>] {
        &self.bindings
    }

    /// Returns true while a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.latch.is_submitting()
    }

    /// Reads the current field values into a payload.
    #[must_use]
    pub fn collect_payload(&self) -> FeedbackPayload {
        FeedbackPayload {
            improvement_feedback: self.page.value(ElementId::ImprovementFeedback),
            name: self.page.value(ElementId::Name),
            contact_info: self.page.value(ElementId::ContactInfo),
            preferred_contact: self.page.value(ElementId::PreferredContact),
        }
    }

    /// Reacts to a message.
    pub async fn handle(&self, message: FeedbackMsg) -> FeedbackOutcome {
        match message {
            FeedbackMsg::Submit => self.submit().await,
        }
    }

    /// Handles `event` firing on `target`; unbound pairs are ignored.
    pub async fn dispatch(&self, target: ElementId, event: DomEvent) -> Option<FeedbackOutcome> {
        let message = resolve(&self.bindings, target, event)?;
        Some(self.handle(message).await)
    }

    /// Posts the form and reports the result to the user.
    pub async fn submit(&self) -> FeedbackOutcome {
        let Some(_in_flight) = self.latch.try_begin() else {
            tracing::debug!("feedback submit ignored while a request is in flight");
            return FeedbackOutcome::AlreadySubmitting;
        };

        let payload = self.collect_payload();
        let started = Instant::now();
        let result = self.post(&payload).await;
        self.telemetry.record(TelemetryEvent::SubmissionCompleted {
            form: FormKind::Feedback,
            outcome: SubmissionStatus::of(&result),
            latency_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        });

        match result {
            Ok(()) => {
                self.page.notify(CONFIRMATION_NOTICE);
                self.page.navigate(HOME_LOCATION);
                FeedbackOutcome::Confirmed
            }
            Err(error) => {
                tracing::error!(%error, "feedback submission failed");
                self.page.notify(ERROR_NOTICE);
                FeedbackOutcome::Failed(error)
            }
        }
    }

    async fn post(&self, payload: &FeedbackPayload) -> Result<(), ReviewKitError> {
        let body = serde_json::to_value(payload).map_err(|error| ReviewKitError::Decode {
            message: error.to_string(),
        })?;
        let reply = self.transport.post_json(FEEDBACK_ENDPOINT, &body).await?;
        if reply.is_success() {
            return Ok(());
        }

        Err(ReviewKitError::Api {
            status: reply.status,
            message: reply.body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        })
    }
}
