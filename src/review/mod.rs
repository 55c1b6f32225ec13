//! Star-rating review form controller.
//!
//! [`ReviewWidget`] owns the committed rating, keeps the five star icons in
//! sync with it, gates submission on client-side validation and posts the
//! review. Hovering previews a rating without committing it; clicking is the
//! only transition that changes the committed value.
//!
//! Submission moves through `Idle → Validating → Blocked | Submitting`, and
//! from `Submitting` to either a redirect or a transient error banner. While
//! a request is in flight further submits are rejected.

mod rating;
mod validation;

pub use rating::{Rating, RatingModel, STAR_COUNT, StarIndex, StarRow, StarVariant};
pub use validation::{ValidationReport, validate_review};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::error::ReviewKitError;
use crate::events::{DomEvent, EventBinding, resolve, review_bindings};
use crate::messages::ReviewMsg;
use crate::models::{FormKind, ReviewPayload, ReviewReply};
use crate::page::{Banner, ElementId, PageSurface};
use crate::submission::SubmissionLatch;
use crate::telemetry::{NoopTelemetrySink, SubmissionStatus, TelemetryEvent, TelemetrySink};
use crate::transport::{FormTransport, REVIEW_ENDPOINT};

/// Container decoration while no rating is selected at submit time.
pub const RATING_ERROR_CLASS: &str = "rating-error";
/// Label decoration while no rating is selected at submit time.
pub const TEXT_DANGER_CLASS: &str = "text-danger";
/// Transient container decoration drawing attention to the stars.
pub const SHAKE_CLASS: &str = "shake-animation";
/// Textarea decoration for blank review text.
pub const INVALID_INPUT_CLASS: &str = "is-invalid";

/// Label text shown when the rating is missing.
pub const RATING_PROMPT: &str = "Please select a rating";
/// Description text shown when the rating is missing.
pub const RATING_HINT: &str = "Click the stars above to rate your experience";
/// Banner text shown when the review could not be submitted.
pub const SUBMIT_ERROR_MESSAGE: &str =
    "An error occurred while submitting your review. Please try again.";

const DEFAULT_SHAKE: Duration = Duration::from_millis(650);
const DEFAULT_BANNER: Duration = Duration::from_millis(5000);

/// How long transient decorations stay on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetTimings {
    /// Lifetime of the shake animation class.
    pub shake: Duration,
    /// Lifetime of the submission error banner.
    pub banner: Duration,
}

impl Default for WidgetTimings {
    fn default() -> Self {
        Self {
            shake: DEFAULT_SHAKE,
            banner: DEFAULT_BANNER,
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Validation failed; nothing was sent.
    Blocked(ValidationReport),
    /// A previous submission is still in flight; nothing was sent.
    AlreadySubmitting,
    /// The server asked for navigation and the page followed.
    Redirected(String),
    /// The server answered without a redirect; the page stays put.
    Accepted {
        /// Error text the server included in its reply, if any.
        server_error: Option<String>,
    },
    /// The request or the reply decoding failed; an error banner is shown.
    Failed(ReviewKitError),
}

/// Controller for the review form.
pub struct ReviewWidget {
    page: Arc<dyn PageSurface>,
    transport: Arc<dyn FormTransport>,
    telemetry: Arc<dyn TelemetrySink>,
    timings: WidgetTimings,
    bindings: Vec<EventBinding<ReviewMsg>>,
    model: Mutex<RatingModel>,
    latch: SubmissionLatch,
}

impl std::fmt::Debug for ReviewWidget {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ReviewWidget")
            .field("timings", &self.timings)
            .field("model", &self.model)
            .field("latch", &self.latch)
            .finish_non_exhaustive()
    }
}

impl ReviewWidget {
    /// Attaches a widget to `page` with an unset rating and outline stars.
    #[must_use]
    pub fn new(page: Arc<dyn PageSurface>, transport: Arc<dyn FormTransport>) -> Self {
        let widget = Self {
            page,
            transport,
            telemetry: Arc::new(NoopTelemetrySink),
            timings: WidgetTimings::default(),
            bindings: review_bindings(),
            model: Mutex::new(RatingModel::default()),
            latch: SubmissionLatch::default(),
        };
        widget.paint(StarRow::default());
        widget
    }

    /// Replaces the decoration lifetimes.
    #[must_use]
    pub fn with_timings(mut self, timings: WidgetTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Routes telemetry events to `sink`.
    #[must_use]
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }

    fn model(&self) -> MutexGuard<'_, RatingModel> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the committed rating.
    #[must_use]
    pub fn rating(&self) -> Rating {
        self.model().rating()
    }

    /// Returns what the stars currently show.
    #[must_use]
    pub fn visual_row(&self) -> StarRow {
        self.model().row()
    }

    /// Returns true while a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.latch.is_submitting()
    }

    /// Returns this widget's listener table.
    #[must_use]
    pub fn bindings(&self) -> &[EventBinding<ReviewMsg>] {
        &self.bindings
    }

    /// Previews the rating at `index` without committing it.
    pub fn hover(&self, index: StarIndex) {
        let row = self.model().hover(index);
        self.paint(row);
    }

    /// Re-renders the stars from the committed rating.
    pub fn unhover(&self) {
        let row = self.model().unhover();
        self.paint(row);
    }

    /// Commits the rating at `index` and clears the missing-rating error.
    pub fn click(&self, index: StarIndex) {
        let (row, rating) = {
            let mut model = self.model();
            let row = model.click(index);
            (row, model.rating())
        };
        tracing::debug!(rating = rating.get(), "rating committed");

        self.paint(row);
        self.page
            .set_value(ElementId::RatingInput, &rating.get().to_string());
        self.page
            .remove_class(ElementId::StarContainer, RATING_ERROR_CLASS);
        self.page.remove_class(ElementId::RatingText, TEXT_DANGER_CLASS);
    }

    /// Reacts to a message. Only [`ReviewMsg::Submit`] yields an outcome.
    pub async fn handle(&self, message: ReviewMsg) -> Option<ReviewOutcome> {
        match message {
            ReviewMsg::Hover(index) => {
                self.hover(index);
                None
            }
            ReviewMsg::Unhover => {
                self.unhover();
                None
            }
            ReviewMsg::Click(index) => {
                self.click(index);
                None
            }
            ReviewMsg::Submit => Some(self.submit().await),
        }
    }

    /// Handles `event` firing on `target`; unbound pairs are ignored.
    pub async fn dispatch(&self, target: ElementId, event: DomEvent) -> Option<ReviewOutcome> {
        let message = resolve(&self.bindings, target, event)?;
        self.handle(message).await
    }

    /// Validates the form and, when it passes, posts the review.
    pub async fn submit(&self) -> ReviewOutcome {
        let Some(_in_flight) = self.latch.try_begin() else {
            tracing::debug!("review submit ignored while a request is in flight");
            return ReviewOutcome::AlreadySubmitting;
        };

        let feedback = self.page.value(ElementId::FeedbackText);
        let payload = match validate_review(self.rating(), &feedback) {
            Ok(payload) => {
                self.page
                    .remove_class(ElementId::FeedbackText, INVALID_INPUT_CLASS);
                payload
            }
            Err(report) => {
                self.decorate_invalid(report);
                self.telemetry.record(TelemetryEvent::ValidationBlocked {
                    rating_missing: report.rating_missing,
                    feedback_blank: report.feedback_blank,
                });
                return ReviewOutcome::Blocked(report);
            }
        };

        let started = Instant::now();
        let result = self.post(&payload).await;
        self.telemetry.record(TelemetryEvent::SubmissionCompleted {
            form: FormKind::Review,
            outcome: SubmissionStatus::of(&result),
            latency_ms: elapsed_ms(started),
        });

        match result {
            Ok(reply) => self.follow(reply),
            Err(error) => {
                tracing::error!(%error, "review submission failed");
                self.show_error_banner();
                ReviewOutcome::Failed(error)
            }
        }
    }

    async fn post(&self, payload: &ReviewPayload) -> Result<ReviewReply, ReviewKitError> {
        let body = serde_json::to_value(payload).map_err(|error| ReviewKitError::Decode {
            message: error.to_string(),
        })?;
        let reply = self.transport.post_json(REVIEW_ENDPOINT, &body).await?;
        if !reply.is_success() {
            tracing::warn!(status = reply.status, "review endpoint returned non-success status");
        }
        reply.json()
    }

    fn follow(&self, reply: ReviewReply) -> ReviewOutcome {
        if let Some(target) = reply.redirect_target() {
            tracing::debug!(location = target, "following review redirect");
            self.page.navigate(target);
            return ReviewOutcome::Redirected(target.to_owned());
        }
        ReviewOutcome::Accepted {
            server_error: reply.error,
        }
    }

    fn decorate_invalid(&self, report: ValidationReport) {
        if report.rating_missing {
            self.page
                .add_class(ElementId::StarContainer, RATING_ERROR_CLASS);
            self.page.set_text(ElementId::RatingText, RATING_PROMPT);
            self.page.add_class(ElementId::RatingText, TEXT_DANGER_CLASS);
            self.page.set_text(ElementId::RatingDescription, RATING_HINT);

            self.page.add_class(ElementId::StarContainer, SHAKE_CLASS);
            let page = Arc::clone(&self.page);
            schedule(self.timings.shake, move || {
                page.remove_class(ElementId::StarContainer, SHAKE_CLASS);
            });

            self.page.scroll_into_view(ElementId::StarContainer);
        }

        if report.feedback_blank {
            self.page
                .add_class(ElementId::FeedbackText, INVALID_INPUT_CLASS);
        } else {
            self.page
                .remove_class(ElementId::FeedbackText, INVALID_INPUT_CLASS);
        }
    }

    fn show_error_banner(&self) {
        let banner = self
            .page
            .prepend_banner(ElementId::ReviewForm, &Banner::danger(SUBMIT_ERROR_MESSAGE));
        let page = Arc::clone(&self.page);
        schedule(self.timings.banner, move || page.remove_banner(banner));
    }

    fn paint(&self, row: StarRow) {
        for (index, variant) in row.iter() {
            let star = ElementId::Star(index);
            self.page.remove_class(star, variant.other_class());
            self.page.add_class(star, variant.class());
        }
    }
}

/// Runs `action` once after `delay` on a detached task.
fn schedule(delay: Duration, action: impl FnOnce() + Send + 'static) {
    drop(tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        action();
    }));
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
