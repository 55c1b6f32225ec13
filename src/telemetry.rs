//! Submission telemetry events and sinks.
//!
//! The controllers emit one event per submit attempt so that blocked
//! attempts and request latency can be inspected while debugging a page.
//! Nothing is transmitted anywhere.

use std::io;

use serde::{Deserialize, Serialize};

use crate::models::FormKind;

/// A structured telemetry event emitted by the form controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A review submit attempt was stopped by client-side validation.
    ValidationBlocked {
        /// No star was selected.
        rating_missing: bool,
        /// The review text was blank.
        feedback_blank: bool,
    },
    /// A request to a form endpoint resolved.
    SubmissionCompleted {
        /// Which form submitted.
        form: FormKind,
        /// How the controller resolved the reply.
        outcome: SubmissionStatus,
        /// Time from request start to resolution, in milliseconds.
        latency_ms: u64,
    },
}

/// Resolution of a completed form request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// The reply was parsed and handled.
    Succeeded,
    /// The request failed or the reply was rejected.
    Failed,
}

impl SubmissionStatus {
    /// Maps a request result onto its telemetry status.
    #[must_use]
    pub const fn of<T, E>(result: &Result<T, E>) -> Self {
        if result.is_ok() {
            Self::Succeeded
        } else {
            Self::Failed
        }
    }
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Sinks for asserting on emitted events.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::{Mutex, PoisonError};

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns and clears the recorded events.
        #[must_use]
        pub fn take(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .drain(..)
                .collect()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SubmissionStatus, TelemetryEvent};
    use super::test_support::RecordingTelemetrySink;
    use crate::models::FormKind;
    use crate::telemetry::TelemetrySink;

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::SubmissionCompleted {
            form: FormKind::Review,
            outcome: SubmissionStatus::Succeeded,
            latency_ms: 12,
        });

        assert_eq!(
            sink.take(),
            vec![TelemetryEvent::SubmissionCompleted {
                form: FormKind::Review,
                outcome: SubmissionStatus::Succeeded,
                latency_ms: 12,
            }]
        );
        assert!(sink.take().is_empty());
    }

    #[test]
    fn events_serialise_with_type_tag() {
        let event = TelemetryEvent::ValidationBlocked {
            rating_missing: true,
            feedback_blank: false,
        };

        let json = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(
            json,
            serde_json::json!({
                "type": "validation_blocked",
                "rating_missing": true,
                "feedback_blank": false
            })
        );
    }

    #[test]
    fn completed_event_carries_outcome() {
        let event = TelemetryEvent::SubmissionCompleted {
            form: FormKind::Feedback,
            outcome: SubmissionStatus::of::<(), &str>(&Err("timed out")),
            latency_ms: 40,
        };

        let json = serde_json::to_value(&event).expect("event should serialise");

        assert_eq!(
            json,
            serde_json::json!({
                "type": "submission_completed",
                "form": "feedback",
                "outcome": "failed",
                "latency_ms": 40
            })
        );
    }
}
