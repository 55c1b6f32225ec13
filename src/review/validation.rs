//! Submission gate for the review form.

use crate::models::ReviewPayload;

use super::rating::Rating;

/// Every check that failed during one submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// No star was selected.
    pub rating_missing: bool,
    /// The review text was empty after trimming.
    pub feedback_blank: bool,
}

impl ValidationReport {
    /// Returns true when no check failed.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !self.rating_missing && !self.feedback_blank
    }
}

/// Runs both checks and builds the payload when they pass.
///
/// Both checks always run so the caller can decorate every invalid field in
/// one pass.
///
/// # Errors
///
/// Returns the [`ValidationReport`] when any check fails.
pub fn validate_review(rating: Rating, feedback: &str) -> Result<ReviewPayload, ValidationReport> {
    let trimmed = feedback.trim();
    let report = ValidationReport {
        rating_missing: !rating.is_set(),
        feedback_blank: trimmed.is_empty(),
    };

    if report.is_valid() {
        Ok(ReviewPayload {
            rating: rating.get(),
            feedback: trimmed.to_owned(),
        })
    } else {
        Err(report)
    }
}
