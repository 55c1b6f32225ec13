//! JSON payloads exchanged with the form endpoints.

use serde::{Deserialize, Serialize};

/// Identifies which form produced a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// The improvement feedback and contact form.
    Feedback,
    /// The star-rating review form.
    Review,
}

/// Body posted by the feedback form.
///
/// Every field is sent verbatim, including empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    /// Suggestions for what could be improved.
    pub improvement_feedback: String,
    /// Contact name.
    pub name: String,
    /// Email address or phone number.
    pub contact_info: String,
    /// Preferred contact channel.
    pub preferred_contact: String,
}

/// Body posted by the review form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPayload {
    /// Committed star rating in `1..=5`.
    pub rating: u8,
    /// Trimmed, non-empty review text.
    pub feedback: String,
}

/// Response body of the review endpoint. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewReply {
    /// Location the browser should move to next.
    #[serde(default)]
    pub redirect: Option<String>,
    /// Error description reported by the server.
    #[serde(default)]
    pub error: Option<String>,
}

impl ReviewReply {
    /// Returns the redirect target when it is present and non-empty.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect.as_deref().filter(|target| !target.is_empty())
    }
}
