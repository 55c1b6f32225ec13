//! Messages handled by the form controllers.
//!
//! Page events are translated into these messages by the binding tables in
//! [`crate::events`]; each controller's `handle` method is the single entry
//! point that reacts to them.

use crate::review::StarIndex;

/// Messages for the feedback form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackMsg {
    /// The form was submitted.
    Submit,
}

/// Messages for the review form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewMsg {
    /// The pointer entered a star.
    Hover(StarIndex),
    /// The pointer left a star.
    Unhover,
    /// A star was clicked.
    Click(StarIndex),
    /// The form was submitted.
    Submit,
}
