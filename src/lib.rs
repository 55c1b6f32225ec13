//! Reviewkit library crate providing form controllers for a review site.
//!
//! Two controllers are exposed: [`FeedbackSubmitter`] posts the improvement
//! feedback form and [`ReviewWidget`] drives the star-rating review form,
//! including its hover preview, validation gate, and error banner. Both are
//! constructed with injected [`page::PageSurface`] and
//! [`transport::FormTransport`] capabilities so they can run against a live
//! server or against in-memory fakes.

pub mod config;
pub mod error;
pub mod events;
pub mod feedback;
pub mod messages;
pub mod models;
pub mod page;
pub mod review;
mod submission;
pub mod telemetry;
pub mod transport;

pub use config::{OperationMode, ReviewKitConfig};
pub use error::ReviewKitError;
pub use feedback::{FeedbackOutcome, FeedbackSubmitter};
pub use models::{FeedbackPayload, FormKind, ReviewPayload, ReviewReply};
pub use page::{ElementId, InMemoryPage, PageSurface};
pub use review::{Rating, ReviewOutcome, ReviewWidget, StarIndex, WidgetTimings};
pub use transport::{FormTransport, HttpFormTransport, HttpReply};
