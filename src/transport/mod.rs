//! HTTP capability used to post form payloads.
//!
//! Controllers depend on the [`FormTransport`] trait only. The reqwest-backed
//! [`HttpFormTransport`] talks to a live server; tests either mock the trait
//! or use the recording transport from `test_support`.

mod reqwest_transport;

pub use reqwest_transport::HttpFormTransport;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ReviewKitError;

/// Path the feedback form posts to.
pub const FEEDBACK_ENDPOINT: &str = "/submit_feedback";
/// Path the review form posts to.
pub const REVIEW_ENDPOINT: &str = "/submit_review";

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl HttpReply {
    /// Builds a reply from its parts.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewKitError::Decode`] when the body is not valid JSON of
    /// the requested shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ReviewKitError> {
        serde_json::from_str(&self.body).map_err(|error| ReviewKitError::Decode {
            message: error.to_string(),
        })
    }
}

/// Sends JSON bodies to the form endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormTransport: Send + Sync {
    /// Posts `body` as JSON to `path` and returns the reply, whatever its
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewKitError::Network`] when no response was received.
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpReply, ReviewKitError>;
}

/// Test doubles for the transport capability.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::collections::VecDeque;
    use std::sync::{Mutex, PoisonError};

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::{FormTransport, HttpReply};
    use crate::error::ReviewKitError;

    /// A request captured by [`RecordingTransport`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        /// Endpoint path.
        pub path: String,
        /// JSON body as sent.
        pub body: serde_json::Value,
    }

    /// Transport that records requests and answers from a script.
    ///
    /// When the script runs dry every request fails with a network error.
    /// A held transport parks each request until [`Self::release`] is called.
    #[derive(Debug, Default)]
    pub struct RecordingTransport {
        requests: Mutex<Vec<RecordedRequest>>,
        replies: Mutex<VecDeque<Result<HttpReply, ReviewKitError>>>,
        hold: Option<Notify>,
    }

    impl RecordingTransport {
        /// Creates a transport with an empty script.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a transport whose requests wait for [`Self::release`].
        #[must_use]
        pub fn held() -> Self {
            Self {
                hold: Some(Notify::new()),
                ..Self::default()
            }
        }

        /// Appends a reply to the script.
        #[must_use]
        pub fn with_reply(self, reply: Result<HttpReply, ReviewKitError>) -> Self {
            self.replies
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push_back(reply);
            self
        }

        /// Lets one held request complete.
        pub fn release(&self) {
            if let Some(hold) = &self.hold {
                hold.notify_one();
            }
        }

        /// Returns every request received so far.
        #[must_use]
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    #[async_trait]
    impl FormTransport for RecordingTransport {
        async fn post_json(
            &self,
            path: &str,
            body: &serde_json::Value,
        ) -> Result<HttpReply, ReviewKitError> {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(RecordedRequest {
                    path: path.to_owned(),
                    body: body.clone(),
                });

            if let Some(hold) = &self.hold {
                hold.notified().await;
            }

            self.replies
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .unwrap_or_else(|| {
                    Err(ReviewKitError::Network {
                        message: "no scripted reply".to_owned(),
                    })
                })
        }
    }
}
