//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewkit.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWKIT_BASE_URL`,
//!    `REVIEWKIT_REQUEST_TIMEOUT_SECONDS`, and so on
//! 4. **Command-line arguments** – `--base-url`/`-b`, `--rating`/`-r`,
//!    `--feedback`/`-f`, and the feedback form fields
//!
//! # Configuration File
//!
//! ```toml
//! base_url = "http://127.0.0.1:5000"
//! request_timeout_seconds = 10
//! shake_duration_ms = 650
//! banner_duration_ms = 5000
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::ReviewKitError;
use crate::review::WidgetTimings;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_SHAKE_DURATION_MS: u64 = 650;
const DEFAULT_BANNER_DURATION_MS: u64 = 5000;

/// Which form the CLI should drive, determined by the supplied inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Submit a star-rating review.
    Review,
    /// Submit improvement feedback and contact details.
    Feedback,
    /// No form input was supplied.
    Unspecified,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewkit::ReviewKitConfig;
///
/// let config = ReviewKitConfig::load().expect("failed to load configuration");
/// config.validate().expect("configuration should be consistent");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWKIT",
    discovery(
        dotfile_name = ".reviewkit.toml",
        config_file_name = "reviewkit.toml",
        app_name = "reviewkit"
    )
)]
pub struct ReviewKitConfig {
    /// Server the forms post to.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `REVIEWKIT_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: String,

    /// Per-request timeout, in seconds.
    #[ortho_config(cli_short = 'T')]
    pub request_timeout_seconds: u64,

    /// How long the missing-rating shake decoration stays on, in
    /// milliseconds.
    #[ortho_config(cli_short = 'S')]
    pub shake_duration_ms: u64,

    /// How long the review error banner stays on, in milliseconds.
    #[ortho_config(cli_short = 'B')]
    pub banner_duration_ms: u64,

    /// Writes telemetry events to stderr as JSON lines.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so this is CLI or file only.
    #[ortho_config(cli_short = 't')]
    pub telemetry: bool,

    /// Star rating to submit, `1` to `5`.
    #[ortho_config(cli_short = 'r')]
    pub rating: Option<u8>,

    /// Review text to submit.
    #[ortho_config(cli_short = 'f')]
    pub feedback: Option<String>,

    /// Improvement suggestions for the feedback form.
    #[ortho_config(cli_short = 'i')]
    pub improvement_feedback: Option<String>,

    /// Contact name for the feedback form.
    #[ortho_config(cli_short = 'n')]
    pub name: Option<String>,

    /// Email address or phone number for the feedback form.
    #[ortho_config(cli_short = 'c')]
    pub contact_info: Option<String>,

    /// Preferred contact channel for the feedback form.
    #[ortho_config(cli_short = 'p')]
    pub preferred_contact: Option<String>,
}

impl Default for ReviewKitConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            shake_duration_ms: DEFAULT_SHAKE_DURATION_MS,
            banner_duration_ms: DEFAULT_BANNER_DURATION_MS,
            telemetry: false,
            rating: None,
            feedback: None,
            improvement_feedback: None,
            name: None,
            contact_info: None,
            preferred_contact: None,
        }
    }
}

impl ReviewKitConfig {
    const fn has_review_input(&self) -> bool {
        self.rating.is_some() || self.feedback.is_some()
    }

    const fn has_feedback_input(&self) -> bool {
        self.improvement_feedback.is_some()
            || self.name.is_some()
            || self.contact_info.is_some()
            || self.preferred_contact.is_some()
    }

    /// Determines which form to drive from the supplied inputs.
    ///
    /// Review input wins when both kinds are present; [`Self::validate`]
    /// rejects that combination before the mode is used.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.has_review_input() {
            OperationMode::Review
        } else if self.has_feedback_input() {
            OperationMode::Feedback
        } else {
            OperationMode::Unspecified
        }
    }

    /// Checks that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewKitError::Configuration`] when review and feedback
    /// inputs are mixed, a duration is zero, or the base URL is blank.
    pub fn validate(&self) -> Result<(), ReviewKitError> {
        if self.has_review_input() && self.has_feedback_input() {
            return Err(ReviewKitError::Configuration {
                message: "review input (--rating, --feedback) cannot be combined with feedback form input".to_owned(),
            });
        }

        if self.base_url.trim().is_empty() {
            return Err(ReviewKitError::Configuration {
                message: "base URL must not be blank (use --base-url or -b)".to_owned(),
            });
        }

        for (field, value) in [
            ("request_timeout_seconds", self.request_timeout_seconds),
            ("shake_duration_ms", self.shake_duration_ms),
            ("banner_duration_ms", self.banner_duration_ms),
        ] {
            if value == 0 {
                return Err(ReviewKitError::Configuration {
                    message: format!("{field} must be greater than zero"),
                });
            }
        }

        Ok(())
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Returns the decoration lifetimes for the review widget.
    #[must_use]
    pub const fn timings(&self) -> WidgetTimings {
        WidgetTimings {
            shake: Duration::from_millis(self.shake_duration_ms),
            banner: Duration::from_millis(self.banner_duration_ms),
        }
    }
}

#[cfg(test)]
mod tests;
