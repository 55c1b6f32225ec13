//! Reviewkit CLI entrypoint for submitting a review or feedback form.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use reviewkit::events::DomEvent;
use reviewkit::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use reviewkit::{
    ElementId, FeedbackOutcome, FeedbackSubmitter, HttpFormTransport, InMemoryPage,
    OperationMode, PageSurface, Rating, ReviewKitConfig, ReviewKitError, ReviewOutcome,
    ReviewWidget,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reviewkit=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Drives the selected form and reports whether the submission succeeded.
async fn run() -> Result<bool, ReviewKitError> {
    let config = load_config()?;
    config.validate()?;

    let transport = Arc::new(HttpFormTransport::new(
        &config.base_url,
        config.request_timeout(),
    )?);
    let telemetry: Arc<dyn TelemetrySink> = if config.telemetry {
        Arc::new(StderrJsonlTelemetrySink)
    } else {
        Arc::new(NoopTelemetrySink)
    };
    let page = Arc::new(InMemoryPage::new());

    match config.operation_mode() {
        OperationMode::Review => {
            let widget = ReviewWidget::new(page.clone(), transport)
                .with_timings(config.timings())
                .with_telemetry(telemetry);
            let outcome = submit_review(&config, &page, &widget).await?;
            write_review_summary(&outcome, &page)
        }
        OperationMode::Feedback => {
            let submitter = FeedbackSubmitter::new(page.clone(), transport).with_telemetry(telemetry);
            fill_feedback_form(&config, page.as_ref());
            let outcome = submitter.submit().await;
            write_feedback_summary(&outcome, &page)
        }
        OperationMode::Unspecified => Err(ReviewKitError::Configuration {
            message: "nothing to submit: pass --rating and --feedback, or the feedback form fields"
                .to_owned(),
        }),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewKitError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewKitConfig, ReviewKitError> {
    ReviewKitConfig::load().map_err(|error| ReviewKitError::Configuration {
        message: error.to_string(),
    })
}

async fn submit_review(
    config: &ReviewKitConfig,
    page: &InMemoryPage,
    widget: &ReviewWidget,
) -> Result<ReviewOutcome, ReviewKitError> {
    if let Some(value) = config.rating
        && let Some(star) = Rating::try_from(value)?.star()
    {
        widget
            .dispatch(ElementId::Star(star), DomEvent::Click)
            .await;
    }
    page.set_value(
        ElementId::FeedbackText,
        config.feedback.as_deref().unwrap_or_default(),
    );

    Ok(widget
        .dispatch(ElementId::ReviewForm, DomEvent::Submit)
        .await
        .unwrap_or(ReviewOutcome::AlreadySubmitting))
}

fn fill_feedback_form(config: &ReviewKitConfig, page: &dyn PageSurface) {
    for (element, value) in [
        (ElementId::ImprovementFeedback, &config.improvement_feedback),
        (ElementId::Name, &config.name),
        (ElementId::ContactInfo, &config.contact_info),
        (ElementId::PreferredContact, &config.preferred_contact),
    ] {
        page.set_value(element, value.as_deref().unwrap_or_default());
    }
}

fn write_review_summary(outcome: &ReviewOutcome, page: &InMemoryPage) -> Result<bool, ReviewKitError> {
    let (message, succeeded) = match outcome {
        ReviewOutcome::Blocked(report) => {
            let mut problems = Vec::new();
            if report.rating_missing {
                problems.push(page.text(ElementId::RatingText));
            }
            if report.feedback_blank {
                problems.push("review text must not be blank".to_owned());
            }
            (format!("Review not sent: {}", problems.join("; ")), false)
        }
        ReviewOutcome::AlreadySubmitting => ("Review already in flight".to_owned(), false),
        ReviewOutcome::Redirected(target) => (format!("Review sent; redirected to {target}"), true),
        ReviewOutcome::Accepted { server_error: None } => ("Review sent".to_owned(), true),
        ReviewOutcome::Accepted {
            server_error: Some(error),
        } => (format!("Review sent; server reported: {error}"), false),
        ReviewOutcome::Failed(error) => {
            let banner = page
                .banners(ElementId::ReviewForm)
                .into_iter()
                .next()
                .map(|banner| banner.text)
                .unwrap_or_default();
            (format!("{banner} ({error})"), false)
        }
    };

    write_line(&message)?;
    Ok(succeeded)
}

fn write_feedback_summary(
    outcome: &FeedbackOutcome,
    page: &InMemoryPage,
) -> Result<bool, ReviewKitError> {
    let notice = page.notices().pop().unwrap_or_default();
    let (message, succeeded) = match outcome {
        FeedbackOutcome::Confirmed => (notice, true),
        FeedbackOutcome::AlreadySubmitting => ("Feedback already in flight".to_owned(), false),
        FeedbackOutcome::Failed(error) => (format!("{notice} ({error})"), false),
    };

    write_line(&message)?;
    Ok(succeeded)
}

fn write_line(message: &str) -> Result<(), ReviewKitError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{message}").map_err(|error| ReviewKitError::Io {
        message: error.to_string(),
    })
}
