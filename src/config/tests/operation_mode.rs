//! Tests for operation mode determination.

use rstest::rstest;

use crate::ReviewKitConfig;
use crate::config::OperationMode;

#[rstest]
#[case::nothing(ReviewKitConfig::default(), OperationMode::Unspecified)]
#[case::rating_only(
    ReviewKitConfig { rating: Some(4), ..Default::default() },
    OperationMode::Review
)]
#[case::review_text_only(
    ReviewKitConfig { feedback: Some("Great".to_owned()), ..Default::default() },
    OperationMode::Review
)]
#[case::contact_only(
    ReviewKitConfig { contact_info: Some("ada@example.com".to_owned()), ..Default::default() },
    OperationMode::Feedback
)]
#[case::improvement_feedback(
    ReviewKitConfig { improvement_feedback: Some("Faster".to_owned()), ..Default::default() },
    OperationMode::Feedback
)]
fn selects_mode_from_inputs(#[case] config: ReviewKitConfig, #[case] expected: OperationMode) {
    assert_eq!(config.operation_mode(), expected);
}
