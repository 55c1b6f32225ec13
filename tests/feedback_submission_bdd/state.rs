//! Scenario state for feedback submission BDD tests.

use std::sync::Arc;

use reviewkit::{FeedbackOutcome, InMemoryPage};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a feedback submission scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct FeedbackState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) page: Slot<Arc<InMemoryPage>>,
    pub(crate) outcome: Slot<FeedbackOutcome>,
}
