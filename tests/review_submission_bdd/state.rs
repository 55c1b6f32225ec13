//! Scenario state for review submission BDD tests.

use std::sync::Arc;

use reviewkit::{InMemoryPage, ReviewOutcome, ReviewWidget};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use crate::support::runtime::SharedRuntime;

/// State shared across steps in a review submission scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct ReviewState {
    /// Runtime driving the widget and the mock server.
    pub(crate) runtime: Slot<SharedRuntime>,
    /// Mock review endpoint.
    pub(crate) server: Slot<MockServer>,
    /// Page the widget is attached to.
    pub(crate) page: Slot<Arc<InMemoryPage>>,
    /// Widget under test.
    pub(crate) widget: Slot<Arc<ReviewWidget>>,
    /// Outcome of the last submit.
    pub(crate) outcome: Slot<ReviewOutcome>,
}
