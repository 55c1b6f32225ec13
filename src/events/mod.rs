//! Event-to-message binding tables.
//!
//! Each controller listens to a fixed set of `(element, event)` pairs. The
//! tables below enumerate them so the wiring can be inspected and tested
//! without a page.

use crate::messages::{FeedbackMsg, ReviewMsg};
use crate::page::ElementId;
use crate::review::StarIndex;

/// Page events the controllers listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEvent {
    /// A form was submitted.
    Submit,
    /// The pointer entered an element.
    MouseOver,
    /// The pointer left an element.
    MouseOut,
    /// An element was clicked.
    Click,
}

/// One listener: the message produced when `event` fires on `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBinding<M> {
    /// Element the listener is attached to.
    pub target: ElementId,
    /// Event the listener reacts to.
    pub event: DomEvent,
    /// Message handed to the controller.
    pub message: M,
}

impl<M> EventBinding<M> {
    const fn new(target: ElementId, event: DomEvent, message: M) -> Self {
        Self {
            target,
            event,
            message,
        }
    }
}

/// Looks up the message bound to `event` on `target`.
///
/// Returns `None` for pairs no listener is attached to.
#[must_use]
pub fn resolve<M: Copy>(
    table: &[EventBinding<M>],
    target: ElementId,
    event: DomEvent,
) -> Option<M> {
    table
        .iter()
        .find(|binding| binding.target == target && binding.event == event)
        .map(|binding| binding.message)
}

/// Listeners of the feedback form.
#[must_use]
pub fn feedback_bindings() -> Vec<EventBinding<FeedbackMsg>> {
    vec![EventBinding::new(
        ElementId::FeedbackForm,
        DomEvent::Submit,
        FeedbackMsg::Submit,
    )]
}

/// Listeners of the review form: three per star, then the form submit.
#[must_use]
pub fn review_bindings() -> Vec<EventBinding<ReviewMsg>> {
    let mut table: Vec<_> = StarIndex::all()
        .flat_map(|index| {
            let star = ElementId::Star(index);
            [
                EventBinding::new(star, DomEvent::MouseOver, ReviewMsg::Hover(index)),
                EventBinding::new(star, DomEvent::MouseOut, ReviewMsg::Unhover),
                EventBinding::new(star, DomEvent::Click, ReviewMsg::Click(index)),
            ]
        })
        .collect();
    table.push(EventBinding::new(
        ElementId::ReviewForm,
        DomEvent::Submit,
        ReviewMsg::Submit,
    ));
    table
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DomEvent, feedback_bindings, resolve, review_bindings};
    use crate::messages::{FeedbackMsg, ReviewMsg};
    use crate::page::ElementId;
    use crate::review::{STAR_COUNT, StarIndex};

    fn star(index: usize) -> StarIndex {
        StarIndex::new(index).expect("index should be valid")
    }

    #[rstest]
    fn review_table_covers_every_star() {
        let table = review_bindings();

        assert_eq!(table.len(), STAR_COUNT * 3 + 1);
    }

    #[rstest]
    #[case::hover(DomEvent::MouseOver, ReviewMsg::Hover(star(2)))]
    #[case::leave(DomEvent::MouseOut, ReviewMsg::Unhover)]
    #[case::click(DomEvent::Click, ReviewMsg::Click(star(2)))]
    fn star_events_resolve_to_their_index(#[case] event: DomEvent, #[case] expected: ReviewMsg) {
        let message = resolve(&review_bindings(), ElementId::Star(star(2)), event);

        assert_eq!(message, Some(expected));
    }

    #[rstest]
    fn submit_resolves_per_form() {
        assert_eq!(
            resolve(&review_bindings(), ElementId::ReviewForm, DomEvent::Submit),
            Some(ReviewMsg::Submit)
        );
        assert_eq!(
            resolve(&feedback_bindings(), ElementId::FeedbackForm, DomEvent::Submit),
            Some(FeedbackMsg::Submit)
        );
    }

    #[rstest]
    #[case::click_on_form(ElementId::ReviewForm, DomEvent::Click)]
    #[case::submit_on_star(ElementId::Star(star(0)), DomEvent::Submit)]
    #[case::other_form(ElementId::FeedbackForm, DomEvent::Submit)]
    fn unbound_pairs_resolve_to_none(#[case] target: ElementId, #[case] event: DomEvent) {
        assert_eq!(resolve(&review_bindings(), target, event), None);
    }
}
