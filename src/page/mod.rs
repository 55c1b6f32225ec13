//! Page surface consumed by the form controllers.
//!
//! Controllers never touch a document directly. They address elements by
//! [`ElementId`] through the [`PageSurface`] capability, which keeps the
//! element contract in one place and lets tests substitute
//! [`InMemoryPage`].

mod memory;

pub use memory::InMemoryPage;

use crate::review::StarIndex;

/// CSS class marking a filled star icon.
pub const FILLED_CLASS: &str = "fas";
/// CSS class marking an outline star icon.
pub const OUTLINE_CLASS: &str = "far";

/// Elements the page must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    /// The feedback `<form>`.
    FeedbackForm,
    /// Free-text improvement suggestions on the feedback form.
    ImprovementFeedback,
    /// Contact name on the feedback form.
    Name,
    /// Contact details on the feedback form.
    ContactInfo,
    /// Preferred contact channel on the feedback form.
    PreferredContact,
    /// The review `<form>`.
    ReviewForm,
    /// Hidden numeric input mirroring the committed rating.
    RatingInput,
    /// Review free-text `<textarea>`.
    FeedbackText,
    /// Container wrapping the star icons.
    StarContainer,
    /// Label above the stars.
    RatingText,
    /// Helper text below the stars.
    RatingDescription,
    /// One of the five star icons.
    Star(StarIndex),
}

impl ElementId {
    /// Returns the CSS selector the element is found by in the page markup.
    #[must_use]
    pub fn selector(self) -> String {
        match self {
            Self::FeedbackForm => "#feedbackForm".to_owned(),
            Self::ImprovementFeedback => "#improvementFeedback".to_owned(),
            Self::Name => "#name".to_owned(),
            Self::ContactInfo => "#contactInfo".to_owned(),
            Self::PreferredContact => "#preferredContact".to_owned(),
            Self::ReviewForm => "#review-form".to_owned(),
            Self::RatingInput => "#rating".to_owned(),
            Self::FeedbackText => "#feedback".to_owned(),
            Self::StarContainer => ".star-rating-container".to_owned(),
            Self::RatingText => ".rating-text".to_owned(),
            Self::RatingDescription => ".rating-description".to_owned(),
            Self::Star(index) => {
                format!(".star-rating i:nth-child({})", index.position())
            }
        }
    }
}

/// Identifies a banner inserted into a form so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(u64);

/// A transient message block inserted as the first child of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Space-separated CSS classes.
    pub classes: String,
    /// Visible text.
    pub text: String,
}

impl Banner {
    /// Builds the danger banner shown when a review could not be submitted.
    #[must_use]
    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            classes: "alert alert-danger mt-3".to_owned(),
            text: text.into(),
        }
    }
}

/// Capability for reading and decorating the page.
///
/// Every method takes `&self` so one surface can be shared between a
/// controller and the timers it schedules.
pub trait PageSurface: Send + Sync {
    /// Returns the current value of an input element, or an empty string.
    fn value(&self, element: ElementId) -> String;

    /// Overwrites the value of an input element.
    fn set_value(&self, element: ElementId, value: &str);

    /// Adds a CSS class. Adding a present class is a no-op.
    fn add_class(&self, element: ElementId, class: &str);

    /// Removes a CSS class. Removing an absent class is a no-op.
    fn remove_class(&self, element: ElementId, class: &str);

    /// Replaces the text content of an element.
    fn set_text(&self, element: ElementId, text: &str);

    /// Scrolls the element to the centre of the viewport.
    fn scroll_into_view(&self, element: ElementId);

    /// Inserts a banner as the first child of `form`.
    fn prepend_banner(&self, form: ElementId, banner: &Banner) -> BannerId;

    /// Removes a previously inserted banner. Unknown identifiers are ignored.
    fn remove_banner(&self, banner: BannerId);

    /// Shows a blocking notice to the user.
    fn notify(&self, message: &str);

    /// Navigates the browser to `location`.
    fn navigate(&self, location: &str);
}
