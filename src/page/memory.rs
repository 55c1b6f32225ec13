//! In-process page model.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Banner, BannerId, ElementId, PageSurface};

#[derive(Debug, Default, Clone)]
struct ElementState {
    value: String,
    text: String,
    classes: BTreeSet<String>,
}

#[derive(Debug, Default)]
struct PageState {
    elements: HashMap<ElementId, ElementState>,
    banners: Vec<(BannerId, ElementId, Banner)>,
    next_banner: u64,
    notices: Vec<String>,
    navigations: Vec<String>,
    scroll_requests: Vec<ElementId>,
}

/// Page surface backed by plain data.
///
/// Elements spring into existence on first use, so a fresh page behaves like
/// markup where every required element is present and empty. The binary
/// drives controllers through it, and tests inspect it after each event.
#[derive(Debug, Default)]
pub struct InMemoryPage {
    state: Mutex<PageState>,
}

impl InMemoryPage {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns true when `element` currently carries `class`.
    #[must_use]
    pub fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.lock()
            .elements
            .get(&element)
            .is_some_and(|state| state.classes.contains(class))
    }

    /// Returns the text content of `element`.
    #[must_use]
    pub fn text(&self, element: ElementId) -> String {
        self.lock()
            .elements
            .get(&element)
            .map(|state| state.text.clone())
            .unwrap_or_default()
    }

    /// Returns the banners inside `form`, first child first.
    #[must_use]
    pub fn banners(&self, form: ElementId) -> Vec<Banner> {
        self.lock()
            .banners
            .iter()
            .filter(|(_, owner, _)| *owner == form)
            .map(|(_, _, banner)| banner.clone())
            .collect()
    }

    /// Returns every notice shown so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> Vec<String> {
        self.lock().notices.clone()
    }

    /// Returns every navigation requested so far, oldest first.
    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.lock().navigations.clone()
    }

    /// Returns the most recent navigation target, if any.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        self.lock().navigations.last().cloned()
    }

    /// Returns the elements scrolled into view, oldest first.
    #[must_use]
    pub fn scroll_requests(&self) -> Vec<ElementId> {
        self.lock().scroll_requests.clone()
    }
}

impl PageSurface for InMemoryPage {
    fn value(&self, element: ElementId) -> String {
        self.lock()
            .elements
            .get(&element)
            .map(|state| state.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, element: ElementId, value: &str) {
        value.clone_into(&mut self.lock().elements.entry(element).or_default().value);
    }

    fn add_class(&self, element: ElementId, class: &str) {
        self.lock()
            .elements
            .entry(element)
            .or_default()
            .classes
            .insert(class.to_owned());
    }

    fn remove_class(&self, element: ElementId, class: &str) {
        if let Some(state) = self.lock().elements.get_mut(&element) {
            state.classes.remove(class);
        }
    }

    fn set_text(&self, element: ElementId, text: &str) {
        text.clone_into(&mut self.lock().elements.entry(element).or_default().text);
    }

    fn scroll_into_view(&self, element: ElementId) {
        self.lock().scroll_requests.push(element);
    }

    fn prepend_banner(&self, form: ElementId, banner: &Banner) -> BannerId {
        let mut state = self.lock();
        state.next_banner = state.next_banner.saturating_add(1);
        let id = BannerId(state.next_banner);
        state.banners.insert(0, (id, form, banner.clone()));
        id
    }

    fn remove_banner(&self, banner: BannerId) {
        self.lock().banners.retain(|(id, _, _)| *id != banner);
    }

    fn notify(&self, message: &str) {
        self.lock().notices.push(message.to_owned());
    }

    fn navigate(&self, location: &str) {
        self.lock().navigations.push(location.to_owned());
    }
}
