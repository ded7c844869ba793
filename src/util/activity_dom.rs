//! Browser-backed activity registry.
//!
//! Reads and writes the three marker classes on `.activity-box` elements,
//! addressing each box by its `data-character-id` / `data-activity-id`
//! attribute pair. Requires a browser environment; only the selector
//! formatting is meaningful natively.

#[cfg(test)]
#[path = "activity_dom_test.rs"]
mod activity_dom_test;

#[cfg(feature = "hydrate")]
use crate::state::activity::ActivityState;
#[cfg(feature = "hydrate")]
use crate::state::registry::ActivityRegistry;

/// Class every togglable activity element carries.
pub const ACTIVITY_BOX_CLASS: &str = "activity-box";

/// Selector addressing one activity box by its attribute pair.
#[cfg(any(test, feature = "hydrate"))]
#[must_use]
fn activity_box_selector(character_id: &str, activity_id: &str) -> String {
    format!(".activity-box[data-character-id=\"{character_id}\"][data-activity-id=\"{activity_id}\"]")
}

/// Remove whichever of the three markers an element carries and apply the one
/// for `state`. Safe to call on an element in any prior state.
#[cfg(feature = "hydrate")]
fn apply_marker(element: &web_sys::Element, state: ActivityState) {
    let class_list = element.class_list();
    let _ = class_list.remove_3(
        ActivityState::Completed.marker(),
        ActivityState::NotCompleted.marker(),
        ActivityState::Unavailable.marker(),
    );
    let _ = class_list.add_1(state.marker());
}

/// [`ActivityRegistry`] over the live document.
#[cfg(feature = "hydrate")]
pub struct DomRegistry {
    document: web_sys::Document,
}

#[cfg(feature = "hydrate")]
impl DomRegistry {
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Registry over the current window's document, if one exists.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }

    fn activity_box(&self, character_id: &str, activity_id: &str) -> Option<web_sys::Element> {
        self.document
            .query_selector(&activity_box_selector(character_id, activity_id))
            .ok()
            .flatten()
    }
}

#[cfg(feature = "hydrate")]
impl ActivityRegistry for DomRegistry {
    fn classify(&self, character_id: &str, activity_id: &str) -> Option<ActivityState> {
        let class_list = self.activity_box(character_id, activity_id)?.class_list();
        Some(ActivityState::from_markers(
            class_list.contains(ActivityState::Completed.marker()),
            class_list.contains(ActivityState::NotCompleted.marker()),
        ))
    }

    fn render(&mut self, character_id: &str, activity_id: &str, completed: bool, available: bool) -> bool {
        let Some(element) = self.activity_box(character_id, activity_id) else {
            return false;
        };
        apply_marker(&element, ActivityState::from_flags(completed, available));
        true
    }
}
