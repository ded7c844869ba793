#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;

use crate::state::activity::ActivityState;

/// Lookup seam over the rendered document's activity boxes, keyed by
/// (character id, activity id).
///
/// The browser implementation resolves keys against the live DOM; the
/// in-memory implementation backs native tests and headless callers. Both
/// treat a missing element as a non-event: `classify` returns `None` and
/// `render` reports `false` without side effects.
pub trait ActivityRegistry {
    /// Current state of the box for the pair, or `None` if no such element
    /// exists.
    fn classify(&self, character_id: &str, activity_id: &str) -> Option<ActivityState>;

    /// Make the box's markers consistent with an authoritative
    /// `(completed, available)` pair, replacing whatever state it had.
    ///
    /// Idempotent. Returns whether an element for the pair was found.
    fn render(&mut self, character_id: &str, activity_id: &str, completed: bool, available: bool) -> bool;
}

/// `HashMap`-backed registry holding one state per (character, activity) pair.
#[derive(Clone, Debug, Default)]
pub struct MemoryRegistry {
    boxes: HashMap<(String, String), ActivityState>,
}

impl MemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a box for the pair with an initial state.
    pub fn insert(&mut self, character_id: &str, activity_id: &str, state: ActivityState) {
        self.boxes.insert((character_id.to_owned(), activity_id.to_owned()), state);
    }
}

impl ActivityRegistry for MemoryRegistry {
    fn classify(&self, character_id: &str, activity_id: &str) -> Option<ActivityState> {
        self.boxes.get(&(character_id.to_owned(), activity_id.to_owned())).copied()
    }

    fn render(&mut self, character_id: &str, activity_id: &str, completed: bool, available: bool) -> bool {
        match self.boxes.get_mut(&(character_id.to_owned(), activity_id.to_owned())) {
            Some(slot) => {
                *slot = ActivityState::from_flags(completed, available);
                true
            }
            None => false,
        }
    }
}
