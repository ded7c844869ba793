#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

/// Completion state of one activity box. Tri-state and mutually exclusive:
/// exactly one holds for a given (character, activity) pair at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityState {
    /// The activity has been completed this reset.
    Completed,
    /// The activity is open but not yet completed.
    NotCompleted,
    /// The activity cannot currently be completed (prerequisites not met,
    /// weekly entries exhausted, item level too low). Not togglable.
    Unavailable,
}

impl ActivityState {
    /// Classify an element from its marker classes.
    ///
    /// The completed marker takes precedence over the not-completed marker;
    /// an element carrying neither is unavailable.
    #[must_use]
    pub fn from_markers(completed: bool, not_completed: bool) -> Self {
        if completed {
            Self::Completed
        } else if not_completed {
            Self::NotCompleted
        } else {
            Self::Unavailable
        }
    }

    /// State for a server-reported `(completed, available)` pair.
    #[must_use]
    pub fn from_flags(completed: bool, available: bool) -> Self {
        if completed {
            Self::Completed
        } else if available {
            Self::NotCompleted
        } else {
            Self::Unavailable
        }
    }

    /// The single marker class expressing this state in the document.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::NotCompleted => "not-completed",
            Self::Unavailable => "unavailable",
        }
    }

    /// Completion flag to request when the user toggles an activity in this
    /// state. `None` means the activity is not togglable.
    #[must_use]
    pub fn desired_completed(self) -> Option<bool> {
        match self {
            Self::Completed => Some(false),
            Self::NotCompleted => Some(true),
            Self::Unavailable => None,
        }
    }
}
