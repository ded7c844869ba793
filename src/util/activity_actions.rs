//! Toggle orchestration: one user click, one round-trip, one reconciliation.
//!
//! The flow never changes a marker before the server answers. On success it
//! re-renders *every* record in the response, not just the clicked box,
//! because completing a raid can unlock or lock others. Injecting the send
//! function as a closure keeps the whole flow testable without a browser or
//! a network.

#[cfg(test)]
#[path = "activity_actions_test.rs"]
mod activity_actions_test;

use std::future::Future;

use crate::net::api::UpdateError;
use crate::net::types::{ActivityUpdate, ToggleRequest};
use crate::state::activity::ActivityState;
use crate::state::registry::ActivityRegistry;

/// What one toggle interaction amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The box was unavailable or missing; no request was sent.
    Ignored,
    /// The round-trip succeeded and `rendered` boxes were re-rendered.
    Synced { rendered: usize },
    /// The round-trip failed; every box keeps its pre-click state.
    Failed,
}

/// Toggle the activity box for `(character_id, activity_id)`.
///
/// Classifies the box through the registry, refuses to act on unavailable
/// (or absent) boxes, requests the flipped completion state via `send`, and
/// on success renders each returned record under the interaction's character.
/// Records for boxes not present in the registry are skipped silently.
///
/// Failures are logged here and reported as [`ToggleOutcome::Failed`]; the
/// registry is left untouched.
pub async fn toggle_activity<R, S, Fut>(
    registry: &mut R,
    send: S,
    character_id: &str,
    activity_id: &str,
) -> ToggleOutcome
where
    R: ActivityRegistry + ?Sized,
    S: FnOnce(ToggleRequest) -> Fut,
    Fut: Future<Output = Result<Vec<ActivityUpdate>, UpdateError>>,
{
    let current = registry.classify(character_id, activity_id);
    let Some(desired) = current.and_then(ActivityState::desired_completed) else {
        return ToggleOutcome::Ignored;
    };

    match send(ToggleRequest::new(character_id, activity_id, desired)).await {
        Ok(updates) => {
            let mut rendered = 0;
            for update in &updates {
                if registry.render(character_id, &update.id, update.completed, update.available) {
                    rendered += 1;
                }
            }
            ToggleOutcome::Synced { rendered }
        }
        Err(err) => {
            log::error!("error updating activity {activity_id} for character {character_id}: {err}");
            ToggleOutcome::Failed
        }
    }
}
