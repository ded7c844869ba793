//! The activity update round-trip with the tracker server.
//!
//! Client-side (hydrate): a real HTTP call via `gloo-net`. Outside the
//! browser the call degrades to an error so callers never hang on a transport
//! that does not exist.
//!
//! ERROR HANDLING
//! ==============
//! Exactly one request is sent per call; there is no timeout, retry, or
//! queueing. A non-success status or an unparseable body surfaces as an
//! [`UpdateError`] for the caller to report. The document is never touched
//! from here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::ActivityUpdate;
#[cfg(feature = "hydrate")]
use crate::net::types::ToggleRequest;

/// Relative endpoint understood by the tracker server.
pub const UPDATE_ACTIVITY_ENDPOINT: &str = "update_activity";

/// Failure of one update round-trip.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// The transport reported a failure or a non-success status; carries the
    /// status text (or the transport's own message).
    #[error("failed to update activity: {0}")]
    Transport(String),
    /// The response body could not be parsed as a collection of activity
    /// records.
    #[error("malformed activity update response: {0}")]
    Parse(String),
}

/// Record a new completion state for `(character_id, activity_id)` via
/// `POST update_activity` and return every activity record the change
/// affected.
///
/// The body is form-urlencoded with fields `character_id`, `activity_id`, and
/// `completed` (`"true"`/`"false"`).
///
/// # Errors
///
/// [`UpdateError::Transport`] on a network failure or non-success status,
/// [`UpdateError::Parse`] when the body is not the expected structure.
pub async fn update_activity_on_server(
    character_id: &str,
    activity_id: &str,
    completed: bool,
) -> Result<Vec<ActivityUpdate>, UpdateError> {
    #[cfg(feature = "hydrate")]
    {
        let request = ToggleRequest::new(character_id, activity_id, completed);
        let body = web_sys::UrlSearchParams::new()
            .map_err(|_| UpdateError::Transport("could not build the request body".to_owned()))?;
        for (name, value) in request.form_pairs() {
            body.append(name, &value);
        }

        let resp = gloo_net::http::Request::post(UPDATE_ACTIVITY_ENDPOINT)
            .body(body)
            .map_err(|e| UpdateError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| UpdateError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(UpdateError::Transport(resp.status_text()));
        }

        resp.json::<Vec<ActivityUpdate>>()
            .await
            .map_err(|e| UpdateError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (character_id, activity_id, completed);
        Err(UpdateError::Transport("not available outside the browser".to_owned()))
    }
}
