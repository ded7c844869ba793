//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The request travels as form fields and the response as a JSON array, so
//! these types stay tolerant of the server's representation: the response
//! `id` arrives as either a JSON number or a string, while the document keys
//! activity boxes by attribute strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One state-change request, built fresh per interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleRequest {
    /// Character whose activity grid was clicked.
    pub character_id: String,
    /// Activity the user toggled.
    pub activity_id: String,
    /// Completion state the client wants the server to record.
    pub completed: bool,
}

impl ToggleRequest {
    #[must_use]
    pub fn new(character_id: &str, activity_id: &str, completed: bool) -> Self {
        Self {
            character_id: character_id.to_owned(),
            activity_id: activity_id.to_owned(),
            completed,
        }
    }

    /// Ordered form fields for the `update_activity` request body.
    #[must_use]
    pub fn form_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("character_id", self.character_id.clone()),
            ("activity_id", self.activity_id.clone()),
            ("completed", self.completed.to_string()),
        ]
    }
}

/// One activity record in the server's toggle response.
///
/// The response carries a record for every activity the change affected: at
/// minimum the one toggled, plus any whose availability it altered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityUpdate {
    /// Activity identifier; matches the element's `data-activity-id` value.
    #[serde(deserialize_with = "deserialize_id_string")]
    pub id: String,
    /// Whether the activity is now completed.
    pub completed: bool,
    /// Whether the activity can currently be completed.
    pub available: bool,
}

fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int.to_string());
            }
            if let Some(int) = number.as_u64() {
                return Ok(int.to_string());
            }
            Err(D::Error::custom("expected an integer-compatible id"))
        }
        _ => Err(D::Error::custom("expected a string or number id")),
    }
}
