//! Frontend Models
//!
//! Data structures persisted to local storage.

use serde::{Deserialize, Serialize};

/// Room record (serialized as `{"id": 1, "roomNumber": "101"}`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// 1-based position in the list
    pub id: u32,
    #[serde(rename = "roomNumber", alias = "numeroSala")]
    pub room_number: String,
}

impl Room {
    pub fn new(id: u32, room_number: impl Into<String>) -> Self {
        Self {
            id,
            room_number: room_number.into(),
        }
    }
}
