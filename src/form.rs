//! Room Form Controller
//!
//! Input text plus create/edit mode. Submitting routes the input to either
//! an append or a renumber on the room list.

use crate::models::Room;
use crate::rooms::{RoomError, RoomList};

/// Current form mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting registers a new room.
    #[default]
    Idle,

    /// Submitting renumbers room `id`.
    Editing { id: u32 },
}

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Created(Room),
    Updated(Room),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomForm {
    input: String,
    mode: FormMode,
}

impl RoomForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing { .. })
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Switch to edit mode for `room`, pre-filling its number.
    pub fn begin_edit(&mut self, room: &Room) {
        self.mode = FormMode::Editing { id: room.id };
        self.input = room.room_number.clone();
    }

    /// Apply the current input to `rooms`.
    ///
    /// On validation failure nothing changes and the input is kept for
    /// correction. If the edit target has disappeared the form falls back
    /// to idle.
    pub fn submit(&mut self, rooms: &mut RoomList, allow_unchanged: bool) -> Result<Submitted, RoomError> {
        let submitted = match self.mode {
            FormMode::Idle => Submitted::Created(rooms.push(&self.input)?),
            FormMode::Editing { id } => match rooms.renumber(id, &self.input, allow_unchanged) {
                Ok(room) => Submitted::Updated(room),
                Err(RoomError::NotFound(id)) => {
                    self.mode = FormMode::Idle;
                    return Err(RoomError::NotFound(id));
                }
                Err(e) => return Err(e),
            },
        };

        self.mode = FormMode::Idle;
        self.input.clear();
        Ok(submitted)
    }

    /// Keep the edit target pointing at the same room after `removed_id`
    /// was deleted and the list compacted.
    pub fn follow_removal(&mut self, removed_id: u32) {
        if let FormMode::Editing { id } = self.mode {
            if id == removed_id {
                self.mode = FormMode::Idle;
                self.input.clear();
            } else if id > removed_id {
                self.mode = FormMode::Editing { id: id - 1 };
            }
        }
    }
}
