//! Room List
//!
//! Ordered room records. Every operation keeps ids equal to `position + 1`
//! and room numbers unique.

use thiserror::Error;

use crate::models::Room;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    #[error("please enter the room number.")]
    EmptyNumber,

    #[error("a room with that number already exists; please use a different number.")]
    DuplicateNumber(String),

    #[error("no room with id {0}")]
    NotFound(u32),
}

/// Trim raw form input, rejecting blank values.
pub fn parse_room_number(raw: &str) -> Result<&str, RoomError> {
    let number = raw.trim();
    if number.is_empty() {
        Err(RoomError::EmptyNumber)
    } else {
        Ok(number)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomList {
    rooms: Vec<Room>,
}

impl RoomList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from previously stored records.
    ///
    /// Numbers are trimmed, blank and repeated numbers are dropped (the first
    /// occurrence wins) and ids are re-sequenced, so data edited outside the
    /// app still satisfies the list invariants.
    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        let mut kept: Vec<Room> = Vec::with_capacity(rooms.len());
        for mut room in rooms {
            room.room_number = room.room_number.trim().to_string();
            if room.room_number.is_empty() {
                continue;
            }
            if kept.iter().any(|r| r.room_number == room.room_number) {
                continue;
            }
            kept.push(room);
        }

        let mut list = Self { rooms: kept };
        list.resequence();
        list
    }

    pub fn as_slice(&self) -> &[Room] {
        &self.rooms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Find a room by ID.
    pub fn get(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Check if a room number is already taken.
    pub fn contains_number(&self, number: &str) -> bool {
        self.rooms.iter().any(|r| r.room_number == number)
    }

    /// Append a room with the next sequential id.
    pub fn push(&mut self, raw: &str) -> Result<Room, RoomError> {
        let number = parse_room_number(raw)?;
        if self.contains_number(number) {
            return Err(RoomError::DuplicateNumber(number.to_string()));
        }

        let room = Room::new(self.next_id(), number);
        self.rooms.push(room.clone());
        Ok(room)
    }

    /// Replace the number of room `id`, keeping its id and position.
    ///
    /// With `allow_unchanged`, resubmitting the room's own number succeeds
    /// as a no-op instead of counting as a duplicate.
    pub fn renumber(&mut self, id: u32, raw: &str, allow_unchanged: bool) -> Result<Room, RoomError> {
        let number = parse_room_number(raw)?;

        if let Some(clash) = self.rooms.iter().find(|r| r.room_number == number) {
            if !(allow_unchanged && clash.id == id) {
                return Err(RoomError::DuplicateNumber(number.to_string()));
            }
        }

        let room = self
            .rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RoomError::NotFound(id))?;
        room.room_number = number.to_string();
        Ok(room.clone())
    }

    /// Remove room `id` and compact the remaining ids to `1..=len`.
    pub fn remove(&mut self, id: u32) -> Option<Room> {
        let index = self.rooms.iter().position(|r| r.id == id)?;
        let removed = self.rooms.remove(index);
        self.resequence();
        Some(removed)
    }

    /// Reassign every id to match its position. Returns whether anything changed.
    pub fn resequence(&mut self) -> bool {
        let mut changed = false;
        for (index, room) in self.rooms.iter_mut().enumerate() {
            let id = index as u32 + 1;
            if room.id != id {
                room.id = id;
                changed = true;
            }
        }
        changed
    }

    fn next_id(&self) -> u32 {
        self.rooms.len() as u32 + 1
    }
}
