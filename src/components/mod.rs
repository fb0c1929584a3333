//! UI Components
//!
//! Leptos components for the room form and table.

mod room_entry_form;
mod room_table;

pub use room_entry_form::RoomEntryForm;
pub use room_table::RoomTable;
