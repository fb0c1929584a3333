//! Application Context
//!
//! Shared room manager provided via Leptos Context API. Components read it
//! through `manager` and change it only through the command methods.

use leptos::prelude::*;

use crate::dialog;
use crate::labels::Labels;
use crate::manager::{ManagerError, RoomManager};
use crate::storage::LocalStorage;

pub type BrowserRoomManager = RoomManager<LocalStorage>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Room list and form state - read
    pub manager: ReadSignal<BrowserRoomManager>,
    /// Room list and form state - write
    set_manager: WriteSignal<BrowserRoomManager>,
    /// Text for the configured locale
    pub labels: &'static Labels,
}

impl AppContext {
    pub fn new(
        manager: (ReadSignal<BrowserRoomManager>, WriteSignal<BrowserRoomManager>),
        labels: &'static Labels,
    ) -> Self {
        Self {
            manager: manager.0,
            set_manager: manager.1,
            labels,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.manager.with(|m| m.is_editing())
    }

    /// Mirror the input field
    pub fn set_input(&self, text: String) {
        self.set_manager.update(|m| m.set_input(text));
    }

    /// Register or renumber from the current input
    pub fn submit(&self) {
        self.run(|m| m.submit().map(|_| ()));
    }

    pub fn begin_edit(&self, id: u32) {
        self.run(|m| m.begin_edit(id));
    }

    pub fn delete(&self, id: u32) {
        self.run(|m| m.delete(id).map(|_| ()));
    }

    /// Apply a command, alerting the user if it fails.
    fn run(&self, command: impl FnOnce(&mut BrowserRoomManager) -> Result<(), ManagerError>) {
        if let Some(Err(e)) = self.set_manager.try_update(command) {
            log::warn!("command failed: {}", e);
            dialog::alert(self.labels.describe(&e));
        }
    }
}
