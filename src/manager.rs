//! Room Manager
//!
//! State container owning the room list, the form and the repository.
//! Every command that changes the list ends with an explicit save.

use thiserror::Error;

use crate::config::Config;
use crate::form::{RoomForm, Submitted};
use crate::models::Room;
use crate::rooms::{RoomError, RoomList};
use crate::storage::{KeyValueStore, RoomRepository, StorageError};

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone)]
pub struct RoomManager<S> {
    rooms: RoomList,
    form: RoomForm,
    repo: RoomRepository<S>,
    allow_unchanged_edit: bool,
}

impl<S: KeyValueStore> RoomManager<S> {
    /// Load the stored rooms and start in idle mode.
    pub fn open(store: S, config: &Config) -> Self {
        let repo = RoomRepository::new(store, config.storage_key.as_str());
        let loaded = repo.load();
        let count = loaded.len();
        let rooms = RoomList::from_rooms(loaded.clone());
        if rooms.as_slice() != loaded.as_slice() {
            log::warn!(
                "repaired stored rooms: {} loaded, {} kept, ids re-sequenced",
                count,
                rooms.len()
            );
        }

        Self {
            rooms,
            form: RoomForm::new(),
            repo,
            allow_unchanged_edit: config.allow_unchanged_edit,
        }
    }

    pub fn rooms(&self) -> &RoomList {
        &self.rooms
    }

    pub fn form(&self) -> &RoomForm {
        &self.form
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_editing()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.form.set_input(text);
    }

    /// Submit the form: register a new room or renumber the one being edited.
    pub fn submit(&mut self) -> Result<Submitted, ManagerError> {
        let submitted = self
            .form
            .submit(&mut self.rooms, self.allow_unchanged_edit)
            .inspect_err(|e| log::debug!("submit rejected: {}", e))?;

        match &submitted {
            Submitted::Created(room) => log::info!("registered room {} as #{}", room.room_number, room.id),
            Submitted::Updated(room) => log::info!("room #{} renumbered to {}", room.id, room.room_number),
        }

        self.persist()?;
        Ok(submitted)
    }

    /// Enter edit mode for room `id`.
    pub fn begin_edit(&mut self, id: u32) -> Result<(), ManagerError> {
        let room = self.rooms.get(id).ok_or(RoomError::NotFound(id))?;
        self.form.begin_edit(room);
        Ok(())
    }

    /// Delete room `id` and compact the remaining ids.
    ///
    /// Unknown ids are ignored and nothing is written.
    pub fn delete(&mut self, id: u32) -> Result<Option<Room>, ManagerError> {
        let Some(removed) = self.rooms.remove(id) else {
            log::debug!("delete ignored, no room #{}", id);
            return Ok(None);
        };
        self.form.follow_removal(id);
        log::info!("deleted room {} (#{})", removed.room_number, removed.id);

        self.persist()?;
        Ok(Some(removed))
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.repo
            .save(self.rooms.as_slice())
            .inspect_err(|e| log::error!("failed to save rooms to {:?}: {}", self.repo.key(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormMode;
    use crate::storage::MemoryStore;

    fn open(store: &MemoryStore) -> RoomManager<MemoryStore> {
        RoomManager::open(store.clone(), &Config::default())
    }

    fn submit(manager: &mut RoomManager<MemoryStore>, input: &str) -> Result<Submitted, ManagerError> {
        manager.set_input(input);
        manager.submit()
    }

    fn rooms(manager: &RoomManager<MemoryStore>) -> Vec<Room> {
        manager.rooms().as_slice().to_vec()
    }

    fn stored(store: &MemoryStore) -> Vec<Room> {
        RoomRepository::new(store.clone(), "salas").load()
    }

    /// Scenario C: "101" and "202" registered.
    fn scenario_c(store: &MemoryStore) -> RoomManager<MemoryStore> {
        let mut manager = open(store);
        submit(&mut manager, "101").unwrap();
        submit(&mut manager, "202").unwrap();
        manager
    }

    #[test]
    fn test_scenario_a_first_room() {
        let store = MemoryStore::new();
        let mut manager = open(&store);

        submit(&mut manager, "101").unwrap();

        assert_eq!(rooms(&manager), vec![Room::new(1, "101")]);
        assert_eq!(stored(&store), vec![Room::new(1, "101")]);
    }

    #[test]
    fn test_scenario_b_duplicate_rejected() {
        let store = MemoryStore::new();
        let mut manager = open(&store);
        submit(&mut manager, "101").unwrap();

        let err = submit(&mut manager, "101").unwrap_err();

        assert!(matches!(err, ManagerError::Room(RoomError::DuplicateNumber(_))));
        assert_eq!(rooms(&manager), vec![Room::new(1, "101")]);
        assert_eq!(manager.form().input(), "101");
    }

    #[test]
    fn test_scenario_c_second_room() {
        let store = MemoryStore::new();
        let manager = scenario_c(&store);

        let expected = vec![Room::new(1, "101"), Room::new(2, "202")];
        assert_eq!(rooms(&manager), expected);
        assert_eq!(stored(&store), expected);
    }

    #[test]
    fn test_scenario_d_delete_resequences() {
        let store = MemoryStore::new();
        let mut manager = scenario_c(&store);

        let removed = manager.delete(1).unwrap();

        assert_eq!(removed, Some(Room::new(1, "101")));
        assert_eq!(rooms(&manager), vec![Room::new(1, "202")]);
        assert_eq!(stored(&store), vec![Room::new(1, "202")]);
    }

    #[test]
    fn test_scenario_e_edit() {
        let store = MemoryStore::new();
        let mut manager = scenario_c(&store);

        manager.begin_edit(1).unwrap();
        assert!(manager.is_editing());
        assert_eq!(manager.form().input(), "101");

        submit(&mut manager, "303").unwrap();

        let expected = vec![Room::new(1, "303"), Room::new(2, "202")];
        assert_eq!(rooms(&manager), expected);
        assert_eq!(stored(&store), expected);
        assert!(!manager.is_editing());
        assert_eq!(manager.form().input(), "");
    }

    #[test]
    fn test_scenario_f_empty_rejected() {
        let store = MemoryStore::new();
        let mut manager = open(&store);

        let err = submit(&mut manager, "   ").unwrap_err();

        assert!(matches!(err, ManagerError::Room(RoomError::EmptyNumber)));
        assert!(manager.rooms().is_empty());
        assert_eq!(store.get("salas").unwrap(), None);
    }

    #[test]
    fn test_restart_restores_rooms() {
        let store = MemoryStore::new();
        let mut manager = scenario_c(&store);
        manager.delete(1).unwrap();
        submit(&mut manager, "404").unwrap();
        let before = rooms(&manager);

        let reopened = open(&store);

        assert_eq!(rooms(&reopened), before);
        assert!(!reopened.is_editing());
    }

    #[test]
    fn test_open_uses_configured_key() {
        let store = MemoryStore::new();
        let config = Config {
            storage_key: "rooms".to_string(),
            ..Config::default()
        };
        let mut manager = RoomManager::open(store.clone(), &config);
        submit(&mut manager, "101").unwrap();

        assert!(store.get("rooms").unwrap().is_some());
        assert_eq!(store.get("salas").unwrap(), None);
    }

    #[test]
    fn test_open_repairs_stored_rooms() {
        let store = MemoryStore::new();
        store
            .set(
                "salas",
                r#"[{"id":3,"roomNumber":"101"},{"id":7,"roomNumber":"202"},{"id":8,"roomNumber":"101"}]"#,
            )
            .unwrap();

        let manager = open(&store);

        assert_eq!(rooms(&manager), vec![Room::new(1, "101"), Room::new(2, "202")]);
    }

    #[test]
    fn test_open_keeps_numero_sala_rooms() {
        let store = MemoryStore::new();
        store
            .set("salas", r#"[{"id":1,"numeroSala":"101"},{"id":2,"numeroSala":"202"}]"#)
            .unwrap();
        let mut manager = open(&store);

        submit(&mut manager, "303").unwrap();

        let expected = vec![Room::new(1, "101"), Room::new(2, "202"), Room::new(3, "303")];
        assert_eq!(rooms(&manager), expected);
        assert_eq!(stored(&store), expected);
    }

    #[test]
    fn test_open_malformed_storage_starts_empty() {
        let store = MemoryStore::new();
        store.set("salas", "not json").unwrap();
        assert!(open(&store).rooms().is_empty());
    }

    #[test]
    fn test_begin_edit_unknown_room() {
        let store = MemoryStore::new();
        let mut manager = scenario_c(&store);

        let err = manager.begin_edit(9).unwrap_err();

        assert!(matches!(err, ManagerError::Room(RoomError::NotFound(9))));
        assert!(!manager.is_editing());
    }

    #[test]
    fn test_delete_unknown_room_does_not_write() {
        let store = MemoryStore::new();
        let mut manager = scenario_c(&store);
        store.remove("salas").unwrap();

        assert_eq!(manager.delete(9).unwrap(), None);
        assert_eq!(store.get("salas").unwrap(), None);
    }

    #[test]
    fn test_delete_edit_target_exits_edit_mode() {
        let store = MemoryStore::new();
        let mut manager = scenario_c(&store);
        manager.begin_edit(2).unwrap();

        manager.delete(2).unwrap();

        assert!(!manager.is_editing());
        assert_eq!(manager.form().input(), "");
    }

    #[test]
    fn test_delete_before_edit_target_follows_room() {
        let store = MemoryStore::new();
        let mut manager = scenario_c(&store);
        manager.begin_edit(2).unwrap();

        manager.delete(1).unwrap();
        assert_eq!(manager.form().mode(), FormMode::Editing { id: 1 });

        submit(&mut manager, "505").unwrap();
        assert_eq!(rooms(&manager), vec![Room::new(1, "505")]);
    }

    #[test]
    fn test_strict_unchanged_edit() {
        let store = MemoryStore::new();
        let config = Config {
            allow_unchanged_edit: false,
            ..Config::default()
        };
        let mut manager = RoomManager::open(store, &config);
        submit(&mut manager, "101").unwrap();
        manager.begin_edit(1).unwrap();

        let err = manager.submit().unwrap_err();

        assert!(matches!(err, ManagerError::Room(RoomError::DuplicateNumber(_))));
        assert!(manager.is_editing());
    }

    #[test]
    fn test_relaxed_unchanged_edit() {
        let store = MemoryStore::new();
        let mut manager = open(&store);
        submit(&mut manager, "101").unwrap();
        manager.begin_edit(1).unwrap();

        assert_eq!(manager.submit().unwrap(), Submitted::Updated(Room::new(1, "101")));
        assert!(!manager.is_editing());
    }

    #[test]
    fn test_storage_mirrors_memory_after_every_command() {
        let store = MemoryStore::new();
        let mut manager = open(&store);

        for number in ["101", "202", "303", "404"] {
            submit(&mut manager, number).unwrap();
            assert_eq!(stored(&store), rooms(&manager));
        }
        manager.delete(2).unwrap();
        assert_eq!(stored(&store), rooms(&manager));
        manager.begin_edit(3).unwrap();
        submit(&mut manager, "909").unwrap();
        assert_eq!(stored(&store), rooms(&manager));
        assert_eq!(
            rooms(&manager),
            vec![Room::new(1, "101"), Room::new(2, "303"), Room::new(3, "909")]
        );
    }
}
