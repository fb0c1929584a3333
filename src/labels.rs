//! UI Labels
//!
//! Static text for each supported locale.

use serde::{Deserialize, Serialize};

use crate::manager::ManagerError;
use crate::rooms::RoomError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
}

impl Locale {
    pub fn labels(self) -> &'static Labels {
        match self {
            Locale::Pt => &PT,
            Locale::En => &EN,
        }
    }
}

#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub register: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub id_header: &'static str,
    pub number_header: &'static str,
    pub actions_header: &'static str,
    pub empty_number: &'static str,
    pub duplicate_number: &'static str,
    pub missing_room: &'static str,
    pub storage_failure: &'static str,
    pub room_count: fn(usize) -> String,
}

pub static PT: Labels = Labels {
    title: "Sistema de Salas",
    placeholder: "Número da Sala",
    register: "Cadastrar",
    edit: "Editar",
    delete: "Excluir",
    id_header: "ID",
    number_header: "Número da Sala",
    actions_header: "Ações",
    empty_number: "Por favor, digite o número da sala.",
    duplicate_number: "Já existe uma sala com esse número. Por favor, digite um número diferente.",
    missing_room: "A sala em edição não existe mais.",
    storage_failure: "Não foi possível salvar as salas neste navegador.",
    room_count: room_count_pt,
};

pub static EN: Labels = Labels {
    title: "Room System",
    placeholder: "Room Number",
    register: "Register",
    edit: "Edit",
    delete: "Delete",
    id_header: "ID",
    number_header: "Room Number",
    actions_header: "Actions",
    empty_number: "Please enter the room number.",
    duplicate_number: "A room with that number already exists. Please use a different number.",
    missing_room: "The room being edited no longer exists.",
    storage_failure: "Could not save the rooms in this browser.",
    room_count: room_count_en,
};

fn room_count_pt(n: usize) -> String {
    match n {
        1 => "1 sala".to_string(),
        n => format!("{} salas", n),
    }
}

fn room_count_en(n: usize) -> String {
    match n {
        1 => "1 room".to_string(),
        n => format!("{} rooms", n),
    }
}

impl Labels {
    /// Submit button text for the current form mode.
    pub fn submit(&self, editing: bool) -> &'static str {
        if editing {
            self.edit
        } else {
            self.register
        }
    }

    /// Alert text for a failed command.
    pub fn describe(&self, err: &ManagerError) -> &'static str {
        match err {
            ManagerError::Room(RoomError::EmptyNumber) => self.empty_number,
            ManagerError::Room(RoomError::DuplicateNumber(_)) => self.duplicate_number,
            ManagerError::Room(RoomError::NotFound(_)) => self.missing_room,
            ManagerError::Storage(_) => self.storage_failure,
        }
    }
}
