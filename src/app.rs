//! Room Manager App
//!
//! Root component: loads the stored rooms and lays out the form and table.

use leptos::prelude::*;

use crate::components::{RoomEntryForm, RoomTable};
use crate::config::Config;
use crate::context::AppContext;
use crate::manager::RoomManager;
use crate::storage::LocalStorage;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let labels = config.locale.labels();

    // State
    let manager = signal(RoomManager::open(LocalStorage, &config));

    // Provide context to all children
    provide_context(AppContext::new(manager, labels));

    view! {
        <div class="container">
            <h1 class="title">{labels.title}</h1>

            <RoomEntryForm />

            <RoomTable />
        </div>
    }
}
