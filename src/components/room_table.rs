//! Room Table Component
//!
//! Lists rooms in order with per-row delete and edit actions.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Room;

/// Table of all registered rooms
#[component]
pub fn RoomTable() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let labels = ctx.labels;

    let rooms = move || ctx.manager.with(|m| m.rooms().as_slice().to_vec());
    let count = move || (labels.room_count)(ctx.manager.with(|m| m.rooms().len()));

    view! {
        <table class="room-table">
            <thead>
                <tr>
                    <th>{labels.id_header}</th>
                    <th>{labels.number_header}</th>
                    <th>{labels.actions_header}</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rooms
                    // ids shift after a delete, so key on both fields
                    key=|room| (room.id, room.room_number.clone())
                    children=move |room| view! { <RoomRow room=room /> }
                />
            </tbody>
        </table>
        <p class="room-count">{count}</p>
    }
}

/// A single room row
#[component]
fn RoomRow(room: Room) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let labels = ctx.labels;
    let id = room.id;

    view! {
        <tr>
            <td>{room.id}</td>
            <td>{room.room_number}</td>
            <td class="actions">
                <button class="btn btn-delete" on:click=move |_| ctx.delete(id)>
                    {labels.delete}
                </button>
                <button class="btn btn-primary" on:click=move |_| ctx.begin_edit(id)>
                    {labels.edit}
                </button>
            </td>
        </tr>
    }
}
