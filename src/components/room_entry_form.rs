//! Room Entry Form Component
//!
//! Number input plus a submit button that registers or edits depending on mode.

use leptos::prelude::*;

use crate::context::AppContext;

/// Form for registering a room or renumbering the one being edited
#[component]
pub fn RoomEntryForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let labels = ctx.labels;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="room-form" on:submit=on_submit>
            <input
                type="number"
                class="room-input"
                placeholder=labels.placeholder
                prop:value=move || ctx.manager.with(|m| m.form().input().to_string())
                on:input=move |ev| ctx.set_input(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary">
                {move || labels.submit(ctx.is_editing())}
            </button>
        </form>
    }
}
