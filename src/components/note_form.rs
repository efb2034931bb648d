//! New Note Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::BrowserActions;
use crate::state::{use_app_store, AppStateStoreFields};

/// Form for creating a note; the input is cleared once the server accepts it
#[component]
pub fn NoteForm() -> impl IntoView {
    let store = use_app_store();
    let actions = expect_context::<BrowserActions>();

    let add_note = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = store.draft().get_untracked();
        if content.trim().is_empty() { return; }
        let important = store.draft_important().get_untracked();

        let actions = actions.clone();
        spawn_local(async move {
            let _ = actions.add_note(&store, &content, important).await;
        });
    };

    view! {
        <form class="note-form" on:submit=add_note>
            <input
                type="text"
                placeholder="Write a new note..."
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
            />
            <label class="important-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || store.draft_important().get()
                    on:change=move |ev| store.draft_important().set(event_target_checked(&ev))
                />
                "important"
            </label>
            <button type="submit">"save"</button>
        </form>
    }
}
