//! Note Row Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::BrowserActions;
use crate::models::Note;
use crate::state::use_app_store;

/// A single note with its importance toggle
#[component]
pub fn NoteItem(note: Note) -> impl IntoView {
    let store = use_app_store();
    let actions = expect_context::<BrowserActions>();

    let id = note.id.clone();
    let (class, label) = if note.important {
        ("note important", "make not important")
    } else {
        ("note", "make important")
    };

    let toggle = move |_| {
        let actions = actions.clone();
        let id = id.clone();
        spawn_local(async move {
            let _ = actions.toggle_importance(&store, &id).await;
        });
    };

    view! {
        <li class=class>
            <span class="note-content">{note.content}</span>
            <button class="toggle-btn" on:click=toggle>{label}</button>
        </li>
    }
}
