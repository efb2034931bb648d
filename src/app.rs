//! Noteapp Frontend App
//!
//! Root component: provides the store and handlers, restores the session and
//! loads the notes once on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions::BrowserActions;
use crate::components::{LoginForm, NoteForm, NoteItem, NotificationBanner, UserBar};
use crate::config::AppConfig;
use crate::state::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(&config));
    let actions = BrowserActions::browser(&config);

    provide_context(store);
    provide_context(actions.clone());
    provide_context(config);

    // Restore session and load notes on mount
    Effect::new(move |_| {
        actions.restore_session(&store);
        let actions = actions.clone();
        spawn_local(async move {
            let _ = actions.load_notes(&store).await;
        });
    });

    let logged_in = move || store.session().with(|s| s.is_logged_in());
    let show_all = move || store.show_all().get();
    let visible_notes = move || {
        let show_all = show_all();
        store.notes().with(|notes| notes.filter(show_all))
    };

    view! {
        <div class="app-layout">
            <h1>"Notes"</h1>
            <NotificationBanner />

            <Show when=logged_in fallback=|| view! { <LoginForm /> }>
                <UserBar />
                <NoteForm />
            </Show>

            <div>
                <button on:click=move |_| store.show_all().update(|v| *v = !*v)>
                    {move || if show_all() { "show important" } else { "show all" }}
                </button>
            </div>

            <ul class="note-list">
                <For
                    each=visible_notes
                    key=|note| (note.id.clone(), note.important, note.content.clone())
                    children=|note| view! { <NoteItem note=note /> }
                />
            </ul>

            <p class="note-count">{move || format!("{} notes", store.notes().with(|n| n.len()))}</p>
        </div>
    }
}
