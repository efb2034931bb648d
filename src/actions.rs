//! User Intents
//!
//! Every button and form in the view lands here. A handler reads what it
//! needs from the state, awaits at most one request, then applies the
//! outcome in a single write.

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewNote, Note, NoteId, Session};
use crate::services::{HttpLoginService, HttpNoteService, LoginApi, NoteApi};
use crate::state::{now, Millis, StateCell};
use crate::storage::{self, KeyValueStore, LocalStorage};

pub const WRONG_CREDENTIALS: &str = "Wrong credentials";

pub fn already_removed(content: &str) -> String {
    format!("Note '{}' was already removed from server", content)
}

pub fn not_saved(content: &str) -> String {
    format!("Note '{}' could not be saved", content)
}

#[derive(Debug, Clone)]
pub struct Actions<N, L, K> {
    notes: N,
    login: L,
    storage: K,
    session_key: String,
    clock: fn() -> Millis,
}

/// Handlers wired to the real backend and browser storage
pub type BrowserActions = Actions<HttpNoteService, HttpLoginService, LocalStorage>;

impl BrowserActions {
    pub fn browser(config: &AppConfig) -> Self {
        let http = reqwest::Client::new();
        Actions::new(
            HttpNoteService::new(http.clone()),
            HttpLoginService::new(http),
            LocalStorage,
            config.session_key.clone(),
        )
    }
}

impl<N, L, K> Actions<N, L, K>
where
    N: NoteApi,
    L: LoginApi,
    K: KeyValueStore,
{
    pub fn new(notes: N, login: L, storage: K, session_key: impl Into<String>) -> Self {
        Self {
            notes,
            login,
            storage,
            session_key: session_key.into(),
            clock: now,
        }
    }

    pub fn with_clock(mut self, clock: fn() -> Millis) -> Self {
        self.clock = clock;
        self
    }

    fn notify(&self, state: &impl StateCell, message: String) {
        let at = (self.clock)();
        tracing::info!(%message, "showing notification");
        state.write(|s| s.notification.show(message, at));
    }

    /// Drop the banner if its time is up. Returns how long the banner still
    /// has to stay, or `None` once nothing is showing.
    pub fn expire_notification(&self, state: &impl StateCell) -> Option<Millis> {
        let at = (self.clock)();
        let mut left = None;
        state.write(|s| {
            s.notification.clear_expired(at);
            left = s.notification.time_left(at);
        });
        left
    }

    /// Log back in from the saved session, if there is a usable one
    pub fn restore_session(&self, state: &impl StateCell) -> bool {
        match storage::load_session(&self.storage, &self.session_key) {
            Some(session) => {
                tracing::info!(name = %session.name, "restored saved session");
                state.write(|s| s.session.log_in(session));
                true
            }
            None => false,
        }
    }

    /// Replace the list with the server's. Failure leaves the list as it was
    /// and only logs.
    pub async fn load_notes(&self, state: &impl StateCell) -> ApiResult<usize> {
        let client = state.read(|s| s.session.client().clone());
        match self.notes.list(&client).await {
            Ok(notes) => {
                let count = notes.len();
                state.write(|s| s.notes.replace_all(notes));
                tracing::info!(count, "notes loaded");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(%err, "loading notes failed");
                Err(err)
            }
        }
    }

    pub async fn add_note(&self, state: &impl StateCell, content: &str, important: bool) -> ApiResult<Note> {
        if content.trim().is_empty() {
            return Err(ApiError::InvalidInput("note content is empty".to_string()));
        }

        let client = state.read(|s| s.session.client().clone());
        let draft = NewNote { content: content.to_string(), important };
        match self.notes.create(&client, &draft).await {
            Ok(note) => {
                tracing::info!(id = %note.id, "note created");
                let added = note.clone();
                state.write(|s| {
                    s.notes.append(added);
                    s.draft.clear();
                    s.draft_important = false;
                });
                Ok(note)
            }
            Err(err) => {
                tracing::warn!(%err, "creating note failed");
                self.notify(state, not_saved(content));
                Err(err)
            }
        }
    }

    pub async fn toggle_importance(&self, state: &impl StateCell, id: &NoteId) -> ApiResult<Note> {
        let prepared = state.read(|s| {
            s.notes
                .toggled(id)
                .map(|changed| (changed, s.session.client().clone()))
        });
        let (changed, client) = match prepared {
            Ok(prepared) => prepared,
            Err(err) => {
                tracing::warn!(%err, "toggle on a note that is not listed");
                self.notify(state, err.to_string());
                return Err(err);
            }
        };

        match self.notes.update(&client, id, &changed).await {
            Ok(note) => {
                let updated = note.clone();
                let mut replaced = Ok(());
                state.write(|s| replaced = s.notes.replace(updated));
                if let Err(err) = replaced {
                    // list was reloaded while the request was in flight
                    tracing::warn!(%err, "updated note no longer listed");
                    self.notify(state, already_removed(&changed.content));
                    return Err(err);
                }
                tracing::info!(%id, important = note.important, "importance toggled");
                Ok(note)
            }
            Err(err) => {
                tracing::warn!(%err, %id, "updating note failed");
                self.notify(state, already_removed(&changed.content));
                Err(err)
            }
        }
    }

    pub async fn log_in(&self, state: &impl StateCell) -> ApiResult<Session> {
        let prepared = state.read(|s| {
            s.session
                .begin_login()
                .map(|credentials| (credentials, s.session.client().clone()))
        });
        let (credentials, client) = prepared?;

        match self.login.login(&client, &credentials).await {
            Ok(session) => {
                if let Err(err) = storage::save_session(&self.storage, &self.session_key, &session) {
                    tracing::warn!(%err, "could not persist session");
                }
                tracing::info!(name = %session.name, "logged in");
                let logged_in = session.clone();
                state.write(|s| s.session.log_in(logged_in));
                Ok(session)
            }
            Err(err) => {
                tracing::warn!(%err, username = %credentials.username, "login rejected");
                self.notify(state, WRONG_CREDENTIALS.to_string());
                Err(err)
            }
        }
    }

    pub fn log_out(&self, state: &impl StateCell) -> ApiResult<()> {
        if !state.read(|s| s.session.is_logged_in()) {
            return Err(ApiError::InvalidTransition("not logged in"));
        }
        storage::clear_session(&self.storage, &self.session_key)?;
        state.write(|s| {
            s.session.log_out();
            s.draft.clear();
            s.draft_important = false;
        });
        tracing::info!("logged out");
        Ok(())
    }
}
