//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The slices are
//! plain Rust types so the intent handlers in `actions` can be exercised
//! without a browser.

mod note_store;
mod notification;
mod session;

use std::cell::RefCell;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::services::ApiClient;

pub use note_store::NoteStore;
pub use notification::{now, Millis, Notification};
pub use session::{AuthState, SessionState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    pub notes: NoteStore,
    pub session: SessionState,
    pub notification: Notification,
    /// Text typed into the new-note input
    pub draft: String,
    pub draft_important: bool,
    /// false = only important notes are listed
    pub show_all: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            notes: NoteStore::default(),
            session: SessionState::new(ApiClient::new(config.api_base.clone())),
            notification: Notification::new(config.notification_ttl),
            draft: String::new(),
            draft_important: false,
            show_all: true,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Read/modify access to the whole state.
///
/// Each call is one synchronous step; handlers never hold the state across an
/// `.await`.
pub trait StateCell {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut AppState));
}

impl StateCell for AppStore {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut AppState)) {
        self.update(f);
    }
}

impl StateCell for RefCell<AppState> {
    fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut AppState)) {
        f(&mut self.borrow_mut());
    }
}
