//! REST Service Wrappers
//!
//! Frontend bindings to the notes backend, organized by domain. Each call is
//! one HTTP request/response pair; nothing is retried or cached.

mod client;
mod login;
mod notes;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Credentials, NewNote, Note, NoteId, Session};

pub use client::ApiClient;
pub use login::HttpLoginService;
pub use notes::HttpNoteService;

/// Note endpoints
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait NoteApi {
    async fn list(&self, client: &ApiClient) -> ApiResult<Vec<Note>>;

    /// Persist a draft; the returned note carries the server-assigned id
    async fn create(&self, client: &ApiClient, draft: &NewNote) -> ApiResult<Note>;

    /// Replace the note stored under `id`
    async fn update(&self, client: &ApiClient, id: &NoteId, note: &Note) -> ApiResult<Note>;
}

/// Credential exchange
#[async_trait(?Send)]
pub trait LoginApi {
    async fn login(&self, client: &ApiClient, credentials: &Credentials) -> ApiResult<Session>;
}
