//! Note Service
//!
//! `GET/POST /notes`, `PUT /notes/{id}`.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};

use super::client::{read_json, ApiClient};
use super::NoteApi;
use crate::error::ApiResult;
use crate::models::{NewNote, Note, NoteId};

const NOTES_PATH: &str = "notes";

#[derive(Debug, Clone, Default)]
pub struct HttpNoteService {
    http: reqwest::Client,
}

impl HttpNoteService {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    fn list_request(&self, client: &ApiClient) -> RequestBuilder {
        client.request(&self.http, Method::GET, NOTES_PATH)
    }

    fn create_request(&self, client: &ApiClient, draft: &NewNote) -> RequestBuilder {
        client.request(&self.http, Method::POST, NOTES_PATH).json(draft)
    }

    fn update_request(&self, client: &ApiClient, id: &NoteId, note: &Note) -> RequestBuilder {
        let path = format!("{}/{}", NOTES_PATH, id);
        client.request(&self.http, Method::PUT, &path).json(note)
    }
}

#[async_trait(?Send)]
impl NoteApi for HttpNoteService {
    async fn list(&self, client: &ApiClient) -> ApiResult<Vec<Note>> {
        tracing::debug!(url = %client.url(NOTES_PATH), "GET notes");
        let response = self.list_request(client).send().await?;
        read_json(response).await
    }

    async fn create(&self, client: &ApiClient, draft: &NewNote) -> ApiResult<Note> {
        tracing::debug!(important = draft.important, "POST note");
        let response = self.create_request(client, draft).send().await?;
        read_json(response).await
    }

    async fn update(&self, client: &ApiClient, id: &NoteId, note: &Note) -> ApiResult<Note> {
        tracing::debug!(%id, "PUT note");
        let response = self.update_request(client, id, note).send().await?;
        read_json(response).await
    }
}
