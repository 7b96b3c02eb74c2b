//! Stateless HTTP request builder and response parser for the todo resource.
//!
//! # Design
//! `TodoClient` holds only the collection URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Executing the round trip is someone else's job.
//!
//! Create and update responses are checked for status only; the body the
//! server sends back is never read, the list is re-fetched instead.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::NetworkError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoId};

/// Synchronous, stateless client for the todo collection resource.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    /// `base_url` is the collection URL itself, e.g. `http://host/todos`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, NetworkError> {
        let body = serde_json::to_string(input).map_err(|e| NetworkError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// Full replacement of the record at `id` with `record`.
    pub fn build_update_todo(&self, id: &TodoId, record: &Todo) -> Result<HttpRequest, NetworkError> {
        let body = serde_json::to_string(record).map_err(|e| NetworkError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_path(id),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_todo(&self, id: &TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.item_path(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, NetworkError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| NetworkError::Deserialization(e.to_string()))
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<(), NetworkError> {
        check_status(&response)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), NetworkError> {
        check_status(&response)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), NetworkError> {
        check_status(&response)
    }

    /// The id is opaque, so it is encoded as exactly one path segment.
    fn item_path(&self, id: &TodoId) -> String {
        let segment = id.to_string();
        format!("{}/{}", self.base_url, utf8_percent_encode(&segment, PATH_SEGMENT_ENCODE_SET))
    }
}

/// Characters that would end or split a path segment, plus `%` itself.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Map any non-2xx status to `NetworkError::Status`.
fn check_status(response: &HttpResponse) -> Result<(), NetworkError> {
    if response.is_success() {
        return Ok(());
    }
    Err(NetworkError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
