use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::api::models::{CheckRequest, CreateRequest, ListResponse, TodoResponse};
use crate::todo::Todo;

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The store could not be reached at all.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The store answered, but with an error status or an unusable body.
    #[error("server error: {0}")]
    Server(String),
    /// The store does not know this id.
    #[error("todo {0} not found")]
    NotFound(Uuid),
}

/// Blocking client for the four REST operations the store exposes. Every call
/// is a single round trip; nothing is retried or cached, and every failure
/// propagates unchanged to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("tido/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn list(&self) -> Result<Vec<Todo>, ApiError> {
        tracing::debug!("fetching todo list");
        let response = self.http.get(self.todos_url()).send()?;
        let body: ListResponse = parse_body(check_status(response, None)?)?;
        Ok(body.todos)
    }

    pub fn create(&self, description: &str) -> Result<Todo, ApiError> {
        tracing::debug!(description, "creating todo");
        let response = self
            .http
            .post(self.todos_url())
            .json(&CreateRequest {
                description: description.to_string(),
            })
            .send()?;
        let body: TodoResponse = parse_body(check_status(response, None)?)?;
        Ok(body.todo)
    }

    /// Request the given completion state. The server is authoritative: the
    /// returned item carries whatever `completed` it settled on.
    pub fn set_completed(&self, id: Uuid, completed: bool) -> Result<Todo, ApiError> {
        tracing::debug!(%id, completed, "updating completion");
        let response = self
            .http
            .put(self.todo_url(id))
            .json(&CheckRequest { completed })
            .send()?;
        let body: TodoResponse = parse_body(check_status(response, Some(id))?)?;
        Ok(body.todo)
    }

    /// Success is signalled purely by the absence of an error; the response
    /// body is not parsed.
    pub fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        tracing::debug!(%id, "deleting todo");
        let response = self.http.delete(self.todo_url(id)).send()?;
        check_status(response, Some(id))?;
        Ok(())
    }

    /// Liveness probe used by the serve subcommands.
    pub fn health(&self) -> bool {
        match self.http.get(format!("{}/api/health", self.base_url)).send() {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn todo_url(&self, id: Uuid) -> String {
        format!("{}/api/todos/{}", self.base_url, id)
    }
}

/// A 404 on an id-addressed operation means the store does not know the id;
/// any other non-success status is a server error.
fn check_status(response: Response, id: Option<Uuid>) -> Result<Response, ApiError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND
        && let Some(id) = id
    {
        return Err(ApiError::NotFound(id));
    }

    if !status.is_success() {
        return Err(ApiError::Server(format!("unexpected status {status}")));
    }

    Ok(response)
}

fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .map_err(|e| ApiError::Server(format!("malformed response: {e}")))
}
