use axum::{Json, body::Body, http::StatusCode, response::{IntoResponse, Response}};
use serde::{Deserialize, Serialize};

use crate::todo::Todo;

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoResponse {
    pub todo: Todo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRequest {
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckRequest {
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn internal(e: impl std::fmt::Display) -> Response<Body> {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(Self::new(e.to_string()))).into_response()
    }

    pub fn not_found(message: impl Into<String>) -> Response<Body> {
        (StatusCode::NOT_FOUND, Json(Self::new(message))).into_response()
    }
}
