use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use super::models::{CheckRequest, CreateRequest, ErrorResponse, ListResponse, TodoResponse};
use super::store::SharedStore;

pub async fn list_todos(State(store): State<SharedStore>) -> impl IntoResponse {
    match store.lock() {
        Ok(store) => (
            StatusCode::OK,
            Json(ListResponse {
                todos: store.list(),
            }),
        )
            .into_response(),
        Err(e) => ErrorResponse::internal(e),
    }
}

pub async fn create_todo(
    State(store): State<SharedStore>,
    Json(req): Json<CreateRequest>,
) -> impl IntoResponse {
    match store.lock() {
        Ok(mut store) => {
            let todo = store.create(req.description);
            tracing::debug!(id = %todo.id, "created todo");
            (StatusCode::CREATED, Json(TodoResponse { todo })).into_response()
        }
        Err(e) => ErrorResponse::internal(e),
    }
}

pub async fn check_todo(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
    Json(req): Json<CheckRequest>,
) -> impl IntoResponse {
    match store.lock() {
        Ok(mut store) => match store.set_completed(id, req.completed) {
            Some(todo) => (StatusCode::OK, Json(TodoResponse { todo })).into_response(),
            None => ErrorResponse::not_found("Todo not found"),
        },
        Err(e) => ErrorResponse::internal(e),
    }
}

pub async fn delete_todo(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match store.lock() {
        Ok(mut store) => {
            if store.delete(id) {
                tracing::debug!(%id, "deleted todo");
                StatusCode::NO_CONTENT.into_response()
            } else {
                ErrorResponse::not_found("Todo not found")
            }
        }
        Err(e) => ErrorResponse::internal(e),
    }
}
