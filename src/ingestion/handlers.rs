use super::service::add_book;
use super::types::BookInput;
use crate::error::CatalogError;
use crate::search::types::MessageResponse;
use crate::storage::SharedStore;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{Extension, Json};

pub async fn handle_add_book(
    Extension(store): Extension<SharedStore>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), CatalogError> {
    let Json(input) = payload?;
    let book = add_book(store.as_ref(), input).await?;
    tracing::debug!("Created book {}", book.id());

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Book added"))))
}

pub async fn handle_method_not_allowed() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageResponse::new("Method not allowed")),
    )
}
