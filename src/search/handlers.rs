use super::engine::{find_similar, get_by_id, refine, search, similar_to};
use super::types::{Book, BookDetailsResponse, MessageResponse, SearchParams};
use crate::error::CatalogError;
use crate::storage::SharedStore;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};

pub async fn handle_search(
    params: Result<Query<SearchParams>, QueryRejection>,
    Extension(store): Extension<SharedStore>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return CatalogError::from(rejection).into_response(),
    };

    let Some(query) = params.q.as_deref() else {
        tracing::debug!("Search request without q parameter");
        return (
            StatusCode::BAD_REQUEST,
            Json(MessageResponse::new("Missing query parameter q")),
        )
            .into_response();
    };

    let books = match store.load_all().await {
        Ok(books) => books,
        Err(e) => return e.into_response(),
    };

    let results = refine(search(&books, query), &params.refine_options());
    tracing::debug!("Search {:?} matched {} books", query, results.len());

    Json(results).into_response()
}

pub async fn handle_get_book(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<Json<BookDetailsResponse>, CatalogError> {
    let books = store.load_all().await?;
    let book = get_by_id(&books, &id).ok_or(CatalogError::NotFound(id))?;
    let similar_books = similar_to(&books, &book);

    Ok(Json(BookDetailsResponse {
        book,
        similar_books,
    }))
}

pub async fn handle_similar_books(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<Book>>, CatalogError> {
    let books = store.load_all().await?;
    Ok(Json(find_similar(&books, &id)?))
}
