//! Word endpoints
//!
//! - `/words`: POST (create), GET (list)
//! - `/words/{id}`: PUT (update word + definition), DELETE

use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    routing::{on, put, MethodFilter},
    Json, Router,
};
use serde::Serialize;

use crate::db::WordRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, WordId};
use crate::http::server::AppState;
use crate::models::{CreateWord, UpdateWord, WordEntry, WordUpdate};

/// `Allow` value for the collection path
pub const COLLECTION_ALLOW: &str = "POST, GET";

/// `Allow` value for the item path
pub const ITEM_ALLOW: &str = "DELETE, PUT";

/// Message returned by a successful update
pub const UPDATED_MESSAGE: &str = "Word updated successfully (or no changes were necessary)";

/// POST /words response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub data: WordEntry,
}

/// GET /words response
#[derive(Serialize)]
pub struct WordListResponse {
    pub words: Vec<WordEntry>,
}

/// PUT and DELETE response
#[derive(Serialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// POST /words - save a word
async fn create_word(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateWord>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let entry = WordRepo::new(state.store())
        .create(req)
        .await
        .map_err(ApiError::repo("Error saving word"))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            data: entry,
        }),
    ))
}

/// GET /words - list all saved words
async fn list_words(
    State(state): State<Arc<AppState>>,
) -> Result<Json<WordListResponse>, ApiError> {
    let words = WordRepo::new(state.store())
        .list()
        .await
        .map_err(ApiError::repo("Failed to fetch words"))?;

    Ok(Json(WordListResponse { words }))
}

/// PUT /words/{id} - replace word and definition
///
/// The body is validated before the id, so missing fields are a 400 even
/// on a malformed id.
async fn update_word(
    State(state): State<Arc<AppState>>,
    id: Result<WordId, ApiError>,
    JsonBody(req): JsonBody<UpdateWord>,
) -> Result<Json<AckResponse>, ApiError> {
    let update = WordUpdate::try_from(req)?;
    let WordId(id) = id?;

    WordRepo::new(state.store())
        .apply_update(id, update)
        .await
        .map_err(ApiError::repo("Error updating word"))?;

    Ok(Json(AckResponse {
        success: true,
        message: Some(UPDATED_MESSAGE),
    }))
}

/// DELETE /words/{id} - remove a word
async fn delete_word(
    State(state): State<Arc<AppState>>,
    WordId(id): WordId,
) -> Result<Json<AckResponse>, ApiError> {
    WordRepo::new(state.store())
        .delete(id)
        .await
        .map_err(ApiError::repo("Error deleting word"))?;

    Ok(Json(AckResponse {
        success: true,
        message: None,
    }))
}

async fn collection_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        allow: COLLECTION_ALLOW,
    }
}

async fn item_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed {
        method,
        allow: ITEM_ALLOW,
    }
}

/// Word routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/words",
            // GET only; HEAD is answered by the fallback
            on(MethodFilter::GET, list_words)
                .post(create_word)
                .fallback(collection_not_allowed),
        )
        .route(
            "/words/{id}",
            put(update_word)
                .delete(delete_word)
                .fallback(item_not_allowed),
        )
}
