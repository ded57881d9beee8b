//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::error::ApiError;

/// JSON body whose rejection is a JSON `ApiError` instead of plain text
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::InvalidBody {
                message: rejection.body_text(),
            }),
        }
    }
}

/// Extract a word id from the path.
///
/// An id that isn't a UUID can't match any entry, so it is rejected as
/// not found.
pub struct WordId(pub Uuid);

impl<S> FromRequestParts<S> for WordId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        let uuid = Uuid::parse_str(&id).map_err(|_| {
            tracing::debug!(id = %id, "Malformed word id");
            ApiError::NotFound
        })?;

        Ok(Self(uuid))
    }
}
