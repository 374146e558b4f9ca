//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Form;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::UserId;

/// Extract a user id from the path.
///
/// A segment that can't be an id can't name an existing user either, so it
/// is rejected as not-found rather than as malformed input.
pub struct UserIdPath(pub UserId);

impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        UserId::parse(&raw)
            .map(Self)
            .ok_or_else(|| ApiError::user_not_found(raw))
    }
}

/// Request body from either a JSON client or an HTML form post.
///
/// `application/x-www-form-urlencoded` is decoded as a form; anything else,
/// including a missing content type, is decoded as JSON.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::BadRequest {
                    message: e.body_text(),
                })?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest {
                message: e.body_text(),
            })?;

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| ApiError::BadRequest {
                message: format!("invalid JSON body: {}", e),
            })
    }
}
