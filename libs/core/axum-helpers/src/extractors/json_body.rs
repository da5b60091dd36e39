//! JSON body extractor that answers malformed input with the standard error body.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request, rejection::JsonRejection},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

const EMPTY_OBJECT: &[u8] = b"{}";

/// JSON extractor whose rejection is an [`AppError`].
///
/// Axum's plain [`Json`] rejects with a text body. This wrapper keeps the
/// response shape identical to every other error the API returns. Field
/// validation is left to the handler so that it can run after the record
/// lookup (a missing record must win over a bad payload).
///
/// A request without a body, or whose content type is not JSON, is read as
/// `{}`: payloads whose fields are all optional extract successfully and the
/// handler decides what an empty payload means.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<CreateProduct>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(JsonRejection::from)?;

        let raw = if is_json && !bytes.iter().all(u8::is_ascii_whitespace) {
            &bytes[..]
        } else {
            EMPTY_OBJECT
        };

        let Json(data) = Json::<T>::from_bytes(raw)?;
        Ok(Self(data))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(mime) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
    else {
        return false;
    };

    let mime = mime.trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
