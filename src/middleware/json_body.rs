use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::QuillError;

/// Lenient JSON body extractor.
///
/// An absent, non-JSON, or undecodable body is reported as one uniform
/// 400 ("No JSON data provided!") instead of axum's default 415/422
/// rejections. Field-level presence checks stay in the handlers.
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = QuillError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| QuillError::NoJsonBody)?;
        if bytes.is_empty() {
            return Err(QuillError::NoJsonBody);
        }
        let value = serde_json::from_slice::<T>(&bytes).map_err(|_| QuillError::NoJsonBody)?;
        Ok(Self(value))
    }
}
