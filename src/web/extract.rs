//! Extractors whose rejections go through [`WebError`], so a bad body or path still gets the
//! usual JSON error response.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::web::{WebError, WebResult};

pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(WebError::malformed_request(rejection.body_text())),
        }
    }
}

pub struct PathParams<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(WebError::malformed_request(rejection.body_text())),
        }
    }
}

/// Presence check for a body field. Absent and `null` are both missing.
pub fn required<T>(value: Option<T>, field: &'static str) -> WebResult<T> {
    value.ok_or_else(|| WebError::missing_field(field))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn required_passes_present_values() {
        assert_eq!(required(Some("bob"), "username").unwrap(), "bob");
    }

    #[test]
    fn required_names_missing_field() {
        let err = required::<String>(None, "email").unwrap_err();
        assert_eq!(err.client_display(), "Missing required field: email");
    }
}
