//! Lenient JSON body extractor.
//!
//! The API treats an absent or unparseable JSON body as an empty payload, so
//! clients get a field-naming validation message ("Missing name or price")
//! rather than a parser error. Handlers validate field presence themselves.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON payload that falls back to `T::default()` when the body is missing
/// or does not parse.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| AppError::validation("Invalid request body"))?;
        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }
        Ok(Self(serde_json::from_slice(&bytes).unwrap_or_default()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct TestBody {
        name: Option<String>,
    }

    async fn extract(body: Body) -> TestBody {
        let request = Request::builder().body(body).unwrap();
        let Payload(parsed) = Payload::<TestBody>::from_request(request, &()).await.unwrap();
        parsed
    }

    #[tokio::test]
    async fn test_parses_valid_json() {
        let parsed = extract(Body::from(r#"{"name":"Knefeh"}"#)).await;
        assert_eq!(parsed.name.as_deref(), Some("Knefeh"));
    }

    #[tokio::test]
    async fn test_empty_body_is_default() {
        let parsed = extract(Body::empty()).await;
        assert_eq!(parsed, TestBody::default());
    }

    #[tokio::test]
    async fn test_malformed_json_is_default() {
        let parsed = extract(Body::from("{not json")).await;
        assert_eq!(parsed, TestBody::default());
    }
}
