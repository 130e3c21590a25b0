//! Request extractors that reject with the JSON error body.
//!
//! axum's own `Query` and `Path` rejections answer with plain text. These
//! wrappers turn them into [`CorpusError::InvalidParameter`] so every
//! failure reaches the client as `{"detail": ...}`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::{CorpusError, Result};
use crate::query::{PageLimits, PageRequest};

/// `Query<T>` with a 422 JSON rejection.
#[derive(Debug)]
pub struct LexiconQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for LexiconQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = CorpusError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| CorpusError::invalid_parameter("query", rejection.body_text()))
    }
}

/// `Path<T>` with a 422 JSON rejection.
#[derive(Debug)]
pub struct LexiconPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for LexiconPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = CorpusError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| CorpusError::invalid_parameter("path", rejection.body_text()))
    }
}

/// Parse an integer query or path value. Missing and empty values are
/// absent.
pub fn int_param(param: &'static str, value: Option<&str>) -> Result<Option<i64>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| CorpusError::invalid_parameter(param, "must be an integer")),
    }
}

/// Lemma id from a path segment.
pub fn lemma_id(raw: &str) -> Result<i64> {
    int_param("id", Some(raw))?
        .ok_or_else(|| CorpusError::invalid_parameter("id", "must be an integer"))
}

/// Validated page request from raw `page` / `page_size` values.
pub fn page_request(
    page: Option<&str>,
    page_size: Option<&str>,
    limits: PageLimits,
) -> Result<PageRequest> {
    PageRequest::new(
        int_param("page", page)?,
        int_param("page_size", page_size)?,
        limits,
    )
}
