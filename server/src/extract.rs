//! Validating extractors.
//!
//! A handler opts into request validation by taking one of these instead of
//! the plain axum extractor. The first invalid field ends the request with a
//! 400 before the handler runs.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use todo_core::{validate_agenda_date, Validate};

use crate::error::ServerError;

/// JSON body checked with [`Validate`].
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        value
            .validate()
            .map_err(|error| ServerError::from(error).into_response())?;
        Ok(Self(value))
    }
}

/// Query string checked with [`Validate`].
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        value
            .validate()
            .map_err(|error| ServerError::from(error).into_response())?;
        Ok(Self(value))
    }
}

#[derive(Debug, Deserialize)]
struct AgendaQuery {
    date: Option<String>,
}

/// The mandatory `date` query parameter, normalized to `yyyy-MM-dd`.
#[derive(Debug)]
pub struct AgendaDate(pub String);

impl<S> FromRequestParts<S> for AgendaDate
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let date = Query::<AgendaQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.date);
        Ok(Self(validate_agenda_date(date.as_deref())?))
    }
}
