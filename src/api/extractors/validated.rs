//! Validated extractors - combine deserialization with rule-table validation.
//!
//! Each wraps the corresponding axum extractor and then runs the type's
//! validation table. Both failure modes surface as a 422 `ValidationErrors`
//! response: deserialization problems become a single synthetic field error,
//! constraint violations keep their field attribution.

use axum::{
    async_trait,
    extract::{
        rejection::{FormRejection, JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::request::Parts,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::validation::{ValidateFields, ValidationErrors};

/// Validated JSON body extractor.
///
/// # Example
///
/// ```rust,ignore
/// use person_api::api::extractors::ValidatedJson;
/// use person_api::domain::Person;
///
/// async fn create_person(ValidatedJson(person): ValidatedJson<Person>) {
///     // person passed its rule table
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateFields,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ValidationErrors::single("body", "parse_error", e.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Validated urlencoded form extractor.
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateFields,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| ValidationErrors::single("body", "parse_error", e.body_text()))?;

        value.validate()?;

        Ok(ValidatedForm(value))
    }
}

/// Validated query string extractor.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateFields,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: QueryRejection| {
                ValidationErrors::single("query", "parse_error", e.body_text())
            })?;

        value.validate()?;

        Ok(ValidatedQuery(value))
    }
}
