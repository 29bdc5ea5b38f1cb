//! Person resource handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde_json::{json, Map, Value};

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::config::{PERSON_EXISTS_DETAIL, PERSON_NOT_FOUND_DETAIL};
use crate::domain::{Person, PersonOut, PersonQuery, UpdatePersonRequest};
use crate::errors::{AppError, AppResult};

/// Create person routes (nested under `/person`)
pub fn person_routes() -> Router<AppState> {
    Router::new()
        .route("/new", post(create_person))
        .route("/detail", get(show_person_by_query))
        .route("/detail/:person_id", get(show_person_by_path))
        .route("/:person_id", put(update_person))
}

/// Parse and bound-check a person id path segment.
///
/// Kept out of axum's typed `Path<u32>` so a bad segment gets the same
/// field-attributed 422 as any other validation failure.
fn parse_person_id(raw: &str) -> AppResult<u32> {
    let id: u32 = raw.parse().map_err(|_| {
        AppError::validation("person_id", "parse_error", "person_id must be an integer")
    })?;
    if id == 0 {
        return Err(AppError::validation(
            "person_id",
            "range",
            "person_id must be greater than 0",
        ));
    }
    Ok(id)
}

/// Create a person; responds with the public projection only
pub async fn create_person(
    ValidatedJson(person): ValidatedJson<Person>,
) -> AppResult<(StatusCode, Json<PersonOut>)> {
    Ok((StatusCode::CREATED, Json(PersonOut::from(person))))
}

/// Look up a person by query parameters, answering `{name: age}`
pub async fn show_person_by_query(
    ValidatedQuery(query): ValidatedQuery<PersonQuery>,
) -> AppResult<Json<Value>> {
    // The Required rule guarantees age is present by now
    let age = query
        .age
        .ok_or_else(|| AppError::validation("age", "required", "age is required"))?;
    let name = query.name.as_deref().unwrap_or("null");

    let mut body = Map::new();
    body.insert(name.to_string(), json!(age));
    Ok(Json(Value::Object(body)))
}

/// Confirm a person id exists in the registry
pub async fn show_person_by_path(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> AppResult<Json<Value>> {
    let person_id = parse_person_id(&person_id)?;

    if !state.registry.exists(person_id) {
        return Err(AppError::not_found(PERSON_NOT_FOUND_DETAIL));
    }

    let mut body = Map::new();
    body.insert(person_id.to_string(), json!(PERSON_EXISTS_DETAIL));
    Ok(Json(Value::Object(body)))
}

/// Update a person, answering the union of person and location fields.
///
/// The merged object echoes the raw person payload, password included.
pub async fn update_person(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdatePersonRequest>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let person_id = parse_person_id(&person_id)?;

    if !state.registry.exists(person_id) {
        return Err(AppError::not_found(PERSON_NOT_FOUND_DETAIL));
    }

    let mut merged = match serde_json::to_value(&payload.person)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    if let Value::Object(location) = serde_json::to_value(&payload.location)? {
        merged.extend(location);
    }

    Ok((StatusCode::CREATED, Json(Value::Object(merged))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_person_id_accepts_positive_integers() {
        assert_eq!(parse_person_id("5").unwrap(), 5);
    }

    #[test]
    fn test_parse_person_id_rejects_zero_and_garbage() {
        assert!(parse_person_id("0").is_err());
        assert!(parse_person_id("-3").is_err());
        assert!(parse_person_id("five").is_err());
    }
}
