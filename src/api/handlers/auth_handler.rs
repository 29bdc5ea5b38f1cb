//! Login and contact form handlers.

use axum::{response::Json, routing::post, Router};
use axum_extra::{extract::CookieJar, headers::UserAgent, TypedHeader};
use serde_json::{json, Value};

use crate::api::extractors::ValidatedForm;
use crate::api::AppState;
use crate::domain::{ContactForm, LoginForm, LoginOut};
use crate::errors::AppResult;

/// Create form-driven routes (merged at the router root)
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/contact", post(contact))
}

/// Accept login form fields and answer the fixed success message
pub async fn login(ValidatedForm(form): ValidatedForm<LoginForm>) -> AppResult<Json<LoginOut>> {
    Ok(Json(LoginOut::new(form.username)))
}

/// Accept a contact form and echo the caller's User-Agent header
pub async fn contact(
    user_agent: Option<TypedHeader<UserAgent>>,
    jar: CookieJar,
    ValidatedForm(form): ValidatedForm<ContactForm>,
) -> AppResult<Json<Value>> {
    if let Some(ads) = jar.get("ads") {
        tracing::debug!("ads cookie received: {}", ads.value());
    }
    tracing::info!("Contact message from {}", form.email);

    let user_agent = user_agent.map(|TypedHeader(ua)| ua.to_string());
    Ok(Json(json!({ "user_agent": user_agent })))
}
