//! HTTP controllers
//!
//! Each controller registers its own routes via `config(cfg)`. Mutating
//! endpoints are gated by the bearer-token editor session; store failures
//! translate to 400 (validation), 404 (unknown id), or 500 (storage).

pub mod auth;
pub mod health;
pub mod links;
pub mod notice;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::AppState;
use crate::models::StoreError;

/// Extract the bearer token from the Authorization header.
pub(crate) fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.trim_start_matches("Bearer ").to_string())
}

/// Validate the editor session on a request
pub(crate) fn require_editor(
    state: &web::Data<AppState>,
    req: &HttpRequest,
) -> Result<(), HttpResponse> {
    let token = match bearer_token(req) {
        Some(t) => t,
        None => {
            return Err(HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "No authorization token provided"
            })));
        }
    };

    if state.sessions.validate(&token).is_none() {
        return Err(HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Invalid or expired session"
        })));
    }
    Ok(())
}

/// Translate a store failure to its HTTP response.
pub(crate) fn store_error_response(err: &StoreError) -> HttpResponse {
    match err {
        StoreError::Validation(_) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": err.to_string()
        })),
        StoreError::NotFound(_) => HttpResponse::NotFound().json(serde_json::json!({
            "error": err.to_string()
        })),
        StoreError::Storage(_) => {
            log::error!("{}", err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Storage failure"
            }))
        }
    }
}
