//! Editor login — exchanges the editor password for a bearer session token.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;

use crate::AppState;
use crate::config;

#[derive(Debug, Deserialize)]
struct LoginRequest {
    password: String,
}

/// Exchange the editor password for a session token
async fn login(data: web::Data<AppState>, body: web::Json<LoginRequest>) -> impl Responder {
    if config::sha256_hex(&body.password) != data.config.editor_password_hash {
        log::warn!("[AUTH] Rejected login attempt");
        return HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Invalid password"
        }));
    }

    let session = data.sessions.create();
    log::info!("[AUTH] Editor logged in");
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "token": session.token,
        "expires_at": session.expires_at.to_rfc3339()
    }))
}

/// Revoke the current session. Succeeds even without one so the UI can
/// always clear its stored token.
async fn logout(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Some(token) = super::bearer_token(&req) {
        if data.sessions.revoke(&token) {
            log::info!("[AUTH] Editor logged out");
        }
    }
    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}

/// Report whether the bearer token maps to a live session
async fn auth_status(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let authenticated = super::bearer_token(&req)
        .map(|t| data.sessions.validate(&t).is_some())
        .unwrap_or(false);
    HttpResponse::Ok().json(serde_json::json!({ "authenticated": authenticated }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/login").route(web::post().to(login)));
    cfg.service(web::resource("/api/logout").route(web::post().to(logout)));
    cfg.service(web::resource("/api/auth/status").route(web::get().to(auth_status)));
}
