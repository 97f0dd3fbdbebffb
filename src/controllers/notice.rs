//! Notice board REST API.
//!
//! Reading is public; adding, clearing, and deleting require the editor
//! session. Payload keys match what the board UI sends.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::models::Notice;

#[derive(Debug, Serialize)]
struct NoticesResponse {
    notices: Vec<Notice>,
}

/// List all notices
async fn list_notices(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(NoticesResponse {
        notices: data.notices.list(),
    })
}

#[derive(Debug, Deserialize)]
struct AddNoticeRequest {
    #[serde(default)]
    text: String,
}

/// Append a notice to the board
async fn add_notice(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<AddNoticeRequest>,
) -> impl Responder {
    if let Err(resp) = super::require_editor(&data, &req) {
        return resp;
    }

    match data.notices.add(&body.text) {
        Ok(notice) => HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "notice": notice
        })),
        Err(e) => super::store_error_response(&e),
    }
}

/// Empty the board
async fn clear_notices(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Err(resp) = super::require_editor(&data, &req) {
        return resp;
    }

    match data.notices.clear() {
        Ok(()) => {
            log::info!("[NOTICE] Board cleared");
            HttpResponse::Ok().json(serde_json::json!({ "success": true }))
        }
        Err(e) => super::store_error_response(&e),
    }
}

/// Delete a single notice
async fn delete_notice(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> impl Responder {
    if let Err(resp) = super::require_editor(&data, &req) {
        return resp;
    }

    match data.notices.delete(&path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => super::store_error_response(&e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notice")
            .route("", web::get().to(list_notices))
            .route("", web::post().to(add_notice))
            .route("/clear", web::post().to(clear_notices))
            .route("/{id}", web::delete().to(delete_notice)),
    );
}
