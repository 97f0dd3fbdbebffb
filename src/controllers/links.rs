//! Links REST API — CRUD over the bookmark collection.
//!
//! Listing is public (the board renders for every visitor); mutations
//! require the editor session. Creating a link runs the automatic
//! note-mirroring rule; updating a note mirrors only on the explicit flag.

use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::board::mirror;
use crate::models::{Link, NewLink};

#[derive(Debug, Serialize)]
struct LinkResponse {
    success: bool,
    link: Link,
}

/// List all links
async fn list_links(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.links.list())
}

/// Create a link; a note mentioning a date is mirrored to the notice board
async fn create_link(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<NewLink>,
) -> impl Responder {
    if let Err(resp) = super::require_editor(&data, &req) {
        return resp;
    }

    let link = match data.links.create(body.into_inner()) {
        Ok(link) => link,
        Err(e) => return super::store_error_response(&e),
    };

    // Mirroring failure must not fail the create; the link is already saved.
    match mirror::mirror_link_note(&data.notices, &link, false) {
        Ok(Some(_)) => log::info!("[LINKS] Mirrored note of link {} to the notice board", link.id),
        Ok(None) => {}
        Err(e) => log::warn!("[LINKS] Failed to mirror note of link {}: {}", link.id, e),
    }

    HttpResponse::Created().json(LinkResponse { success: true, link })
}

#[derive(Debug, Deserialize)]
struct UpdateNoteRequest {
    #[serde(default)]
    note: String,
    /// Also copy the new note to the notice board.
    #[serde(default)]
    mirror: bool,
}

/// Replace a link's note; mirroring here is explicit opt-in
async fn update_link_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateNoteRequest>,
) -> impl Responder {
    if let Err(resp) = super::require_editor(&data, &req) {
        return resp;
    }

    let id = path.into_inner();
    let link = match data.links.update_note(id, &body.note) {
        Ok(link) => link,
        Err(e) => return super::store_error_response(&e),
    };

    if body.mirror {
        match mirror::mirror_link_note(&data.notices, &link, true) {
            Ok(Some(_)) => log::info!("[LINKS] Mirrored note of link {} to the notice board", id),
            Ok(None) => {}
            Err(e) => log::warn!("[LINKS] Failed to mirror note of link {}: {}", id, e),
        }
    }

    HttpResponse::Ok().json(LinkResponse { success: true, link })
}

/// Delete a link. Notices mirrored from it earlier are left untouched.
async fn delete_link(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    if let Err(resp) = super::require_editor(&data, &req) {
        return resp;
    }

    match data.links.delete(path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => super::store_error_response(&e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/links")
            .route("", web::get().to(list_links))
            .route("", web::post().to(create_link))
            .route("/{id}", web::patch().to(update_link_note))
            .route("/{id}", web::delete().to(delete_link)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use tempfile::tempdir;

    use crate::controllers::test_helpers::state_in;

    #[actix_web::test]
    async fn test_mutations_require_auth() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);
        let app = test::init_service(App::new().app_data(state).configure(config)).await;

        let req = test::TestRequest::post()
            .uri("/api/links")
            .set_json(serde_json::json!({ "url": "https://a.example", "title": "A" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::delete().uri("/api/links/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_create_and_public_list() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(config)).await;
        let token = state.sessions.create().token;

        let req = test::TestRequest::post()
            .uri("/api/links")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "url": "https://a.example",
                "title": "A",
                "note": "Event on 1/15 please join"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["link"]["id"], 1);

        // The dated note was mirrored onto the notice board
        let board = state.notices.list();
        assert_eq!(board.len(), 1);
        assert!(board[0].content.contains("1/15"));

        // Listing needs no auth
        let req = test::TestRequest::get().uri("/api/links").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_undated_note_does_not_mirror() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(config)).await;
        let token = state.sessions.create().token;

        let req = test::TestRequest::post()
            .uri("/api/links")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "url": "https://a.example",
                "title": "A",
                "note": "no dates here"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert!(state.notices.list().is_empty());
    }

    #[actix_web::test]
    async fn test_create_validation_failure() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(config)).await;
        let token = state.sessions.create().token;

        let req = test::TestRequest::post()
            .uri("/api/links")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "url": "https://a.example" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_note_with_mirror_flag() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(config)).await;
        let token = state.sessions.create().token;

        let link = state
            .links
            .create(NewLink {
                url: "https://a.example".to_string(),
                title: "A".to_string(),
                ..NewLink::default()
            })
            .unwrap();

        // Without the flag: note updated, nothing mirrored (no date either way)
        let req = test::TestRequest::patch()
            .uri(&format!("/api/links/{}", link.id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "note": "remember this" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["link"]["note"], "remember this");
        assert!(state.notices.list().is_empty());

        // With the flag: mirrored even though the note has no date
        let req = test::TestRequest::patch()
            .uri(&format!("/api/links/{}", link.id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "note": "remember this", "mirror": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let board = state.notices.list();
        assert_eq!(board.len(), 1);
        assert!(board[0].content.contains("[A]"));
    }

    #[actix_web::test]
    async fn test_update_and_delete_unknown_id() {
        let dir = tempdir().unwrap();
        let state = state_in(&dir);
        let app =
            test::init_service(App::new().app_data(state.clone()).configure(config)).await;
        let token = state.sessions.create().token;

        let req = test::TestRequest::patch()
            .uri("/api/links/99")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "note": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri("/api/links/99")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
