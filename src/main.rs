//! linkboard — a personal link-curation and notice-board web service.
//!
//! An authenticated editor maintains a collection of bookmarked links and
//! a small notice board through the browser UI; visitors just read. Both
//! collections persist as flat JSON files and every mutation rewrites the
//! whole file. There is no file locking between writers, so the service
//! assumes a single editor at a time; concurrent editors can clobber
//! each other's saves.

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod board;
mod config;
mod controllers;
mod models;
mod sessions;

use board::{LinkStore, NoticeStore};
use config::Config;
use sessions::SessionManager;

pub struct AppState {
    pub config: Config,
    pub links: LinkStore,
    pub notices: NoticeStore,
    pub sessions: Arc<SessionManager>,
    /// Server start time for uptime reporting
    pub started_at: std::time::Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Linkboard v{}", env!("CARGO_PKG_VERSION"));
    if let Err(e) = config::initialize_data_dir(&config) {
        log::error!("Failed to initialize data directory: {}", e);
    }

    let sessions = Arc::new(SessionManager::new());
    let started_at = std::time::Instant::now();

    let static_dir = config.static_dir.clone();
    let serve_static = static_dir.is_dir();
    if serve_static {
        log::info!("Serving board UI from {:?}", static_dir);
    } else {
        log::info!("No board UI at {:?} - serving the API only", static_dir);
    }

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        let mut app = App::new()
            .app_data(web::Data::new(AppState {
                config: config.clone(),
                links: LinkStore::new(config.links_path()),
                notices: NoticeStore::new(config.notices_path()),
                sessions: Arc::clone(&sessions),
                started_at,
            }))
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::auth::config)
            .configure(controllers::links::config)
            .configure(controllers::notice::config);

        if serve_static {
            app = app.service(Files::new("/", static_dir.clone()).index_file("index.html"));
        }

        app
    })
    .bind(("0.0.0.0", port))?
    .run();

    log::info!("Listening on port {}", port);

    let server_handle = server.handle();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
        log::info!("Received Ctrl+C, shutting down...");
        server_handle.stop(true).await;
    });

    server.await
}
