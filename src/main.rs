mod config;
mod core;
mod data;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{error, http::StatusCode, middleware, web, App, HttpResponse, HttpServer};
use std::sync::Arc;
use tracing::{error, info};

use crate::core::Recommender;
use config::Settings;
use data::AreaCatalog;
use routes::recommendations::AppState;
use services::{HistoryStore, ProfileStoreClient};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST),
        )
        .content_type("application/json")
        .json(serde_json::json!({
            "error": self.error,
            "message": self.message,
            "status_code": self.status_code,
        }))
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| settings.logging.level.clone().into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Relocate Right recommendation service...");

    // Load the area catalog
    let catalog = match &settings.catalog.path {
        Some(path) => {
            let catalog = AreaCatalog::from_json_file(path, settings.engine.scale_max)
                .unwrap_or_else(|e| {
                    error!("Failed to load catalog from {}: {}", path, e);
                    panic!("Catalog error: {}", e);
                });
            info!("Loaded {} areas from {}", catalog.len(), path);
            catalog
        }
        None => {
            let catalog = AreaCatalog::builtin();
            info!("Using built-in catalog ({} areas)", catalog.len());
            catalog
        }
    };
    let catalog = Arc::new(catalog);

    // Initialize the recommendation engine
    let recommender = Recommender::new(settings.engine.scale_max, settings.engine.top_n);
    info!(
        "Recommender initialized (scale: 1-{}, top {})",
        settings.engine.scale_max, settings.engine.top_n
    );

    // Initialize the remote profile store client
    let store = Arc::new(ProfileStoreClient::new(
        settings.store.endpoint.clone(),
        settings.store.api_key.clone(),
        settings.store.timeout_secs.unwrap_or(30),
    ));
    info!("Profile store client initialized ({})", settings.store.endpoint);

    // Initialize the in-memory search-history store
    let history = Arc::new(HistoryStore::new(settings.history.capacity));
    info!(
        "History store initialized (capacity: {} per user)",
        settings.history.capacity
    );

    // Build application state
    let app_state = AppState {
        store,
        history,
        catalog,
        recommender,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
