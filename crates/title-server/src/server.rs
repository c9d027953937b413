use std::io;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::TracingMiddleware;
use crate::state::AppState;

/// Routes plus the JSON extractor settings shared by the binary and tests.
pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route(
            "/generate-titles",
            web::post().to(handlers::generate::handler),
        )
        // legacy path kept for existing front-ends
        .route("/api/generate", web::post().to(handlers::generate::handler))
        .route("/health", web::get().to(handlers::health::handler));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected malformed request body");
        AppError::InvalidBody(err.to_string()).into()
    })
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let bind_addr = (config.host.clone(), config.port);
    let state = web::Data::new(AppState::from_config(config));

    tracing::info!(
        "Starting title server on http://{}:{}",
        bind_addr.0,
        bind_addr.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(TracingMiddleware)
            .configure(app_config)
    })
    .bind(bind_addr)?
    .run()
    .await
}
