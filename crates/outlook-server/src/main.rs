//! outlook-server binary: load config, build the classifier once, open the
//! store, and serve.

use std::path::PathBuf;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{error, info, warn};

use outlook_core::constants::DEFAULT_CONFIG_FILE;
use outlook_core::tracing::init_tracing;
use outlook_core::{OutlookConfig, OutlookErrorCode, OutlookResult};
use outlook_predict::{ClassifierAdapter, RecordWorkflow, ScoringService};
use outlook_server::{configure, AppState, AuthMiddleware, LoggingMiddleware, SharedStore};
use outlook_storage::StudentStorageEngine;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let (config, state) = boot().map_err(|e| {
        error!(code = e.error_code(), error = %e, "outlook-server failed to start");
        std::io::Error::other(e)
    })?;

    if config.server.access_tokens.is_empty() {
        warn!("no access tokens configured; every protected route will answer 401");
    }
    let server_config = Arc::new(config.server.clone());

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(AuthMiddleware::new(Arc::clone(&server_config)))
            .wrap(LoggingMiddleware)
            .configure(configure)
    })
    .bind(&config.server.bind)?;
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    info!(bind = %config.server.bind, "outlook-server listening");
    server.run().await
}

/// Load config, build the classifier once, and open the store.
fn boot() -> OutlookResult<(OutlookConfig, web::Data<AppState>)> {
    let config_path = std::env::var_os("OUTLOOK_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = OutlookConfig::load(&config_path)?;
    init_tracing(&config.observability);

    let classifier = Arc::new(ClassifierAdapter::from_config(&config.classifier));
    let store: SharedStore = Arc::new(StudentStorageEngine::from_config(&config.storage)?);
    let workflow = RecordWorkflow::new(store, ScoringService::new(classifier), &config.scoring);
    Ok((config, web::Data::new(AppState::new(workflow))))
}
