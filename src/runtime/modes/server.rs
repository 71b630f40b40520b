//! Server mode
//!
//! Configures and starts the HTTP server with all API and health routes.

use actix_cors::Cors;
use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::Result;
use tracing::{error, warn};

use crate::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use crate::api::services::{AppStartTime, api_routes, configure_app_data, health_routes};
use crate::config::{CorsConfig, HttpMethod, get_config};
use crate::runtime::lifetime;

const ALLOWED_HEADERS: [&str; 3] = ["Content-Type", "Accept", "X-Request-ID"];

/// Validate CORS configuration at startup (runs once)
fn validate_cors_config(cors_config: &CorsConfig) {
    if !cors_config.enabled {
        return;
    }

    if cors_config.allowed_origins.is_empty() {
        warn!(
            "CORS enabled but allowed_origins is empty. \
            No cross-origin requests will be allowed. \
            Set allowed_origins explicitly or use '[\"*\"]' for any origin."
        );
    }

    let is_any_origin = cors_config.allowed_origins.iter().any(|o| o == "*");
    if is_any_origin && cors_config.allow_credentials {
        error!(
            "allow_any_origin + allow_credentials cannot be combined, credentials are disabled"
        );
    }
}

/// Build CORS middleware from configuration
pub fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    // 关闭时使用浏览器默认的同源策略
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default();
    let is_any_origin = cors_config.allowed_origins.iter().any(|o| o == "*");

    if is_any_origin {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    let methods: Vec<actix_web::http::Method> = cors_config
        .allowed_methods
        .iter()
        .map(HttpMethod::to_string)
        .filter_map(|m| m.parse().ok())
        .collect();
    if !methods.is_empty() {
        cors = cors.allowed_methods(methods);
    }

    for header in ALLOWED_HEADERS {
        cors = cors.allowed_header(header);
    }

    cors = cors.max_age(cors_config.max_age as usize);

    if cors_config.allow_credentials && !is_any_origin {
        cors = cors.supports_credentials();
    }

    cors
}

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| {
            error!("Server startup failed: {}", e);
            e
        })?;

    let services = startup.services.clone();
    let store = startup.store.clone();
    let api_prefix = startup.route_config.api_prefix.clone();
    let health_prefix = startup.route_config.health_prefix.clone();

    let config = get_config();
    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    let cors_config = config.cors.clone();
    validate_cors_config(&cors_config);

    let server = HttpServer::new(move || {
        let cors = build_cors_middleware(&cors_config);

        App::new()
            .wrap(TimingMiddleware::new(&api_prefix, &health_prefix)) // 最外层，记录请求延迟
            .wrap(RequestIdMiddleware)
            .wrap(cors)
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")))
            .configure(|cfg| configure_app_data(cfg, &services))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(1024 * 1024))
            .service(health_routes(&health_prefix))
            .service(api_routes(&api_prefix))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(cpu_count);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server.bind(&bind_address)?.run();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(store) => {
            warn!("Graceful shutdown complete");
        }
    }

    Ok(())
}
