//! HTTP server hosting the landing page

use axum::{routing::get, Json, Router};
use leptos::LeptosOptions;
use leptos_axum::{generate_route_list, LeptosRoutes};
use serde::Serialize;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::app::App;
use crate::brand::LOGO;
use crate::config::SiteConfig;
use crate::error::SiteResult;
use crate::fileserv::file_and_error_handler;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Router serving the rendered page, the logo and the health probe.
///
/// Anything else falls through to [`file_and_error_handler`], which serves
/// files under `site_root` or renders the app with a 404 status.
pub fn build_router(leptos_options: LeptosOptions, config: &SiteConfig) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .route("/health", get(health_check))
        .route_service(LOGO.src, ServeFile::new(config.logo_path()))
        .leptos_routes(&leptos_options, routes, App)
        .fallback(file_and_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

pub async fn serve(leptos_options: LeptosOptions, config: SiteConfig) -> SiteResult<()> {
    let logo = config.logo_path();
    if !logo.is_file() {
        warn!("Logo asset not found at {}, browsers will show a broken image", logo.display());
    }

    let addr = leptos_options.site_addr;
    let app = build_router(leptos_options, &config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Landing site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
