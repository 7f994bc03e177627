//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This binary only hosts the front-end: Leptos SSR for the page routes, the
//! compiled WASM/CSS bundle under `/pkg`, and a health probe. The books REST
//! API lives on the external collaborator, not here.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Leptos SSR routes + static bundle + `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(config: &HostConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(bookshelf_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || bookshelf_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = site_root(config, &leptos_options.site_root);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

fn site_root(config: &HostConfig, leptos_site_root: &str) -> PathBuf {
    config.site_root.clone().unwrap_or_else(|| PathBuf::from(leptos_site_root))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
