//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos SSR landing page at `/`, the compiled
//! client bundle at `/pkg`, gallery and branding images at `/images`, and a
//! liveness probe at `/healthz`. Every response is traced and gzip-compressed.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::app::{App, shell};
use client::util::site_config::PageConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes that do not depend on the Leptos build configuration.
pub fn static_routes(images_dir: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/images", ServeDir::new(images_dir))
}

/// Full site: static routes + Leptos SSR page + `/pkg` bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(page: PageConfig, images_dir: &Path) -> Result<Router, String> {
    let conf = get_configuration(None)
        .map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;

    let site = page.site().clone();
    let routes = generate_route_list(move || {
        let config = site.clone();
        view! { <App config=config/> }
    });

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone(), page.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(static_routes(images_dir)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
