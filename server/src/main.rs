#![recursion_limit = "256"]

mod config;
mod routes;

use client::util::site_config::PageConfig;
use config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let server_config = ServerConfig::from_env().expect("invalid config");
    let site = server_config.load_site().expect("site config load failed");
    tracing::info!(
        company = %site.company_name,
        receiver = %site.receiver,
        services = site.services.len(),
        gallery = site.gallery.len(),
        "site configuration loaded"
    );

    let page = PageConfig::new(site).expect("unserializable site config");
    let images_dir = &server_config.images_dir;
    let app = routes::app(page, images_dir).expect("router init failed");

    let addr = server_config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    tracing::info!(
        %addr,
        images = %images_dir.display(),
        "intelitech site listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
