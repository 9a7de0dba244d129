//! # client
//!
//! Leptos frontend for the Intelitech marketing site. Renders on the server
//! (`ssr`) and hydrates in the browser (`hydrate`).
//!
//! The page is driven entirely by an explicit [`site::config::SiteConfig`]:
//! the server passes it to [`app::shell`], which embeds it as JSON so the
//! hydrating client renders from the same object.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: read the embedded configuration and hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let config = match util::site_config::read_embedded() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("site config unavailable, using defaults: {e}");
            site::config::SiteConfig::default()
        }
    };

    leptos::mount::hydrate_body(move || view! { <App config=config/> });
}
