//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use site::config::SiteConfig;

use crate::pages::home::HomePage;
use crate::util::site_config::{ELEMENT_ID, PageConfig};

/// HTML shell rendered on the server for SSR + hydration.
///
/// Embeds the configuration as JSON so [`crate::hydrate`] renders from the
/// same object the server used.
pub fn shell(options: LeptosOptions, page: PageConfig) -> impl IntoView {
    let embedded = page.embedded_json().to_owned();
    let config = page.site().clone();
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <script id=ELEMENT_ID type="application/json" inner_html=embedded></script>
            </head>
            <body>
                <App config=config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site configuration as context and sets up routing. The site
/// is a single page; section navigation uses in-page anchors.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let title = config.company_name.clone();
    let description = config.hero.tagline.clone();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/intelitech-site.css"/>
        <Title text=title/>
        <Meta name="description" content=description/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
