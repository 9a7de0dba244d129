//! Hero block with headline, tagline, and calls to action.

use leptos::prelude::*;
use site::config::SiteConfig;

#[component]
pub fn Hero() -> impl IntoView {
    let hero = expect_context::<SiteConfig>().hero;

    view! {
        <section class="container hero">
            <div class="hero__card">
                <h1 class="hero__headline">{hero.headline}</h1>
                <p class="hero__tagline">{hero.tagline}</p>
                <div class="hero__actions">
                    <a href="#contacto" class="button button--primary">"Cotizar ahora"</a>
                    <a href="#servicios" class="button button--ghost">"Ver servicios"</a>
                </div>
            </div>
        </section>
    }
}
