//! Project gallery.

use leptos::prelude::*;
use site::config::SiteConfig;

#[component]
pub fn Gallery() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let items: Vec<(String, String)> = config
        .gallery_items()
        .map(|(src, alt)| (src.to_owned(), alt))
        .collect();

    view! {
        <section id="trabajos" class="section">
            <h2 class="section-title">"Nuestros trabajos"</h2>
            <div class="gallery">
                {items
                    .into_iter()
                    .map(|(src, alt)| {
                        view! {
                            <div class="gallery__item">
                                <img src=src alt=alt class="gallery__image"/>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
