//! Services grid, one card per configured entry.

use leptos::prelude::*;
use site::config::SiteConfig;

#[component]
pub fn ServicesGrid() -> impl IntoView {
    let services = expect_context::<SiteConfig>().services;

    view! {
        <section id="servicios" class="section">
            <h2 class="section-title">"Nuestros Servicios"</h2>
            <div class="services-grid">
                {services
                    .into_iter()
                    .map(|service| {
                        view! {
                            <article class="panel service-card">
                                <h3 class="service-card__title">{service.title}</h3>
                                <p class="service-card__description">{service.description}</p>
                                <button type="button" class="service-card__more">"Más info"</button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
