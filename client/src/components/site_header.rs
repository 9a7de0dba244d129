//! Top navigation bar with brand and section anchors.

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use site::config::SiteConfig;

use crate::components::brand_text::BrandText;

/// In-page anchors shown in the navigation bar, in display order.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#servicios", "Servicios"),
    ("#trabajos", "Nuestros trabajos"),
    ("#contacto", "Contacto"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    let brand = match config.logo.clone() {
        Some(src) => {
            let alt = logo_alt(&config);
            let name = config
                .name_beside_logo()
                .then(|| view! { <BrandText class="brand__name"/> });
            view! {
                <div class="brand">
                    <img src=src alt=alt class="brand__logo"/>
                    {name}
                </div>
            }
            .into_any()
        }
        None => view! {
            <div class="brand">
                <BrandText class="brand__name brand__name--large"/>
            </div>
        }
        .into_any(),
    };

    view! {
        <header class="site-header">
            <nav class="container site-nav">
                {brand}
                <ul class="site-nav__links">
                    {NAV_LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <li>
                                    <a href=href class="site-nav__link">{label}</a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        </header>
    }
}

pub(crate) fn logo_alt(config: &SiteConfig) -> String {
    format!("{} logo", config.company_name)
}
