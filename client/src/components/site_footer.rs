//! Page footer with brand and copyright.

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use site::config::SiteConfig;

use crate::components::brand_text::BrandText;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let copyright = copyright_line(&config);

    let brand = match config.logo.clone() {
        Some(src) => {
            let company = config.company_name.clone();
            let name = config
                .name_beside_logo()
                .then(move || view! { <span class="site-footer__name">{company}</span> });
            view! {
                <div class="brand">
                    <img src=src alt="logo" class="brand__logo brand__logo--small"/>
                    {name}
                </div>
            }
            .into_any()
        }
        None => view! { <BrandText class="brand__name"/> }.into_any(),
    };

    view! {
        <footer class="site-footer">
            <div class="container site-footer__inner">
                {brand}
                <span class="site-footer__copyright">{copyright}</span>
            </div>
        </footer>
    }
}

pub(crate) fn copyright_line(config: &SiteConfig) -> String {
    format!("© {} {}", config.copyright_year, config.company_name)
}
