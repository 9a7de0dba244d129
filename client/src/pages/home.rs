//! Landing page: header, hero, services, gallery, contact, footer.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use site::config::SiteConfig;

use crate::components::contact_section::ContactSection;
use crate::components::gallery::Gallery;
use crate::components::hero::Hero;
use crate::components::services_grid::ServicesGrid;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let frame_class = page_frame_class(&config);
    let frame_style = page_background_style(&config);

    view! {
        <div class=frame_class style=frame_style>
            // Dark overlay keeps text readable over the background image.
            <div class="site__overlay"></div>
            <div class="site__content">
                <SiteHeader/>
                <Hero/>
                <main class="container">
                    <ServicesGrid/>
                    <Gallery/>
                    <ContactSection/>
                </main>
                <SiteFooter/>
            </div>
        </div>
    }
}

/// Frame classes; the gradient variant is used when no background image is set.
pub(crate) fn page_frame_class(config: &SiteConfig) -> &'static str {
    if config.hero_background.is_some() {
        "site"
    } else {
        "site site--gradient"
    }
}

/// Inline background style for the configured image, empty without one.
pub(crate) fn page_background_style(config: &SiteConfig) -> String {
    config
        .hero_background
        .as_deref()
        .map_or_else(String::new, |src| format!("background-image: url({src});"))
}
