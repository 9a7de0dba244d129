//! Two-tone company name used as text logo and beside the logo image.

use leptos::prelude::*;
use site::brand::{ACCENT_COLOR, BASE_COLOR, BrandMark};
use site::config::SiteConfig;

#[component]
pub fn BrandText(#[prop(into)] class: String) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let BrandMark { base, accent } = BrandMark::from_name(&config.company_name);
    let base_style = format!("color: {BASE_COLOR}");
    let accent_style = format!("color: {ACCENT_COLOR}");

    view! {
        <span class=class>
            <span style=base_style>{base}</span>
            <span style=accent_style>{accent}</span>
        </span>
    }
}
