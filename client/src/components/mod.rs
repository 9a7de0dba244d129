//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component renders one section of the landing page from the
//! `SiteConfig` provided as context by `App`.

pub mod brand_text;
pub mod contact_section;
pub mod gallery;
pub mod hero;
pub mod services_grid;
pub mod site_footer;
pub mod site_header;
