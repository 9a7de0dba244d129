//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has one route. `home` owns the page frame (background, overlay)
//! and delegates each section to `components`.

pub mod home;
