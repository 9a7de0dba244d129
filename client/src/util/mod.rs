//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (dialogs, navigation, timers, the
//! embedded configuration) from components so the contact flow stays testable
//! natively.

pub mod browser_host;
pub mod reset_timer;
pub mod site_config;
