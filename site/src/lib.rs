//! Shared domain model for the Intelitech marketing site.
//!
//! This crate owns everything the page needs that is not rendering: the
//! immutable [`config::SiteConfig`], the contact draft and its validation,
//! `mailto:` link encoding, and the capture state machine that sequences the
//! acknowledgment, the mail-client handoff, and the delayed reset. It has no
//! browser or server dependencies so both `client` and `server` can use it and
//! it can be tested natively.

pub mod brand;
pub mod capture;
pub mod config;
pub mod contact;
pub mod mailto;
