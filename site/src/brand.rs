//! Two-tone brand mark text.
//!
//! The company name is shown uppercased with its last four characters in the
//! accent color (`INTELI` + `TECH`). Splitting is by `char`, so accented names
//! never split inside a code point.

#[cfg(test)]
#[path = "brand_test.rs"]
mod brand_test;

/// Number of trailing characters rendered in the accent color.
pub const ACCENT_CHARS: usize = 4;

/// Metallic gray used for the leading part of the mark.
pub const BASE_COLOR: &str = "#bfc6c9";

/// Metallic yellow used for the accented tail.
pub const ACCENT_COLOR: &str = "#f3c200";

/// Uppercased company name split into base and accent parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrandMark {
    pub base: String,
    pub accent: String,
}

impl BrandMark {
    #[must_use]
    pub fn from_name(company_name: &str) -> Self {
        let upper = company_name.to_uppercase();
        let total = upper.chars().count();
        let split_at = upper
            .char_indices()
            .nth(total.saturating_sub(ACCENT_CHARS))
            .map_or(upper.len(), |(idx, _)| idx);
        let (base, accent) = upper.split_at(split_at);
        Self {
            base: base.to_owned(),
            accent: accent.to_owned(),
        }
    }
}
