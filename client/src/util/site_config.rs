//! Server-to-client hand-off of the site configuration.
//!
//! The SSR shell writes the effective `SiteConfig` into a
//! `<script type="application/json">` element; the hydrating client reads it
//! back so both sides render from the same object.

#[cfg(test)]
#[path = "site_config_test.rs"]
mod site_config_test;

use site::config::SiteConfig;

/// DOM id of the embedded configuration element.
pub const ELEMENT_ID: &str = "site-config";

/// Error returned by [`read_embedded`].
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("no #{} element in the document", ELEMENT_ID)]
    Missing,
    #[error("malformed embedded site config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Site configuration paired with its script-safe JSON encoding.
///
/// Built once at startup so rendering never has to handle a serialization error.
#[derive(Clone, Debug)]
pub struct PageConfig {
    site: SiteConfig,
    embedded: String,
}

impl PageConfig {
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized.
    pub fn new(site: SiteConfig) -> Result<Self, serde_json::Error> {
        let embedded = to_embedded_json(&site)?;
        Ok(Self { site, embedded })
    }

    #[must_use]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// JSON safe to place inside a `<script>` element.
    #[must_use]
    pub fn embedded_json(&self) -> &str {
        &self.embedded
    }
}

/// Serialize `config` for a `<script>` body. `</` is escaped as `<\/` so the
/// payload cannot close the element early; both spellings parse the same.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_embedded_json(config: &SiteConfig) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(config)?.replace("</", "<\\/"))
}

/// Parse the JSON written by [`to_embedded_json`].
///
/// # Errors
///
/// Returns [`EmbedError::Parse`] on malformed input.
pub fn from_embedded_json(raw: &str) -> Result<SiteConfig, EmbedError> {
    Ok(serde_json::from_str(raw)?)
}

/// Read the configuration embedded in the current document.
///
/// # Errors
///
/// Returns [`EmbedError::Missing`] outside a browser or when the element is
/// absent, [`EmbedError::Parse`] when its contents are malformed.
pub fn read_embedded() -> Result<SiteConfig, EmbedError> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(ELEMENT_ID))
            .and_then(|el| el.text_content())
            .ok_or(EmbedError::Missing)?;
        from_embedded_json(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(EmbedError::Missing)
    }
}
