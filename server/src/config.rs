//! Server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port (default 3000)
//! - `BIND_ADDR`: listen address (default `0.0.0.0`)
//! - `SITE_CONFIG`: YAML file overlaying the default `SiteConfig`
//! - `IMAGES_DIR`: directory served at `/images` (default `../public/images`
//!   relative to this crate)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use site::config::SiteConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
    #[error("failed to read site config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed site config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub site_config_path: Option<PathBuf>,
    pub images_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidVar`] when `PORT` or `BIND_ADDR` is set
    /// but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidVar {
                    var: "PORT",
                    value: raw,
                })?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidVar {
                    var: "BIND_ADDR",
                    value: raw,
                })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let site_config_path = lookup("SITE_CONFIG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        let images_dir = lookup("IMAGES_DIR")
            .map_or_else(default_images_dir, PathBuf::from);

        Ok(Self {
            bind_addr,
            port,
            site_config_path,
            images_dir,
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Load the site configuration: defaults, overlaid by `SITE_CONFIG` if set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_site(&self) -> Result<SiteConfig, ConfigError> {
        match &self.site_config_path {
            Some(path) => read_site_config(path),
            None => Ok(SiteConfig::default()),
        }
    }
}

fn default_images_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public/images")
}

fn read_site_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_owned(),
        source,
    })?;
    parse_site_config(&raw, path)
}

/// Parse a YAML site config. Missing fields keep their defaults.
pub(crate) fn parse_site_config(raw: &str, path: &Path) -> Result<SiteConfig, ConfigError> {
    if raw.trim().is_empty() {
        return Ok(SiteConfig::default());
    }
    serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
