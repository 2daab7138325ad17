//! Server configuration parsed from environment variables.
//!
//! Leptos itself is configured separately through `get_configuration`
//! (cargo-leptos metadata or `LEPTOS_*` variables); this covers the
//! listener and the static asset root.

use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Overrides the Leptos `site_root` for static files when set.
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000; unparseable values fall back to the default
    /// - `SITE_ROOT`: directory holding `pkg/` and public assets
    pub fn from_env() -> Self {
        let host = std::env::var("HOST")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = env_parse("PORT", DEFAULT_PORT);
        let site_root = std::env::var("SITE_ROOT")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self { host, port, site_root }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Static asset root: the `SITE_ROOT` override, else the Leptos site root.
    pub fn resolve_site_root(&self, leptos_site_root: &str) -> PathBuf {
        self.site_root
            .clone()
            .unwrap_or_else(|| Path::new(leptos_site_root).to_path_buf())
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
