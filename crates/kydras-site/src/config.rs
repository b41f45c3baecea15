//! Site configuration
//!
//! Leptos reads its own options (address, site root, output name) from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables. This module only
//! covers the settings specific to this site.

use std::path::PathBuf;

use crate::brand::LOGO;

pub const PUBLIC_DIR_VAR: &str = "KYDRAS_PUBLIC_DIR";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_LOG_FILTER: &str = "kydras_site=info,tower_http=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory holding the static assets referenced by the page
    pub public_dir: PathBuf,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
}

impl SiteConfig {
    /// Builds the configuration from a variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            public_dir: get(PUBLIC_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            log_filter: get(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    pub fn logo_path(&self) -> PathBuf {
        self.public_dir.join(LOGO.file_name())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = SiteConfig::from_lookup(lookup(&[]));

        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.logo_path(), PathBuf::from("public/kydras-logo.png"));
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = SiteConfig::from_lookup(lookup(&[
            (PUBLIC_DIR_VAR, "/srv/kydras"),
            (LOG_FILTER_VAR, "debug"),
        ]));

        assert_eq!(config.public_dir, PathBuf::from("/srv/kydras"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.logo_path(), PathBuf::from("/srv/kydras/kydras-logo.png"));
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = SiteConfig::from_lookup(lookup(&[(PUBLIC_DIR_VAR, "  "), (LOG_FILTER_VAR, "")]));

        assert_eq!(config, SiteConfig::from_lookup(lookup(&[])));
    }
}
