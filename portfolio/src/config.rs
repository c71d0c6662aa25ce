//! Optional `portfolio.toml` configuration.
//!
//! ```toml
//! [profile]
//! tagline = "..."
//! profile_url = "https://github.com/..."
//!
//! [[catalog.games]]
//! name = "..."
//! url = "https://..."
//! description = "..."
//! ```
//!
//! A `[catalog]` table replaces the built-in catalog wholesale.

use std::io;
use std::path::{Path, PathBuf};

use portfolio_page::{Catalog, CatalogError, Profile, Site};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid catalog in {}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub profile: Profile,
    /// Replacement catalog; `None` keeps the built-in one
    pub catalog: Option<Catalog>,
}

impl SiteConfig {
    /// Parse and validate config text. `path` only labels errors.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(catalog) = &config.catalog {
            catalog.validate().map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(config)
    }

    /// Load config from a specific path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must load. Without one, `dir/portfolio.toml` is used
    /// if present, otherwise defaults. Returns the path actually read.
    pub fn resolve(
        explicit: Option<&Path>,
        dir: &Path,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load_from_path(path)?, Some(path.to_path_buf())));
        }

        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Ok((Self::load_from_path(&fallback)?, Some(fallback)));
        }

        debug!("no {} in {}, using defaults", DEFAULT_CONFIG_FILE, dir.display());
        Ok((Self::default(), None))
    }

    pub fn into_site(self) -> Site {
        Site {
            profile: self.profile,
            catalog: self
                .catalog
                .unwrap_or_else(|| Catalog::builtin().clone()),
        }
    }
}
