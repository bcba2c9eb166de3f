//! Generator configuration
//!
//! Defaults are the deployment-time constants; a TOML file may override any
//! of them.
//!
//! ```toml
//! source_image = "design/logo-master.png"
//! assets_dir = "app/assets"
//! backup_tag = "v3"
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default source image path
pub const DEFAULT_SOURCE_IMAGE: &str = "assets/source/icon-source.png";

/// Default destination directory
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Default version tag embedded in backup file names
pub const DEFAULT_BACKUP_TAG: &str = "v2";

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Source image to resize
    pub source_image: PathBuf,
    /// Directory holding the destination assets and their backups
    pub assets_dir: PathBuf,
    /// Version tag used in `backup_<tag>_<name>`
    pub backup_tag: String,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With source image path
    #[inline]
    #[must_use]
    pub fn with_source_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_image = path.into();
        self
    }

    /// With assets directory
    #[inline]
    #[must_use]
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// With backup version tag
    #[inline]
    #[must_use]
    pub fn with_backup_tag(mut self, tag: impl Into<String>) -> Self {
        self.backup_tag = tag.into();
        self
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    /// - `ConfigError::Parse` if the text is not valid for this schema
    /// - `ConfigError::Invalid` if a value fails validation
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - any error from [`GeneratorConfig::from_toml_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check that paths are set and the backup tag is safe to embed in a
    /// file name
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` naming the offending field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_image.as_os_str().is_empty() {
            return Err(ConfigError::invalid("source_image", "must not be empty"));
        }
        if self.assets_dir.as_os_str().is_empty() {
            return Err(ConfigError::invalid("assets_dir", "must not be empty"));
        }
        if self.backup_tag.is_empty() {
            return Err(ConfigError::invalid("backup_tag", "must not be empty"));
        }
        if let Some(bad) = self
            .backup_tag
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && !matches!(c, '-' | '_' | '.'))
        {
            return Err(ConfigError::invalid(
                "backup_tag",
                format!("unsupported character '{bad}'"),
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_image: PathBuf::from(DEFAULT_SOURCE_IMAGE),
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            backup_tag: DEFAULT_BACKUP_TAG.to_string(),
        }
    }
}
