//! Error types for icon generation
//!
//! Provides error handling for:
//! - Source image loading (missing or undecodable source)
//! - Variant encoding
//! - Filesystem operations (backup copies, asset writes)
//! - Configuration loading

use crate::role::AssetRole;
use std::path::PathBuf;

/// Errors raised by the generator pipeline
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Source image does not exist at the configured path
    #[error("source image not found at {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Source image exists but could not be decoded
    #[error("failed to decode source image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Resized variant could not be encoded
    #[error("failed to encode {role} variant: {source}")]
    Encode {
        role: AssetRole,
        #[source]
        source: image::ImageError,
    },

    /// IO error during copy or write
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GeneratorError {
    /// Create source-not-found error for path
    pub fn source_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SourceNotFound { path: path.into() }
    }

    /// Create decode error for path
    pub fn decode_error(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is the checked precondition that aborts a run before
    /// any destination is written.
    ///
    /// Every other variant is a fault that propagates to the caller.
    #[inline]
    #[must_use]
    pub fn is_fatal_precondition(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}

/// Errors while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but a value is unusable
    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    /// Create invalid-value error
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;
