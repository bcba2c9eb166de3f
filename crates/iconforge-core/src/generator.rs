//! Icon generator pipeline
//!
//! Runs three strictly ordered stages:
//!
//! ```text
//! backup_existing_assets → load_source → generate_and_save
//!                               │
//!                               └─ SourceNotFound: stop, nothing written
//! ```

use crate::backup::{self, BackupOutcome};
use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, GeneratorResult};
use crate::render::{self, RenderedVariant};
use crate::role::{AssetRole, SAVE_ORDER};
use image::{DynamicImage, ImageReader};
use std::fs;
use std::path::{Path, PathBuf};

/// Decoded source image
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    image: DynamicImage,
}

impl SourceImage {
    /// Path the image was loaded from
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decoded pixels
    #[inline]
    #[must_use]
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Intrinsic (width, height)
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// A generated asset written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedAsset {
    /// Role of the asset
    pub role: AssetRole,
    /// Destination path
    pub path: PathBuf,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// One outcome per role, in backup order
    pub backups: Vec<BackupOutcome>,
    /// Source (width, height)
    pub source_dimensions: (u32, u32),
    /// One entry per role, in save order
    pub saved: Vec<SavedAsset>,
}

/// Result of a full run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// All stages finished
    Completed(RunReport),
    /// Source image was absent; backups ran, nothing was generated
    SourceMissing {
        backups: Vec<BackupOutcome>,
        path: PathBuf,
    },
}

/// Progress notification emitted by [`IconGenerator::run_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent<'a> {
    /// Backup stage is starting
    BackupStarted,
    /// One role was backed up or skipped
    Backup(&'a BackupOutcome),
    /// Source image was decoded
    SourceLoaded {
        path: &'a Path,
        dimensions: (u32, u32),
    },
    /// Source image is absent; the run stops here
    SourceMissing(&'a Path),
    /// One destination asset was written
    Saved(&'a SavedAsset),
}

/// Icon asset generator
///
/// Owns the configuration for a single invocation. Each stage can be called
/// on its own, or all at once through [`IconGenerator::run_with`], which
/// reports progress as [`RunEvent`]s.
#[derive(Debug, Clone)]
pub struct IconGenerator {
    config: GeneratorConfig,
}

impl IconGenerator {
    /// Create generator from a validated configuration
    ///
    /// # Errors
    /// Returns `GeneratorError::Config` if the configuration is invalid
    pub fn new(config: GeneratorConfig) -> GeneratorResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Destination path for `role`
    #[inline]
    #[must_use]
    pub fn asset_path(&self, role: AssetRole) -> PathBuf {
        role.path_in(&self.config.assets_dir)
    }

    /// Copy every existing destination asset to its backup path
    ///
    /// # Errors
    /// Returns `GeneratorError::Io` if an existing asset cannot be copied
    pub fn backup_existing_assets(&self) -> GeneratorResult<Vec<BackupOutcome>> {
        tracing::info!(dir = %self.config.assets_dir.display(), "backing up existing assets");
        backup::backup_existing_assets(&self.config.assets_dir, &self.config.backup_tag)
    }

    /// Open and decode the source image
    ///
    /// # Errors
    /// - `GeneratorError::SourceNotFound` if the file does not exist
    /// - `GeneratorError::Io` if the file cannot be opened
    /// - `GeneratorError::Decode` if the contents are not a supported image
    pub fn load_source(&self) -> GeneratorResult<SourceImage> {
        let path = &self.config.source_image;
        if !path.exists() {
            tracing::warn!(path = %path.display(), "source image not found");
            return Err(GeneratorError::source_not_found(path));
        }

        let image = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|e| GeneratorError::io_error(path, e))?
            .decode()
            .map_err(|e| GeneratorError::decode_error(path, e))?;

        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "loaded source image"
        );
        Ok(SourceImage {
            path: path.clone(),
            image,
        })
    }

    /// Render both variants and write all four destination assets
    ///
    /// The large variant is rendered and encoded once, then written to every
    /// role that uses it. The favicon is rendered from `source` directly.
    /// Writes happen in [`SAVE_ORDER`]; a failed write leaves earlier assets
    /// written and later ones untouched.
    ///
    /// # Errors
    /// - `GeneratorError::Encode` if a variant cannot be encoded
    /// - `GeneratorError::Io` if a destination cannot be written
    pub fn generate_and_save(&self, source: &SourceImage) -> GeneratorResult<Vec<SavedAsset>> {
        self.generate_and_save_with(source, |_| {})
    }

    /// Same as [`IconGenerator::generate_and_save`], calling `on_saved`
    /// after each write
    ///
    /// # Errors
    /// See [`IconGenerator::generate_and_save`]
    pub fn generate_and_save_with(
        &self,
        source: &SourceImage,
        mut on_saved: impl FnMut(&SavedAsset),
    ) -> GeneratorResult<Vec<SavedAsset>> {
        let large = render::render_variant(source.image(), AssetRole::Icon)?;
        let favicon = render::render_variant(source.image(), AssetRole::Favicon)?;

        let mut saved = Vec::with_capacity(SAVE_ORDER.len());
        for role in SAVE_ORDER {
            let variant = if role.uses_large_variant() {
                &large
            } else {
                &favicon
            };
            let asset = self.save(role, variant)?;
            on_saved(&asset);
            saved.push(asset);
        }
        Ok(saved)
    }

    /// Run backup, load and generate stages in order
    ///
    /// A missing source is reported as [`RunOutcome::SourceMissing`] rather
    /// than an error.
    ///
    /// # Errors
    /// Any failure other than a missing source
    pub fn run(&self) -> GeneratorResult<RunOutcome> {
        self.run_with(|_| {})
    }

    /// Run every stage, reporting each step to `observer` as it happens
    ///
    /// Events emitted before an error describe work already done on disk.
    ///
    /// # Errors
    /// Any failure other than a missing source
    pub fn run_with(&self, mut observer: impl FnMut(RunEvent<'_>)) -> GeneratorResult<RunOutcome> {
        observer(RunEvent::BackupStarted);
        tracing::info!(dir = %self.config.assets_dir.display(), "backing up existing assets");
        let backups = backup::backup_existing_assets_with(
            &self.config.assets_dir,
            &self.config.backup_tag,
            |outcome| observer(RunEvent::Backup(outcome)),
        )?;

        let source = match self.load_source() {
            Ok(source) => source,
            Err(GeneratorError::SourceNotFound { path }) => {
                observer(RunEvent::SourceMissing(&path));
                return Ok(RunOutcome::SourceMissing { backups, path });
            }
            Err(e) => return Err(e),
        };
        observer(RunEvent::SourceLoaded {
            path: source.path(),
            dimensions: source.dimensions(),
        });

        let saved = self.generate_and_save_with(&source, |asset| observer(RunEvent::Saved(asset)))?;
        Ok(RunOutcome::Completed(RunReport {
            backups,
            source_dimensions: source.dimensions(),
            saved,
        }))
    }

    fn save(&self, role: AssetRole, variant: &RenderedVariant) -> GeneratorResult<SavedAsset> {
        let path = self.asset_path(role);
        fs::write(&path, &variant.png).map_err(|e| GeneratorError::io_error(&path, e))?;
        tracing::info!(%role, path = %path.display(), "saved asset");

        Ok(SavedAsset {
            role,
            path,
            width: variant.width,
            height: variant.height,
        })
    }
}
