//! Iconforge Core
//!
//! Regenerates an application's icon assets from a single source image.
//!
//! # Stages
//!
//! - **Backup**: copy each existing destination asset to `backup_<tag>_<name>`
//! - **Load**: decode the source image, stopping early if it is absent
//! - **Generate**: one 1024x1024 variant shared by icon, adaptive icon and
//!   splash icon; one 48x48 favicon rendered from the source directly
//!
//! # Example
//!
//! ```rust,no_run
//! use iconforge_core::{GeneratorConfig, IconGenerator, RunOutcome};
//!
//! # fn example() -> Result<(), iconforge_core::GeneratorError> {
//! let generator = IconGenerator::new(GeneratorConfig::default())?;
//! match generator.run()? {
//!     RunOutcome::Completed(report) => println!("saved {} assets", report.saved.len()),
//!     RunOutcome::SourceMissing { path, .. } => println!("no source at {}", path.display()),
//! }
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod backup;
pub mod config;
pub mod error;
pub mod generator;
pub mod render;
pub mod role;

// Re-exports for convenience
pub use backup::{
    backup_existing_assets, backup_existing_assets_with, backup_file_name, backup_path,
    BackupOutcome,
};
pub use config::GeneratorConfig;
pub use error::{ConfigError, GeneratorError, GeneratorResult};
pub use generator::{IconGenerator, RunEvent, RunOutcome, RunReport, SavedAsset, SourceImage};
pub use render::{render_variant, resize_exact, RenderedVariant, RESAMPLE_FILTER};
pub use role::{AssetRole, BACKUP_ORDER, FAVICON_SIZE, LARGE_SIZE, SAVE_ORDER};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
