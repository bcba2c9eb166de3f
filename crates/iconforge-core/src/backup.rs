//! Backup stage
//!
//! Copies every existing destination asset to a sibling
//! `backup_<tag>_<name>` file before the generator overwrites it. Absent
//! assets are skipped.

use crate::error::{GeneratorError, GeneratorResult};
use crate::role::{AssetRole, BACKUP_ORDER};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Prefix that marks a backup copy
pub const BACKUP_MARKER: &str = "backup";

/// Result of backing up a single role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// Original existed and was copied
    Copied {
        role: AssetRole,
        original: PathBuf,
        backup: PathBuf,
    },
    /// Original did not exist; nothing to preserve
    Skipped { role: AssetRole, original: PathBuf },
}

impl BackupOutcome {
    /// Role this outcome refers to
    #[inline]
    #[must_use]
    pub fn role(&self) -> AssetRole {
        match self {
            Self::Copied { role, .. } | Self::Skipped { role, .. } => *role,
        }
    }

    /// Whether a backup file was written
    #[inline]
    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }
}

/// File name of the backup for `file_name` under `tag`
///
/// # Examples
/// - `("v2", "icon.png")` → `backup_v2_icon.png`
#[inline]
#[must_use]
pub fn backup_file_name(tag: &str, file_name: &str) -> String {
    format!("{BACKUP_MARKER}_{tag}_{file_name}")
}

/// Backup path for `role` inside `assets_dir`
#[inline]
#[must_use]
pub fn backup_path(assets_dir: &Path, tag: &str, role: AssetRole) -> PathBuf {
    assets_dir.join(backup_file_name(tag, role.file_name()))
}

/// Back up every existing destination asset in `assets_dir`
///
/// Roles are visited in [`BACKUP_ORDER`]. The originals are never modified.
///
/// # Errors
/// Returns `GeneratorError::Io` if an existing original cannot be copied.
/// A missing original is not an error.
pub fn backup_existing_assets(assets_dir: &Path, tag: &str) -> GeneratorResult<Vec<BackupOutcome>> {
    backup_existing_assets_with(assets_dir, tag, |_| {})
}

/// Same as [`backup_existing_assets`], calling `on_outcome` as soon as each
/// role is handled
///
/// Outcomes reported before a failing role have already taken effect on
/// disk.
///
/// # Errors
/// Returns `GeneratorError::Io` if an existing original cannot be copied
pub fn backup_existing_assets_with(
    assets_dir: &Path,
    tag: &str,
    mut on_outcome: impl FnMut(&BackupOutcome),
) -> GeneratorResult<Vec<BackupOutcome>> {
    let mut outcomes = Vec::with_capacity(BACKUP_ORDER.len());
    for role in BACKUP_ORDER {
        let outcome = backup_role(assets_dir, tag, role)?;
        on_outcome(&outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

fn backup_role(assets_dir: &Path, tag: &str, role: AssetRole) -> GeneratorResult<BackupOutcome> {
    let original = role.path_in(assets_dir);

    if !original.exists() {
        tracing::info!(role = %role, path = %original.display(), "no existing asset, skipping backup");
        return Ok(BackupOutcome::Skipped { role, original });
    }

    let backup = backup_path(assets_dir, tag, role);
    copy_preserving_mtime(&original, &backup)?;
    tracing::info!(role = %role, backup = %backup.display(), "backed up existing asset");

    Ok(BackupOutcome::Copied {
        role,
        original,
        backup,
    })
}

/// Copy `from` to `to`, carrying over permissions and modification time
fn copy_preserving_mtime(from: &Path, to: &Path) -> GeneratorResult<()> {
    // fs::copy carries permissions
    let bytes = fs::copy(from, to).map_err(|e| GeneratorError::io_error(from, e))?;

    let modified = fs::metadata(from)
        .and_then(|m| m.modified())
        .map_err(|e| GeneratorError::io_error(from, e))?;
    // Read-only handle: the copy may have inherited a read-only mode
    File::open(to)
        .and_then(|f| f.set_modified(modified))
        .map_err(|e| GeneratorError::io_error(to, e))?;

    tracing::debug!(from = %from.display(), to = %to.display(), bytes, "copied");
    Ok(())
}
