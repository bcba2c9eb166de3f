//! Destination asset roles
//!
//! The four output roles form a fixed table of (role, width, height, file
//! name). Three roles share the 1024x1024 variant; the favicon has its own.

use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// Side length of the shared high-resolution variant
pub const LARGE_SIZE: u32 = 1024;

/// Side length of the favicon variant
pub const FAVICON_SIZE: u32 = 48;

/// Logical role of a generated asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetRole {
    /// Primary application icon
    Icon,
    /// Platform adaptive icon (masked by the host at display time)
    AdaptiveIcon,
    /// Splash screen icon
    SplashIcon,
    /// Web favicon
    Favicon,
}

impl AssetRole {
    /// File name of this role inside the assets directory
    #[inline]
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Icon => "icon.png",
            Self::AdaptiveIcon => "adaptive-icon.png",
            Self::SplashIcon => "splash-icon.png",
            Self::Favicon => "favicon.png",
        }
    }

    /// Target pixel dimensions as (width, height)
    #[inline]
    #[must_use]
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Icon | Self::AdaptiveIcon | Self::SplashIcon => (LARGE_SIZE, LARGE_SIZE),
            Self::Favicon => (FAVICON_SIZE, FAVICON_SIZE),
        }
    }

    /// Whether this role is written from the shared large variant
    #[inline]
    #[must_use]
    pub const fn uses_large_variant(self) -> bool {
        !matches!(self, Self::Favicon)
    }

    /// Destination path of this role inside `assets_dir`
    #[inline]
    #[must_use]
    pub fn path_in(self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.file_name())
    }
}

impl Display for AssetRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Icon => "icon",
            Self::AdaptiveIcon => "adaptive-icon",
            Self::SplashIcon => "splash-icon",
            Self::Favicon => "favicon",
        };
        f.write_str(name)
    }
}

/// Order in which existing assets are backed up
pub const BACKUP_ORDER: [AssetRole; 4] = [
    AssetRole::Icon,
    AssetRole::SplashIcon,
    AssetRole::AdaptiveIcon,
    AssetRole::Favicon,
];

/// Order in which generated assets are written
pub const SAVE_ORDER: [AssetRole; 4] = [
    AssetRole::Icon,
    AssetRole::AdaptiveIcon,
    AssetRole::SplashIcon,
    AssetRole::Favicon,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_table() {
        assert_eq!(AssetRole::Icon.dimensions(), (1024, 1024));
        assert_eq!(AssetRole::AdaptiveIcon.dimensions(), (1024, 1024));
        assert_eq!(AssetRole::SplashIcon.dimensions(), (1024, 1024));
        assert_eq!(AssetRole::Favicon.dimensions(), (48, 48));

        assert_eq!(AssetRole::SplashIcon.file_name(), "splash-icon.png");
        assert_eq!(AssetRole::AdaptiveIcon.to_string(), "adaptive-icon");
    }

    #[test]
    fn only_favicon_has_its_own_variant() {
        let shared: Vec<_> = SAVE_ORDER
            .iter()
            .filter(|r| r.uses_large_variant())
            .collect();
        assert_eq!(shared.len(), 3);
        assert!(!AssetRole::Favicon.uses_large_variant());
    }

    #[test]
    fn orders_cover_every_role_once() {
        let mut backup = BACKUP_ORDER.to_vec();
        let mut save = SAVE_ORDER.to_vec();
        backup.sort();
        save.sort();
        assert_eq!(backup, save);
        backup.dedup();
        assert_eq!(backup.len(), 4);
    }

    #[test]
    fn path_in_joins_file_name() {
        let path = AssetRole::Favicon.path_in(Path::new("assets"));
        assert_eq!(path, Path::new("assets").join("favicon.png"));
    }
}
