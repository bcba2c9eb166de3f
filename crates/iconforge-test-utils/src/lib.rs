//! Testing utilities for the iconforge workspace
//!
//! Shared fixtures: synthetic source images, temporary asset directories and
//! PNG inspection helpers.

#![allow(missing_docs)]

use iconforge_core::{AssetRole, GeneratorConfig, IconGenerator, SAVE_ORDER};
use image::{DynamicImage, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Deterministic RGBA gradient with a diagonal stripe, so resizes differ
/// depending on which image they start from.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let stripe = if (x + y) % 7 == 0 { 255 } else { 0 };
        Rgba([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, stripe, 255])
    });
    DynamicImage::ImageRgba8(img)
}

/// Write a gradient PNG of the given size to `path`
pub fn write_source_image(path: &Path, width: u32, height: u32) -> DynamicImage {
    let img = gradient_image(width, height);
    img.save(path).unwrap();
    img
}

/// Decode `path` and return its (width, height)
pub fn png_dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).unwrap();
    (img.width(), img.height())
}

/// Temporary assets directory with a source image living next to it
pub struct AssetsFixture {
    root: TempDir,
    assets_dir: PathBuf,
    source: PathBuf,
}

impl AssetsFixture {
    /// Empty assets directory; no source image written yet
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        let assets_dir = root.path().join("assets");
        fs::create_dir(&assets_dir).unwrap();
        let source = root.path().join("source.png");
        Self {
            root,
            assets_dir,
            source,
        }
    }

    /// Fixture with a source image of the given size
    pub fn with_source(width: u32, height: u32) -> Self {
        let fixture = Self::new();
        write_source_image(&fixture.source, width, height);
        fixture
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    pub fn source_path(&self) -> &Path {
        &self.source
    }

    pub fn asset(&self, role: AssetRole) -> PathBuf {
        role.path_in(&self.assets_dir)
    }

    pub fn backup(&self, role: AssetRole) -> PathBuf {
        iconforge_core::backup_path(&self.assets_dir, "v2", role)
    }

    /// Write distinct placeholder bytes for every role
    pub fn seed_existing_assets(&self) {
        for role in SAVE_ORDER {
            self.seed_asset(role);
        }
    }

    /// Write placeholder bytes for one role and return them
    pub fn seed_asset(&self, role: AssetRole) -> Vec<u8> {
        let bytes = format!("previous {role}").into_bytes();
        fs::write(self.asset(role), &bytes).unwrap();
        bytes
    }

    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_source_image(&self.source)
            .with_assets_dir(&self.assets_dir)
            .with_backup_tag("v2")
    }

    pub fn generator(&self) -> IconGenerator {
        IconGenerator::new(self.config()).unwrap()
    }

    /// File names currently in the assets directory, sorted
    pub fn listing(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.assets_dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

impl Default for AssetsFixture {
    fn default() -> Self {
        Self::new()
    }
}
