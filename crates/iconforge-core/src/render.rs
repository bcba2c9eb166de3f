//! Variant rendering
//!
//! One function resizes a source to fixed dimensions and encodes the result
//! as PNG. The generator calls it once for the shared large variant and once
//! for the favicon.

use crate::error::{GeneratorError, GeneratorResult};
use crate::role::AssetRole;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// Resampling filter used for every variant
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Encoded PNG variant ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedVariant {
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// PNG-encoded bytes
    pub png: Vec<u8>,
}

/// Resize `source` to exactly `width`x`height`
///
/// Aspect ratio is not preserved: a non-square source is stretched.
#[inline]
#[must_use]
pub fn resize_exact(source: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    source.resize_exact(width, height, RESAMPLE_FILTER)
}

/// Resize `source` to the dimensions of `role` and encode as PNG
///
/// # Errors
/// Returns `GeneratorError::Encode` if PNG encoding fails
pub fn render_variant(source: &DynamicImage, role: AssetRole) -> GeneratorResult<RenderedVariant> {
    let (width, height) = role.dimensions();
    let resized = resize_exact(source, width, height);

    let mut png = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|source| GeneratorError::Encode { role, source })?;

    tracing::debug!(%role, width, height, bytes = png.len(), "rendered variant");
    Ok(RenderedVariant { width, height, png })
}
