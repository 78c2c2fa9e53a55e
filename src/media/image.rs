// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding (PNG, JPEG, GIF, SVG, etc.) for the editor stage.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView, ImageError, RgbaImage};
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tiny_skia;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes, kept for composite export.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Rebuilds an owned RGBA buffer for processing with the `image` crate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the stored bytes do not match the dimensions.
    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.rgba_bytes.to_vec())
            .ok_or_else(|| Error::Image("RGBA buffer does not match image dimensions".into()))
    }

    /// Scales and center-crops the image so it exactly covers
    /// `width`×`height`, like a photo frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] if the stored bytes are inconsistent.
    pub fn cover(&self, width: u32, height: u32) -> Result<Self> {
        if self.width == width && self.height == height {
            return Ok(self.clone());
        }
        let source = DynamicImage::ImageRgba8(self.to_rgba_image()?);
        let covered = source.resize_to_fill(width, height, FilterType::Lanczos3);
        Ok(Self::from_dynamic(&covered))
    }

    fn from_dynamic(img: &DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_rgba(width, height, img.to_rgba8().into_vec())
    }
}

/// Rasterizes SVG data.
///
/// With `edge` set, the drawing is scaled uniformly so its longest side
/// measures `edge` pixels; otherwise the intrinsic size is used.
///
/// # Errors
///
/// Returns [`Error::Svg`] if parsing fails or the drawing has no area.
pub fn rasterize_svg(svg_data: &[u8], edge: Option<u32>) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let intrinsic = tree.size();
    if intrinsic.width() <= 0.0 || intrinsic.height() <= 0.0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = edge.map_or(1.0, |edge| {
        edge as f32 / intrinsic.width().max(intrinsic.height())
    });

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (width, height) = (
        (intrinsic.width() * scale).round() as u32,
        (intrinsic.height() * scale).round() as u32,
    );
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha; the `image` crate and iced
    // handles expect straight alpha.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Load an image from the given path and return its data.
///
/// Supports common raster formats (PNG, JPEG, GIF, etc.) as well as SVG.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Image`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        rasterize_svg(&svg_data, None)
    } else {
        let img_bytes = fs::read(path)?;
        let img = image_rs::load_from_memory(&img_bytes)?;
        Ok(ImageData::from_dynamic(&img))
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Image(other.to_string()),
        }
    }
}
