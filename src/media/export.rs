// SPDX-License-Identifier: MPL-2.0
//! Composite export of the decorated photo.
//!
//! The stage shows the photo at a fixed size; the sticker's rectangle is
//! expressed in that stage space with the photo's top-left corner at the
//! origin. Export scales everything by `height / PHOTO_HEIGHT`, so the saved
//! picture matches what was on screen at any output resolution.

use crate::app::config::{PHOTO_HEIGHT, PHOTO_WIDTH};
use crate::error::{Error, Result};
use crate::media::ImageData;
use iced::Rectangle;
use image_rs::imageops::{self, FilterType};
use image_rs::{DynamicImage, ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// PNG format (lossless, keeps transparency).
    #[default]
    Png,
    /// JPEG format (lossy, smaller file size).
    Jpeg,
    /// WebP format (modern, good compression).
    WebP,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::WebP => "webp",
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::WebP => ImageFormat::WebP,
        }
    }

    /// Detects format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            "webp" => Some(ExportFormat::WebP),
            _ => None,
        }
    }

    /// Detects format from file path extension.
    pub fn from_path(path: &Path) -> Option<ExportFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Output width matching the stage aspect ratio for a given height.
#[must_use]
pub fn export_width(height: u32) -> u32 {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let width = (height as f32 * PHOTO_WIDTH / PHOTO_HEIGHT).round() as u32;
    width.max(1)
}

/// Renders the photo, with the sticker on top when one is placed.
///
/// `sticker` carries the sticker image and its rectangle in stage space.
/// Parts of the sticker lying outside the photo are clipped.
///
/// # Errors
///
/// Returns [`Error::Image`] if either image buffer is inconsistent.
pub fn compose(
    photo: &ImageData,
    sticker: Option<(&ImageData, Rectangle)>,
    height: u32,
) -> Result<RgbaImage> {
    let width = export_width(height);
    #[allow(clippy::cast_precision_loss)]
    let factor = height as f32 / PHOTO_HEIGHT;

    let mut canvas = photo.cover(width, height)?.to_rgba_image()?;

    let Some((sticker, placement)) = sticker else {
        return Ok(canvas);
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (sticker_width, sticker_height) = (
        (placement.width * factor).round().max(1.0) as u32,
        (placement.height * factor).round().max(1.0) as u32,
    );
    let scaled = DynamicImage::ImageRgba8(sticker.to_rgba_image()?)
        .resize_exact(sticker_width, sticker_height, FilterType::Lanczos3)
        .to_rgba8();

    #[allow(clippy::cast_possible_truncation)]
    let (x, y) = (
        (placement.x * factor).round() as i64,
        (placement.y * factor).round() as i64,
    );
    imageops::overlay(&mut canvas, &scaled, x, y);

    Ok(canvas)
}

/// Everything needed to write one picture, detached from the UI state so it
/// can run on a background task.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub photo: ImageData,
    pub sticker: Option<(ImageData, Rectangle)>,
    pub height: u32,
}

impl ExportJob {
    /// Composes the picture.
    ///
    /// # Errors
    ///
    /// See [`compose`].
    pub fn render(&self) -> Result<RgbaImage> {
        let sticker = self
            .sticker
            .as_ref()
            .map(|(image, placement)| (image, *placement));
        compose(&self.photo, sticker, self.height)
    }

    /// Composes the picture and writes it to `path`, returning the path.
    ///
    /// # Errors
    ///
    /// See [`compose`] and [`save_to_file`].
    pub fn save(self, path: PathBuf) -> Result<PathBuf> {
        let picture = self.render()?;
        save_to_file(&picture, &path, None)?;
        Ok(path)
    }
}

/// Encodes a composed picture to `path`.
///
/// The format is taken from the file extension when not given.
///
/// # Errors
///
/// Returns an error if the picture cannot be encoded or written to disk.
pub fn save_to_file<P: AsRef<Path>>(
    picture: &RgbaImage,
    path: P,
    format: Option<ExportFormat>,
) -> Result<()> {
    let path = path.as_ref();
    let format = format
        .or_else(|| ExportFormat::from_path(path))
        .unwrap_or_default();

    // JPEG has no alpha channel.
    let result = if format == ExportFormat::Jpeg {
        DynamicImage::ImageRgba8(picture.clone())
            .to_rgb8()
            .save_with_format(path, format.image_format())
    } else {
        picture.save_with_format(path, format.image_format())
    };
    result.map_err(|e| Error::Io(format!("Failed to save picture: {e}")))?;

    log::info!("saved {}x{} picture to {}", picture.width(), picture.height(), path.display());
    Ok(())
}

/// Suggested file name for the save dialog, derived from the photo's name.
#[must_use]
pub fn generate_default_filename(photo_path: Option<&Path>, format: ExportFormat) -> String {
    let stem = photo_path
        .and_then(Path::file_stem)
        .and_then(|s| s.to_str())
        .unwrap_or("photo");
    format!("{stem}_sticker.{}", format.extension())
}
