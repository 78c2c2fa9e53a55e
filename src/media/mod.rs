// SPDX-License-Identifier: MPL-2.0
//! Photo and sticker bitmaps.
//!
//! This module loads the base photo (a user file or the embedded
//! placeholder), the sticker catalogue, and renders the composite export.

pub mod export;
pub mod image;
pub mod stickers;

use crate::app::config::{PHOTO_HEIGHT, PHOTO_WIDTH};
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};

pub use image::{load_image, ImageData};
pub use stickers::{Catalogue, StickerId};

/// Extensions offered by the photo picker.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "svg",
];

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct ImageAssets;

const PLACEHOLDER: &str = "placeholder.svg";

/// The photo being decorated.
///
/// `source` keeps the decoded file at full resolution for export; `stage`
/// is the same picture cover-fitted to the on-screen frame.
#[derive(Debug, Clone)]
pub struct Photo {
    pub source: ImageData,
    pub stage: ImageData,
    pub path: Option<PathBuf>,
}

impl Photo {
    fn new(source: ImageData, path: Option<PathBuf>) -> Result<Self> {
        let stage = source.cover(stage_width(), stage_height())?;
        Ok(Self {
            source,
            stage,
            path,
        })
    }

    /// The embedded placeholder shown before the user picks a photo.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Svg`] if the embedded asset cannot be rendered.
    pub fn placeholder() -> Result<Self> {
        let asset = ImageAssets::get(PLACEHOLDER)
            .ok_or_else(|| Error::Svg(format!("missing asset {PLACEHOLDER}")))?;
        let source = image::rasterize_svg(asset.data.as_ref(), Some(stage_height() * 2))?;
        Self::new(source, None)
    }

    /// Plain gray stage used when even the placeholder cannot be rendered.
    #[must_use]
    pub fn blank() -> Self {
        let (width, height) = (stage_width(), stage_height());
        let pixels = [0x80, 0x80, 0x80, 0xff]
            .into_iter()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        let image = ImageData::from_rgba(width, height, pixels);
        Self {
            source: image.clone(),
            stage: image,
            path: None,
        }
    }

    /// Whether this is the placeholder rather than a user photo.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.path.is_none()
    }
}

/// Loads a user photo from disk.
///
/// # Errors
///
/// Propagates decoding errors from [`load_image`].
pub fn load_photo<P: AsRef<Path>>(path: P) -> Result<Photo> {
    let path = path.as_ref();
    let source = load_image(path)?;
    log::info!(
        "loaded photo {} ({}x{})",
        path.display(),
        source.width,
        source.height
    );
    Photo::new(source, Some(path.to_path_buf()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stage_width() -> u32 {
    PHOTO_WIDTH as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stage_height() -> u32 {
    PHOTO_HEIGHT as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn placeholder_fits_the_stage() {
        let photo = Photo::placeholder().expect("placeholder renders");
        assert!(photo.is_placeholder());
        assert_eq!((photo.stage.width, photo.stage.height), (320, 440));
    }

    #[test]
    fn load_photo_keeps_source_and_fits_stage() {
        let temp_dir = tempdir().expect("temp dir");
        let path = temp_dir.path().join("wide.png");
        RgbaImage::from_pixel(100, 50, Rgba([9, 9, 9, 255]))
            .save(&path)
            .expect("write png");

        let photo = load_photo(&path).expect("photo loads");

        assert!(!photo.is_placeholder());
        assert_eq!((photo.source.width, photo.source.height), (100, 50));
        assert_eq!((photo.stage.width, photo.stage.height), (320, 440));
        assert_eq!(photo.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn load_photo_reports_missing_file() {
        let temp_dir = tempdir().expect("temp dir");
        let result = load_photo(temp_dir.path().join("nope.jpg"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
