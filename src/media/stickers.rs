// SPDX-License-Identifier: MPL-2.0
//! Built-in sticker catalogue, embedded as SVG and rasterized on demand.

use crate::error::{Error, Result};
use crate::media::image::rasterize_svg;
use crate::media::ImageData;
use rust_embed::RustEmbed;

/// Edge length of the rasterized sticker bitmaps. Large enough that the
/// enlarged sticker and high-resolution exports stay crisp.
pub const RASTER_EDGE: u32 = 256;

#[derive(RustEmbed)]
#[folder = "assets/stickers/"]
struct StickerAssets;

/// Identifies one sticker of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickerId {
    Heart,
    Star,
    Smiley,
    Sun,
    Flower,
    Cloud,
}

impl StickerId {
    pub const ALL: [StickerId; 6] = [
        StickerId::Heart,
        StickerId::Star,
        StickerId::Smiley,
        StickerId::Sun,
        StickerId::Flower,
        StickerId::Cloud,
    ];

    fn file_name(self) -> &'static str {
        match self {
            StickerId::Heart => "heart.svg",
            StickerId::Star => "star.svg",
            StickerId::Smiley => "smiley.svg",
            StickerId::Sun => "sun.svg",
            StickerId::Flower => "flower.svg",
            StickerId::Cloud => "cloud.svg",
        }
    }

    /// Accessible label key for the picker.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            StickerId::Heart => "sticker-heart",
            StickerId::Star => "sticker-star",
            StickerId::Smiley => "sticker-smiley",
            StickerId::Sun => "sticker-sun",
            StickerId::Flower => "sticker-flower",
            StickerId::Cloud => "sticker-cloud",
        }
    }
}

/// Rasterizes one embedded sticker.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the asset is missing or cannot be rendered.
pub fn load_sticker(id: StickerId) -> Result<ImageData> {
    let asset = StickerAssets::get(id.file_name())
        .ok_or_else(|| Error::Svg(format!("missing sticker asset {}", id.file_name())))?;
    rasterize_svg(asset.data.as_ref(), Some(RASTER_EDGE))
}

/// All stickers that rendered successfully, in catalogue order.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    entries: Vec<(StickerId, ImageData)>,
}

impl Catalogue {
    /// Rasterizes the whole catalogue. Stickers that fail to render are
    /// logged and left out.
    #[must_use]
    pub fn load() -> Self {
        let entries = StickerId::ALL
            .into_iter()
            .filter_map(|id| match load_sticker(id) {
                Ok(image) => Some((id, image)),
                Err(err) => {
                    log::error!("failed to render sticker {id:?}: {err}");
                    None
                }
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn get(&self, id: StickerId) -> Option<&ImageData> {
        self.entries
            .iter()
            .find_map(|(entry, image)| (*entry == id).then_some(image))
    }

    pub fn iter(&self) -> impl Iterator<Item = (StickerId, &ImageData)> {
        self.entries.iter().map(|(id, image)| (*id, image))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
