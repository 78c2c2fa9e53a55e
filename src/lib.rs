// SPDX-License-Identifier: MPL-2.0
//! `sticker_lens` decorates a photo with emoji stickers, built with the Iced
//! GUI framework.
//!
//! A sticker can be dragged anywhere over the photo and double-tapped to
//! toggle between its nominal and doubled size, with a spring easing the
//! change. The decorated photo can be saved as a picture.

pub mod app;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
