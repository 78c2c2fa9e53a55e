// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used by the about screen sections.
///
/// The color is derived from the active `Theme` background so panels stay
/// readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bottom sheet holding the sticker picker.
pub fn sheet(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::GRAY_900
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Dimmed backdrop behind a modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}
