// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every screen.
//!
//! - **Palette**: Base colors (petrol brand, gold accent)
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//!
//! ```
//! use sticker_lens::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! let padding = spacing::MD;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand (petrol, #134761)
    pub const PRIMARY_500: Color = Color::from_rgb(0.075, 0.278, 0.380);

    // Accent (gold, #ffd33d)
    pub const ACCENT_500: Color = Color::from_rgb(1.0, 0.827, 0.239);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Semi-transparent panels such as toasts and the sticker picker.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Footer buttons under the stage.
    pub const FOOTER_BUTTON_WIDTH: f32 = 320.0;

    /// Round buttons of the options row.
    pub const OPTION_BUTTON: f32 = 56.0;

    /// Thumbnails in the sticker picker.
    pub const STICKER_TILE: f32 = 72.0;

    /// Height of the sticker picker sheet.
    pub const PICKER_HEIGHT: f32 = 180.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page headings.
    pub const TITLE_LG: f32 = 28.0;
    /// App name, picker title.
    pub const TITLE_MD: f32 = 20.0;
    /// Standard body text and labels.
    pub const BODY: f32 = 14.0;
    /// Captions under option buttons.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border / Radius
// ============================================================================

pub mod border {
    pub const WIDTH_MD: f32 = 2.0;
    /// Ring around the primary footer button.
    pub const WIDTH_LG: f32 = 4.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 18.0;
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_LG > border::WIDTH_MD);
    assert!(sizing::PICKER_HEIGHT > sizing::STICKER_TILE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
