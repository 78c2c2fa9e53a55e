// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection.

use crate::ui::design_tokens::palette;
use dark_light;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Background behind the stage in dark mode (#25292e, as the photo app).
const DARK_BACKGROUND: Color = Color::from_rgb(0.145, 0.161, 0.180);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Builds the iced theme carrying the app's brand colors.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::custom(
                "Sticker Lens Dark".to_string(),
                Palette {
                    background: DARK_BACKGROUND,
                    text: palette::WHITE,
                    primary: palette::ACCENT_500,
                    success: palette::SUCCESS_500,
                    warning: palette::WARNING_500,
                    danger: palette::ERROR_500,
                },
            )
        } else {
            Theme::custom(
                "Sticker Lens Light".to_string(),
                Palette {
                    background: palette::WHITE,
                    text: palette::GRAY_900,
                    primary: palette::PRIMARY_500,
                    success: palette::SUCCESS_500,
                    warning: palette::WARNING_500,
                    danger: palette::ERROR_500,
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_pick_matching_palettes() {
        assert_eq!(ThemeMode::Dark.theme().palette().background, DARK_BACKGROUND);
        assert_eq!(ThemeMode::Light.theme().palette().background, palette::WHITE);
    }
}
