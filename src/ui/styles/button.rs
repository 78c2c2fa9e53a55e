// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action: white face inside a gold ring.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::GRAY_100,
        button::Status::Pressed => palette::GRAY_200,
        button::Status::Active | button::Status::Disabled => WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_900,
        border: Border {
            color: palette::ACCENT_500,
            width: border::WIDTH_LG,
            radius: radius::LG.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only action shown beside the primary button.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_500,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active => text,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round button of the options row; `emphasized` draws the gold ring used by
/// the "add sticker" button.
pub fn option(emphasized: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_MEDIUM,
            button::Status::Pressed => opacity::OVERLAY_STRONG,
            button::Status::Active | button::Status::Disabled => opacity::TRANSPARENT,
        };
        let (background, text_color, ring) = if emphasized {
            (WHITE, BLACK, palette::ACCENT_500)
        } else {
            (
                Color { a: alpha, ..palette::GRAY_400 },
                theme.palette().text,
                Color::TRANSPARENT,
            )
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: ring,
                width: if emphasized { border::WIDTH_LG } else { 0.0 },
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Navigation tab; `active` marks the current screen.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = if active {
            theme.palette().primary
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => theme.palette().text,
                button::Status::Active | button::Status::Disabled => palette::GRAY_400,
            }
        };

        button::Style {
            background: None,
            text_color,
            border: Border {
                color: if active { theme.palette().primary } else { Color::TRANSPARENT },
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Sticker tile inside the picker.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        button::Status::Pressed => opacity::OVERLAY_STRONG,
        button::Status::Active | button::Status::Disabled => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
