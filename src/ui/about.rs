// SPDX-License-Identifier: MPL-2.0
//! About screen module.
//!
//! Shows the application name and version, followed by the Opel Manta 400
//! notes the app is themed after.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, rule, scrollable, text, Column, Container, Text},
    Element, Length,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width of the text column, as on a phone screen.
const CONTENT_WIDTH: f32 = 350.0;

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToEditor,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToEditor,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToEditor => Event::BackToEditor,
    }
}

/// Render the about screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("about-back-to-editor-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToEditor)
    .style(styles::button::secondary);

    let app_line = Text::new(format!(
        "{} · {}",
        ctx.i18n.tr("window-title"),
        ctx.i18n
            .tr_with_args("about-version", &[("version", APP_VERSION)])
    ))
    .size(typography::CAPTION);

    let car = build_car_section(&ctx);

    let content = Column::new()
        .width(Length::Fixed(CONTENT_WIDTH))
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .push(back_button)
        .push(car)
        .push(rule::horizontal(1))
        .push(app_line);

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .padding(spacing::LG),
    )
    .height(Length::Fill)
    .into()
}

/// Title and the three facts about the car.
fn build_car_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(format!("🔹 {}", ctx.i18n.tr("about-title"))).size(typography::TITLE_MD);

    ["about-engine", "about-drivetrain", "about-handling"]
        .into_iter()
        .fold(Column::new().spacing(spacing::MD).push(title), |column, key| {
            column.push(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
        })
        .into()
}
