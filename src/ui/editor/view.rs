// SPDX-License-Identifier: MPL-2.0
//! Editor screen layout: stage, footer or options row, and sticker picker.

use super::{Message, Phase, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sticker::scene::Scene;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, canvas, container, image, mouse_area, opaque, scrollable, stack, text, Column,
    Container, Row,
};
use iced::{Element, Length};

/// Contextual data needed to render the editor view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Renders the editor.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let controls = match self.phase {
            Phase::Choosing => footer(ctx.i18n),
            Phase::Decorating => options_row(ctx.i18n),
        };

        let content = Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(self.stage())
            .push(controls);

        if self.picker_open {
            stack![content, self.picker(ctx.i18n)].into()
        } else {
            content.into()
        }
    }

    fn stage(&self) -> Element<'_, Message> {
        let scene = canvas(Scene {
            photo: &self.photo.stage,
            sticker: self.sticker.as_ref(),
            anchor_offset: self.anchor_offset,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        Element::from(scene).map(Message::Sticker)
    }

    /// Modal sheet listing the sticker catalogue.
    fn picker<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let close = button(text("×").size(typography::TITLE_MD))
            .on_press(Message::ClosePicker)
            .padding([0.0, spacing::XS])
            .style(styles::button::secondary);

        let header = Row::new()
            .align_y(Vertical::Center)
            .push(
                text(i18n.tr("picker-title"))
                    .size(typography::BODY)
                    .width(Length::Fill),
            )
            .push(close);

        let tiles = self.catalogue.iter().fold(
            Row::new().spacing(spacing::SM).padding(spacing::XS),
            |row, (id, sticker)| {
                let face = Column::new()
                    .align_x(Horizontal::Center)
                    .spacing(spacing::XXS)
                    .push(
                        image(sticker.handle.clone())
                            .width(Length::Fixed(sizing::STICKER_TILE))
                            .height(Length::Fixed(sizing::STICKER_TILE)),
                    )
                    .push(text(i18n.tr(id.i18n_key())).size(typography::CAPTION));
                let tile = button(face)
                    .on_press(Message::StickerChosen(id))
                    .padding(spacing::XXS)
                    .style(styles::button::tile);
                row.push(tile)
            },
        );

        let list: Element<'a, Message> = if self.catalogue.is_empty() {
            text(i18n.tr("picker-empty")).size(typography::BODY).into()
        } else {
            scrollable(tiles)
                .direction(scrollable::Direction::Horizontal(
                    scrollable::Scrollbar::default(),
                ))
                .width(Length::Fill)
                .into()
        };

        let sheet = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(header)
                .push(list),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PICKER_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::sheet);

        let backdrop = mouse_area(
            container(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop),
        )
        .on_press(Message::ClosePicker);

        stack![
            backdrop,
            Container::new(opaque(sheet))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
        ]
        .into()
    }
}

/// "Choose a photo" and "Use this photo".
fn footer(i18n: &I18n) -> Element<'_, Message> {
    let choose = button(text(i18n.tr("footer-choose-photo")).size(typography::BODY).center())
        .on_press(Message::PickPhoto)
        .width(Length::Fixed(sizing::FOOTER_BUTTON_WIDTH))
        .padding(spacing::SM)
        .style(styles::button::primary);

    let keep = button(text(i18n.tr("footer-use-this-photo")).size(typography::BODY).center())
        .on_press(Message::UseThisPhoto)
        .width(Length::Fixed(sizing::FOOTER_BUTTON_WIDTH))
        .padding(spacing::SM)
        .style(styles::button::secondary);

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(choose)
        .push(keep)
        .into()
}

/// Reset, add sticker, save.
fn options_row(i18n: &I18n) -> Element<'_, Message> {
    let add = button(text("+").size(typography::TITLE_LG).center())
        .on_press(Message::AddSticker)
        .width(Length::Fixed(sizing::OPTION_BUTTON))
        .height(Length::Fixed(sizing::OPTION_BUTTON))
        .style(styles::button::option(true));

    Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(labelled_option("↺", i18n.tr("options-reset"), Message::Reset))
        .push(add)
        .push(labelled_option("⤓", i18n.tr("options-save"), Message::Save))
        .into()
}

fn labelled_option<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    let content = Column::new()
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS)
        .push(text(glyph).size(typography::TITLE_MD))
        .push(text(label).size(typography::CAPTION));

    button(content)
        .on_press(message)
        .padding(spacing::XS)
        .style(styles::button::option(false))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::media::{Catalogue, ImageData, Photo, StickerId};

    fn editor() -> State {
        let image = ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        State::new(
            Photo {
                source: image.clone(),
                stage: image,
                path: None,
            },
            Catalogue::load(),
            &Config::default(),
        )
    }

    #[test]
    fn editor_view_renders_in_both_phases() {
        let i18n = I18n::default();
        let mut editor = editor();
        {
            let _element = editor.view(ViewContext { i18n: &i18n });
        }

        editor.update(Message::UseThisPhoto);
        let _element = editor.view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn editor_view_renders_with_picker_and_sticker() {
        let i18n = I18n::default();
        let mut editor = editor();
        editor.update(Message::StickerChosen(StickerId::Heart));
        editor.update(Message::AddSticker);

        let _element = editor.view(ViewContext { i18n: &i18n });
    }
}
