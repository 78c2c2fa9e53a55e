// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::editor::{self, State as EditorState};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{stack, Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub editor: &'a EditorState,
    pub notifications: &'a notifications::Manager,
    pub theme_mode: ThemeMode,
}

/// Renders the navbar, the current screen and the toasts on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Editor => ctx
            .editor
            .view(editor::ViewContext { i18n: ctx.i18n })
            .map(Message::Editor),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }).map(Message::About),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        editor_active: ctx.screen == Screen::Editor,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let column = Column::new().push(navbar_view).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![column.width(Length::Fill).height(Length::Fill), toasts].into()
}
