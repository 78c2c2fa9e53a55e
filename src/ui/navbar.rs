// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar holds one tab per screen (editor and about) and two pickers on
//! the right for the interface language and the theme mode.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, container, pick_list, text, Container, Row},
    Element, Length, Theme,
};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether the editor tab is the current screen.
    pub editor_active: bool,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenEditor,
    OpenAbout,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenEditor,
    OpenAbout,
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenEditor => Event::OpenEditor,
        Message::OpenAbout => Event::OpenAbout,
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
        Message::ThemeModeSelected(mode) => Event::ThemeModeChanged(mode),
    }
}

/// Pick list entry: a locale with its name in the current language.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageChoice {
    locale: LanguageIdentifier,
    name: String,
}

impl fmt::Display for LanguageChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ThemeChoice {
    mode: ThemeMode,
    name: String,
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn theme_key(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "navbar-theme-light",
        ThemeMode::Dark => "navbar-theme-dark",
        ThemeMode::System => "navbar-theme-system",
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let tabs = Row::new()
        .spacing(spacing::XS)
        .push(tab(ctx.i18n.tr("navbar-editor"), ctx.editor_active, Message::OpenEditor))
        .push(tab(ctx.i18n.tr("navbar-about"), !ctx.editor_active, Message::OpenAbout));

    let languages: Vec<LanguageChoice> = ctx
        .i18n
        .available_locales
        .iter()
        .map(|locale| LanguageChoice {
            locale: locale.clone(),
            name: ctx.i18n.tr(&format!("language-name-{locale}")),
        })
        .collect();
    let current_language = languages
        .iter()
        .find(|choice| &choice.locale == ctx.i18n.current_locale())
        .cloned();
    let language_picker = pick_list(languages, current_language, |choice| {
        Message::LanguageSelected(choice.locale)
    })
    .text_size(typography::CAPTION)
    .padding(spacing::XXS);

    let themes: Vec<ThemeChoice> = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark]
        .into_iter()
        .map(|mode| ThemeChoice {
            mode,
            name: ctx.i18n.tr(theme_key(mode)),
        })
        .collect();
    let current_theme = themes.iter().find(|c| c.mode == ctx.theme_mode).cloned();
    let theme_picker = pick_list(themes, current_theme, |choice| {
        Message::ThemeModeSelected(choice.mode)
    })
    .text_size(typography::CAPTION)
    .padding(spacing::XXS);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(tabs).width(Length::Fill))
        .push(language_picker)
        .push(theme_picker);

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn tab<'a>(label: String, active: bool, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::tab(active))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        for editor_active in [true, false] {
            let ctx = ViewContext {
                i18n: &i18n,
                editor_active,
                theme_mode: ThemeMode::System,
            };
            let _element = view(ctx);
        }
    }

    #[test]
    fn tabs_emit_navigation_events() {
        assert!(matches!(update(Message::OpenAbout), Event::OpenAbout));
        assert!(matches!(update(Message::OpenEditor), Event::OpenEditor));
    }

    #[test]
    fn language_selection_is_forwarded() {
        let locale: LanguageIdentifier = "pt-BR".parse().unwrap();
        match update(Message::LanguageSelected(locale.clone())) {
            Event::LanguageChanged(selected) => assert_eq!(selected, locale),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn every_theme_mode_has_a_label() {
        let i18n = I18n::default();
        for mode in [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark] {
            assert!(!i18n.tr(theme_key(mode)).starts_with("MISSING"));
        }
    }

    #[test]
    fn every_locale_has_a_name() {
        let i18n = I18n::default();
        for locale in &i18n.available_locales {
            let name = i18n.tr(&format!("language-name-{locale}"));
            assert!(!name.starts_with("MISSING"), "{name}");
        }
    }
}
