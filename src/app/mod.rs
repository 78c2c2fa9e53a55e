// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the editor and about
//! screens.
//!
//! The `App` struct wires together the editor, localization and settings,
//! and translates messages into side effects like config persistence, file
//! dialogs or photo loading.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::i18n::fluent::I18n;
use crate::media::{Catalogue, Photo};
use crate::ui::editor::State as EditorState;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    editor: EditorState,
    config: config::Config,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("phase", &self.editor.phase())
            .field("has_sticker", &self.editor.sticker().is_some())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous
    /// photo loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if let Some(dir) = &flags.config_dir {
            log::debug!("settings directory overridden with {dir}");
        }
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        let photo = Photo::placeholder().unwrap_or_else(|err| {
            log::error!("failed to render placeholder photo: {err}");
            Photo::blank()
        });
        let catalogue = Catalogue::load();
        if catalogue.is_empty() {
            notifications.push(notifications::Notification::error(
                "notification-stickers-unavailable",
            ));
        }

        let app = App {
            i18n,
            screen: Screen::Editor,
            editor: EditorState::new(photo, catalogue, &config),
            theme_mode: config.general.theme_mode,
            config,
            notifications,
        };

        let task = flags
            .file_path
            .map_or_else(Task::none, |path| update::load_photo_task(path.into()));

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let file_name = self
            .editor
            .photo()
            .path
            .as_ref()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str());

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
            subscription::create_sticker_subscription(&self.editor),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            editor: &mut self.editor,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Editor(editor_message) => {
                update::handle_editor_message(&mut ctx, editor_message)
            }
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, &about_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::PhotoDialogResult(path) => update::handle_photo_dialog_result(&mut ctx, path),
            Message::PhotoLoaded(result) => update::handle_photo_loaded(&mut ctx, result),
            Message::ExportFinished(outcome) => update::handle_export_finished(&mut ctx, outcome),
            Message::FileDropped(path) => update::load_photo_task(path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            editor: &self.editor,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::StickerId;
    use crate::ui::{about, editor, navbar};

    fn app() -> App {
        let config = config::Config::default();
        App {
            i18n: I18n::default(),
            screen: Screen::Editor,
            editor: EditorState::new(Photo::blank(), Catalogue::load(), &config),
            theme_mode: ThemeMode::Dark,
            config,
            notifications: notifications::Manager::new(),
        }
    }

    #[test]
    fn tabs_switch_screens() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenAbout));
        assert_eq!(app.screen, Screen::About);

        let _ = app.update(Message::About(about::Message::BackToEditor));
        assert_eq!(app.screen, Screen::Editor);
    }

    #[test]
    fn cancelled_photo_pick_warns() {
        let mut app = app();
        let _ = app.update(Message::PhotoDialogResult(None));

        assert_eq!(
            app.notifications.visible().next().map(notifications::Notification::message_key),
            Some("notification-no-photo-selected")
        );
    }

    #[test]
    fn failed_photo_load_shows_error_and_keeps_sticker() {
        let mut app = app();
        let _ = app.update(Message::Editor(editor::Message::StickerChosen(
            StickerId::Heart,
        )));

        let _ = app.update(Message::PhotoLoaded(Err(crate::error::Error::Io(
            "gone".into(),
        ))));

        assert!(app.editor.sticker().is_some());
        assert_eq!(
            app.notifications.visible().next().map(notifications::Notification::message_key),
            Some("notification-load-error-io")
        );
    }

    #[test]
    fn loaded_photo_replaces_base_and_clears_load_errors() {
        let mut app = app();
        app.notifications
            .push(notifications::Notification::error("notification-load-error-io"));
        let _ = app.update(Message::Navbar(navbar::Message::OpenAbout));

        let mut photo = Photo::blank();
        photo.path = Some("/tmp/beach.png".into());
        let _ = app.update(Message::PhotoLoaded(Ok(photo)));

        assert_eq!(app.screen, Screen::Editor);
        assert_eq!(app.notifications.visible_count(), 0);
        assert_eq!(app.editor.phase(), editor::Phase::Decorating);
        assert!(app.title().starts_with("beach.png - "));
    }

    #[test]
    fn export_outcome_is_reported() {
        let mut app = app();
        let _ = app.update(Message::ExportFinished(None));
        assert_eq!(app.notifications.visible_count(), 0);

        let _ = app.update(Message::ExportFinished(Some(Ok("/tmp/out.png".into()))));
        let _ = app.update(Message::ExportFinished(Some(Err(crate::error::Error::Io(
            "disk full".into(),
        )))));

        let keys: Vec<&str> = app
            .notifications
            .visible()
            .map(notifications::Notification::message_key)
            .collect();
        assert_eq!(
            keys,
            vec!["notification-export-error", "notification-export-success"]
        );
    }

    #[test]
    fn title_defaults_to_app_name() {
        let app = app();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }
}
