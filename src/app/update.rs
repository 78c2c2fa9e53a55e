// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] with mutable access to the
//! parts of the application state it may touch and returns the follow-up
//! [`Task`].

use super::{config, Message, Screen};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::export::ExportJob;
use crate::media::{self, IMAGE_EXTENSIONS};
use crate::ui::about;
use crate::ui::editor::{self, State as EditorState};
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::path::PathBuf;

/// Mutable view over the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub editor: &'a mut EditorState,
    pub config: &'a mut config::Config,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_editor_message(
    ctx: &mut UpdateContext<'_>,
    message: editor::Message,
) -> Task<Message> {
    match ctx.editor.update(message) {
        editor::Event::None => Task::none(),
        editor::Event::PickPhotoRequested => open_photo_dialog(ctx.i18n),
        editor::Event::SaveRequested {
            job,
            suggested_name,
        } => save_with_dialog(ctx.i18n, job, suggested_name),
    }
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::None => {}
        navbar::Event::OpenEditor => *ctx.screen = Screen::Editor,
        navbar::Event::OpenAbout => *ctx.screen = Screen::About,
        navbar::Event::LanguageChanged(locale) => {
            ctx.i18n.set_locale(locale.clone());
            ctx.config.general.language = Some(locale.to_string());
            persist_preferences(ctx);
        }
        navbar::Event::ThemeModeChanged(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            persist_preferences(ctx);
        }
    }
    Task::none()
}

pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        about::Event::None => {}
        about::Event::BackToEditor => *ctx.screen = Screen::Editor,
    }
    Task::none()
}

/// Handles the result of the photo picker.
pub fn handle_photo_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        ctx.notifications
            .push(Notification::warning("notification-no-photo-selected"));
        return Task::none();
    };
    load_photo_task(path)
}

pub fn handle_photo_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<media::Photo, Error>,
) -> Task<Message> {
    match result {
        Ok(photo) => {
            ctx.notifications.clear_load_errors();
            ctx.editor.set_photo(photo);
            *ctx.screen = Screen::Editor;
        }
        Err(err) => {
            log::error!("failed to load photo: {err}");
            ctx.notifications.push(Notification::error(err.i18n_key()));
        }
    }
    Task::none()
}

pub fn handle_export_finished(
    ctx: &mut UpdateContext<'_>,
    outcome: Option<Result<PathBuf, Error>>,
) -> Task<Message> {
    match outcome {
        None => log::debug!("save cancelled"),
        Some(Ok(path)) => {
            ctx.notifications.push(
                Notification::success("notification-export-success")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Some(Err(err)) => {
            ctx.notifications.push(
                Notification::error("notification-export-error")
                    .with_arg("error", err.to_string()),
            );
        }
    }
    Task::none()
}

/// Decodes a photo on a blocking worker so the UI keeps animating.
pub fn load_photo_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::load_photo(&path))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        },
        Message::PhotoLoaded,
    )
}

fn open_photo_dialog(i18n: &I18n) -> Task<Message> {
    let filter_name = i18n.tr("dialog-photo-filter");
    let title = i18n.tr("dialog-photo-title");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::PhotoDialogResult,
    )
}

fn save_with_dialog(i18n: &I18n, job: ExportJob, suggested_name: String) -> Task<Message> {
    let filter_name = i18n.tr("dialog-save-filter");
    let title = i18n.tr("dialog-save-title");
    Task::perform(
        async move {
            let handle = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .set_file_name(&suggested_name)
                .add_filter(&filter_name, &["png", "jpg", "jpeg", "webp"])
                .save_file()
                .await?;
            let path = handle.path().to_path_buf();
            let saved = tokio::task::spawn_blocking(move || job.save(path))
                .await
                .map_err(|e| Error::Io(e.to_string()))
                .and_then(|result| result);
            Some(saved)
        },
        Message::ExportFinished,
    )
}

/// Writes the settings file, reporting failures as a toast.
fn persist_preferences(ctx: &mut UpdateContext<'_>) {
    if let Err(err) = config::save(ctx.config) {
        log::error!("failed to save settings: {err}");
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}
