// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::Photo;
use crate::ui::about;
use crate::ui::editor;
use crate::ui::navbar;
use crate::ui::notifications;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Editor(editor::Message),
    Navbar(navbar::Message),
    About(about::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the photo picker; `None` when the user cancelled.
    PhotoDialogResult(Option<PathBuf>),
    PhotoLoaded(Result<Photo, Error>),
    /// Outcome of a save; `None` when the save dialog was cancelled.
    ExportFinished(Option<Result<PathBuf, Error>>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo to decorate on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `STICKER_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
