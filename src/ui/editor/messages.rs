// SPDX-License-Identifier: MPL-2.0
//! Editor message/event types re-exported by the facade.

use crate::media::export::ExportJob;
use crate::media::StickerId;
use crate::ui::sticker;

/// Messages emitted directly by the editor widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// "Choose a photo" pressed.
    PickPhoto,
    /// Keep the current photo and show the options row.
    UseThisPhoto,
    /// Back to the footer; removes the sticker.
    Reset,
    /// Opens the sticker picker.
    AddSticker,
    ClosePicker,
    StickerChosen(StickerId),
    Save,
    /// Input for the mounted sticker.
    Sticker(sticker::Message),
}

impl From<sticker::Message> for Message {
    fn from(message: sticker::Message) -> Self {
        Message::Sticker(message)
    }
}

impl From<sticker::GestureEvent> for Message {
    fn from(event: sticker::GestureEvent) -> Self {
        Message::Sticker(sticker::Message::Gesture(event))
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user wants to pick a new base photo.
    PickPhotoRequested,
    /// The user wants to save the decorated photo.
    SaveRequested {
        job: ExportJob,
        /// File name offered by the save dialog.
        suggested_name: String,
    },
}
