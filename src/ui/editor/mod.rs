// SPDX-License-Identifier: MPL-2.0
//! Sticker editor screen.
//!
//! This module follows the "state down, messages up" pattern: the editor
//! owns the base photo and the placed sticker, handles its own messages, and
//! reports side effects (file dialogs, export) to the application through
//! [`Event`]s.
//!
//! The screen has two phases. While [`Phase::Choosing`] the footer offers to
//! pick a photo or keep the current one; once [`Phase::Decorating`] the
//! options row offers to reset, add a sticker, or save.

mod messages;
mod view;

pub use messages::{Event, Message};
pub use view::ViewContext;

use crate::app::config::Config;
use crate::media::export::{generate_default_filename, ExportFormat, ExportJob};
use crate::media::{Catalogue, Photo, StickerId};
use crate::ui::sticker::{self, scene, Sticker, StickerOptions};
use iced::Subscription;

/// Which controls sit under the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Choosing,
    Decorating,
}

/// Local UI state for the editor screen.
#[derive(Debug, Clone)]
pub struct State {
    photo: Photo,
    phase: Phase,
    picker_open: bool,
    catalogue: Catalogue,
    sticker: Option<Sticker>,
    options: StickerOptions,
    anchor_offset: f32,
    export_height: u32,
}

impl State {
    #[must_use]
    pub fn new(photo: Photo, catalogue: Catalogue, config: &Config) -> Self {
        Self {
            photo,
            phase: Phase::Choosing,
            picker_open: false,
            catalogue,
            sticker: None,
            options: config.sticker.options(),
            anchor_offset: config.sticker.anchor_offset(),
            export_height: config.export.height(),
        }
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PickPhoto => Event::PickPhotoRequested,
            Message::UseThisPhoto => {
                self.phase = Phase::Decorating;
                Event::None
            }
            Message::Reset => {
                self.phase = Phase::Choosing;
                self.picker_open = false;
                self.remove_sticker();
                Event::None
            }
            Message::AddSticker => {
                self.picker_open = true;
                Event::None
            }
            Message::ClosePicker => {
                self.picker_open = false;
                Event::None
            }
            Message::StickerChosen(id) => {
                self.mount_sticker(id);
                self.picker_open = false;
                Event::None
            }
            Message::Save => self.save_request(),
            Message::Sticker(message) => {
                if let Some(sticker) = self.sticker.as_mut() {
                    sticker.update(message);
                }
                Event::None
            }
        }
    }

    /// Replaces the base photo; any placed sticker is removed.
    pub fn set_photo(&mut self, photo: Photo) {
        self.remove_sticker();
        self.photo = photo;
        self.phase = Phase::Decorating;
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.sticker
            .as_ref()
            .map_or_else(Subscription::none, |sticker| {
                sticker.subscription().map(Message::Sticker)
            })
    }

    fn mount_sticker(&mut self, id: StickerId) {
        let Some(image) = self.catalogue.get(id).cloned() else {
            log::warn!("sticker {id:?} is not in the catalogue");
            return;
        };
        self.remove_sticker();
        log::debug!("placing sticker {id:?}");
        self.sticker = Some(Sticker::new(id, image, self.options));
    }

    fn remove_sticker(&mut self) {
        if let Some(mut sticker) = self.sticker.take() {
            sticker.teardown();
        }
    }

    fn save_request(&self) -> Event {
        let placement = self.sticker.as_ref().map(|sticker| {
            (
                sticker.source().clone(),
                sticker.settled_bounds(scene::sticker_anchor(self.anchor_offset)),
            )
        });
        let job = ExportJob {
            photo: self.photo.source.clone(),
            sticker: placement,
            height: self.export_height,
        };

        Event::SaveRequested {
            job,
            suggested_name: generate_default_filename(self.photo.path.as_deref(), ExportFormat::Png),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    #[must_use]
    pub fn photo(&self) -> &Photo {
        &self.photo
    }

    #[must_use]
    pub fn sticker(&self) -> Option<&Sticker> {
        self.sticker.as_ref()
    }

    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    #[must_use]
    pub fn anchor_offset(&self) -> f32 {
        self.anchor_offset
    }
}
