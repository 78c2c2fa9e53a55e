// SPDX-License-Identifier: MPL-2.0
//! Interactive sticker placed over the base photo.
//!
//! A sticker takes an already-resolved image and a nominal edge length, and
//! reacts to two independent gesture streams coming from the scene canvas:
//! double-taps resize it (eased with a spring) and pans drag it (applied
//! directly, so the sticker stays glued to the pointer).
//!
//! # Modules
//!
//! - [`gesture`] - Double-tap and pan recognizers over raw pointer input
//! - [`spring`] - Spring easing used for the size
//! - [`transform`] - The sticker's scale and translation reducers
//! - [`scene`] - Canvas composing the base photo and the sticker

pub mod gesture;
pub mod scene;
pub mod spring;
pub mod transform;

pub use gesture::{GestureEvent, GestureLayer, HitTargets, PointerEvent, RecognizerState};
pub use spring::{Spring, SpringConfig};
pub use transform::{ScaleMode, StickerTransform, ToggleBasis};

use crate::media::stickers::StickerId;
use crate::media::ImageData;
use iced::{Point, Rectangle, Size, Subscription, Vector};
use std::time::{Duration, Instant};

/// Frame interval used while the size is easing.
pub const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Messages consumed by a mounted sticker.
#[derive(Debug, Clone)]
pub enum Message {
    Gesture(GestureEvent),
    AnimationFrame(Instant),
}

/// Construction parameters shared by every sticker of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickerOptions {
    pub size: f32,
    pub spring: SpringConfig,
    pub toggle_basis: ToggleBasis,
}

/// One placed sticker: its image and its visual state.
#[derive(Debug, Clone)]
pub struct Sticker {
    id: StickerId,
    source: ImageData,
    transform: StickerTransform,
    last_frame: Option<Instant>,
}

impl Sticker {
    #[must_use]
    pub fn new(id: StickerId, source: ImageData, options: StickerOptions) -> Self {
        Self {
            id,
            source,
            transform: StickerTransform::new(options.size, options.spring, options.toggle_basis),
            last_frame: None,
        }
    }

    /// Routes a message to the matching reducer.
    ///
    /// Returns whether the visual state changed.
    pub fn update(&mut self, message: Message) -> bool {
        match message {
            Message::Gesture(GestureEvent::DoubleTap) => {
                let changed = self.transform.apply_tap();
                if changed {
                    // The previous easing may have ended without a trailing frame.
                    self.last_frame = None;
                    log::debug!(
                        "sticker {:?} resizing to {}px",
                        self.id,
                        self.transform.target_size()
                    );
                }
                changed
            }
            Message::Gesture(GestureEvent::PanChanged(delta)) => self.transform.apply_pan(delta),
            Message::AnimationFrame(now) => {
                if !self.transform.is_animating() {
                    self.last_frame = None;
                    return false;
                }
                let elapsed = self
                    .last_frame
                    .map_or(ANIMATION_FRAME, |previous| now.saturating_duration_since(previous));
                self.last_frame = Some(now);
                self.transform.tick(elapsed);
                true
            }
        }
    }

    /// Frame ticks, only while the size is still easing.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.transform.is_animating() {
            iced::time::every(ANIMATION_FRAME).map(Message::AnimationFrame)
        } else {
            Subscription::none()
        }
    }

    /// Unmounts the sticker; see [`StickerTransform::teardown`].
    pub fn teardown(&mut self) {
        self.transform.teardown();
        self.last_frame = None;
    }

    /// Rectangle currently covered by the sticker, given the point where its
    /// top-left corner sits before any drag.
    #[must_use]
    pub fn bounds(&self, anchor: Point) -> Rectangle {
        let size = self.transform.displayed_size();
        Rectangle::new(anchor + self.transform.translation(), Size::new(size, size))
    }

    /// Rectangle the sticker will cover once the size has settled.
    #[must_use]
    pub fn settled_bounds(&self, anchor: Point) -> Rectangle {
        let size = self.transform.target_size();
        Rectangle::new(anchor + self.transform.translation(), Size::new(size, size))
    }

    #[must_use]
    pub fn id(&self) -> StickerId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> &ImageData {
        &self.source
    }

    #[must_use]
    pub fn transform(&self) -> &StickerTransform {
        &self.transform
    }

    #[must_use]
    pub fn translation(&self) -> Vector {
        self.transform.translation()
    }
}
