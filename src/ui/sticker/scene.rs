// SPDX-License-Identifier: MPL-2.0
//! Canvas composing the base photo and the placed sticker.
//!
//! The photo occupies a fixed 320×440 stage, centered in the canvas. The
//! sticker's resting top-left corner sits on the stage's left edge,
//! `anchor_offset` above the stage's bottom edge; drags move it from there
//! and may carry it past the photo, where the canvas clips it.
//!
//! Raw mouse and single-finger touch input is reduced to [`PointerEvent`]s
//! and fed to a [`GestureLayer`] kept in the canvas state. Recognized
//! gestures are published as [`Message::Gesture`].

use super::{GestureLayer, HitTargets, Message, PointerEvent, Sticker};
use crate::app::config::{PHOTO_HEIGHT, PHOTO_WIDTH};
use crate::media::ImageData;
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{mouse, touch, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::Instant;

/// Canvas program drawing one photo and at most one sticker.
pub struct Scene<'a> {
    pub photo: &'a ImageData,
    pub sticker: Option<&'a Sticker>,
    pub anchor_offset: f32,
}

/// Input state kept by the canvas between events.
#[derive(Debug, Default)]
pub struct SceneState {
    gestures: GestureLayer,
    /// Finger currently driving the gestures, if input comes from touch.
    finger: Option<touch::Finger>,
}

/// Top-left corner of the stage inside a canvas of `bounds` size.
#[must_use]
pub fn stage_origin(bounds: Size) -> Point {
    Point::new(
        ((bounds.width - PHOTO_WIDTH) / 2.0).max(0.0),
        ((bounds.height - PHOTO_HEIGHT) / 2.0).max(0.0),
    )
}

/// Resting top-left corner of the sticker, relative to the stage origin.
#[must_use]
pub fn sticker_anchor(anchor_offset: f32) -> Point {
    Point::new(0.0, PHOTO_HEIGHT + anchor_offset)
}

/// Sticker rectangle in stage coordinates, as shown right now.
#[must_use]
pub fn sticker_rect(sticker: &Sticker, anchor_offset: f32) -> Rectangle {
    sticker.bounds(sticker_anchor(anchor_offset))
}

fn to_local(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl Scene<'_> {
    fn hit_targets(&self, local: Point, canvas_size: Size) -> HitTargets {
        let Some(sticker) = self.sticker else {
            return HitTargets::default();
        };
        let origin = stage_origin(canvas_size);
        let rect = sticker_rect(sticker, self.anchor_offset);
        let on_sticker = rect.contains(local - Vector::new(origin.x, origin.y));

        HitTargets {
            image: on_sticker,
            element: on_sticker,
        }
    }

    fn pointer_event(
        state: &mut SceneState,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<PointerEvent> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.finger = None;
                Some(PointerEvent::Pressed(position))
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if state.finger.is_some() || !state.gestures.is_tracking() {
                    return None;
                }
                Some(PointerEvent::Moved(to_local(*position, bounds)))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.finger.is_some() {
                    return None;
                }
                let position = cursor.position()?;
                Some(PointerEvent::Released(to_local(position, bounds)))
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                state.gestures.is_tracking().then_some(PointerEvent::Lost)
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                // Only the first finger drives the gestures.
                if state.finger.is_some() || !bounds.contains(*position) {
                    return None;
                }
                state.finger = Some(*id);
                Some(PointerEvent::Pressed(to_local(*position, bounds)))
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                (state.finger == Some(*id))
                    .then(|| PointerEvent::Moved(to_local(*position, bounds)))
            }
            iced::Event::Touch(touch::Event::FingerLifted { id, position }) => {
                if state.finger != Some(*id) {
                    return None;
                }
                state.finger = None;
                Some(PointerEvent::Released(to_local(*position, bounds)))
            }
            iced::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if state.finger != Some(*id) {
                    return None;
                }
                state.finger = None;
                Some(PointerEvent::Lost)
            }
            _ => None,
        }
    }
}

impl canvas::Program<Message> for Scene<'_> {
    type State = SceneState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let pointer = Self::pointer_event(state, event, bounds, cursor)?;
        let targets = match pointer {
            PointerEvent::Pressed(local) => self.hit_targets(local, bounds.size()),
            _ => HitTargets::default(),
        };
        let was_tracking = state.gestures.is_tracking();

        let gesture = state.gestures.handle(pointer, targets, Instant::now());

        match gesture {
            Some(gesture) => Some(Action::publish(Message::Gesture(gesture)).and_capture()),
            None if was_tracking || state.gestures.is_tracking() => {
                Some(Action::capture())
            }
            None => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let origin = stage_origin(bounds.size());

        frame.draw_image(
            Rectangle::new(origin, Size::new(PHOTO_WIDTH, PHOTO_HEIGHT)),
            canvas::Image::new(self.photo.handle.clone()),
        );

        if let Some(sticker) = self.sticker {
            let rect = sticker_rect(sticker, self.anchor_offset);
            if rect.width > 0.0 {
                frame.draw_image(
                    Rectangle::new(rect.position() + Vector::new(origin.x, origin.y), rect.size()),
                    canvas::Image::new(sticker.source().handle.clone()),
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.gestures.pan().is_active() {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(local) if self.hit_targets(local, bounds.size()).element => {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::stickers::StickerId;
    use crate::ui::sticker::{SpringConfig, StickerOptions, ToggleBasis};

    fn sticker() -> Sticker {
        Sticker::new(
            StickerId::Star,
            ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]),
            StickerOptions {
                size: 40.0,
                spring: SpringConfig::default(),
                toggle_basis: ToggleBasis::Target,
            },
        )
    }

    #[test]
    fn stage_is_centered_and_never_negative() {
        assert_eq!(
            stage_origin(Size::new(400.0, 500.0)),
            Point::new(40.0, 30.0)
        );
        assert_eq!(stage_origin(Size::new(100.0, 100.0)), Point::ORIGIN);
    }

    #[test]
    fn default_anchor_sits_ninety_points_down_the_left_edge() {
        assert_eq!(sticker_anchor(-350.0), Point::new(0.0, 90.0));
    }

    #[test]
    fn presses_hit_only_the_sticker_rectangle() {
        let photo = ImageData::from_rgba(1, 1, vec![0; 4]);
        let sticker = sticker();
        let scene = Scene {
            photo: &photo,
            sticker: Some(&sticker),
            anchor_offset: -350.0,
        };
        let canvas = Size::new(PHOTO_WIDTH, PHOTO_HEIGHT);

        assert!(scene.hit_targets(Point::new(20.0, 110.0), canvas).image);
        assert!(!scene.hit_targets(Point::new(60.0, 110.0), canvas).element);
        assert!(!scene.hit_targets(Point::new(20.0, 80.0), canvas).image);
    }

    #[test]
    fn nothing_is_hit_without_a_sticker() {
        let photo = ImageData::from_rgba(1, 1, vec![0; 4]);
        let scene = Scene {
            photo: &photo,
            sticker: None,
            anchor_offset: -350.0,
        };
        assert_eq!(
            scene.hit_targets(Point::new(10.0, 100.0), Size::new(320.0, 440.0)),
            HitTargets::default()
        );
    }
}
