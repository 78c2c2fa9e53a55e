// SPDX-License-Identifier: MPL-2.0
//! Gesture recognition over raw pointer input.
//!
//! Two recognizers run side by side on the same pointer stream and never
//! preempt each other:
//!
//! - [`DoubleTapRecognizer`] emits [`GestureEvent::DoubleTap`] on the release
//!   that completes a second quick, still tap.
//! - [`PanRecognizer`] emits [`GestureEvent::PanChanged`] with the movement
//!   since the previous event, once the pointer travelled past the
//!   activation distance.
//!
//! A tap never moves far enough to activate the pan, and a pan always moves
//! too far to count as a tap, so feeding both every event cannot make one
//! swallow the other.

use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Maximum travel between press and release for a tap.
pub const TAP_SLOP: f32 = 10.0;

/// Maximum hold time for a tap.
pub const TAP_MAX_DURATION: Duration = Duration::from_millis(500);

/// Maximum delay between the two taps of a double-tap.
pub const DOUBLE_TAP_MAX_DELAY: Duration = Duration::from_millis(350);

/// Maximum distance between the two taps of a double-tap.
pub const DOUBLE_TAP_MAX_DISTANCE: f32 = 20.0;

/// Travel from the press point after which a pan becomes active.
pub const PAN_ACTIVATION_DISTANCE: f32 = 10.0;

/// Pointer input, already reduced to a single primary pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Point),
    Moved(Point),
    Released(Point),
    /// Pointer left the surface or the touch was lost.
    Lost,
}

/// Logical gestures delivered to the sticker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    DoubleTap,
    PanChanged(Vector),
}

/// Lifecycle shared by both recognizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecognizerState {
    #[default]
    Idle,
    Recognizing,
    Active,
    Ended,
    Cancelled,
}

/// Which regions a press landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitTargets {
    /// The inner image, listened to by the tap recognizer.
    pub image: bool,
    /// The outer element, listened to by the pan recognizer.
    pub element: bool,
}

fn distance(a: Point, b: Point) -> f32 {
    a.distance(b)
}

#[derive(Debug, Clone, Default)]
pub struct DoubleTapRecognizer {
    state: RecognizerState,
    press: Option<(Point, Instant)>,
    last_tap: Option<(Point, Instant)>,
}

impl DoubleTapRecognizer {
    #[must_use]
    pub fn state(&self) -> RecognizerState {
        self.state
    }

    /// Whether a press is currently held on the image.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        hit: bool,
        now: Instant,
    ) -> Option<GestureEvent> {
        let first_tap_expired = self
            .last_tap
            .is_some_and(|(_, when)| now.duration_since(when) > DOUBLE_TAP_MAX_DELAY);
        if self.press.is_none() && first_tap_expired {
            self.reset(RecognizerState::Idle);
        }

        match event {
            PointerEvent::Pressed(position) => {
                if !hit {
                    self.reset(RecognizerState::Idle);
                    return None;
                }
                let waiting_for_second = self.last_tap.is_some_and(|(at, when)| {
                    now.duration_since(when) <= DOUBLE_TAP_MAX_DELAY
                        && distance(at, position) <= DOUBLE_TAP_MAX_DISTANCE
                });
                if !waiting_for_second {
                    self.last_tap = None;
                }
                self.press = Some((position, now));
                self.state = RecognizerState::Recognizing;
                None
            }
            PointerEvent::Moved(position) => {
                if let Some((origin, _)) = self.press {
                    if distance(origin, position) > TAP_SLOP {
                        self.reset(RecognizerState::Cancelled);
                    }
                }
                None
            }
            PointerEvent::Released(position) => {
                let (origin, pressed_at) = self.press.take()?;
                let is_tap = now.duration_since(pressed_at) <= TAP_MAX_DURATION
                    && distance(origin, position) <= TAP_SLOP;
                if !is_tap {
                    self.reset(RecognizerState::Cancelled);
                    return None;
                }

                if self.last_tap.take().is_some() {
                    self.state = RecognizerState::Ended;
                    Some(GestureEvent::DoubleTap)
                } else {
                    self.last_tap = Some((position, now));
                    self.state = RecognizerState::Recognizing;
                    None
                }
            }
            PointerEvent::Lost => {
                if self.press.is_some() {
                    self.reset(RecognizerState::Cancelled);
                }
                None
            }
        }
    }

    fn reset(&mut self, state: RecognizerState) {
        self.press = None;
        self.last_tap = None;
        self.state = state;
    }
}

#[derive(Debug, Clone, Default)]
pub struct PanRecognizer {
    state: RecognizerState,
    origin: Option<Point>,
    last: Option<Point>,
}

impl PanRecognizer {
    #[must_use]
    pub fn state(&self) -> RecognizerState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == RecognizerState::Active
    }

    pub fn handle(&mut self, event: PointerEvent, hit: bool) -> Option<GestureEvent> {
        match event {
            PointerEvent::Pressed(position) => {
                if hit {
                    self.origin = Some(position);
                    self.last = Some(position);
                    self.state = RecognizerState::Recognizing;
                } else {
                    self.finish(RecognizerState::Idle);
                }
                None
            }
            PointerEvent::Moved(position) => match self.state {
                RecognizerState::Recognizing => {
                    let origin = self.origin?;
                    if distance(origin, position) <= PAN_ACTIVATION_DISTANCE {
                        return None;
                    }
                    self.state = RecognizerState::Active;
                    self.last = Some(position);
                    Some(GestureEvent::PanChanged(position - origin))
                }
                RecognizerState::Active => {
                    let last = self.last.replace(position)?;
                    let delta = position - last;
                    (delta != Vector::ZERO).then_some(GestureEvent::PanChanged(delta))
                }
                _ => None,
            },
            PointerEvent::Released(_) => {
                let state = if self.is_active() {
                    RecognizerState::Ended
                } else {
                    RecognizerState::Idle
                };
                self.finish(state);
                None
            }
            PointerEvent::Lost => {
                if matches!(
                    self.state,
                    RecognizerState::Recognizing | RecognizerState::Active
                ) {
                    self.finish(RecognizerState::Cancelled);
                }
                None
            }
        }
    }

    fn finish(&mut self, state: RecognizerState) {
        self.origin = None;
        self.last = None;
        self.state = state;
    }
}

/// Both recognizers, armed together.
#[derive(Debug, Clone, Default)]
pub struct GestureLayer {
    tap: DoubleTapRecognizer,
    pan: PanRecognizer,
}

impl GestureLayer {
    /// Feeds one pointer event to both recognizers.
    ///
    /// The tap side only emits on release and the pan side only on move, so
    /// a single pointer event yields at most one gesture.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        targets: HitTargets,
        now: Instant,
    ) -> Option<GestureEvent> {
        let tap = self.tap.handle(event, targets.image, now);
        let pan = self.pan.handle(event, targets.element);
        tap.or(pan)
    }

    /// Whether the layer is tracking a pointer and should capture its events.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tap.is_pressed()
            || matches!(
                self.pan.state(),
                RecognizerState::Recognizing | RecognizerState::Active
            )
    }

    #[must_use]
    pub fn tap(&self) -> &DoubleTapRecognizer {
        &self.tap
    }

    #[must_use]
    pub fn pan(&self) -> &PanRecognizer {
        &self.pan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIT: HitTargets = HitTargets {
        image: true,
        element: true,
    };
    const MISS: HitTargets = HitTargets {
        image: false,
        element: false,
    };

    fn at(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn click(layer: &mut GestureLayer, p: Point, now: Instant) -> Option<GestureEvent> {
        layer.handle(PointerEvent::Pressed(p), HIT, now);
        layer.handle(PointerEvent::Released(p), MISS, now + Duration::from_millis(40))
    }

    #[test]
    fn two_quick_taps_make_a_double_tap() {
        let mut layer = GestureLayer::default();
        let t0 = Instant::now();

        assert_eq!(click(&mut layer, at(10.0, 10.0), t0), None);
        let second = click(&mut layer, at(12.0, 11.0), t0 + Duration::from_millis(150));

        assert_eq!(second, Some(GestureEvent::DoubleTap));
        assert_eq!(layer.tap().state(), RecognizerState::Ended);
    }

    #[test]
    fn slow_taps_do_not_combine() {
        let mut layer = GestureLayer::default();
        let t0 = Instant::now();

        click(&mut layer, at(10.0, 10.0), t0);
        let second = click(&mut layer, at(10.0, 10.0), t0 + Duration::from_millis(900));
        assert_eq!(second, None);
    }

    #[test]
    fn third_tap_starts_a_new_sequence() {
        let mut layer = GestureLayer::default();
        let t0 = Instant::now();

        click(&mut layer, at(0.0, 0.0), t0);
        assert_eq!(
            click(&mut layer, at(0.0, 0.0), t0 + Duration::from_millis(100)),
            Some(GestureEvent::DoubleTap)
        );
        assert_eq!(
            click(&mut layer, at(0.0, 0.0), t0 + Duration::from_millis(200)),
            None
        );
    }

    #[test]
    fn taps_outside_the_image_are_ignored() {
        let mut layer = GestureLayer::default();
        let t0 = Instant::now();
        let p = at(0.0, 0.0);

        for offset in [0, 100] {
            let now = t0 + Duration::from_millis(offset);
            layer.handle(PointerEvent::Pressed(p), MISS, now);
            let result = layer.handle(PointerEvent::Released(p), MISS, now);
            assert_eq!(result, None);
        }
    }

    #[test]
    fn pan_activates_past_threshold_and_reports_incremental_deltas() {
        let mut layer = GestureLayer::default();
        let now = Instant::now();

        layer.handle(PointerEvent::Pressed(at(100.0, 100.0)), HIT, now);
        assert_eq!(
            layer.handle(PointerEvent::Moved(at(104.0, 100.0)), MISS, now),
            None
        );
        assert_eq!(
            layer.handle(PointerEvent::Moved(at(115.0, 100.0)), MISS, now),
            Some(GestureEvent::PanChanged(Vector::new(15.0, 0.0)))
        );
        assert!(layer.pan().is_active());
        assert_eq!(
            layer.handle(PointerEvent::Moved(at(118.0, 102.0)), MISS, now),
            Some(GestureEvent::PanChanged(Vector::new(3.0, 2.0)))
        );
        assert_eq!(
            layer.handle(PointerEvent::Moved(at(117.0, 101.0)), MISS, now),
            Some(GestureEvent::PanChanged(Vector::new(-1.0, -1.0)))
        );

        layer.handle(PointerEvent::Released(at(117.0, 101.0)), MISS, now);
        assert_eq!(layer.pan().state(), RecognizerState::Ended);
    }

    #[test]
    fn pan_deltas_sum_to_total_travel() {
        let mut layer = GestureLayer::default();
        let now = Instant::now();
        let start = at(50.0, 50.0);
        layer.handle(PointerEvent::Pressed(start), HIT, now);

        let mut total = Vector::ZERO;
        for step in 1..=20u8 {
            let p = at(50.0 + f32::from(step) * 3.0, 50.0 - f32::from(step));
            if let Some(GestureEvent::PanChanged(delta)) =
                layer.handle(PointerEvent::Moved(p), MISS, now)
            {
                total = total + delta;
            }
        }
        assert_eq!(total, Vector::new(60.0, -20.0));
    }

    #[test]
    fn a_pan_is_never_a_tap() {
        let mut layer = GestureLayer::default();
        let t0 = Instant::now();

        click(&mut layer, at(0.0, 0.0), t0);
        let t1 = t0 + Duration::from_millis(100);
        layer.handle(PointerEvent::Pressed(at(0.0, 0.0)), HIT, t1);
        layer.handle(PointerEvent::Moved(at(30.0, 0.0)), MISS, t1);
        let released = layer.handle(PointerEvent::Released(at(30.0, 0.0)), MISS, t1);

        assert_eq!(released, None);
        assert_eq!(layer.tap().state(), RecognizerState::Cancelled);
    }

    #[test]
    fn a_tap_never_activates_the_pan() {
        let mut layer = GestureLayer::default();
        let now = Instant::now();

        layer.handle(PointerEvent::Pressed(at(0.0, 0.0)), HIT, now);
        assert_eq!(
            layer.handle(PointerEvent::Moved(at(3.0, 2.0)), MISS, now),
            None
        );
        layer.handle(PointerEvent::Released(at(3.0, 2.0)), MISS, now);
        assert_eq!(layer.pan().state(), RecognizerState::Idle);
    }

    #[test]
    fn double_tap_is_recognized_right_after_a_pan() {
        let mut layer = GestureLayer::default();
        let t0 = Instant::now();

        layer.handle(PointerEvent::Pressed(at(0.0, 0.0)), HIT, t0);
        layer.handle(PointerEvent::Moved(at(40.0, 40.0)), MISS, t0);
        layer.handle(PointerEvent::Released(at(40.0, 40.0)), MISS, t0);

        let t1 = t0 + Duration::from_millis(50);
        click(&mut layer, at(40.0, 40.0), t1);
        assert_eq!(
            click(&mut layer, at(40.0, 40.0), t1 + Duration::from_millis(120)),
            Some(GestureEvent::DoubleTap)
        );
    }

    #[test]
    fn released_single_tap_does_not_hold_the_pointer() {
        let mut layer = GestureLayer::default();
        let t0 = Instant::now();

        assert_eq!(click(&mut layer, at(10.0, 10.0), t0), None);
        assert_eq!(layer.tap().state(), RecognizerState::Recognizing);
        assert!(!layer.is_tracking());

        // Leaving the surface between the two taps keeps the first one.
        layer.handle(PointerEvent::Lost, MISS, t0 + Duration::from_millis(60));
        assert_eq!(layer.tap().state(), RecognizerState::Recognizing);
        assert_eq!(
            click(&mut layer, at(10.0, 10.0), t0 + Duration::from_millis(150)),
            Some(GestureEvent::DoubleTap)
        );
    }

    #[test]
    fn pending_first_tap_expires_after_the_delay() {
        let mut layer = GestureLayer::default();
        let t0 = Instant::now();

        click(&mut layer, at(10.0, 10.0), t0);
        let late = t0 + DOUBLE_TAP_MAX_DELAY + Duration::from_millis(100);
        layer.handle(PointerEvent::Moved(at(200.0, 200.0)), MISS, late);

        assert_eq!(layer.tap().state(), RecognizerState::Idle);
        layer.handle(PointerEvent::Lost, MISS, late);
        assert_eq!(layer.tap().state(), RecognizerState::Idle);
    }

    #[test]
    fn lost_pointer_cancels_active_pan() {
        let mut layer = GestureLayer::default();
        let now = Instant::now();

        layer.handle(PointerEvent::Pressed(at(0.0, 0.0)), HIT, now);
        layer.handle(PointerEvent::Moved(at(50.0, 0.0)), MISS, now);
        assert!(layer.is_tracking());

        layer.handle(PointerEvent::Lost, MISS, now);
        assert_eq!(layer.pan().state(), RecognizerState::Cancelled);
        assert!(!layer.is_tracking());
        assert_eq!(
            layer.handle(PointerEvent::Moved(at(80.0, 0.0)), MISS, now),
            None
        );
    }
}
