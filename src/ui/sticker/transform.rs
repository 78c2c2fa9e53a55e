// SPDX-License-Identifier: MPL-2.0
//! Visual state of one placed sticker.
//!
//! The sticker owns two independent quantities: its edge length (`scale`,
//! eased with a spring) and its translation (applied directly). Each one is
//! written by exactly one event path:
//!
//! - [`StickerTransform::apply_tap`] folds double-tap events into the scale,
//! - [`StickerTransform::apply_pan`] folds pan deltas into the translation.
//!
//! Neither path touches the other quantity.

use super::spring::{Spring, SpringConfig};
use iced::Vector;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Smallest edge length a halving can produce.
pub const MIN_SCALE_PX: f32 = 1.0;

/// Which of the two sizes the sticker is heading to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    #[default]
    Normal,
    Enlarged,
}

impl ScaleMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ScaleMode::Normal => ScaleMode::Enlarged,
            ScaleMode::Enlarged => ScaleMode::Normal,
        }
    }
}

/// Value a double-tap looks at to pick the next size.
///
/// `Target` follows the explicit [`ScaleMode`] and doubles/halves the value
/// the spring is heading to. `Animated` reproduces the comparison rule
/// against the live, possibly still easing, value: anything other than twice
/// the nominal size is doubled, exactly twice the nominal size is halved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleBasis {
    #[default]
    Target,
    Animated,
}

/// Halves a size, rounding to the nearest whole pixel.
#[must_use]
pub fn halve(size: f32) -> f32 {
    (size / 2.0).round().max(MIN_SCALE_PX)
}

/// Scale and translation of one mounted sticker.
#[derive(Debug, Clone)]
pub struct StickerTransform {
    nominal: f32,
    mode: ScaleMode,
    basis: ToggleBasis,
    scale: Spring,
    translation: Vector,
    mounted: bool,
}

impl StickerTransform {
    /// Mounts a sticker of the given nominal edge length at the origin.
    #[must_use]
    pub fn new(nominal: f32, spring: SpringConfig, basis: ToggleBasis) -> Self {
        Self {
            nominal,
            mode: ScaleMode::Normal,
            basis,
            scale: Spring::new(nominal, spring),
            translation: Vector::ZERO,
            mounted: true,
        }
    }

    /// Folds a recognized double-tap into the scale.
    ///
    /// Returns `false` when the sticker is no longer mounted.
    pub fn apply_tap(&mut self) -> bool {
        if !self.mounted {
            return false;
        }

        let next = match self.basis {
            ToggleBasis::Target => {
                let current = self.scale.target();
                let next = match self.mode {
                    ScaleMode::Normal => current * 2.0,
                    ScaleMode::Enlarged => halve(current),
                };
                self.mode = self.mode.toggled();
                next
            }
            ToggleBasis::Animated => {
                let current = self.scale.value();
                #[allow(clippy::float_cmp)]
                let exactly_enlarged = current == self.nominal * 2.0;
                if exactly_enlarged {
                    self.mode = ScaleMode::Normal;
                    halve(current)
                } else {
                    self.mode = ScaleMode::Enlarged;
                    current * 2.0
                }
            }
        };

        self.scale.set_target(next);
        true
    }

    /// Folds one pan-change delta into the translation.
    ///
    /// Deltas are relative to the previous event, so they are summed in
    /// delivery order. Returns `false` when the sticker is no longer mounted.
    pub fn apply_pan(&mut self, delta: Vector) -> bool {
        if !self.mounted {
            return false;
        }
        self.translation = self.translation + delta;
        true
    }

    /// Advances the scale easing by one frame.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.mounted {
            self.scale.step(elapsed);
        }
    }

    /// Unmounts the sticker. Pending animation is dropped and every later
    /// event becomes a no-op. Calling it twice is harmless.
    pub fn teardown(&mut self) {
        self.scale.halt();
        self.mounted = false;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether frames still need to be driven.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.mounted && !self.scale.is_settled()
    }

    /// Edge length as currently displayed (eased).
    #[must_use]
    pub fn displayed_size(&self) -> f32 {
        self.scale.value()
    }

    /// Edge length the sticker is easing toward.
    #[must_use]
    pub fn target_size(&self) -> f32 {
        self.scale.target()
    }

    #[must_use]
    pub fn translation(&self) -> Vector {
        self.translation
    }

    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn sticker(nominal: f32) -> StickerTransform {
        StickerTransform::new(nominal, SpringConfig::default(), ToggleBasis::Target)
    }

    fn settle(transform: &mut StickerTransform) {
        for _ in 0..600 {
            transform.tick(FRAME);
        }
    }

    #[test]
    fn new_sticker_starts_at_nominal_size_and_origin() {
        let transform = sticker(40.0);
        assert_eq!(transform.displayed_size(), 40.0);
        assert_eq!(transform.target_size(), 40.0);
        assert_eq!(transform.translation(), Vector::ZERO);
        assert_eq!(transform.mode(), ScaleMode::Normal);
        assert!(!transform.is_animating());
    }

    #[test]
    fn double_tap_toggles_between_nominal_and_double() {
        let mut transform = sticker(40.0);

        transform.apply_tap();
        assert_eq!(transform.target_size(), 80.0);
        assert_eq!(transform.mode(), ScaleMode::Enlarged);

        transform.apply_tap();
        assert_eq!(transform.target_size(), 40.0);
        assert_eq!(transform.mode(), ScaleMode::Normal);
    }

    #[test]
    fn toggle_round_trips_odd_nominal_sizes() {
        for nominal in [3.0, 17.0, 41.0, 99.0] {
            let mut transform = sticker(nominal);
            transform.apply_tap();
            transform.apply_tap();
            assert_eq!(transform.target_size(), nominal);
        }
    }

    #[test]
    fn tap_is_eased_not_snapped() {
        let mut transform = sticker(40.0);
        transform.apply_tap();

        assert_eq!(transform.displayed_size(), 40.0);
        assert!(transform.is_animating());

        transform.tick(FRAME);
        assert!(transform.displayed_size() > 40.0);

        settle(&mut transform);
        assert_eq!(transform.displayed_size(), 80.0);
        assert!(!transform.is_animating());
    }

    #[test]
    fn quick_double_toggle_uses_mode_not_live_value() {
        let mut transform = sticker(40.0);
        transform.apply_tap();
        transform.tick(FRAME);
        // Mid-flight: live value is somewhere between 40 and 80.
        transform.apply_tap();

        assert_eq!(transform.target_size(), 40.0);
        settle(&mut transform);
        assert_eq!(transform.displayed_size(), 40.0);
    }

    #[test]
    fn animated_basis_doubles_when_not_exactly_enlarged() {
        let mut transform =
            StickerTransform::new(40.0, SpringConfig::default(), ToggleBasis::Animated);
        transform.apply_tap();
        transform.tick(FRAME);
        let live = transform.displayed_size();

        // Live value is not 80 yet, so the comparison rule doubles it again.
        transform.apply_tap();
        assert_eq!(transform.target_size(), live * 2.0);
        assert_eq!(transform.mode(), ScaleMode::Enlarged);
    }

    #[test]
    fn animated_basis_round_trips_once_settled() {
        let mut transform =
            StickerTransform::new(40.0, SpringConfig::default(), ToggleBasis::Animated);
        transform.apply_tap();
        settle(&mut transform);
        transform.apply_tap();
        assert_eq!(transform.target_size(), 40.0);
        assert_eq!(transform.mode(), ScaleMode::Normal);
    }

    #[test]
    fn pan_deltas_accumulate_regardless_of_chunking() {
        let deltas = [
            Vector::new(5.0, 0.0),
            Vector::new(3.0, 2.0),
            Vector::new(-1.0, -1.0),
            Vector::new(12.5, -4.0),
        ];

        let mut one_by_one = sticker(40.0);
        for delta in deltas {
            one_by_one.apply_pan(delta);
        }

        let mut chunked = sticker(40.0);
        chunked.apply_pan(deltas[0] + deltas[1]);
        chunked.apply_pan(deltas[2] + deltas[3]);

        let expected = Vector::new(19.5, -3.0);
        assert_eq!(one_by_one.translation(), expected);
        assert_eq!(chunked.translation(), expected);
    }

    #[test]
    fn translation_is_unbounded() {
        let mut transform = sticker(40.0);
        transform.apply_pan(Vector::new(-5000.0, 9000.0));
        assert_eq!(transform.translation(), Vector::new(-5000.0, 9000.0));
    }

    #[test]
    fn taps_never_touch_translation_and_pans_never_touch_scale() {
        let mut transform = sticker(40.0);
        transform.apply_pan(Vector::new(7.0, 1.0));

        transform.apply_tap();
        assert_eq!(transform.translation(), Vector::new(7.0, 1.0));

        transform.apply_pan(Vector::new(10.0, 10.0));
        assert_eq!(transform.target_size(), 80.0);
        assert_eq!(transform.mode(), ScaleMode::Enlarged);
    }

    #[test]
    fn halving_never_collapses_to_zero() {
        assert_eq!(halve(2.0), 1.0);
        assert_eq!(halve(3.0), 2.0);
        assert_eq!(halve(1.0), 1.0);
        assert_eq!(halve(0.4), MIN_SCALE_PX);

        let mut size = 1001.0_f32;
        for _ in 0..20 {
            size = halve(size);
            assert!(size >= MIN_SCALE_PX);
        }
    }

    #[test]
    fn events_after_teardown_are_ignored() {
        let mut transform = sticker(40.0);
        transform.apply_tap();
        transform.apply_pan(Vector::new(3.0, 4.0));
        transform.teardown();

        let size = transform.displayed_size();
        assert!(!transform.apply_tap());
        assert!(!transform.apply_pan(Vector::new(100.0, 100.0)));
        transform.tick(FRAME);

        assert_eq!(transform.displayed_size(), size);
        assert_eq!(transform.translation(), Vector::new(3.0, 4.0));
        assert!(!transform.is_animating());

        transform.teardown();
        assert!(!transform.is_mounted());
    }

    #[test]
    fn scenario_tap_pan_tap() {
        let mut transform = sticker(40.0);

        transform.apply_tap();
        assert_eq!(transform.target_size(), 80.0);

        for delta in [
            Vector::new(5.0, 0.0),
            Vector::new(3.0, 2.0),
            Vector::new(-1.0, -1.0),
        ] {
            transform.apply_pan(delta);
        }
        assert_eq!(transform.translation(), Vector::new(7.0, 1.0));

        transform.apply_tap();
        assert_eq!(transform.target_size(), 40.0);
        assert_eq!(transform.translation(), Vector::new(7.0, 1.0));

        settle(&mut transform);
        assert_eq!(transform.displayed_size(), 40.0);
    }
}
