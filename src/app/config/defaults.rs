// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Stage**: Size of the base photo on screen
//! - **Sticker**: Nominal size and anchor of a placed sticker
//! - **Spring**: Physical constants of the size easing
//! - **Export**: Composite output size

// ==========================================================================
// Stage Defaults
// ==========================================================================

/// Width of the base photo on the editor stage.
pub const PHOTO_WIDTH: f32 = 320.0;

/// Height of the base photo on the editor stage.
pub const PHOTO_HEIGHT: f32 = 440.0;

// ==========================================================================
// Sticker Defaults
// ==========================================================================

/// Nominal sticker edge length in pixels.
pub const DEFAULT_STICKER_SIZE: f32 = 40.0;

/// Smallest sticker edge length accepted from the config file.
pub const MIN_STICKER_SIZE: f32 = 2.0;

/// Largest sticker edge length accepted from the config file.
pub const MAX_STICKER_SIZE: f32 = 160.0;

/// Vertical offset of the sticker's layout origin, measured from the bottom
/// edge of the base photo. Negative values move it up over the photo.
pub const DEFAULT_ANCHOR_OFFSET: f32 = -350.0;

/// Lower bound for the anchor offset (top edge of the photo).
pub const MIN_ANCHOR_OFFSET: f32 = -PHOTO_HEIGHT;

/// Upper bound for the anchor offset (bottom edge of the photo).
pub const MAX_ANCHOR_OFFSET: f32 = 0.0;

// ==========================================================================
// Spring Defaults
// ==========================================================================

/// Spring stiffness (force per pixel of displacement).
pub const DEFAULT_SPRING_STIFFNESS: f32 = 100.0;

/// Spring damping (force per pixel/second of velocity).
pub const DEFAULT_SPRING_DAMPING: f32 = 10.0;

/// Mass attached to the spring.
pub const DEFAULT_SPRING_MASS: f32 = 1.0;

// Every combination inside these bounds settles within a few seconds: the
// slowest underdamped decay rate is MIN_DAMPING / (2 * MAX_MASS) and the
// slowest overdamped one is roughly MIN_STIFFNESS / MAX_DAMPING, both >= 1/s.
pub const MIN_SPRING_STIFFNESS: f32 = 40.0;
pub const MAX_SPRING_STIFFNESS: f32 = 1000.0;
pub const MIN_SPRING_DAMPING: f32 = 4.0;
pub const MAX_SPRING_DAMPING: f32 = 40.0;
pub const MIN_SPRING_MASS: f32 = 0.5;
pub const MAX_SPRING_MASS: f32 = 2.0;

// ==========================================================================
// Export Defaults
// ==========================================================================

/// Height in pixels of the exported composite picture.
pub const DEFAULT_EXPORT_HEIGHT: u32 = 440;

/// Minimum export height in pixels.
pub const MIN_EXPORT_HEIGHT: u32 = 64;

/// Maximum export height in pixels.
pub const MAX_EXPORT_HEIGHT: u32 = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(PHOTO_WIDTH > 0.0);
    assert!(PHOTO_HEIGHT > 0.0);

    // Sticker validation
    assert!(MIN_STICKER_SIZE > 1.0);
    assert!(MAX_STICKER_SIZE > MIN_STICKER_SIZE);
    assert!(DEFAULT_STICKER_SIZE >= MIN_STICKER_SIZE);
    assert!(DEFAULT_STICKER_SIZE <= MAX_STICKER_SIZE);
    assert!(DEFAULT_ANCHOR_OFFSET >= MIN_ANCHOR_OFFSET);
    assert!(DEFAULT_ANCHOR_OFFSET <= MAX_ANCHOR_OFFSET);

    // Spring validation
    assert!(MIN_SPRING_STIFFNESS > 0.0);
    assert!(DEFAULT_SPRING_STIFFNESS >= MIN_SPRING_STIFFNESS);
    assert!(DEFAULT_SPRING_STIFFNESS <= MAX_SPRING_STIFFNESS);
    assert!(MIN_SPRING_DAMPING > 0.0);
    assert!(DEFAULT_SPRING_DAMPING >= MIN_SPRING_DAMPING);
    assert!(DEFAULT_SPRING_DAMPING <= MAX_SPRING_DAMPING);
    assert!(MIN_SPRING_MASS > 0.0);
    assert!(MIN_SPRING_DAMPING >= 2.0 * MAX_SPRING_MASS);
    assert!(MIN_SPRING_STIFFNESS >= MAX_SPRING_DAMPING);
    assert!(DEFAULT_SPRING_MASS >= MIN_SPRING_MASS);
    assert!(DEFAULT_SPRING_MASS <= MAX_SPRING_MASS);

    // Export validation
    assert!(MIN_EXPORT_HEIGHT > 0);
    assert!(MAX_EXPORT_HEIGHT >= MIN_EXPORT_HEIGHT);
    assert!(DEFAULT_EXPORT_HEIGHT >= MIN_EXPORT_HEIGHT);
    assert!(DEFAULT_EXPORT_HEIGHT <= MAX_EXPORT_HEIGHT);
};
