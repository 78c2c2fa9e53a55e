// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`editor`] - Base photo, sticker placement and export
//! - [`about`] - Opel Manta notes and application version
//!
//! # Shared Infrastructure
//!
//! - [`sticker`] - Interactive sticker: gestures, spring, transform, canvas
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation tabs and preference pickers
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod design_tokens;
pub mod editor;
pub mod navbar;
pub mod notifications;
pub mod sticker;
pub mod styles;
pub mod theming;
