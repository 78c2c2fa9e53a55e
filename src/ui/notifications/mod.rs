// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! (photo loaded, picture saved, settings unreadable) without blocking the
//! editor.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering
//!
//! Toast duration: 3s for success/info, 5s for warnings, manual dismiss for
//! errors. At most three toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
