// SPDX-License-Identifier: MPL-2.0
//! Iced view layer for the overlay controllers.
//!
//! Each view renders from a controller's state (phase, translation, opacity)
//! and emits messages the host routes back into the controller. The views
//! hold no state of their own.

pub mod alert_view;
pub mod menu_view;
pub mod theme;
pub mod toast_view;
