// SPDX-License-Identifier: MPL-2.0
//! `iced_sheets` provides bottom-sheet menus, confirmation alerts, and toast
//! notifications for Iced applications.
//!
//! The overlay logic is fully headless: controllers in [`overlay`] expose a
//! `tick(dt_ms)`-driven state machine with drag-to-dismiss gesture handling,
//! and the [`ui`] module renders them with Iced widgets. A demo application
//! lives in [`app`].

#![doc(html_root_url = "https://docs.rs/iced_sheets/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod overlay;
pub mod ui;
