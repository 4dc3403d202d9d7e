// SPDX-License-Identifier: MPL-2.0
//! Headless overlay controllers: bottom-sheet menu, confirmation alert, and
//! toast notification.
//!
//! Each controller orchestrates a state store, an animation driver, and (for
//! the draggable sheets) a gesture interpreter around a shared four-phase
//! lifecycle: `Hidden → Presenting → Visible → Dismissing → Hidden`. The
//! controllers carry no rendering concerns; a host drives them with
//! `tick(dt_ms)` from its frame loop and reads back translation and opacity.
//!
//! Resolution is callback-driven. Each controller holds at most one pending
//! callback pair; a second `show` before resolution silently replaces the
//! earlier pair, and every presentation cycle funnels through one
//! `clear_state` transition that invokes at most one callback exactly once.

pub mod alert;
pub mod animation;
pub mod gesture;
pub mod menu;
pub mod registry;
pub mod store;
pub mod toast;

pub use alert::{AlertController, AlertRequest};
pub use animation::{AnimationDriver, AnimationEvent, Timings};
pub use gesture::{DragDecision, GestureInterpreter, PanPhase, PanSample, SnapPolicy};
pub use menu::{MenuController, MenuItem, MenuRequest};
pub use registry::OverlayRegistry;
pub use store::OverlayStore;
pub use toast::{ToastController, ToastRequest, ToastTone};

/// Lifecycle phase shared by all overlay controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPhase {
    /// Not presented; no content, no pending callbacks.
    #[default]
    Hidden,
    /// The enter animation is running; content is already set.
    Presenting,
    /// Fully presented and accepting input.
    Visible,
    /// The exit animation is running.
    Dismissing,
}

impl OverlayPhase {
    /// Whether the overlay occupies the screen in this phase.
    #[must_use]
    pub fn is_presented(self) -> bool {
        !matches!(self, OverlayPhase::Hidden)
    }
}

/// Emphasis tone attached to menu rows and text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Dark,
    Light,
    Primary,
    Secondary,
    Error,
}
