// SPDX-License-Identifier: MPL-2.0
//! Bottom-sheet menu controller.
//!
//! Presents a list of selectable rows in a sheet that slides up from the
//! bottom edge. Selecting a row resolves through the exit animation and then
//! fires the selection callback; dragging the sheet away, tapping the
//! backdrop, or pressing back is a cancel and fires nothing.

use super::animation::{AnimationDriver, AnimationEvent, Timings};
use super::gesture::{DragDecision, GestureInterpreter, PanSample, SnapPolicy};
use super::store::OverlayStore;
use super::{OverlayPhase, Tone};
use crate::config::defaults::{
    MENU_CHROME_HEIGHT, MENU_ITEM_HEIGHT, MENU_MAX_LIST_HEIGHT, MENU_MAX_VISIBLE_ITEMS,
};
use std::fmt;

/// One selectable menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub tone: Tone,
}

impl MenuItem {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tone: Tone::default(),
        }
    }

    #[must_use]
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

/// Callback fired with the selected item and its index.
pub type SelectCallback = Box<dyn FnOnce(MenuItem, usize)>;

/// A single presentation request for the menu.
pub struct MenuRequest {
    pub items: Vec<MenuItem>,
    pub on_select: Option<SelectCallback>,
}

impl MenuRequest {
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            on_select: None,
        }
    }

    #[must_use]
    pub fn on_select(mut self, callback: impl FnOnce(MenuItem, usize) + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for MenuRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuRequest")
            .field("items", &self.items)
            .field("has_on_select", &self.on_select.is_some())
            .finish()
    }
}

/// Sheet height for a menu of `len` items: capped growth past
/// [`MENU_MAX_VISIBLE_ITEMS`], plus room for the grab handle.
#[must_use]
pub fn menu_sheet_height(len: usize) -> f32 {
    let list = if len > MENU_MAX_VISIBLE_ITEMS {
        MENU_MAX_LIST_HEIGHT
    } else {
        len as f32 * MENU_ITEM_HEIGHT
    };
    list + MENU_CHROME_HEIGHT
}

/// How the current presentation cycle will resolve once hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Outcome {
    #[default]
    None,
    Selection(usize),
    Cancel,
}

/// Orchestrates the menu's store, animation driver, and gesture interpreter.
pub struct MenuController {
    store: OverlayStore<Vec<MenuItem>>,
    driver: AnimationDriver,
    gesture: GestureInterpreter,
    phase: OverlayPhase,
    on_select: Option<SelectCallback>,
    outcome: Outcome,
    back_armed: bool,
}

impl MenuController {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            store: OverlayStore::new(),
            driver: AnimationDriver::new(timings),
            gesture: GestureInterpreter::new(SnapPolicy::HalfHeight),
            phase: OverlayPhase::Hidden,
            on_select: None,
            outcome: Outcome::None,
            back_armed: false,
        }
    }

    /// Opens the menu with the given request, starting the enter animation.
    ///
    /// Calling this again before the previous cycle resolves replaces the
    /// stored selection callback; the earlier one is never invoked.
    pub fn open_menu(&mut self, request: MenuRequest) {
        self.on_select = request.on_select;
        self.outcome = Outcome::None;
        self.driver
            .set_sheet_height(menu_sheet_height(request.items.len()));
        self.store.show(request.items);
        self.driver.begin_enter();
        self.phase = OverlayPhase::Presenting;
    }

    /// Resolves the cycle with the item at `index`.
    ///
    /// The callback fires only after the exit animation completes. Out of
    /// range indices and taps while not presented are ignored.
    pub fn select(&mut self, index: usize) {
        if !self.accepts_input() || index >= self.store.content().len() {
            return;
        }
        self.outcome = Outcome::Selection(index);
        self.begin_dismiss();
    }

    /// Dismisses without selecting anything (backdrop tap, drag-away).
    pub fn dismiss(&mut self) {
        if !self.accepts_input() {
            return;
        }
        self.outcome = Outcome::Cancel;
        self.begin_dismiss();
    }

    /// Handles a hardware back press. Returns `true` when consumed.
    ///
    /// The handler is armed on entering `Visible` and disarmed on leaving
    /// it, so a press while hidden has no effect.
    pub fn back_pressed(&mut self) -> bool {
        if !self.back_armed {
            return false;
        }
        self.outcome = Outcome::Cancel;
        self.begin_dismiss();
        true
    }

    /// Feeds one pan gesture sample. Gestures are accepted only while fully
    /// presented.
    pub fn pan(&mut self, sample: PanSample) {
        if self.phase != OverlayPhase::Visible {
            return;
        }
        match self.gesture.interpret(sample, self.driver.sheet_height()) {
            DragDecision::Track(offset) => self.driver.set_drag_offset(offset),
            DragDecision::SnapBack => self.driver.begin_snap_back(),
            DragDecision::Dismiss => {
                self.outcome = Outcome::Cancel;
                self.begin_dismiss();
            }
            DragDecision::None => {}
        }
    }

    /// Advances the animation clock by `dt_ms` milliseconds.
    pub fn tick(&mut self, dt_ms: f32) {
        match self.driver.tick(dt_ms) {
            Some(AnimationEvent::EnterFinished) => {
                if self.phase == OverlayPhase::Presenting {
                    self.phase = OverlayPhase::Visible;
                    self.back_armed = true;
                }
            }
            Some(AnimationEvent::ExitFinished) => self.clear_state(),
            Some(AnimationEvent::SnapBackFinished) | None => {}
        }
    }

    /// Resets all presentation state and resolves the pending callback.
    ///
    /// Idempotent: the callback reference is taken unconditionally, so a
    /// second call finds nothing left to invoke.
    pub fn clear_state(&mut self) {
        let outcome = std::mem::take(&mut self.outcome);
        let callback = self.on_select.take();
        let selected = match outcome {
            Outcome::Selection(index) => self
                .store
                .content()
                .get(index)
                .cloned()
                .map(|item| (item, index)),
            _ => None,
        };

        self.store.clear();
        self.driver.reset();
        self.back_armed = false;
        self.phase = OverlayPhase::Hidden;

        if let (Some((item, index)), Some(callback)) = (selected, callback) {
            callback(item, index);
        }
    }

    fn accepts_input(&self) -> bool {
        matches!(self.phase, OverlayPhase::Presenting | OverlayPhase::Visible)
    }

    fn begin_dismiss(&mut self) {
        self.back_armed = false;
        self.phase = OverlayPhase::Dismissing;
        self.driver.begin_exit();
    }

    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.store.is_visible()
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        self.store.content()
    }

    #[must_use]
    pub fn sheet_height(&self) -> f32 {
        self.driver.sheet_height()
    }

    #[must_use]
    pub fn translation(&self) -> f32 {
        self.driver.translation()
    }

    #[must_use]
    pub fn backdrop_opacity(&self) -> f32 {
        self.driver.opacity()
    }

    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        self.driver.drag_offset()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Registers an observer on the underlying store's visibility.
    pub fn subscribe(&mut self, observer: impl FnMut(bool) + 'static) {
        self.store.subscribe(observer);
    }
}

impl fmt::Debug for MenuController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuController")
            .field("phase", &self.phase)
            .field("items", &self.store.content().len())
            .field("back_armed", &self.back_armed)
            .finish()
    }
}
