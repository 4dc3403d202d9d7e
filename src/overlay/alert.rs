// SPDX-License-Identifier: MPL-2.0
//! Bottom-sheet confirmation alert controller.
//!
//! Presents a title, an optional description, and a cancel/confirm button
//! pair. Exactly one of the confirm or cancel callbacks fires per cycle, and
//! only after the exit animation completes. Drag-away, backdrop tap, and the
//! hardware back press all count as cancel. The sheet height is measured at
//! layout time and reported back via [`AlertController::set_sheet_height`],
//! so release decisions use the real rendered height.

use super::animation::{AnimationDriver, AnimationEvent, Timings};
use super::gesture::{DragDecision, GestureInterpreter, PanSample, SnapPolicy};
use super::store::OverlayStore;
use super::OverlayPhase;
use std::fmt;

const DEFAULT_CANCEL_TEXT: &str = "Cancel";
const DEFAULT_CONFIRM_TEXT: &str = "Confirm";

/// Resolution callback taking no arguments.
pub type ResolveCallback = Box<dyn FnOnce()>;

/// Text content of a presented alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertContent {
    pub title: String,
    pub description: Option<String>,
    pub cancel_text: String,
    pub confirm_text: String,
}

impl Default for AlertContent {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: None,
            cancel_text: DEFAULT_CANCEL_TEXT.to_string(),
            confirm_text: DEFAULT_CONFIRM_TEXT.to_string(),
        }
    }
}

/// A single presentation request for the alert.
pub struct AlertRequest {
    pub title: String,
    pub description: Option<String>,
    pub cancel_text: Option<String>,
    pub confirm_text: Option<String>,
    pub on_confirm: Option<ResolveCallback>,
    pub on_cancel: Option<ResolveCallback>,
}

impl AlertRequest {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            cancel_text: None,
            confirm_text: None,
            on_confirm: None,
            on_cancel: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn on_confirm(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    fn into_content(self) -> (AlertContent, Option<ResolveCallback>, Option<ResolveCallback>) {
        let content = AlertContent {
            title: self.title,
            description: self.description,
            cancel_text: self
                .cancel_text
                .unwrap_or_else(|| DEFAULT_CANCEL_TEXT.to_string()),
            confirm_text: self
                .confirm_text
                .unwrap_or_else(|| DEFAULT_CONFIRM_TEXT.to_string()),
        };
        (content, self.on_confirm, self.on_cancel)
    }
}

impl fmt::Debug for AlertRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertRequest")
            .field("title", &self.title)
            .field("has_on_confirm", &self.on_confirm.is_some())
            .field("has_on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Outcome {
    #[default]
    None,
    Confirmed,
    Cancelled,
}

/// Orchestrates the alert's store, animation driver, and gesture
/// interpreter. Release decisions use the full ballistic projection.
pub struct AlertController {
    store: OverlayStore<AlertContent>,
    driver: AnimationDriver,
    gesture: GestureInterpreter,
    phase: OverlayPhase,
    on_confirm: Option<ResolveCallback>,
    on_cancel: Option<ResolveCallback>,
    outcome: Outcome,
    back_armed: bool,
}

impl AlertController {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            store: OverlayStore::new(),
            driver: AnimationDriver::new(timings),
            gesture: GestureInterpreter::new(SnapPolicy::Projection),
            phase: OverlayPhase::Hidden,
            on_confirm: None,
            on_cancel: None,
            outcome: Outcome::None,
            back_armed: false,
        }
    }

    /// Shows the alert, starting the enter animation.
    ///
    /// Calling this again before the previous cycle resolves replaces both
    /// stored callbacks; the earlier pair is never invoked.
    pub fn show(&mut self, request: AlertRequest) {
        let (content, on_confirm, on_cancel) = request.into_content();
        self.on_confirm = on_confirm;
        self.on_cancel = on_cancel;
        self.outcome = Outcome::None;
        self.store.show(content);
        self.driver.begin_enter();
        self.phase = OverlayPhase::Presenting;
    }

    /// Reports the rendered sheet height, used for translation and release
    /// decisions. The first report per cycle wins.
    pub fn set_sheet_height(&mut self, height: f32) {
        if self.driver.sheet_height() == 0.0 {
            self.driver.set_sheet_height(height);
        }
    }

    /// Resolves the cycle as confirmed; the callback fires after exit.
    pub fn confirm(&mut self) {
        if !self.accepts_input() {
            return;
        }
        self.outcome = Outcome::Confirmed;
        self.begin_dismiss();
    }

    /// Resolves the cycle as cancelled; the callback fires after exit.
    pub fn cancel(&mut self) {
        if !self.accepts_input() {
            return;
        }
        self.outcome = Outcome::Cancelled;
        self.begin_dismiss();
    }

    /// Handles a hardware back press as a cancel. Returns `true` when
    /// consumed; a press while hidden has no effect.
    pub fn back_pressed(&mut self) -> bool {
        if !self.back_armed {
            return false;
        }
        self.outcome = Outcome::Cancelled;
        self.begin_dismiss();
        true
    }

    /// Feeds one pan gesture sample. A committed drag-dismiss counts as
    /// cancel.
    pub fn pan(&mut self, sample: PanSample) {
        if self.phase != OverlayPhase::Visible {
            return;
        }
        match self.gesture.interpret(sample, self.driver.sheet_height()) {
            DragDecision::Track(offset) => self.driver.set_drag_offset(offset),
            DragDecision::SnapBack => self.driver.begin_snap_back(),
            DragDecision::Dismiss => {
                self.outcome = Outcome::Cancelled;
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

    /// Resets all presentation state and invokes at most one of the pending
    /// callbacks. Both references are taken unconditionally, so a stale one
    /// can never fire twice.
    pub fn clear_state(&mut self) {
        let outcome = std::mem::take(&mut self.outcome);
        let on_confirm = self.on_confirm.take();
        let on_cancel = self.on_cancel.take();

        self.store.clear();
        self.driver.reset();
        self.driver.set_sheet_height(0.0);
        self.back_armed = false;
        self.phase = OverlayPhase::Hidden;

        match outcome {
            Outcome::Confirmed => {
                if let Some(callback) = on_confirm {
                    callback();
                }
            }
            Outcome::Cancelled => {
                if let Some(callback) = on_cancel {
                    callback();
                }
            }
            Outcome::None => {}
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
    pub fn content(&self) -> &AlertContent {
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

impl fmt::Debug for AlertController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertController")
            .field("phase", &self.phase)
            .field("title", &self.store.content().title)
            .field("back_armed", &self.back_armed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn shown_alert() -> (AlertController, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let confirms = Rc::new(Cell::new(0));
        let cancels = Rc::new(Cell::new(0));
        let confirm_sink = Rc::clone(&confirms);
        let cancel_sink = Rc::clone(&cancels);

        let mut alert = AlertController::new(Timings::default());
        alert.show(
            AlertRequest::new("Delete?")
                .description("This cannot be undone")
                .on_confirm(move || confirm_sink.set(confirm_sink.get() + 1))
                .on_cancel(move || cancel_sink.set(cancel_sink.get() + 1)),
        );
        alert.set_sheet_height(300.0);
        (alert, confirms, cancels)
    }

    fn settle_enter(alert: &mut AlertController) {
        alert.tick(300.0);
        assert_eq!(alert.phase(), OverlayPhase::Visible);
    }

    #[test]
    fn show_fills_content_and_defaults_button_labels() {
        let mut alert = AlertController::new(Timings::default());
        alert.show(AlertRequest::new("Title"));

        assert_eq!(alert.phase(), OverlayPhase::Presenting);
        assert_eq!(alert.content().title, "Title");
        assert_eq!(alert.content().cancel_text, "Cancel");
        assert_eq!(alert.content().confirm_text, "Confirm");
        assert!(alert.content().description.is_none());
    }

    #[test]
    fn confirm_fires_only_the_confirm_callback_after_exit() {
        let (mut alert, confirms, cancels) = shown_alert();
        settle_enter(&mut alert);

        alert.confirm();
        assert_eq!(alert.phase(), OverlayPhase::Dismissing);
        assert_eq!(confirms.get(), 0);

        alert.tick(400.0);
        assert_eq!(alert.phase(), OverlayPhase::Hidden);
        assert_eq!(confirms.get(), 1);
        assert_eq!(cancels.get(), 0);
    }

    #[test]
    fn cancel_fires_only_the_cancel_callback() {
        let (mut alert, confirms, cancels) = shown_alert();
        settle_enter(&mut alert);

        alert.cancel();
        alert.tick(400.0);
        assert_eq!(confirms.get(), 0);
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn drag_dismiss_counts_as_cancel() {
        let (mut alert, confirms, cancels) = shown_alert();
        settle_enter(&mut alert);

        alert.pan(PanSample::active(250.0));
        alert.pan(PanSample::end(250.0, 0.0));
        assert_eq!(alert.phase(), OverlayPhase::Dismissing);

        alert.tick(400.0);
        assert_eq!(confirms.get(), 0);
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn short_slow_drag_snaps_back_via_projection() {
        let (mut alert, _, cancels) = shown_alert();
        settle_enter(&mut alert);

        alert.pan(PanSample::active(10.0));
        alert.pan(PanSample::end(10.0, 0.0));
        assert_eq!(alert.phase(), OverlayPhase::Visible);

        alert.tick(400.0);
        assert_eq!(alert.drag_offset(), 0.0);
        assert_eq!(cancels.get(), 0);
    }

    #[test]
    fn fast_fling_dismisses_even_from_a_small_offset() {
        let (mut alert, _, cancels) = shown_alert();
        settle_enter(&mut alert);

        alert.pan(PanSample::active(50.0));
        alert.pan(PanSample::end(50.0, 600.0));
        assert_eq!(alert.phase(), OverlayPhase::Dismissing);

        alert.tick(400.0);
        assert_eq!(cancels.get(), 1);
    }

    #[test]
    fn back_press_cancels_exactly_once_while_visible() {
        let (mut alert, _, cancels) = shown_alert();
        assert!(!alert.back_pressed());
        settle_enter(&mut alert);

        assert!(alert.back_pressed());
        assert!(!alert.back_pressed());

        alert.tick(400.0);
        assert_eq!(cancels.get(), 1);
        assert!(!alert.back_pressed());
    }

    #[test]
    fn reshow_before_resolution_replaces_both_callbacks() {
        let (mut alert, confirms, cancels) = shown_alert();
        settle_enter(&mut alert);

        let late_confirms = Rc::new(Cell::new(0));
        let sink = Rc::clone(&late_confirms);
        alert.show(
            AlertRequest::new("Again?").on_confirm(move || sink.set(sink.get() + 1)),
        );
        alert.set_sheet_height(300.0);
        alert.tick(300.0);

        alert.confirm();
        alert.tick(400.0);

        assert_eq!(confirms.get(), 0);
        assert_eq!(cancels.get(), 0);
        assert_eq!(late_confirms.get(), 1);
    }

    #[test]
    fn clear_state_resets_content_and_is_idempotent() {
        let (mut alert, confirms, cancels) = shown_alert();
        settle_enter(&mut alert);
        alert.confirm();
        alert.tick(400.0);

        alert.clear_state();
        alert.clear_state();
        assert_eq!(confirms.get(), 1);
        assert_eq!(cancels.get(), 0);
        assert_eq!(alert.content(), &AlertContent::default());
        assert_eq!(alert.sheet_height(), 0.0);
    }

    #[test]
    fn first_sheet_height_report_wins_for_the_cycle() {
        let mut alert = AlertController::new(Timings::default());
        alert.show(AlertRequest::new("Title"));
        alert.set_sheet_height(240.0);
        alert.set_sheet_height(900.0);
        assert_eq!(alert.sheet_height(), 240.0);
    }
}
