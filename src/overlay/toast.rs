// SPDX-License-Identifier: MPL-2.0
//! Toast notification controller.
//!
//! A transient message that fades in, stays fully visible for a fixed
//! duration, and fades out on its own. Toasts take no input at all: there is
//! no gesture interpreter and the rendered layer passes touches through. The
//! auto-dismiss timer starts only once the enter animation has completed, so
//! the configured duration is time spent fully visible, not time since
//! `show` was called.

use super::animation::{AnimationDriver, AnimationEvent, Timings};
use super::store::OverlayStore;
use super::OverlayPhase;
use crate::config::defaults::DEFAULT_TOAST_DURATION_MS;
use std::fmt;

/// Visual tone of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastTone {
    #[default]
    Neutral,
    Success,
    Error,
}

/// Callback fired once the toast has fully disappeared.
pub type DoneCallback = Box<dyn FnOnce()>;

/// Text and tone of a presented toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastContent {
    pub text: String,
    pub tone: ToastTone,
}

/// A single presentation request for the toast.
pub struct ToastRequest {
    pub text: String,
    pub tone: ToastTone,
    pub duration_ms: f32,
    pub on_done: Option<DoneCallback>,
}

impl ToastRequest {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: ToastTone::default(),
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            on_done: None,
        }
    }

    #[must_use]
    pub fn tone(mut self, tone: ToastTone) -> Self {
        self.tone = tone;
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn on_done(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_done = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ToastRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastRequest")
            .field("text", &self.text)
            .field("tone", &self.tone)
            .field("duration_ms", &self.duration_ms)
            .field("has_on_done", &self.on_done.is_some())
            .finish()
    }
}

/// Orchestrates the toast's store, animation driver, and auto-dismiss timer.
pub struct ToastController {
    store: OverlayStore<ToastContent>,
    driver: AnimationDriver,
    phase: OverlayPhase,
    duration_ms: f32,
    remaining_ms: Option<f32>,
    on_done: Option<DoneCallback>,
}

impl ToastController {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            store: OverlayStore::new(),
            driver: AnimationDriver::new(timings),
            phase: OverlayPhase::Hidden,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            remaining_ms: None,
            on_done: None,
        }
    }

    /// Shows the toast, starting the enter animation.
    ///
    /// A show before the previous toast resolved restarts the cycle with the
    /// new content; the earlier `on_done` is dropped without firing.
    pub fn show(&mut self, request: ToastRequest) {
        self.on_done = request.on_done;
        self.duration_ms = request.duration_ms;
        self.remaining_ms = None;
        self.store.show(ToastContent {
            text: request.text,
            tone: request.tone,
        });
        self.driver.begin_enter();
        self.phase = OverlayPhase::Presenting;
    }

    /// Starts the exit animation early, cancelling the auto-dismiss timer.
    pub fn dismiss(&mut self) {
        if !self.phase.is_presented() || self.phase == OverlayPhase::Dismissing {
            return;
        }
        self.begin_dismiss();
    }

    /// Advances the animation clock and the auto-dismiss timer by `dt_ms`
    /// milliseconds.
    pub fn tick(&mut self, dt_ms: f32) {
        match self.driver.tick(dt_ms) {
            Some(AnimationEvent::EnterFinished) => {
                if self.phase == OverlayPhase::Presenting {
                    self.phase = OverlayPhase::Visible;
                    // The display timer measures time fully visible, so it
                    // starts here and consumes none of this tick.
                    self.remaining_ms = Some(self.duration_ms);
                }
                return;
            }
            Some(AnimationEvent::ExitFinished) => {
                self.clear_state();
                return;
            }
            Some(AnimationEvent::SnapBackFinished) | None => {}
        }

        if self.phase == OverlayPhase::Visible {
            if let Some(remaining) = &mut self.remaining_ms {
                *remaining -= dt_ms;
                if *remaining <= 0.0 {
                    self.begin_dismiss();
                }
            }
        }
    }

    /// Resets all presentation state, cancels the timer, and fires the done
    /// callback if one is still pending. Idempotent.
    pub fn clear_state(&mut self) {
        let on_done = self.on_done.take();
        self.store.clear();
        self.driver.reset();
        self.remaining_ms = None;
        self.phase = OverlayPhase::Hidden;

        if let Some(callback) = on_done {
            callback();
        }
    }

    fn begin_dismiss(&mut self) {
        self.remaining_ms = None;
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
    pub fn content(&self) -> &ToastContent {
        self.store.content()
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.driver.opacity()
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

impl fmt::Debug for ToastController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastController")
            .field("phase", &self.phase)
            .field("text", &self.store.content().text)
            .field("remaining_ms", &self.remaining_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn toast_runs_a_full_cycle_on_its_own() {
        let done = Rc::new(Cell::new(0));
        let sink = Rc::clone(&done);

        let mut toast = ToastController::new(Timings::default());
        toast.show(ToastRequest::new("Saved").on_done(move || sink.set(sink.get() + 1)));
        assert_eq!(toast.phase(), OverlayPhase::Presenting);

        toast.tick(300.0);
        assert_eq!(toast.phase(), OverlayPhase::Visible);

        toast.tick(1000.0);
        assert_eq!(toast.phase(), OverlayPhase::Dismissing);

        toast.tick(400.0);
        assert_eq!(toast.phase(), OverlayPhase::Hidden);
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn timer_starts_when_fully_visible_not_at_show() {
        let mut toast = ToastController::new(Timings::default());
        toast.show(ToastRequest::new("Saved"));

        // 200 ms into the enter animation nothing is counting down yet.
        toast.tick(200.0);
        assert_eq!(toast.phase(), OverlayPhase::Presenting);

        // Enter finishes here; the same tick consumes no display time.
        toast.tick(100.0);
        assert_eq!(toast.phase(), OverlayPhase::Visible);

        toast.tick(999.0);
        assert_eq!(toast.phase(), OverlayPhase::Visible);
        toast.tick(1.0);
        assert_eq!(toast.phase(), OverlayPhase::Dismissing);
    }

    #[test]
    fn custom_duration_is_respected() {
        let mut toast = ToastController::new(Timings::default());
        toast.show(ToastRequest::new("Quick").duration_ms(100.0));
        toast.tick(300.0);

        toast.tick(99.0);
        assert_eq!(toast.phase(), OverlayPhase::Visible);
        toast.tick(1.0);
        assert_eq!(toast.phase(), OverlayPhase::Dismissing);
    }

    #[test]
    fn early_dismiss_cancels_the_timer() {
        let mut toast = ToastController::new(Timings::default());
        toast.show(ToastRequest::new("Saved"));
        toast.tick(300.0);

        toast.dismiss();
        assert_eq!(toast.phase(), OverlayPhase::Dismissing);

        // Waiting out the original duration must not restart anything.
        toast.tick(400.0);
        assert_eq!(toast.phase(), OverlayPhase::Hidden);
        toast.tick(2000.0);
        assert_eq!(toast.phase(), OverlayPhase::Hidden);
    }

    #[test]
    fn forced_clear_cancels_the_timer_and_fires_done_once() {
        let done = Rc::new(Cell::new(0));
        let sink = Rc::clone(&done);

        let mut toast = ToastController::new(Timings::default());
        toast.show(ToastRequest::new("Saved").on_done(move || sink.set(sink.get() + 1)));
        toast.tick(300.0);

        toast.clear_state();
        assert_eq!(toast.phase(), OverlayPhase::Hidden);
        assert_eq!(done.get(), 1);

        toast.clear_state();
        toast.tick(2000.0);
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn reshow_replaces_the_pending_done_callback() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let first_sink = Rc::clone(&first);
        let second_sink = Rc::clone(&second);

        let mut toast = ToastController::new(Timings::default());
        toast.show(ToastRequest::new("One").on_done(move || first_sink.set(1)));
        toast.tick(150.0);
        toast.show(ToastRequest::new("Two").on_done(move || second_sink.set(1)));

        toast.tick(300.0);
        toast.tick(1000.0);
        toast.tick(400.0);

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert_eq!(toast.phase(), OverlayPhase::Hidden);
    }

    #[test]
    fn empty_text_is_tolerated() {
        let mut toast = ToastController::new(Timings::default());
        toast.show(ToastRequest::new(""));
        assert!(toast.is_visible());
        assert_eq!(toast.content().text, "");
    }
}
