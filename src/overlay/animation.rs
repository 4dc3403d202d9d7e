// SPDX-License-Identifier: MPL-2.0
//! Overlay animation driver.
//!
//! Maps the overlay lifecycle and an in-progress drag to a normalized
//! progress value and a vertical translation. The driver has no clock of its
//! own: the host calls [`AnimationDriver::tick`] with the elapsed frame time,
//! which makes every transition testable without a rendering environment.

use crate::config::defaults::{ENTER_DURATION_MS, EXIT_DURATION_MS, SNAP_BACK_DURATION_MS};

/// Motion durations shared by all overlay controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    /// Enter transition duration (progress 0 → 1), in milliseconds.
    pub enter_ms: f32,
    /// Exit transition duration (progress 1 → 0), in milliseconds.
    pub exit_ms: f32,
    /// Snap-back duration returning a dragged sheet to rest, in milliseconds.
    pub snap_back_ms: f32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            enter_ms: ENTER_DURATION_MS,
            exit_ms: EXIT_DURATION_MS,
            snap_back_ms: SNAP_BACK_DURATION_MS,
        }
    }
}

/// Completion events reported by [`AnimationDriver::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// The enter transition reached progress 1.
    EnterFinished,
    /// The exit transition reached progress 0.
    ExitFinished,
    /// A dragged sheet finished animating back to its rest position.
    SnapBackFinished,
}

/// A running linear timing between two values.
#[derive(Debug, Clone, Copy)]
struct Timing {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed_ms: f32,
}

impl Timing {
    fn new(from: f32, to: f32, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Advances the timing, returning `true` once it has finished.
    fn advance(&mut self, dt_ms: f32) -> bool {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        self.is_finished()
    }

    fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    fn value(&self) -> f32 {
        if self.duration_ms <= 0.0 || self.is_finished() {
            return self.to;
        }
        let t = self.elapsed_ms / self.duration_ms;
        self.from + (self.to - self.from) * t
    }
}

/// Which lifecycle transition a progress timing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProgressGoal {
    Enter,
    Exit,
}

/// Drives the presentation progress and drag offset of a single overlay.
///
/// `progress` lives in `[0, 1]`: 0 is fully hidden (translated below the
/// visible area), 1 is fully presented. `drag_offset` lives in
/// `[0, sheet_height]` and overrides the rest position while the overlay is
/// fully presented.
#[derive(Debug)]
pub struct AnimationDriver {
    timings: Timings,
    sheet_height: f32,
    progress: f32,
    drag_offset: f32,
    progress_timing: Option<(Timing, ProgressGoal)>,
    snap_timing: Option<Timing>,
}

impl AnimationDriver {
    /// Creates an idle driver at progress 0 with no drag in progress.
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            sheet_height: 0.0,
            progress: 0.0,
            drag_offset: 0.0,
            progress_timing: None,
            snap_timing: None,
        }
    }

    /// Sets the sheet height used for translation interpolation and drag
    /// clamping.
    pub fn set_sheet_height(&mut self, height: f32) {
        self.sheet_height = height.max(0.0);
        self.drag_offset = self.drag_offset.clamp(0.0, self.sheet_height);
    }

    #[must_use]
    pub fn sheet_height(&self) -> f32 {
        self.sheet_height
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// The backdrop opacity, which tracks progress directly.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.progress
    }

    /// The vertical translation of the presented sheet.
    ///
    /// Interpolates from `sheet_height` (fully hidden) toward the live drag
    /// offset as progress approaches 1, so a drag overrides the rest position
    /// while the overlay is fully presented.
    #[must_use]
    pub fn translation(&self) -> f32 {
        self.sheet_height + (self.drag_offset - self.sheet_height) * self.progress
    }

    /// Starts the enter transition from the current progress.
    ///
    /// Any running timing is replaced, so a stale completion can never fire
    /// after a new cycle has begun.
    pub fn begin_enter(&mut self) {
        self.snap_timing = None;
        self.progress_timing = Some((
            Timing::new(self.progress, 1.0, self.timings.enter_ms),
            ProgressGoal::Enter,
        ));
    }

    /// Starts the exit transition from the current progress.
    ///
    /// Safe to call at any time, including mid-enter.
    pub fn begin_exit(&mut self) {
        self.snap_timing = None;
        self.progress_timing = Some((
            Timing::new(self.progress, 0.0, self.timings.exit_ms),
            ProgressGoal::Exit,
        ));
    }

    /// Animates the drag offset back to the rest position.
    pub fn begin_snap_back(&mut self) {
        self.snap_timing = Some(Timing::new(self.drag_offset, 0.0, self.timings.snap_back_ms));
    }

    /// Tracks a live drag. Cancels a running snap-back and clamps the offset
    /// to `[0, sheet_height]`.
    pub fn set_drag_offset(&mut self, offset: f32) {
        self.snap_timing = None;
        self.drag_offset = offset.clamp(0.0, self.sheet_height);
    }

    /// Advances all running timings by `dt_ms` milliseconds.
    ///
    /// Returns at most one completion event per call; a finished progress
    /// timing takes precedence over a finished snap-back.
    pub fn tick(&mut self, dt_ms: f32) -> Option<AnimationEvent> {
        let mut event = None;

        if let Some((mut timing, goal)) = self.progress_timing.take() {
            let finished = timing.advance(dt_ms);
            self.progress = timing.value().clamp(0.0, 1.0);
            if finished {
                event = Some(match goal {
                    ProgressGoal::Enter => AnimationEvent::EnterFinished,
                    ProgressGoal::Exit => AnimationEvent::ExitFinished,
                });
            } else {
                self.progress_timing = Some((timing, goal));
            }
        }

        if let Some(mut timing) = self.snap_timing.take() {
            let finished = timing.advance(dt_ms);
            self.drag_offset = timing.value().clamp(0.0, self.sheet_height);
            if finished {
                if event.is_none() {
                    event = Some(AnimationEvent::SnapBackFinished);
                }
            } else {
                self.snap_timing = Some(timing);
            }
        }

        event
    }

    /// Returns the driver to its hidden rest state, dropping any running
    /// timings.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.drag_offset = 0.0;
        self.progress_timing = None;
        self.snap_timing = None;
    }

    /// Whether any timing is currently running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.progress_timing.is_some() || self.snap_timing.is_some()
    }
}
