// SPDX-License-Identifier: MPL-2.0
//! Pan gesture interpretation for drag-to-dismiss sheets.
//!
//! Converts a continuous pan gesture stream into discrete decisions: track
//! the drag, snap the sheet back to rest, or commit a dismissal. Release
//! decisions use either a ballistic snap-point projection or a simple
//! half-height rule, selected per overlay.

use crate::config::defaults::PROJECTION_FACTOR;

/// Lifecycle phase of a pan gesture sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Active,
    End,
    Cancelled,
}

/// One sample of a continuous pan gesture stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSample {
    pub phase: PanPhase,
    /// Vertical translation since the gesture began. Positive is downward.
    pub translation_y: f32,
    /// Vertical velocity at this sample, in units per second.
    pub velocity_y: f32,
}

impl PanSample {
    /// An in-progress drag sample with no meaningful velocity.
    #[must_use]
    pub fn active(translation_y: f32) -> Self {
        Self {
            phase: PanPhase::Active,
            translation_y,
            velocity_y: 0.0,
        }
    }

    /// A release sample.
    #[must_use]
    pub fn end(translation_y: f32, velocity_y: f32) -> Self {
        Self {
            phase: PanPhase::End,
            translation_y,
            velocity_y,
        }
    }
}

/// How a release decides between snapping back and dismissing.
///
/// The menu historically uses the half-height rule while the alert relies on
/// the full ballistic projection. The asymmetry is intentional and kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapPolicy {
    /// Snap back when the release offset is under half the sheet height.
    HalfHeight,
    /// Project the resting position from offset and velocity.
    Projection,
}

/// Decision produced for a single pan sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragDecision {
    /// Nothing to do for this sample.
    None,
    /// Track the drag at the given offset.
    Track(f32),
    /// Animate the sheet back to its rest position.
    SnapBack,
    /// Commit the dismissal.
    Dismiss,
}

/// Chooses the snap point that minimizes the distance to the ballistically
/// projected position `position + velocity * PROJECTION_FACTOR`.
///
/// Ties resolve to the earliest candidate, so the decision is deterministic
/// for any `(position, velocity)` pair.
#[must_use]
pub fn snap_point(position: f32, velocity: f32, candidates: &[f32]) -> f32 {
    let projected = position + velocity * PROJECTION_FACTOR;
    let mut best = candidates.first().copied().unwrap_or(0.0);
    let mut best_distance = (projected - best).abs();
    for &candidate in candidates.iter().skip(1) {
        let distance = (projected - candidate).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Interprets pan samples against a sheet of a given height.
#[derive(Debug, Clone, Copy)]
pub struct GestureInterpreter {
    policy: SnapPolicy,
}

impl GestureInterpreter {
    #[must_use]
    pub fn new(policy: SnapPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> SnapPolicy {
        self.policy
    }

    /// Produces the decision for one gesture sample.
    ///
    /// Only downward drags are meaningful: active samples at or above the
    /// zero line are ignored, and releases at or above it are no-ops.
    #[must_use]
    pub fn interpret(&self, sample: PanSample, sheet_height: f32) -> DragDecision {
        match sample.phase {
            PanPhase::Active if sample.translation_y > 0.0 => {
                DragDecision::Track(sample.translation_y)
            }
            PanPhase::End if sample.translation_y > 0.0 => {
                let dismiss = match self.policy {
                    SnapPolicy::HalfHeight => sample.translation_y >= sheet_height / 2.0,
                    SnapPolicy::Projection => {
                        snap_point(
                            sample.translation_y,
                            sample.velocity_y,
                            &[sheet_height, 0.0],
                        ) != 0.0
                    }
                };
                if dismiss {
                    DragDecision::Dismiss
                } else {
                    DragDecision::SnapBack
                }
            }
            _ => DragDecision::None,
        }
    }
}
