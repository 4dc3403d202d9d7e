// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Motion**: Enter/exit/snap-back timing durations
//! - **Gesture**: Release projection tuning
//! - **Menu**: Bottom-sheet menu sizing rules
//! - **Toast**: Auto-dismiss timing and placement

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Duration of the enter transition (progress 0 → 1), in milliseconds.
pub const ENTER_DURATION_MS: f32 = 300.0;

/// Duration of the exit transition (progress 1 → 0), in milliseconds.
pub const EXIT_DURATION_MS: f32 = 400.0;

/// Duration of the snap-back animation returning a dragged sheet to rest,
/// in milliseconds.
pub const SNAP_BACK_DURATION_MS: f32 = 400.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Factor applied to the release velocity when projecting the final resting
/// position of a dragged sheet (`position + velocity * factor`).
pub const PROJECTION_FACTOR: f32 = 0.2;

// ==========================================================================
// Menu Defaults
// ==========================================================================

/// Height of a single menu row, in logical pixels.
pub const MENU_ITEM_HEIGHT: f32 = 50.0;

/// Item count above which the menu sheet stops growing and scrolls instead.
pub const MENU_MAX_VISIBLE_ITEMS: usize = 5;

/// Sheet height used once the menu holds more than
/// [`MENU_MAX_VISIBLE_ITEMS`] items.
pub const MENU_MAX_LIST_HEIGHT: f32 = 250.0;

/// Extra sheet height for the grab handle and bottom padding.
pub const MENU_CHROME_HEIGHT: f32 = 32.0;

/// Item count above which the menu renders a scrollable list instead of
/// inline rows.
pub const MENU_INLINE_RENDER_LIMIT: usize = 7;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays fully visible before dismissing itself,
/// in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: f32 = 1000.0;

/// Distance between the toast and the bottom edge, in logical pixels.
pub const TOAST_BOTTOM_OFFSET: f32 = 100.0;
