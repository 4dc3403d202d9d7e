// SPDX-License-Identifier: MPL-2.0
//! Color palette for the overlay views, with light and dark variants.

use crate::overlay::{Tone, ToastTone};
use iced::Color;

/// Resolved colors for one appearance mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub light_background: Color,
    pub dark_text: Color,
    pub light_text: Color,
    pub error_text: Color,
    pub success_text: Color,
    pub underlay: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    /// Light appearance.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::from_rgb8(0x0F, 0x74, 0xBC),
            secondary: Color::from_rgb8(0xF3, 0x64, 0x21),
            background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            light_background: Color::from_rgb8(0xF3, 0xF7, 0xFF),
            dark_text: Color::from_rgb8(0x21, 0x25, 0x29),
            light_text: Color::from_rgb8(0x90, 0x92, 0x9C),
            error_text: Color::from_rgb8(0xFF, 0x00, 0x33),
            success_text: Color::from_rgb8(0x21, 0x25, 0x29),
            underlay: Color::from_rgba8(0x21, 0x25, 0x29, 0.125),
            success: Color::from_rgb8(0xD0, 0xF0, 0xC0),
            error: Color::from_rgb8(0xFF, 0x00, 0x33),
        }
    }

    /// Dark appearance.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::from_rgb8(0x0F, 0x74, 0xBC),
            secondary: Color::from_rgb8(0xF3, 0x64, 0x21),
            background: Color::from_rgb8(0x11, 0x11, 0x18),
            light_background: Color::from_rgb8(0x3C, 0x40, 0x52),
            dark_text: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            light_text: Color::from_rgb8(0x90, 0x92, 0x9C),
            error_text: Color::from_rgb8(0xFF, 0x00, 0x33),
            success_text: Color::from_rgb8(0xFF, 0xFF, 0xFF),
            underlay: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0.125),
            success: Color::from_rgb8(0x12, 0x35, 0x24),
            error: Color::from_rgb8(0xFF, 0x00, 0x33),
        }
    }

    /// Text color for a content tone.
    #[must_use]
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Dark => self.dark_text,
            Tone::Light => self.light_text,
            Tone::Primary => self.primary,
            Tone::Secondary => self.secondary,
            Tone::Error => self.error_text,
        }
    }

    /// Background color of a toast for its tone.
    #[must_use]
    pub fn toast_background(&self, tone: ToastTone) -> Color {
        match tone {
            ToastTone::Neutral => self.background,
            ToastTone::Success => self.success,
            ToastTone::Error => self.error,
        }
    }

    /// Text color of a toast for its tone.
    #[must_use]
    pub fn toast_text(&self, tone: ToastTone) -> Color {
        match tone {
            ToastTone::Neutral => self.dark_text,
            ToastTone::Success => self.success_text,
            ToastTone::Error => Color::WHITE,
        }
    }

    /// Backdrop color at the given animation opacity.
    #[must_use]
    pub fn backdrop(&self, opacity: f32) -> Color {
        Color {
            a: 0.2 * opacity.clamp(0.0, 1.0),
            ..Color::BLACK
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
