//! Shared color constants for the UI.

use egui::Color32;

/// Red background of the error banner.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Text drawn on top of [`COLOR_RED`].
pub const COLOR_ON_RED: Color32 = Color32::WHITE;

/// Outline of a swatch whose color could not be parsed.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);
