//! Typed table cells and their render descriptions.
//!
//! A row is a list of [`CellKind`]s. [`render_cell`] turns each one into a
//! [`CellView`] the UI can draw without knowing anything about cars.

use egui::Color32;

/// Width of the image thumbnail, in points.
pub const THUMBNAIL_WIDTH: f32 = 100.0;

/// Side of the square color swatch, in points.
pub const SWATCH_SIZE: f32 = 100.0;

/// Kind of a table cell, carrying its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellKind {
    Image(String),
    Text(String),
    Color(String),
}

/// What the UI should draw for a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellView {
    /// Fixed-width thumbnail; height follows the image.
    Thumbnail { src: String, width: f32 },
    Text(String),
    /// Square swatch. `color` is `None` when `raw` is not a CSS color we understand.
    Swatch {
        color: Option<Color32>,
        raw: String,
        size: f32,
    },
}

/// Renders a cell kind into its view description.
pub fn render_cell(kind: &CellKind) -> CellView {
    match kind {
        CellKind::Image(src) => CellView::Thumbnail {
            src: src.clone(),
            width: THUMBNAIL_WIDTH,
        },
        CellKind::Text(text) => CellView::Text(text.clone()),
        CellKind::Color(raw) => CellView::Swatch {
            color: parse_css_color(raw),
            raw: raw.clone(),
            size: SWATCH_SIZE,
        },
    }
}

/// Parses any CSS color value (hex, `rgb()`, `hsl()`, `hwb()`, named, ...).
pub fn parse_css_color(value: &str) -> Option<Color32> {
    let [r, g, b, a] = csscolorparser::parse(value.trim()).ok()?.to_rgba8();
    Some(Color32::from_rgba_unmultiplied(r, g, b, a))
}
