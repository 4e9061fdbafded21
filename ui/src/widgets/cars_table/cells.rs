//! Cell rendering functions for the cars table.

use cars_business::CellView;
use egui::{Color32, CornerRadius, Response, Sense, Stroke, StrokeKind, Ui};

use crate::utils::colors::COLOR_AMBER;

/// Renders a cell view produced by the business layer.
#[inline]
pub fn render_cell_view(ui: &mut Ui, view: &CellView) -> Response {
    match view {
        CellView::Thumbnail { src, width } => render_thumbnail_cell(ui, src, *width),
        CellView::Text(text) => ui.label(text.as_str()),
        CellView::Swatch { color, raw, size } => render_swatch_cell(ui, *color, raw, *size),
    }
}

/// Renders the car picture at a fixed width.
#[inline]
fn render_thumbnail_cell(ui: &mut Ui, src: &str, width: f32) -> Response {
    if src.is_empty() {
        return ui.weak("sem imagem");
    }

    ui.add(egui::Image::from_uri(src.to_owned()).max_width(width))
        .on_hover_text(src)
}

/// Paints a square filled with the car color.
///
/// A color we cannot parse gets an empty outlined square instead.
#[inline]
fn render_swatch_cell(ui: &mut Ui, color: Option<Color32>, raw: &str, size: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), Sense::hover());
    let painter = ui.painter();

    match color {
        Some(color) => {
            painter.rect_filled(rect, CornerRadius::ZERO, color);
        }
        None => {
            painter.rect_stroke(
                rect,
                CornerRadius::ZERO,
                Stroke::new(1.0, COLOR_AMBER),
                StrokeKind::Inside,
            );
        }
    }

    response.on_hover_text(raw)
}

/// Renders the delete button, disabled while its delete is in flight.
///
/// Returns `true` if the button was clicked.
#[inline]
pub fn render_delete_button(ui: &mut Ui, delete_pending: bool) -> bool {
    ui.add_enabled(!delete_pending, egui::Button::new("Excluir"))
        .clicked()
}
