//! Row rendering for the cars table.

use cars_business::{CarRow, PlaceholderRow, render_cell};
use egui::{Stroke, Ui};
use egui_extras::TableRow;

use super::cells::{render_cell_view, render_delete_button};

/// Renders one car: its five data cells followed by the delete button.
///
/// Returns `true` if the delete button was clicked.
#[inline]
pub fn render_car_row(row: &mut TableRow<'_, '_>, car: &CarRow) -> bool {
    for cell in car.record().cells() {
        let view = render_cell(&cell);
        row.col(|ui| {
            render_cell_view(ui, &view);
            draw_cell_bottom_border(ui);
        });
    }

    let mut clicked = false;
    row.col(|ui| {
        clicked = render_delete_button(ui, car.is_delete_pending());
        draw_cell_bottom_border(ui);
    });
    clicked
}

/// Renders the "no cars" row.
///
/// The text sits in the first cell and the row fills the remaining
/// `colspan - 1` cells so it still covers every column.
#[inline]
pub fn render_placeholder_row(row: &mut TableRow<'_, '_>, placeholder: &PlaceholderRow) {
    row.col(|ui| {
        ui.add(egui::Label::new(placeholder.text).wrap_mode(egui::TextWrapMode::Extend));
    });
    for _ in 1..placeholder.colspan {
        row.col(|_| {});
    }
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
