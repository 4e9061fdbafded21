//! Table header rendering for the cars table.

use cars_business::COLUMNS;
use egui::Ui;
use egui_extras::TableRow;

/// Renders the header with bold labels.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for label in COLUMNS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
