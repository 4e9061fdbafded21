//! The cars table.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Table header rendering
//! - `row`: Car and placeholder rows
//! - `cells`: Rendering of each cell view

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use cars_business::{CarTableController, TableView};
use egui::{Response, Ui};
use egui_extras::TableBuilder;

use self::columns::{HEADER_HEIGHT, PLACEHOLDER_ROW_HEIGHT, ROW_HEIGHT, table_columns};
use self::header::render_table_header;
use self::row::{render_car_row, render_placeholder_row};

/// Renders the table for the controller's current view.
///
/// A delete clicked on a row is forwarded to the controller after the table
/// has been drawn.
pub fn cars_table(controller: &mut CarTableController, ui: &mut Ui) -> Response {
    let mut delete: Option<String> = None;

    let response = ui
        .vertical(|ui| {
            let view = controller.table().view();

            if view == TableView::Loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Carregando carros...");
                });
                return;
            }

            let mut builder = TableBuilder::new(ui)
                .id_salt("cars_table")
                .striped(true)
                .resizable(false)
                .vscroll(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            for column in table_columns() {
                builder = builder.column(column);
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    render_table_header(&mut header);
                })
                .body(|mut body| match view {
                    TableView::Empty(placeholder) => {
                        body.row(PLACEHOLDER_ROW_HEIGHT, |mut row| {
                            render_placeholder_row(&mut row, &placeholder);
                        });
                    }
                    TableView::Populated(rows) => {
                        for car in rows {
                            body.row(ROW_HEIGHT, |mut row| {
                                if render_car_row(&mut row, car) {
                                    delete = Some(car.plate().to_owned());
                                }
                            });
                        }
                    }
                    TableView::Loading | TableView::Error => {}
                });
        })
        .response;

    if let Some(plate) = delete {
        controller.delete_car(&plate);
    }

    response
}
