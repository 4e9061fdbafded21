//! Column definitions for the cars table.

use cars_business::{SWATCH_SIZE, THUMBNAIL_WIDTH};
use egui_extras::Column;

const CELL_PADDING: f32 = 8.0;
pub const YEAR_WIDTH: f32 = 60.0;
pub const PLATE_WIDTH: f32 = 100.0;
pub const ACTIONS_WIDTH: f32 = 90.0;
pub const ROW_HEIGHT: f32 = 110.0;
pub const PLACEHOLDER_ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration, one entry per header label.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::exact(THUMBNAIL_WIDTH + CELL_PADDING), // Imagem
        Column::remainder().at_least(140.0),           // Marca / Modelo
        Column::exact(YEAR_WIDTH),                     // Ano
        Column::exact(PLATE_WIDTH),                    // Placa
        Column::exact(SWATCH_SIZE + CELL_PADDING),     // Cor
        Column::exact(ACTIONS_WIDTH),                  // Ações
    ]
}
