//! Business layer of the cars table: model, API helpers and the view-model
//! the UI renders.
//!
//! UI code only reads from [`CarTableController`] and calls its operations;
//! it never talks to the API itself.

pub mod api;
mod car;
mod cell;
mod config;
mod controller;
mod error;
mod error_banner;
mod form;
pub mod http;
mod table;
pub mod task;
mod test_utils;

pub use car::{CarRecord, DeleteCarRequest};
pub use cell::{CellKind, CellView, SWATCH_SIZE, THUMBNAIL_WIDTH, parse_css_color, render_cell};
pub use config::BusinessConfig;
pub use controller::{CarTableController, CarTableEvent};
pub use error::{ApiResult, CarsApiError};
pub use error_banner::ErrorBanner;
pub use form::CarForm;
pub use table::{CarRow, CarTable, COLUMNS, NO_CARS_TEXT, PlaceholderRow, RowId, TableView};
