mod car_form;
pub mod cars_table;
mod error_banner;
mod toolbar;

pub use car_form::car_form;
pub use cars_table::cars_table;
pub use error_banner::error_banner;
pub use toolbar::toolbar;
