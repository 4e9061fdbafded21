use cars_business::{BusinessConfig, CarTableController};

/// The main application state.
pub struct State {
    /// Owns the table, banner and form, and talks to the cars API.
    pub controller: CarTableController,
}

impl Default for State {
    fn default() -> Self {
        Self {
            controller: CarTableController::new(BusinessConfig::default()),
        }
    }
}

impl State {
    pub fn test(base_url: String) -> Self {
        Self {
            controller: CarTableController::new(BusinessConfig::new(base_url)),
        }
    }
}
