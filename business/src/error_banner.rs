/// The single shared error element.
///
/// Only the latest failure is kept; showing a new message replaces the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// The message to display, `None` while hidden.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
