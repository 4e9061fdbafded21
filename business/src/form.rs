use crate::CarRecord;

/// Values of the add-car form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarForm {
    pub image: String,
    pub brand_model: String,
    pub year: String,
    pub plate: String,
    pub color: String,
    focus_image: bool,
}

impl CarForm {
    /// Snapshot of the current values, taken verbatim.
    pub fn to_record(&self) -> CarRecord {
        CarRecord {
            image: self.image.clone(),
            brand_model: self.brand_model.clone(),
            year: self.year.clone(),
            plate: self.plate.clone(),
            color: self.color.clone(),
        }
    }

    /// Clears every field and asks for the image field to get focus.
    pub fn reset(&mut self) {
        *self = Self {
            focus_image: true,
            ..Self::default()
        };
    }

    /// Returns `true` once after each [`reset`](Self::reset).
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_image)
    }
}
