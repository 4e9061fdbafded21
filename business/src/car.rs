//! Car records exchanged with the cars API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::cell::CellKind;

/// A car from the cars API.
///
/// The plate is the row identity in the table and the key of the delete call.
///
/// A field that is missing, `null` or not a string still yields a record, so
/// one odd record shows empty cells instead of failing the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarRecord {
    /// URL of the car picture.
    #[serde(deserialize_with = "lenient_text")]
    pub image: String,
    /// Brand and model, free text.
    #[serde(deserialize_with = "lenient_text")]
    pub brand_model: String,
    /// Year as typed by the user. Kept opaque, never validated.
    #[serde(deserialize_with = "lenient_text")]
    pub year: String,
    /// License plate.
    #[serde(deserialize_with = "lenient_text")]
    pub plate: String,
    /// CSS color of the car.
    #[serde(deserialize_with = "lenient_text")]
    pub color: String,
}

impl CarRecord {
    /// Typed cells in display order.
    pub fn cells(&self) -> [CellKind; 5] {
        [
            CellKind::Image(self.image.clone()),
            CellKind::Text(self.brand_model.clone()),
            CellKind::Text(self.year.clone()),
            CellKind::Text(self.plate.clone()),
            CellKind::Color(self.color.clone()),
        ]
    }
}

/// Request body of `DELETE /cars`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCarRequest {
    pub plate: String,
}

/// The API stores whatever the form sent, so values normally come back as
/// strings, but seeded records often carry a numeric `year` or a `null`.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(other) => other.to_string(),
    })
}
