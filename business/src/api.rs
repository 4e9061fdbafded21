//! Cars API client helpers.
//!
//! Every endpoint lives on the same collection URL (`{api_base_url}/cars`).
//! The API answers failures with an envelope `{ "error": true, "message": "..." }`,
//! sometimes with a 2xx status, so the envelope is checked before the status.
//!
//! These functions do network IO only. Mapping results into the table is the
//! job of [`crate::CarTableController`].

use log::{debug, warn};
use serde_json::Value;

use crate::http::{Client, Response};
use crate::{ApiResult, BusinessConfig, CarRecord, CarsApiError, DeleteCarRequest};

/// Shown when an error envelope carries no message.
const UNKNOWN_ERROR_MESSAGE: &str = "Erro desconhecido";

/// GET `/cars`
pub async fn list_cars(config: &BusinessConfig) -> ApiResult<Vec<CarRecord>> {
    let url = config.cars_url();
    debug!("GET {url}");

    let response = Client::get(url.as_str()).send().await?;
    let body = check_envelope(&response)?;

    serde_json::from_value(body)
        .map_err(|e| CarsApiError::new(format!("Failed to parse cars list: {e}")))
}

/// POST `/cars`
/// Body: `{ "image", "brandModel", "year", "plate", "color" }`
pub async fn create_car(config: &BusinessConfig, car: &CarRecord) -> ApiResult<()> {
    let url = config.cars_url();
    debug!("POST {url} plate={}", car.plate);

    let request = Client::post(url.as_str())
        .json(car)
        .map_err(|e| CarsApiError::new(format!("Failed to serialize request: {e}")))?;

    let response = request.send().await?;
    check_envelope(&response).map(drop)
}

/// DELETE `/cars`
/// Body: `{ "plate" }`
pub async fn delete_car(config: &BusinessConfig, plate: &str) -> ApiResult<()> {
    let url = config.cars_url();
    debug!("DELETE {url} plate={plate}");

    let body = DeleteCarRequest {
        plate: plate.to_owned(),
    };
    let request = Client::delete(url.as_str())
        .json(&body)
        .map_err(|e| CarsApiError::new(format!("Failed to serialize request: {e}")))?;

    let response = request.send().await?;
    check_envelope(&response).map(drop)
}

/// Turns a response into its JSON body, or the failure it describes.
///
/// An empty body counts as `null`. A non-JSON body is only a failure when the
/// status is not 2xx.
fn check_envelope(response: &Response) -> ApiResult<Value> {
    let body = if response.body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match response.json::<Value>() {
            Ok(value) => value,
            Err(e) if response.is_success() => {
                warn!("Cars API returned a non-JSON body: {e}");
                Value::Null
            }
            Err(_) => return Err(http_status_error(response.status)),
        }
    };

    if let Some(error) = envelope_error(&body) {
        return Err(error);
    }

    if !response.is_success() {
        return Err(http_status_error(response.status));
    }

    Ok(body)
}

fn envelope_error(body: &Value) -> Option<CarsApiError> {
    let object = body.as_object()?;
    if !object.get("error").is_some_and(is_truthy) {
        return None;
    }

    let message = object
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(UNKNOWN_ERROR_MESSAGE);

    Some(CarsApiError::new(message))
}

/// JavaScript truthiness, which is what the API's clients have always used to
/// read the `error` flag.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn http_status_error(status: u16) -> CarsApiError {
    CarsApiError::new(format!("API returned status: {status}"))
}
