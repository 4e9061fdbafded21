//! Test utilities for driving the controller against a mock cars API.
//!
//! # Example
//!
//! ```ignore
//! #[tokio::test]
//! async fn test_initial_load() {
//!     let mut test_ctx = TestContext::new().await;
//!     test_ctx.mock_list_cars(vec![sample_car("ABC-1234")]).await;
//!
//!     test_ctx.controller.initialize();
//!     test_ctx.flush_and_wait().await;
//!
//!     assert_eq!(test_ctx.controller.table().len(), 1);
//! }
//! ```

#![cfg(all(test, not(target_arch = "wasm32")))]

use std::time::Duration;

use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

use crate::{BusinessConfig, CarRecord, CarTableController};

/// Test context that holds a mock server and a controller pointed at it.
pub struct TestContext {
    pub mock_server: MockServer,
    pub controller: CarTableController,
}

impl TestContext {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;
        let config = BusinessConfig::new(mock_server.uri());
        let controller = CarTableController::new(config);

        Self {
            mock_server,
            controller,
        }
    }

    /// Waits until every in-flight operation has reported back and was applied.
    pub async fn flush_and_wait(&mut self) {
        let timeout = Duration::from_secs(5);

        while self.controller.task_count() > 0 {
            let applied = tokio::time::timeout(timeout, self.controller.sync_next()).await;
            match applied {
                Ok(true) => {}
                Ok(false) => break,
                Err(_) => panic!(
                    "Timed out waiting for pending tasks ({} still in flight)",
                    self.controller.task_count()
                ),
            }
        }
    }

    pub async fn mock_list_cars(&self, cars: Vec<CarRecord>) {
        self.mock_list_response(ResponseTemplate::new(200).set_body_json(cars))
            .await;
    }

    pub async fn mock_list_response(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/cars"))
            .respond_with(response)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_create_car(&self, car: &CarRecord, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/cars"))
            .and(body_json(car))
            .respond_with(response)
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mock_delete_car(&self, plate: &str, response: ResponseTemplate) {
        Mock::given(method("DELETE"))
            .and(path("/cars"))
            .and(body_json(json!({ "plate": plate })))
            .respond_with(response)
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }

    pub fn plates(&self) -> Vec<String> {
        self.controller
            .table()
            .rows()
            .iter()
            .map(|row| row.plate().to_owned())
            .collect()
    }
}

pub fn sample_car(plate: &str) -> CarRecord {
    CarRecord {
        image: format!("https://example.com/{plate}.png"),
        brand_model: "Volkswagen Fusca".to_owned(),
        year: "1976".to_owned(),
        plate: plate.to_owned(),
        color: "#1e90ff".to_owned(),
    }
}

pub fn error_envelope(message: &str) -> Value {
    json!({ "error": true, "message": message })
}

pub fn success_envelope(message: &str) -> Value {
    json!({ "message": message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NO_CARS_TEXT, TableView};

    #[tokio::test]
    async fn test_context_creation() {
        let test_ctx = TestContext::new().await;
        assert!(!test_ctx.mock_server.uri().is_empty());
        assert_eq!(test_ctx.controller.task_count(), 0);
    }

    #[tokio::test]
    async fn test_initialize_renders_rows_in_response_order() {
        let mut test_ctx = TestContext::new().await;
        let cars = vec![sample_car("CCC-0003"), sample_car("AAA-0001"), sample_car("BBB-0002")];
        test_ctx.mock_list_cars(cars.clone()).await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;

        assert_eq!(test_ctx.plates(), ["CCC-0003", "AAA-0001", "BBB-0002"]);
        for (row, car) in test_ctx.controller.table().rows().iter().zip(&cars) {
            assert_eq!(row.record(), car);
        }
        assert!(test_ctx.controller.table().placeholder().is_none());
    }

    #[tokio::test]
    async fn test_initialize_renders_records_with_null_fields() {
        let mut test_ctx = TestContext::new().await;
        test_ctx
            .mock_list_response(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "image": null,
                    "brandModel": "Fiat Uno",
                    "year": null,
                    "plate": "UNO-0001",
                    "color": "red"
                },
                {
                    "image": "https://example.com/gol.png",
                    "brandModel": "VW Gol",
                    "year": "2000",
                    "plate": "GOL-0002",
                    "color": "blue"
                }
            ])))
            .await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;

        assert_eq!(test_ctx.plates(), ["UNO-0001", "GOL-0002"]);
        assert_eq!(test_ctx.controller.table().rows()[0].record().year, "");
        assert!(!test_ctx.controller.banner().is_visible());
    }

    #[tokio::test]
    async fn test_initialize_empty_shows_placeholder() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_list_cars(Vec::new()).await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;

        let placeholder = test_ctx.controller.table().placeholder().unwrap();
        assert_eq!(placeholder.text, NO_CARS_TEXT);
        assert_eq!(placeholder.colspan, 6);
        assert!(test_ctx.controller.table().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_error_envelope_shows_banner() {
        let mut test_ctx = TestContext::new().await;
        test_ctx
            .mock_list_response(
                ResponseTemplate::new(500).set_body_json(error_envelope("Banco indisponível")),
            )
            .await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;

        assert_eq!(test_ctx.controller.table().view(), TableView::Error);
        assert_eq!(
            test_ctx.controller.banner().message(),
            Some("Banco indisponível")
        );
    }

    #[tokio::test]
    async fn test_initialize_twice_does_not_duplicate_rows() {
        let mut test_ctx = TestContext::new().await;
        test_ctx
            .mock_list_cars(vec![sample_car("AAA-0001"), sample_car("BBB-0002")])
            .await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;
        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;

        assert_eq!(test_ctx.plates(), ["AAA-0001", "BBB-0002"]);
    }

    #[tokio::test]
    async fn test_submit_accepted_appends_row_and_removes_placeholder() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_list_cars(Vec::new()).await;
        let car = sample_car("NEW-2024");
        test_ctx
            .mock_create_car(
                &car,
                ResponseTemplate::new(200).set_body_json(success_envelope("created")),
            )
            .await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;
        assert!(test_ctx.controller.table().placeholder().is_some());

        {
            let form = test_ctx.controller.form_mut();
            form.image = car.image.clone();
            form.brand_model = car.brand_model.clone();
            form.year = car.year.clone();
            form.plate = car.plate.clone();
            form.color = car.color.clone();
        }
        test_ctx.controller.submit_new_car();
        test_ctx.flush_and_wait().await;

        assert!(test_ctx.controller.table().placeholder().is_none());
        assert_eq!(test_ctx.plates(), ["NEW-2024"]);
        assert!(test_ctx.controller.table().delete_handler("NEW-2024").is_some());
        assert_eq!(test_ctx.controller.form().plate, "");
    }

    #[tokio::test]
    async fn test_submit_rejected_leaves_rows_and_form() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_list_cars(vec![sample_car("AAA-0001")]).await;
        let car = sample_car("AAA-0001");
        test_ctx
            .mock_create_car(
                &car,
                ResponseTemplate::new(200).set_body_json(error_envelope("Placa já cadastrada")),
            )
            .await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;

        {
            let form = test_ctx.controller.form_mut();
            form.image = car.image.clone();
            form.brand_model = car.brand_model.clone();
            form.year = car.year.clone();
            form.plate = car.plate.clone();
            form.color = car.color.clone();
        }
        test_ctx.controller.submit_new_car();
        test_ctx.flush_and_wait().await;

        assert_eq!(test_ctx.plates(), ["AAA-0001"]);
        assert_eq!(test_ctx.controller.form().plate, "AAA-0001");
        assert_eq!(
            test_ctx.controller.banner().message(),
            Some("Placa já cadastrada")
        );
    }

    #[tokio::test]
    async fn test_delete_accepted_removes_only_that_row() {
        let mut test_ctx = TestContext::new().await;
        test_ctx
            .mock_list_cars(vec![
                sample_car("AAA-0001"),
                sample_car("BBB-0002"),
                sample_car("CCC-0003"),
            ])
            .await;
        test_ctx
            .mock_delete_car(
                "BBB-0002",
                ResponseTemplate::new(200).set_body_json(success_envelope("deleted")),
            )
            .await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;

        assert!(test_ctx.controller.delete_car("BBB-0002"));
        test_ctx.flush_and_wait().await;

        assert_eq!(test_ctx.plates(), ["AAA-0001", "CCC-0003"]);
        assert!(test_ctx.controller.table().delete_handler("BBB-0002").is_none());
    }

    #[tokio::test]
    async fn test_delete_last_row_restores_placeholder() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_list_cars(vec![sample_car("AAA-0001")]).await;
        test_ctx
            .mock_delete_car("AAA-0001", ResponseTemplate::new(204))
            .await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;
        test_ctx.controller.delete_car("AAA-0001");
        test_ctx.flush_and_wait().await;

        assert!(test_ctx.controller.table().placeholder().is_some());
    }

    #[tokio::test]
    async fn test_delete_rejected_keeps_row() {
        let mut test_ctx = TestContext::new().await;
        test_ctx.mock_list_cars(vec![sample_car("AAA-0001")]).await;
        test_ctx
            .mock_delete_car(
                "AAA-0001",
                ResponseTemplate::new(404).set_body_json(error_envelope("Carro não encontrado")),
            )
            .await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;
        test_ctx.controller.delete_car("AAA-0001");
        test_ctx.flush_and_wait().await;

        assert_eq!(test_ctx.plates(), ["AAA-0001"]);
        assert_eq!(
            test_ctx.controller.banner().message(),
            Some("Carro não encontrado")
        );
    }

    #[tokio::test]
    async fn test_concurrent_deletes_of_different_rows() {
        let mut test_ctx = TestContext::new().await;
        test_ctx
            .mock_list_cars(vec![sample_car("AAA-0001"), sample_car("BBB-0002")])
            .await;
        test_ctx
            .mock_delete_car("AAA-0001", ResponseTemplate::new(200))
            .await;
        test_ctx
            .mock_delete_car("BBB-0002", ResponseTemplate::new(200))
            .await;

        test_ctx.controller.initialize();
        test_ctx.flush_and_wait().await;

        test_ctx.controller.delete_car("AAA-0001");
        test_ctx.controller.delete_car("BBB-0002");
        assert_eq!(test_ctx.controller.task_count(), 2);
        test_ctx.flush_and_wait().await;

        assert!(test_ctx.controller.table().placeholder().is_some());
    }
}
