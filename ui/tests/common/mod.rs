use std::time::Duration;

use cars_business::CarRecord;
use cars_ui::CarsApp;
use cars_ui::state::State;
use egui_kittest::Harness;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Frames rendered between two network polls.
const FRAMES_PER_POLL: usize = 2;

pub struct TestCtx<'a> {
    mock_server: MockServer,
    harness: Harness<'a, CarsApp>,
}

impl<'a> TestCtx<'a> {
    /// Starts the app against a mock API whose `GET /cars` answers `cars`.
    pub async fn new_app(cars: Vec<CarRecord>) -> Self {
        Self::new_app_with_list(ResponseTemplate::new(200).set_body_json(cars)).await
    }

    pub async fn new_app_with_list(list: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cars"))
            .respond_with(list)
            .mount(&mock_server)
            .await;

        let app = CarsApp::new(State::test(mock_server.uri()));
        let harness = Harness::new_eframe(|_| app);

        Self {
            mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, CarsApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, CarsApp> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    /// Renders frames until every API call has been applied.
    pub async fn settle(&mut self) {
        for _ in 0..100 {
            for _ in 0..FRAMES_PER_POLL {
                self.harness.step();
            }
            if self.harness.state().state.controller.task_count() == 0 {
                self.harness.step();
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("API calls did not finish in time");
    }

    #[allow(unused)]
    pub fn plates(&self) -> Vec<String> {
        self.harness
            .state()
            .state
            .controller
            .table()
            .rows()
            .iter()
            .map(|row| row.plate().to_owned())
            .collect()
    }

    #[allow(unused)]
    pub fn fill_form(&mut self, car: &CarRecord) {
        let form = self.harness.state_mut().state.controller.form_mut();
        form.image = car.image.clone();
        form.brand_model = car.brand_model.clone();
        form.year = car.year.clone();
        form.plate = car.plate.clone();
        form.color = car.color.clone();
    }

    #[allow(unused)]
    pub async fn mock_create(&self, car: &CarRecord, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/cars"))
            .and(body_json(car))
            .respond_with(response)
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }

    #[allow(unused)]
    pub async fn mock_delete(&self, plate: &str, response: ResponseTemplate) {
        Mock::given(method("DELETE"))
            .and(path("/cars"))
            .and(body_json(json!({ "plate": plate })))
            .respond_with(response)
            .expect(1)
            .mount(&self.mock_server)
            .await;
    }
}

#[allow(unused)]
pub fn car(plate: &str, brand_model: &str) -> CarRecord {
    CarRecord {
        image: format!("https://example.com/{plate}.png"),
        brand_model: brand_model.to_owned(),
        year: "1998".to_owned(),
        plate: plate.to_owned(),
        color: "#c0c0c0".to_owned(),
    }
}

#[allow(unused)]
pub fn error_envelope(message: &str) -> Value {
    json!({ "error": true, "message": message })
}
