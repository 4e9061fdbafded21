//! Keeps the cars table in sync with the cars API.
//!
//! Every operation is spawned as its own task and reports back through a
//! `flume` channel. The UI calls [`CarTableController::sync`] once per frame,
//! which applies the finished outcomes on the UI thread in arrival order.
//!
//! ```ignore
//! let mut controller = CarTableController::new(BusinessConfig::default());
//! controller.initialize();
//!
//! // every frame
//! controller.sync();
//! render(controller.table());
//! ```

use std::future::Future;

use chrono::Utc;
use flume::{Receiver, Sender};
use log::{debug, error, info, warn};

use crate::{ApiResult, BusinessConfig, CarForm, CarRecord, CarTable, ErrorBanner, api, task};

/// Outcome of a finished operation.
#[derive(Debug, Clone)]
pub enum CarTableEvent {
    Loaded(ApiResult<Vec<CarRecord>>),
    Created {
        record: CarRecord,
        result: ApiResult<()>,
    },
    Deleted {
        plate: String,
        result: ApiResult<()>,
    },
}

pub struct CarTableController {
    config: BusinessConfig,
    table: CarTable,
    banner: ErrorBanner,
    form: CarForm,
    sender: Sender<CarTableEvent>,
    receiver: Receiver<CarTableEvent>,
    in_flight: usize,
    /// Woken when an outcome arrives so the UI picks it up without input.
    repaint: Option<egui::Context>,
}

impl CarTableController {
    pub fn new(config: BusinessConfig) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            config,
            table: CarTable::new(),
            banner: ErrorBanner::default(),
            form: CarForm::default(),
            sender,
            receiver,
            in_flight: 0,
            repaint: None,
        }
    }

    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn table(&self) -> &CarTable {
        &self.table
    }

    pub fn banner(&self) -> &ErrorBanner {
        &self.banner
    }

    pub fn dismiss_error(&mut self) {
        self.banner.dismiss();
    }

    pub fn form(&self) -> &CarForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut CarForm {
        &mut self.form
    }

    /// Number of operations still in flight.
    pub fn task_count(&self) -> usize {
        self.in_flight
    }

    /// Fetches the whole collection and renders it, replacing current rows.
    pub fn initialize(&mut self) {
        info!("Loading cars from {}", self.config.cars_url());
        self.table.set_fetching();

        let config = self.config.clone();
        self.run(async move { CarTableEvent::Loaded(api::list_cars(&config).await) });
    }

    /// Sends the current form values to the API as a new car.
    pub fn submit_new_car(&mut self) {
        let record = self.form.to_record();
        info!("Creating car {}", record.plate);

        let config = self.config.clone();
        self.run(async move {
            let result = api::create_car(&config, &record).await;
            CarTableEvent::Created { record, result }
        });
    }

    /// Asks the API to delete the car shown under `plate`.
    ///
    /// Returns `false` without sending anything when no delete handler is
    /// registered for `plate` or a delete for it is already in flight.
    pub fn delete_car(&mut self, plate: &str) -> bool {
        if self.table.delete_handler(plate).is_none() {
            warn!("No delete handler registered for plate {plate}");
            return false;
        }

        if !self.table.mark_delete_pending(plate) {
            debug!("Delete for plate {plate} already in flight");
            return false;
        }

        info!("Deleting car {plate}");

        let config = self.config.clone();
        let plate = plate.to_owned();
        self.run(async move {
            let result = api::delete_car(&config, &plate).await;
            CarTableEvent::Deleted { plate, result }
        });
        true
    }

    /// Applies every outcome that arrived since the last call.
    ///
    /// Returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.receiver.try_recv() {
            self.finish(event);
            applied += 1;
        }
        applied
    }

    /// Waits for the next outcome and applies it.
    ///
    /// Returns `false` right away when nothing is in flight.
    pub async fn sync_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }

        match self.receiver.recv_async().await {
            Ok(event) => {
                self.finish(event);
                true
            }
            Err(_) => false,
        }
    }

    fn run<F>(&mut self, operation: F)
    where
        F: Future<Output = CarTableEvent> + Send + 'static,
    {
        self.in_flight += 1;

        let sender = self.sender.clone();
        let repaint = self.repaint.clone();
        task::spawn(async move {
            let event = operation.await;
            if sender.send(event).is_err() {
                debug!("Controller dropped before the outcome arrived");
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    fn finish(&mut self, event: CarTableEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.apply(event);
    }

    fn apply(&mut self, event: CarTableEvent) {
        match event {
            CarTableEvent::Loaded(Ok(records)) => {
                info!("Loaded {} cars", records.len());
                self.table.replace_all(records, Utc::now());
            }
            CarTableEvent::Loaded(Err(err)) => {
                error!("Failed to load cars: {err}");
                self.table.load_failed();
                self.banner.show(err.message);
            }
            CarTableEvent::Created {
                record,
                result: Ok(()),
            } => {
                info!("Car {} created", record.plate);
                self.table.append(record);
                self.form.reset();
            }
            CarTableEvent::Created {
                record,
                result: Err(err),
            } => {
                error!("Failed to create car {}: {err}", record.plate);
                self.banner.show(err.message);
            }
            CarTableEvent::Deleted {
                plate,
                result: Ok(()),
            } => {
                if self.table.remove(&plate).is_some() {
                    info!("Car {plate} deleted");
                } else {
                    warn!("Car {plate} deleted but no longer shown");
                }
            }
            CarTableEvent::Deleted {
                plate,
                result: Err(err),
            } => {
                error!("Failed to delete car {plate}: {err}");
                self.table.clear_delete_pending(&plate);
                self.banner.show(err.message);
            }
        }
    }
}
