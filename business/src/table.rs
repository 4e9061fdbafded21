//! View-model of the cars table.
//!
//! The table is a derived view of the API: rows are kept in the order they
//! arrived and every row registers a delete handler keyed by its plate.
//! Identity lookups go through that map, never through the rendered output.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::warn;
use ustr::Ustr;

use crate::CarRecord;

/// Header labels, in column order. The last column holds the delete control.
pub const COLUMNS: [&str; 6] = ["Imagem", "Marca / Modelo", "Ano", "Placa", "Cor", "Ações"];

/// Text of the placeholder row shown when there are no cars.
pub const NO_CARS_TEXT: &str = "Nenhum carro encontrado!";

/// Identity of a rendered row. Never reused within a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarRow {
    id: RowId,
    record: CarRecord,
    delete_pending: bool,
}

impl CarRow {
    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn record(&self) -> &CarRecord {
        &self.record
    }

    pub fn plate(&self) -> &str {
        &self.record.plate
    }

    /// Whether a delete request for this row is in flight.
    pub fn is_delete_pending(&self) -> bool {
        self.delete_pending
    }
}

/// The "no cars" row. Spans every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRow {
    pub text: &'static str,
    pub colspan: usize,
}

impl Default for PlaceholderRow {
    fn default() -> Self {
        Self {
            text: NO_CARS_TEXT,
            colspan: COLUMNS.len(),
        }
    }
}

/// What the table body should show right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableView<'a> {
    /// The first fetch has not finished yet.
    Loading,
    /// The first fetch failed and nothing was added since.
    Error,
    Empty(PlaceholderRow),
    Populated(&'a [CarRow]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LoadStatus {
    #[default]
    Loading,
    Failed,
    Loaded,
}

#[derive(Debug, Default)]
pub struct CarTable {
    status: LoadStatus,
    rows: Vec<CarRow>,
    /// Registered delete handlers, plate → row.
    delete_handlers: HashMap<Ustr, RowId>,
    next_id: u64,
    is_fetching: bool,
    last_load: Option<DateTime<Utc>>,
}

impl CarTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> TableView<'_> {
        match self.status {
            LoadStatus::Loading => TableView::Loading,
            LoadStatus::Failed => TableView::Error,
            LoadStatus::Loaded if self.rows.is_empty() => {
                TableView::Empty(PlaceholderRow::default())
            }
            LoadStatus::Loaded => TableView::Populated(&self.rows),
        }
    }

    pub fn rows(&self) -> &[CarRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn placeholder(&self) -> Option<PlaceholderRow> {
        match self.view() {
            TableView::Empty(placeholder) => Some(placeholder),
            _ => None,
        }
    }

    pub fn row(&self, plate: &str) -> Option<&CarRow> {
        let id = self.delete_handler(plate)?;
        self.rows.iter().find(|row| row.id == id)
    }

    /// The row whose delete handler is registered under `plate`.
    pub fn delete_handler(&self, plate: &str) -> Option<RowId> {
        self.delete_handlers.get(&Ustr::from(plate)).copied()
    }

    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// When the last successful fetch was rendered.
    pub fn last_load(&self) -> Option<DateTime<Utc>> {
        self.last_load
    }

    /// Renders a fetched collection, dropping whatever was shown before.
    pub fn replace_all(&mut self, records: Vec<CarRecord>, now: DateTime<Utc>) {
        self.rows.clear();
        self.delete_handlers.clear();

        for record in records {
            self.upsert(record);
        }

        self.status = LoadStatus::Loaded;
        self.is_fetching = false;
        self.last_load = Some(now);
    }

    /// A failed fetch leaves rendered rows alone.
    pub fn load_failed(&mut self) {
        self.is_fetching = false;
        if self.status == LoadStatus::Loading {
            self.status = LoadStatus::Failed;
        }
    }

    /// Appends a row, which also takes the placeholder away.
    pub fn append(&mut self, record: CarRecord) -> RowId {
        self.status = LoadStatus::Loaded;
        self.upsert(record)
    }

    /// Removes the row registered under `plate` and detaches its delete handler.
    pub fn remove(&mut self, plate: &str) -> Option<CarRecord> {
        let id = self.delete_handlers.remove(&Ustr::from(plate))?;
        let index = self.rows.iter().position(|row| row.id == id)?;
        Some(self.rows.remove(index).record)
    }

    /// Flags the row as having a delete in flight.
    ///
    /// Returns `false` when there is no handler for `plate` or a delete is
    /// already pending.
    pub fn mark_delete_pending(&mut self, plate: &str) -> bool {
        match self.row_mut(plate) {
            Some(row) if !row.delete_pending => {
                row.delete_pending = true;
                true
            }
            _ => false,
        }
    }

    pub fn clear_delete_pending(&mut self, plate: &str) {
        if let Some(row) = self.row_mut(plate) {
            row.delete_pending = false;
        }
    }

    fn row_mut(&mut self, plate: &str) -> Option<&mut CarRow> {
        let id = self.delete_handler(plate)?;
        self.rows.iter_mut().find(|row| row.id == id)
    }

    /// Plates stay unique: a record for a plate already shown replaces that row.
    fn upsert(&mut self, record: CarRecord) -> RowId {
        let key = Ustr::from(record.plate.as_str());

        if let Some(&id) = self.delete_handlers.get(&key)
            && let Some(row) = self.rows.iter_mut().find(|row| row.id == id)
        {
            warn!("Plate {key} is already shown, replacing its row");
            row.record = record;
            row.delete_pending = false;
            return id;
        }

        let id = RowId(self.next_id);
        self.next_id += 1;

        self.rows.push(CarRow {
            id,
            record,
            delete_pending: false,
        });
        self.delete_handlers.insert(key, id);
        id
    }
}
