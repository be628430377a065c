//! In-memory vehicle inventory with write-through persistence
//!
//! Every mutating operation works on a staged copy of the collection, writes
//! that copy to the backing file, and only then replaces the live collection.
//! A failed write leaves memory exactly as it was after the last successful
//! save.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::codec;
use crate::error::{RentalError, Result};
use crate::record::{self, VehicleRecord};

/// Owns the ordered collection of vehicle records
#[derive(Debug)]
pub struct VehicleStore {
    path: PathBuf,
    records: Vec<VehicleRecord>,
    capacity: Option<usize>,
    skipped_on_load: usize,
}

impl VehicleStore {
    /// Create an empty, unbounded store backed by `path`
    ///
    /// Nothing is read until [`VehicleStore::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            capacity: None,
            skipped_on_load: 0,
        }
    }

    /// Limit the number of records `add` will accept
    pub fn with_capacity_limit(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    /// Create a store and load its backing file
    pub fn open(path: impl Into<PathBuf>, capacity: Option<usize>) -> Result<Self> {
        let mut store = Self::new(path).with_capacity_limit(capacity);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Malformed lines dropped by the most recent load
    pub fn skipped_on_load(&self) -> usize {
        self.skipped_on_load
    }

    /// Replace the collection with the contents of the backing file
    ///
    /// A missing file yields an empty store. Returns the number of records
    /// loaded.
    pub fn load(&mut self) -> Result<usize> {
        let decoded = codec::load_file(&self.path)?;

        if decoded.skipped > 0 {
            warn!(
                "skipped {} malformed line(s) in {}",
                decoded.skipped,
                self.path.display()
            );
        }

        self.records = decoded.records;
        self.skipped_on_load = decoded.skipped;
        debug!("loaded {} car(s) from {}", self.records.len(), self.path.display());
        Ok(self.records.len())
    }

    /// Overwrite the backing file with the current collection
    pub fn save(&self) -> Result<()> {
        self.persist(&self.records)
    }

    /// All records in storage order
    pub fn list(&self) -> &[VehicleRecord] {
        &self.records
    }

    /// Index of the record with `id`
    pub fn find_by_id(&self, id: u32) -> Option<usize> {
        self.records.iter().position(|car| car.id == id)
    }

    /// Record with `id`
    pub fn get(&self, id: u32) -> Result<&VehicleRecord> {
        self.find_by_id(id)
            .map(|index| &self.records[index])
            .ok_or(RentalError::NotFound(id))
    }

    /// Register a new available car and return it
    pub fn add(&mut self, make: &str, model: &str, year: i32, daily_rate: f64) -> Result<VehicleRecord> {
        if let Some(capacity) = self.capacity {
            if self.records.len() >= capacity {
                return Err(RentalError::CapacityExceeded(capacity));
            }
        }

        let make = record::validate_text("make", make)?;
        let model = record::validate_text("model", model)?;
        let daily_rate = record::validate_rate(daily_rate)?;

        let car = VehicleRecord::new(self.next_id()?, make, model, year, daily_rate);
        let added = car.clone();
        self.commit(|records| {
            records.push(car);
            Ok(())
        })?;

        info!("added car {} ({} {})", added.id, added.make, added.model);
        Ok(added)
    }

    /// Rent an available car, returning the total cost
    pub fn rent(&mut self, id: u32, days: i64, renter_name: &str, renter_id: &str) -> Result<f64> {
        let index = self.find_by_id(id).ok_or(RentalError::NotFound(id))?;
        if !self.records[index].available {
            return Err(RentalError::AlreadyRented(id));
        }

        let days = u32::try_from(days)
            .ok()
            .filter(|&d| d > 0)
            .ok_or(RentalError::InvalidDuration(days))?;
        let renter_name = record::validate_text("renter name", renter_name)?;
        let renter_id = record::validate_text("renter ID", renter_id)?;

        let total_cost = self.commit(|records| records[index].rent(days, renter_name, renter_id))?;

        info!("rented car {} for {} day(s), total {:.2}", id, days, total_cost);
        Ok(total_cost)
    }

    /// Return a rented car, making it available again
    pub fn return_car(&mut self, id: u32) -> Result<()> {
        let index = self.find_by_id(id).ok_or(RentalError::NotFound(id))?;
        if self.records[index].available {
            return Err(RentalError::NotRented(id));
        }

        self.commit(|records| {
            records[index].release();
            Ok(())
        })?;

        info!("returned car {}", id);
        Ok(())
    }

    /// Remove a car, keeping the remaining records in order
    pub fn delete(&mut self, id: u32) -> Result<VehicleRecord> {
        let index = self.find_by_id(id).ok_or(RentalError::NotFound(id))?;
        let removed = self.commit(|records| Ok(records.remove(index)))?;

        info!("deleted car {}", id);
        Ok(removed)
    }

    /// One past the largest id in use
    fn next_id(&self) -> Result<u32> {
        self.records
            .iter()
            .map(|car| car.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(RentalError::IdsExhausted)
    }

    /// Apply `change` to a copy, persist the copy, then adopt it
    fn commit<T, F>(&mut self, change: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<VehicleRecord>) -> Result<T>,
    {
        let mut staged = self.records.clone();
        let outcome = change(&mut staged)?;
        self.persist(&staged)?;
        self.records = staged;
        Ok(outcome)
    }

    fn persist(&self, records: &[VehicleRecord]) -> Result<()> {
        debug!("saving {} car(s) to {}", records.len(), self.path.display());
        codec::save_file(&self.path, records)?;
        Ok(())
    }
}
