//! Rental car inventory backed by a pipe-delimited text file
//!
//! [`store::VehicleStore`] owns the records and persists them through
//! [`codec`] after every change.

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod output;
pub mod record;
pub mod store;

pub use error::{RentalError, Result};
pub use record::VehicleRecord;
pub use store::VehicleStore;
