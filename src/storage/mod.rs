// Storage module: per-city trip tables
// Author: Gabriel Demetrios Lafis

mod file;
mod memory;
mod registry;

pub use file::*;
pub use memory::*;
pub use registry::*;

use thiserror::Error;

use crate::data::{DataError, TripTable};

/// Loads the full trip table of a supported city
pub trait TripSource {
    /// Load every trip for a city, matched case-insensitively
    fn load(&self, city: &str) -> Result<TripTable, StorageError>;

    /// Names of the cities this source can load
    fn cities(&self) -> Vec<String>;
}

/// Represents an error in the storage module
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unknown city '{0}'")]
    UnknownCity(String),

    #[error("Data file '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Data(#[from] DataError),
}
