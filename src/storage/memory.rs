// Memory storage implementation
// Author: Gabriel Demetrios Lafis

use crate::data::TripTable;
use super::{normalize_city, StorageError, TripSource};

/// In-memory trip tables keyed by city, for fixtures and demos
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    tables: Vec<(String, TripTable)>,
}

impl MemoryStorage {
    /// Create a new empty memory storage
    pub fn new() -> Self {
        MemoryStorage { tables: Vec::new() }
    }

    /// Register or replace a city's table
    pub fn insert(&mut self, city: &str, table: TripTable) {
        let city = normalize_city(city);
        match self.tables.iter_mut().find(|(name, _)| *name == city) {
            Some((_, existing)) => *existing = table,
            None => self.tables.push((city, table)),
        }
    }

    /// Builder form of [`MemoryStorage::insert`]
    pub fn with_city(mut self, city: &str, table: TripTable) -> Self {
        self.insert(city, table);
        self
    }
}

impl TripSource for MemoryStorage {
    fn load(&self, city: &str) -> Result<TripTable, StorageError> {
        let wanted = normalize_city(city);
        self.tables
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, table)| table.clone())
            .ok_or_else(|| StorageError::UnknownCity(city.to_string()))
    }

    fn cities(&self) -> Vec<String> {
        self.tables.iter().map(|(name, _)| name.clone()).collect()
    }
}
