// City registry mapping city names to data files
// Author: Gabriel Demetrios Lafis

use serde::{Deserialize, Serialize};

use super::StorageError;

/// A supported city and the file holding its trips
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityEntry {
    pub name: String,
    pub file: String,
}

impl CityEntry {
    pub fn new(name: &str, file: &str) -> Self {
        CityEntry {
            name: normalize_city(name),
            file: file.to_string(),
        }
    }
}

/// Closed set of supported cities, looked up case-insensitively
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRegistry {
    entries: Vec<CityEntry>,
}

impl CityRegistry {
    /// Create a registry from entries. Later duplicates of a name are dropped.
    pub fn new(entries: Vec<CityEntry>) -> Self {
        let mut registry = CityRegistry {
            entries: Vec::with_capacity(entries.len()),
        };

        for entry in entries {
            let entry = CityEntry::new(&entry.name, &entry.file);
            if !registry.contains(&entry.name) {
                registry.entries.push(entry);
            }
        }

        registry
    }

    /// The three reference cities
    pub fn reference_cities() -> Vec<CityEntry> {
        vec![
            CityEntry::new("chicago", "chicago.csv"),
            CityEntry::new("new york city", "new_york_city.csv"),
            CityEntry::new("washington", "washington.csv"),
        ]
    }

    /// Find the entry for a city
    pub fn resolve(&self, city: &str) -> Result<&CityEntry, StorageError> {
        let wanted = normalize_city(city);
        self.entries
            .iter()
            .find(|entry| entry.name == wanted)
            .ok_or_else(|| StorageError::UnknownCity(city.to_string()))
    }

    pub fn contains(&self, city: &str) -> bool {
        let wanted = normalize_city(city);
        self.entries.iter().any(|entry| entry.name == wanted)
    }

    /// City names in registration order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CityRegistry {
    fn default() -> Self {
        CityRegistry::new(Self::reference_cities())
    }
}

/// Lower-case a city name and collapse inner whitespace
pub fn normalize_city(city: &str) -> String {
    city.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
