// File storage implementation
// Author: Gabriel Demetrios Lafis

use std::path::{Path, PathBuf};

use log::debug;

use crate::data::{CsvSource, DataSource, TripTable};
use super::{CityRegistry, StorageError, TripSource};

/// Reads each city's trips from its CSV file under a data directory
pub struct FileStorage {
    base_dir: PathBuf,
    registry: CityRegistry,
}

impl FileStorage {
    /// Create a new file storage
    pub fn new<P: AsRef<Path>>(base_dir: P, registry: CityRegistry) -> Self {
        FileStorage {
            base_dir: base_dir.as_ref().to_path_buf(),
            registry,
        }
    }

    /// Get the path of a city's data file
    pub fn path_for(&self, city: &str) -> Result<PathBuf, StorageError> {
        let entry = self.registry.resolve(city)?;
        Ok(self.base_dir.join(&entry.file))
    }

    pub fn registry(&self) -> &CityRegistry {
        &self.registry
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl TripSource for FileStorage {
    fn load(&self, city: &str) -> Result<TripTable, StorageError> {
        let path = self.path_for(city)?;

        if !path.exists() {
            return Err(StorageError::NotFound(path.to_string_lossy().to_string()));
        }

        debug!("Loading trips for '{}' from {}", city, path.display());

        let mut table = CsvSource::new(&path, b',').read()?;
        table.metadata.add("city", &self.registry.resolve(city)?.name);

        Ok(table)
    }

    fn cities(&self) -> Vec<String> {
        self.registry.names()
    }
}
