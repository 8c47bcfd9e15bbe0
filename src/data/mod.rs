// Data module for trip records and their sources
// Author: Gabriel Demetrios Lafis

mod csv;
mod schema;

pub use self::csv::*;
pub use self::schema::*;

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// Represents a source of trip records
pub trait DataSource {
    /// Read every record from the source
    fn read(&self) -> Result<TripTable, DataError>;

    /// Get the source name
    fn name(&self) -> &str;
}

/// A single bikeshare trip as read from a city file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    /// Zero-based position of the row in its source file
    pub row: usize,
    pub start_time: String,
    pub end_time: String,
    pub start_station: String,
    pub end_station: String,
    /// Trip duration in seconds
    pub trip_duration: f64,
    /// User type, empty when the cell was blank
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Create a record with the required fields set
    pub fn new(
        start_time: &str,
        start_station: &str,
        end_station: &str,
        trip_duration: f64,
        user_type: &str,
    ) -> Self {
        TripRecord {
            row: 0,
            start_time: start_time.to_string(),
            end_time: String::new(),
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            trip_duration,
            user_type: user_type.to_string(),
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_string());
        self
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }
}

/// An ordered table of trips, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub schema: Schema,
    pub records: Vec<TripRecord>,
    pub metadata: Metadata,
}

impl TripTable {
    /// Create a new empty table
    pub fn new(schema: Schema) -> Self {
        TripTable {
            schema,
            records: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    /// Build a table from records, validating each against the schema
    pub fn from_records(schema: Schema, records: Vec<TripRecord>) -> Result<Self, DataError> {
        let mut table = TripTable::new(schema);
        for record in records {
            table.add_record(record)?;
        }
        Ok(table)
    }

    /// Add a record to the table
    pub fn add_record(&mut self, record: TripRecord) -> Result<(), DataError> {
        SchemaValidator::validate_record(&record, &self.schema)?;
        self.records.push(record);
        Ok(())
    }

    /// Get the number of records in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a reference to a record by index
    pub fn get(&self, index: usize) -> Option<&TripRecord> {
        self.records.get(index)
    }
}

/// Free-form properties describing where a table came from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub properties: HashMap<String, String>,
}

impl Metadata {
    /// Create new empty metadata
    pub fn new() -> Self {
        Metadata {
            properties: HashMap::new(),
        }
    }

    /// Add a property to the metadata
    pub fn add(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    /// Get a property from the metadata
    pub fn get(&self, key: &str) -> Option<&String> {
        self.properties.get(key)
    }
}

/// Represents an error in the data module
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    #[error("Parse error at row {row}, column '{column}': {message}")]
    Parse {
        row: usize,
        column: String,
        message: String,
    },

    #[error("Record at row {row} does not match the table schema: {message}")]
    SchemaMismatch { row: usize, message: String },
}
