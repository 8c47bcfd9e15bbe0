// Processing module: enrichment, filtering, aggregation and paging of trips
// Author: Gabriel Demetrios Lafis

mod aggregate;
mod enrich;
mod filter;
mod paginate;
mod stats;

pub use aggregate::*;
pub use enrich::*;
pub use filter::*;
pub use paginate::*;
pub use stats::*;

use log::debug;
use thiserror::Error;

use crate::data::TripTable;

/// Represents a processor that derives a new table from an enriched one
pub trait DataProcessor {
    /// Process a table and return a new table
    fn process(&self, input: &EnrichedTable) -> Result<EnrichedTable, ProcessingError>;

    /// Get the processor name
    fn name(&self) -> &str;
}

/// Represents an error in the processing module
#[derive(Debug, Error, PartialEq)]
pub enum ProcessingError {
    #[error("Unparseable start time at row {row}: '{value}'")]
    TimestampParse { row: usize, value: String },

    #[error("Invalid month '{0}': expected all or january through june")]
    InvalidMonth(String),

    #[error("Invalid day '{0}': expected all or a day of the week")]
    InvalidDay(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Enrichment followed by a chain of processors
pub struct Pipeline {
    name: String,
    processors: Vec<Box<dyn DataProcessor>>,
}

impl Pipeline {
    /// Create a new pipeline with the given name
    pub fn new(name: &str) -> Self {
        Pipeline {
            name: name.to_string(),
            processors: Vec::new(),
        }
    }

    /// Month then day filter for a session's filter spec
    pub fn from_spec(spec: &FilterSpec) -> Result<Self, ProcessingError> {
        Ok(Pipeline::new(&spec.city)
            .add(FilterProcessor::month(spec.month)?)
            .add(FilterProcessor::day(spec.day)))
    }

    /// Add a processor to the pipeline
    pub fn add<P: DataProcessor + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    /// Enrich a raw table and run every processor over it
    pub fn execute(&self, input: &TripTable) -> Result<EnrichedTable, ProcessingError> {
        let enriched = enrich(input)?;
        debug!("Pipeline '{}': enriched {} trips", self.name, enriched.len());
        self.apply(&enriched)
    }

    /// Run every processor over an already enriched table
    pub fn apply(&self, input: &EnrichedTable) -> Result<EnrichedTable, ProcessingError> {
        let mut current = input.clone();

        for processor in &self.processors {
            current = processor.process(&current)?;
            debug!(
                "Pipeline '{}': {} kept {} trips",
                self.name,
                processor.name(),
                current.len()
            );
        }

        Ok(current)
    }
}

impl DataProcessor for Pipeline {
    fn process(&self, input: &EnrichedTable) -> Result<EnrichedTable, ProcessingError> {
        self.apply(input)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
