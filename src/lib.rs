// Bikeshare Explorer
// Author: Gabriel Demetrios Lafis

//! # Bikeshare Explorer
//!
//! Descriptive statistics over US bikeshare trip data.
//!
//! ## Features
//!
//! - Loading per-city trip files through a configurable city registry
//! - Deriving month and day of week from each trip's start time
//! - Filtering by month (January to June) and day of week
//! - Popular times, popular stations, trip durations and rider demographics
//! - Paging through raw trips
//! - An interactive command line session
//!
//! ## Example
//!
//! ```rust
//! use bikeshare_explorer::{
//!     data::{Schema, TripRecord, TripTable},
//!     processing::{FilterSpec, Pipeline, TripStats},
//! };
//!
//! let table = TripTable::from_records(Schema::basic(), vec![
//!     TripRecord::new("2017-01-01 08:00:00", "Canal St", "Clark St", 600.0, "Subscriber"),
//!     TripRecord::new("2017-01-01 09:00:00", "Canal St", "State St", 300.0, "Customer"),
//!     TripRecord::new("2017-02-01 08:00:00", "Lake St", "Clark St", 900.0, "Subscriber"),
//! ]).unwrap();
//!
//! let spec = FilterSpec::parse("chicago", "january", "all").unwrap();
//! let filtered = Pipeline::from_spec(&spec).unwrap().execute(&table).unwrap();
//! let stats = TripStats::compute(&filtered);
//!
//! assert_eq!(filtered.len(), 2);
//! assert_eq!(stats.time.start_hour.unwrap().value, 8);
//! assert_eq!(stats.duration.total_seconds, 900.0);
//! ```

pub mod data;
pub mod processing;
pub mod storage;
pub mod cli;
pub mod utils;

// Re-export main types
pub use data::{Schema, TripRecord, TripTable};
pub use processing::{FilterSpec, Pipeline, RawPaginator, TripStats};
pub use storage::{CityRegistry, FileStorage, MemoryStorage, TripSource};
pub use utils::Config;
