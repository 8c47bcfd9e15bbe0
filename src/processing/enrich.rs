// Temporal enrichment of trip records
// Author: Gabriel Demetrios Lafis

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

use crate::data::{Metadata, Schema, TripRecord, TripTable};
use super::ProcessingError;

/// Start time layouts accepted by the enricher, tried in order
pub const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// English month names, indexed by month number minus one
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Get the English name of a 1-based month number
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

/// Day of the week, named the way the trip datasets name them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Title-cased English name
    pub fn name(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DayOfWeek::ALL
            .iter()
            .copied()
            .find(|day| day.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ProcessingError::InvalidDay(s.to_string()))
    }
}

/// A trip with its start time parsed and calendar fields derived
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub record: TripRecord,
    pub start: NaiveDateTime,
    /// Month number, 1 = January
    pub month: u32,
    pub day_of_week: DayOfWeek,
}

impl EnrichedRecord {
    /// Parse the record's start time and derive month and weekday
    pub fn from_record(record: &TripRecord) -> Result<Self, ProcessingError> {
        let start = parse_timestamp(&record.start_time).ok_or_else(|| {
            ProcessingError::TimestampParse {
                row: record.row,
                value: record.start_time.clone(),
            }
        })?;

        Ok(EnrichedRecord {
            record: record.clone(),
            start,
            month: start.month(),
            day_of_week: DayOfWeek::from_weekday(start.weekday()),
        })
    }

    /// Start hour, 0-23
    pub fn hour(&self) -> u32 {
        self.start.hour()
    }
}

/// Trips with derived calendar fields, in source order
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTable {
    pub schema: Schema,
    pub records: Vec<EnrichedRecord>,
    pub metadata: Metadata,
}

impl EnrichedTable {
    /// Create a new empty table
    pub fn new(schema: Schema) -> Self {
        EnrichedTable {
            schema,
            records: Vec::new(),
            metadata: Metadata::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnrichedRecord> {
        self.records.iter()
    }
}

/// Parse a start time using the first matching layout
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Enrich every record of a table. The first unparseable start time aborts the whole table.
pub fn enrich(table: &TripTable) -> Result<EnrichedTable, ProcessingError> {
    let records = table
        .records
        .iter()
        .map(EnrichedRecord::from_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EnrichedTable {
        schema: table.schema,
        records,
        metadata: table.metadata.clone(),
    })
}
