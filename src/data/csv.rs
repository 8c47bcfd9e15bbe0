// CSV trip source implementation
// Author: Gabriel Demetrios Lafis

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::{ColumnLayout, DataError, DataSource, TripRecord, TripTable, BIRTH_YEAR, TRIP_DURATION};

/// CSV trip source
pub struct CsvSource {
    path: String,
    delimiter: u8,
}

impl CsvSource {
    /// Create a new CSV trip source
    pub fn new<P: AsRef<Path>>(path: P, delimiter: u8) -> Self {
        CsvSource {
            path: path.as_ref().to_string_lossy().to_string(),
            delimiter,
        }
    }

    /// Read trips from any reader holding CSV text with a header row
    pub fn read_from<R: Read>(reader: R, delimiter: u8) -> Result<TripTable, DataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let layout = ColumnLayout::from_headers(csv_reader.headers()?.iter())?;
        let mut table = TripTable::new(layout.schema());

        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;
            let field = |index: usize| record.get(index).unwrap_or("").trim();

            let trip_duration = parse_duration(field(layout.trip_duration), row)?;
            let gender = layout
                .gender
                .map(|i| field(i))
                .filter(|g| !g.is_empty())
                .map(str::to_string);
            let birth_year = match layout.birth_year {
                Some(i) => parse_birth_year(field(i), row)?,
                None => None,
            };

            table.add_record(TripRecord {
                row,
                start_time: field(layout.start_time).to_string(),
                end_time: field(layout.end_time).to_string(),
                start_station: field(layout.start_station).to_string(),
                end_station: field(layout.end_station).to_string(),
                trip_duration,
                user_type: field(layout.user_type).to_string(),
                gender,
                birth_year,
            })?;
        }

        Ok(table)
    }
}

impl DataSource for CsvSource {
    fn read(&self) -> Result<TripTable, DataError> {
        let file = File::open(&self.path)?;
        let mut table = Self::read_from(BufReader::new(file), self.delimiter)?;

        debug!(
            "Read {} trips from {} (gender: {}, birth year: {})",
            table.len(),
            self.path,
            table.schema.gender,
            table.schema.birth_year
        );

        // Add metadata
        table.metadata.add("source", "csv");
        table.metadata.add("path", &self.path);

        Ok(table)
    }

    fn name(&self) -> &str {
        &self.path
    }
}

fn parse_duration(value: &str, row: usize) -> Result<f64, DataError> {
    value.parse::<f64>().map_err(|e| DataError::Parse {
        row,
        column: TRIP_DURATION.to_string(),
        message: format!("'{}': {}", value, e),
    })
}

// Birth years come through as "1992" or "1992.0"; blank cells are missing values.
fn parse_birth_year(value: &str, row: usize) -> Result<Option<i32>, DataError> {
    if value.is_empty() {
        return Ok(None);
    }

    let parse_error = |message: String| DataError::Parse {
        row,
        column: BIRTH_YEAR.to_string(),
        message,
    };

    let year = value
        .parse::<f64>()
        .map_err(|e| parse_error(format!("'{}': {}", value, e)))?;

    if year.fract() != 0.0 || !year.is_finite() {
        return Err(parse_error(format!("'{}' is not a whole year", value)));
    }

    Ok(Some(year as i32))
}
