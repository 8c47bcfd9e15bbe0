// Trip file schema and validation
// Author: Gabriel Demetrios Lafis

use serde::Serialize;

use super::{DataError, TripRecord};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file must carry
pub const REQUIRED_COLUMNS: [&str; 6] = [
    START_TIME,
    END_TIME,
    START_STATION,
    END_STATION,
    TRIP_DURATION,
    USER_TYPE,
];

/// Which optional demographic columns a city's file carries.
///
/// Decided once from the header row; aggregations consult the schema
/// instead of probing individual rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub gender: bool,
    pub birth_year: bool,
}

impl Schema {
    /// Create a schema with the given optional columns
    pub fn new(gender: bool, birth_year: bool) -> Self {
        Schema { gender, birth_year }
    }

    /// Schema with only the required columns
    pub fn basic() -> Self {
        Schema::new(false, false)
    }

    /// Schema with both demographic columns
    pub fn full() -> Self {
        Schema::new(true, true)
    }

    pub fn has_gender(&self) -> bool {
        self.gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.birth_year
    }
}

/// Positions of the known columns within a file's header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub start_time: usize,
    pub end_time: usize,
    pub start_station: usize,
    pub end_station: usize,
    pub trip_duration: usize,
    pub user_type: usize,
    pub gender: Option<usize>,
    pub birth_year: Option<usize>,
}

impl ColumnLayout {
    /// Resolve column positions by exact header name. Unknown columns are ignored.
    pub fn from_headers<'a, I>(headers: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let find = |name: &str| headers.iter().position(|h| *h == name);
        let require = |name: &str| find(name).ok_or_else(|| DataError::MissingColumn(name.to_string()));

        Ok(ColumnLayout {
            start_time: require(START_TIME)?,
            end_time: require(END_TIME)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            trip_duration: require(TRIP_DURATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    /// The schema implied by this layout
    pub fn schema(&self) -> Schema {
        Schema::new(self.gender.is_some(), self.birth_year.is_some())
    }
}

/// Schema validator for ensuring records conform to a table schema
pub struct SchemaValidator;

impl SchemaValidator {
    /// A record may only carry demographic values its table's schema declares
    pub fn validate_record(record: &TripRecord, schema: &Schema) -> Result<(), DataError> {
        if record.gender.is_some() && !schema.gender {
            return Err(DataError::SchemaMismatch {
                row: record.row,
                message: format!("'{}' value present but the column is absent", GENDER),
            });
        }

        if record.birth_year.is_some() && !schema.birth_year {
            return Err(DataError::SchemaMismatch {
                row: record.row,
                message: format!("'{}' value present but the column is absent", BIRTH_YEAR),
            });
        }

        Ok(())
    }
}
