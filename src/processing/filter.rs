// Month and weekday filters over enriched trips
// Author: Gabriel Demetrios Lafis

use std::str::FromStr;

use serde::Serialize;

use super::{DataProcessor, DayOfWeek, EnrichedRecord, EnrichedTable, ProcessingError};

/// Month names the filter accepts. Datasets only cover the first half of the year.
pub const SUPPORTED_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Month predicate of a filter spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthSelector {
    All,
    Month(u32),
}

impl MonthSelector {
    /// Select a month by number, 1 = January
    pub fn month(number: u32) -> Result<Self, ProcessingError> {
        let selector = MonthSelector::Month(number);
        selector.validate()?;
        Ok(selector)
    }

    /// Reject month numbers outside the supported range
    pub fn validate(&self) -> Result<(), ProcessingError> {
        match self {
            MonthSelector::Month(n) if *n == 0 || *n as usize > SUPPORTED_MONTHS.len() => {
                Err(ProcessingError::InvalidMonth(n.to_string()))
            }
            _ => Ok(()),
        }
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthSelector::All => true,
            MonthSelector::Month(n) => *n == month,
        }
    }
}

impl FromStr for MonthSelector {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(MonthSelector::All);
        }

        SUPPORTED_MONTHS
            .iter()
            .position(|name| *name == wanted)
            .map(|i| MonthSelector::Month(i as u32 + 1))
            .ok_or_else(|| ProcessingError::InvalidMonth(s.to_string()))
    }
}

/// Weekday predicate of a filter spec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DaySelector {
    All,
    Day(DayOfWeek),
}

impl DaySelector {
    pub fn matches(&self, day: DayOfWeek) -> bool {
        match self {
            DaySelector::All => true,
            DaySelector::Day(d) => *d == day,
        }
    }
}

impl FromStr for DaySelector {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(DaySelector::All)
        } else {
            s.parse::<DayOfWeek>().map(DaySelector::Day)
        }
    }
}

/// City, month and day chosen for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub city: String,
    pub month: MonthSelector,
    pub day: DaySelector,
}

impl FilterSpec {
    pub fn new(city: &str, month: MonthSelector, day: DaySelector) -> Self {
        FilterSpec {
            city: city.trim().to_lowercase(),
            month,
            day,
        }
    }

    /// Build a spec from the textual selectors a user typed
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self, ProcessingError> {
        Ok(FilterSpec::new(city, month.parse()?, day.parse()?))
    }
}

/// Keep records matching a predicate
pub struct FilterProcessor {
    name: String,
    predicate: Box<dyn Fn(&EnrichedRecord) -> bool>,
}

impl FilterProcessor {
    /// Create a new filter processor with a predicate function
    pub fn new<F>(name: &str, predicate: F) -> Self
    where
        F: Fn(&EnrichedRecord) -> bool + 'static,
    {
        FilterProcessor {
            name: name.to_string(),
            predicate: Box::new(predicate),
        }
    }

    /// Keep records whose derived month the selector matches
    pub fn month(selector: MonthSelector) -> Result<Self, ProcessingError> {
        selector.validate()?;
        Ok(Self::new("month", move |record| selector.matches(record.month)))
    }

    /// Keep records whose derived weekday the selector matches
    pub fn day(selector: DaySelector) -> Self {
        Self::new("day", move |record| selector.matches(record.day_of_week))
    }
}

impl DataProcessor for FilterProcessor {
    fn process(&self, input: &EnrichedTable) -> Result<EnrichedTable, ProcessingError> {
        let mut result = EnrichedTable::new(input.schema);

        result.records = input
            .records
            .iter()
            .filter(|record| (self.predicate)(record))
            .cloned()
            .collect();

        result.metadata = input.metadata.clone();

        Ok(result)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Apply month and day selectors together. The input table is left untouched.
pub fn filter(
    table: &EnrichedTable,
    month: &MonthSelector,
    day: &DaySelector,
) -> Result<EnrichedTable, ProcessingError> {
    month.validate()?;

    let mut result = EnrichedTable::new(table.schema);
    result.records = table
        .records
        .iter()
        .filter(|record| month.matches(record.month) && day.matches(record.day_of_week))
        .cloned()
        .collect();
    result.metadata = table.metadata.clone();

    Ok(result)
}
