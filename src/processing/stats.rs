// Descriptive statistics over filtered trips
// Author: Gabriel Demetrios Lafis

use serde::Serialize;

use super::{mode_of, DayOfWeek, EnrichedTable, Frequency, ValueCounts};

/// Most frequent times of travel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    /// Month number, 1 = January
    pub month: Option<Frequency<u32>>,
    pub day_of_week: Option<Frequency<DayOfWeek>>,
    /// Start hour, 0-23
    pub start_hour: Option<Frequency<u32>>,
}

/// A start and end station treated as one trip key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

/// Most popular stations and trip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub start_station: Option<Frequency<String>>,
    pub end_station: Option<Frequency<String>>,
    pub trip: Option<Frequency<StationPair>>,
}

/// Total and average trip duration, in seconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_seconds: f64,
    /// `None` when there are no trips
    pub mean_seconds: Option<f64>,
}

/// A demographic statistic for a column some cities do not collect
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Demographic<T> {
    Available(T),
    Unavailable,
}

impl<T> Demographic<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Demographic::Available(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Demographic::Available(value) => Some(value),
            Demographic::Unavailable => None,
        }
    }
}

/// Earliest, most recent and most common year of birth
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<Frequency<i32>>,
}

/// Breakdown of riders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    /// Every distinct user type, most frequent first
    pub user_types: Vec<Frequency<String>>,
    pub gender: Demographic<Vec<Frequency<String>>>,
    pub birth_year: Demographic<BirthYearStats>,
}

/// All four statistic groups for one filtered table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripStats {
    pub time: TimeStats,
    pub stations: StationStats,
    pub duration: DurationStats,
    pub users: UserStats,
}

impl TripStats {
    pub fn compute(table: &EnrichedTable) -> Self {
        TripStats {
            time: time_stats(table),
            stations: station_stats(table),
            duration: duration_stats(table),
            users: user_stats(table),
        }
    }
}

/// Most frequent month, weekday and start hour.
///
/// With a month filter active the month is necessarily the filtered one.
pub fn time_stats(table: &EnrichedTable) -> TimeStats {
    TimeStats {
        month: mode_of(table.iter().map(|r| r.month)),
        day_of_week: mode_of(table.iter().map(|r| r.day_of_week)),
        start_hour: mode_of(table.iter().map(|r| r.hour())),
    }
}

/// Most frequent start station, end station and start/end combination
pub fn station_stats(table: &EnrichedTable) -> StationStats {
    StationStats {
        start_station: mode_of(table.iter().map(|r| r.record.start_station.clone())),
        end_station: mode_of(table.iter().map(|r| r.record.end_station.clone())),
        trip: mode_of(table.iter().map(|r| StationPair {
            start: r.record.start_station.clone(),
            end: r.record.end_station.clone(),
        })),
    }
}

/// Total and mean trip duration
pub fn duration_stats(table: &EnrichedTable) -> DurationStats {
    let trips = table.len();
    let total_seconds: f64 = table.iter().map(|r| r.record.trip_duration).sum();
    let mean_seconds = if trips > 0 {
        Some(total_seconds / trips as f64)
    } else {
        None
    };

    DurationStats {
        trips,
        total_seconds,
        mean_seconds,
    }
}

/// User type counts, plus gender and birth year where the city collects them
pub fn user_stats(table: &EnrichedTable) -> UserStats {
    let user_types: ValueCounts<String> = table.iter().map(|r| r.record.user_type.clone()).collect();

    let gender = if table.schema.has_gender() {
        let counts: ValueCounts<String> = table
            .iter()
            .filter_map(|r| r.record.gender.clone())
            .collect();
        Demographic::Available(counts.ranked())
    } else {
        Demographic::Unavailable
    };

    let birth_year = if table.schema.has_birth_year() {
        let years: Vec<i32> = table.iter().filter_map(|r| r.record.birth_year).collect();
        Demographic::Available(BirthYearStats {
            earliest: years.iter().copied().min(),
            most_recent: years.iter().copied().max(),
            most_common: mode_of(years.iter().copied()),
        })
    } else {
        Demographic::Unavailable
    };

    UserStats {
        user_types: user_types.ranked(),
        gender,
        birth_year,
    }
}
