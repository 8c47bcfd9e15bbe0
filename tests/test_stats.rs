// Aggregation tests
// Author: Gabriel Demetrios Lafis

mod common;

use bikeshare_explorer::{
    data::{CsvSource, Schema, TripRecord, TripTable},
    processing::{
        duration_stats, enrich, filter, mode_of, station_stats, time_stats, user_stats,
        DaySelector, DayOfWeek, Demographic, EnrichedTable, Frequency, MonthSelector, StationPair,
        TripStats, ValueCounts,
    },
};

use common::{three_trips, CHICAGO_CSV, NEW_YORK_CSV, WASHINGTON_CSV};

fn january(table: &TripTable) -> EnrichedTable {
    filter(&enrich(table).unwrap(), &MonthSelector::Month(1), &DaySelector::All).unwrap()
}

#[test]
fn test_value_counts_tie_break_is_first_seen() {
    let counts: ValueCounts<&str> = vec!["b", "a", "a", "b", "c"].into_iter().collect();

    assert_eq!(counts.mode(), Some(Frequency::new("b", 2)));
    assert_eq!(counts.total(), 5);
    assert_eq!(counts.len(), 3);
    assert_eq!(counts.get(&"a"), 2);
    assert_eq!(counts.get(&"z"), 0);
    assert_eq!(
        counts.ranked(),
        vec![
            Frequency::new("b", 2),
            Frequency::new("a", 2),
            Frequency::new("c", 1),
        ]
    );
}

#[test]
fn test_mode_of_empty_is_none() {
    assert_eq!(mode_of(Vec::<u32>::new()), None);
    assert!(ValueCounts::<u32>::new().is_empty());
}

#[test]
fn test_time_stats_resolves_hour_tie_to_first_occurrence() {
    let stats = time_stats(&january(&three_trips()));

    assert_eq!(stats.month, Some(Frequency::new(1, 2)));
    assert_eq!(stats.day_of_week, Some(Frequency::new(DayOfWeek::Sunday, 2)));
    assert_eq!(stats.start_hour, Some(Frequency::new(8, 1)));
}

#[test]
fn test_time_stats_over_unfiltered_table() {
    let stats = time_stats(&enrich(&three_trips()).unwrap());

    assert_eq!(stats.month, Some(Frequency::new(1, 2)));
    assert_eq!(stats.start_hour, Some(Frequency::new(8, 2)));
}

#[test]
fn test_station_stats() {
    let stats = station_stats(&enrich(&three_trips()).unwrap());

    assert_eq!(stats.start_station, Some(Frequency::new("Canal St".to_string(), 2)));
    assert_eq!(stats.end_station, Some(Frequency::new("Clark St".to_string(), 2)));
    // all three pairs are distinct, so the first one wins
    assert_eq!(
        stats.trip,
        Some(Frequency::new(
            StationPair {
                start: "Canal St".to_string(),
                end: "Clark St".to_string(),
            },
            1
        ))
    );
}

#[test]
fn test_station_pair_counts_combined_key() {
    let table = TripTable::from_records(
        Schema::basic(),
        vec![
            TripRecord::new("2017-01-01 08:00:00", "A", "B", 1.0, "Subscriber"),
            TripRecord::new("2017-01-01 08:00:00", "C", "D", 1.0, "Subscriber"),
            TripRecord::new("2017-01-01 08:00:00", "C", "D", 1.0, "Subscriber"),
            TripRecord::new("2017-01-01 08:00:00", "A", "D", 1.0, "Subscriber"),
        ],
    )
    .unwrap();

    let stats = station_stats(&enrich(&table).unwrap());
    let trip = stats.trip.unwrap();

    assert_eq!(trip.value.start, "C");
    assert_eq!(trip.value.end, "D");
    assert_eq!(trip.count, 2);
}

#[test]
fn test_duration_stats_hand_computed() {
    let stats = duration_stats(&enrich(&three_trips()).unwrap());

    assert_eq!(stats.trips, 3);
    assert_eq!(stats.total_seconds, 1800.0);
    assert_eq!(stats.mean_seconds, Some(600.0));

    let stats = duration_stats(&january(&three_trips()));
    assert_eq!(stats.total_seconds, 900.0);
    assert_eq!(stats.mean_seconds, Some(450.0));
}

#[test]
fn test_duration_stats_fractional_seconds() {
    let table = CsvSource::read_from(WASHINGTON_CSV.as_bytes(), b',').unwrap();
    let stats = duration_stats(&enrich(&table).unwrap());

    assert!((stats.total_seconds - 891.615).abs() < 1e-9);
    assert!((stats.mean_seconds.unwrap() - 445.8075).abs() < 1e-9);
}

#[test]
fn test_user_stats_counts_cover_every_row() {
    let enriched = enrich(&three_trips()).unwrap();
    let stats = user_stats(&enriched);

    assert_eq!(
        stats.user_types,
        vec![
            Frequency::new("Subscriber".to_string(), 2),
            Frequency::new("Customer".to_string(), 1),
        ]
    );
    let total: usize = stats.user_types.iter().map(|f| f.count).sum();
    assert_eq!(total, enriched.len());

    assert_eq!(
        stats.gender,
        Demographic::Available(vec![
            Frequency::new("Female".to_string(), 2),
            Frequency::new("Male".to_string(), 1),
        ])
    );

    let years = stats.birth_year.as_option().unwrap();
    assert_eq!(years.earliest, Some(1985));
    assert_eq!(years.most_recent, Some(1990));
    assert_eq!(years.most_common, Some(Frequency::new(1990, 2)));
}

#[test]
fn test_user_stats_skips_blank_demographics() {
    let table = CsvSource::read_from(CHICAGO_CSV.as_bytes(), b',').unwrap();
    let stats = user_stats(&enrich(&table).unwrap());

    let total: usize = stats.user_types.iter().map(|f| f.count).sum();
    assert_eq!(total, 4);

    let genders = stats.gender.as_option().unwrap();
    assert_eq!(genders.iter().map(|f| f.count).sum::<usize>(), 3);

    let years = stats.birth_year.as_option().unwrap();
    assert_eq!(years.earliest, Some(1981));
    assert_eq!(years.most_recent, Some(1992));
    assert_eq!(years.most_common, Some(Frequency::new(1992, 2)));
}

#[test]
fn test_user_stats_keeps_blank_user_type() {
    let table = CsvSource::read_from(NEW_YORK_CSV.as_bytes(), b',').unwrap();
    let stats = user_stats(&enrich(&table).unwrap());

    assert_eq!(
        stats.user_types,
        vec![
            Frequency::new("Subscriber".to_string(), 2),
            Frequency::new(String::new(), 1),
        ]
    );
    assert_eq!(stats.user_types.iter().map(|f| f.count).sum::<usize>(), table.len());

    let genders = stats.gender.as_option().unwrap();
    assert_eq!(genders, &vec![Frequency::new("Male".to_string(), 2)]);
}

#[test]
fn test_user_stats_unavailable_without_columns() {
    let table = CsvSource::read_from(WASHINGTON_CSV.as_bytes(), b',').unwrap();
    let stats = user_stats(&enrich(&table).unwrap());

    assert_eq!(stats.gender, Demographic::Unavailable);
    assert_eq!(stats.birth_year, Demographic::Unavailable);
    assert!(!stats.gender.is_available());
    assert_eq!(stats.user_types, vec![Frequency::new("Subscriber".to_string(), 2)]);
}

#[test]
fn test_empty_table_reports_no_data() {
    let enriched = enrich(&three_trips()).unwrap();
    let empty = filter(&enriched, &MonthSelector::Month(6), &DaySelector::All).unwrap();
    assert!(empty.is_empty());

    let stats = TripStats::compute(&empty);

    assert_eq!(stats.time.month, None);
    assert_eq!(stats.time.day_of_week, None);
    assert_eq!(stats.time.start_hour, None);
    assert_eq!(stats.stations.start_station, None);
    assert_eq!(stats.stations.end_station, None);
    assert_eq!(stats.stations.trip, None);
    assert_eq!(stats.duration.trips, 0);
    assert_eq!(stats.duration.total_seconds, 0.0);
    assert_eq!(stats.duration.mean_seconds, None);
    assert!(stats.users.user_types.is_empty());

    // Columns exist, so the demographic groups are available but empty
    assert_eq!(stats.users.gender, Demographic::Available(Vec::new()));
    let years = stats.users.birth_year.as_option().unwrap();
    assert_eq!(years.earliest, None);
    assert_eq!(years.most_common, None);
}

#[test]
fn test_trip_stats_serializes_to_json() {
    let stats = TripStats::compute(&january(&three_trips()));
    let json = serde_json::to_value(&stats).unwrap();

    assert_eq!(json["time"]["start_hour"]["value"], 8);
    assert_eq!(json["time"]["day_of_week"]["value"], "Sunday");
    assert_eq!(json["users"]["gender"]["status"], "available");
    assert_eq!(json["duration"]["total_seconds"], 900.0);
}
