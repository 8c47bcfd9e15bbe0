// Text rendering of statistics and raw pages
// Author: Gabriel Demetrios Lafis

use std::fmt::Write;

use crate::data::{Schema, TripRecord};
use crate::processing::{
    month_name, BirthYearStats, Demographic, DurationStats, Frequency, Page, StationStats,
    TimeStats, UserStats,
};

/// Shown in place of a "most frequent" value when no trip matched
pub const NO_DATA: &str = "no data for the selected filters";

/// Horizontal rule between report sections
pub fn separator() -> String {
    "-".repeat(40)
}

/// Upper-case the first letter of every word
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render seconds as `H:MM:SS`, with a leading day count past 24 hours
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;

    match days {
        0 => format!("{}:{:02}:{:02}", hours, minutes, secs),
        1 => format!("1 day, {}:{:02}:{:02}", hours, minutes, secs),
        _ => format!("{} days, {}:{:02}:{:02}", days, hours, minutes, secs),
    }
}

fn describe<T>(mode: &Option<Frequency<T>>, label: impl Fn(&T) -> String) -> String {
    match mode {
        Some(f) => format!("{} (count: {})", label(&f.value), f.count),
        None => NO_DATA.to_string(),
    }
}

pub fn render_time_stats(stats: &TimeStats) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "The Most Common Month is: {}",
        describe(&stats.month, |m| month_name(*m).unwrap_or("Unknown").to_string())
    );
    let _ = writeln!(
        out,
        "The Most Common Day is: {}",
        describe(&stats.day_of_week, |d| d.to_string())
    );
    let _ = writeln!(
        out,
        "The Most Common Hour is: {}",
        describe(&stats.start_hour, |h| h.to_string())
    );
    out
}

pub fn render_station_stats(stats: &StationStats) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "The Most Common Start Station is: {}",
        describe(&stats.start_station, |s| s.clone())
    );
    let _ = writeln!(
        out,
        "The Most Common End Station is: {}",
        describe(&stats.end_station, |s| s.clone())
    );
    let _ = writeln!(
        out,
        "The Most Frequent Trip is: {}",
        describe(&stats.trip, |p| format!("{} -> {}", p.start, p.end))
    );
    out
}

pub fn render_duration_stats(stats: &DurationStats) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total Trip Duration: {:.2} seconds ({}) over {} trips.",
        stats.total_seconds,
        format_duration(stats.total_seconds),
        stats.trips
    );
    match stats.mean_seconds {
        Some(mean) => {
            let _ = writeln!(
                out,
                "Average Travel Time: {:.2} seconds ({}).",
                mean,
                format_duration(mean)
            );
        }
        None => {
            let _ = writeln!(out, "Average Travel Time: {}.", NO_DATA);
        }
    }
    out
}

fn render_counts(out: &mut String, counts: &[Frequency<String>]) {
    if counts.is_empty() {
        let _ = writeln!(out, "  {}", NO_DATA);
    }
    for entry in counts {
        let label = if entry.value.is_empty() {
            "(unspecified)"
        } else {
            entry.value.as_str()
        };
        let _ = writeln!(out, "  {:<20} {}", label, entry.count);
    }
}

fn render_birth_years(out: &mut String, years: &BirthYearStats) {
    let year = |y: Option<i32>| y.map_or_else(|| NO_DATA.to_string(), |y| y.to_string());
    let _ = writeln!(out, "Earliest Year of Birth: {}", year(years.earliest));
    let _ = writeln!(out, "Most Recent Year of Birth: {}", year(years.most_recent));
    let _ = writeln!(
        out,
        "Most Common Year of Birth: {}",
        describe(&years.most_common, |y| y.to_string())
    );
}

pub fn render_user_stats(stats: &UserStats) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "User Types Counts:");
    render_counts(&mut out, &stats.user_types);

    match &stats.gender {
        Demographic::Available(counts) => {
            let _ = writeln!(out, "\nGender Counts:");
            render_counts(&mut out, counts);
        }
        Demographic::Unavailable => {
            let _ = writeln!(out, "\nNo Gender Data available for the selected city.");
        }
    }

    match &stats.birth_year {
        Demographic::Available(years) => {
            let _ = writeln!(out);
            render_birth_years(&mut out, years);
        }
        Demographic::Unavailable => {
            let _ = writeln!(out, "No Year of Birth available for the selected city.");
        }
    }

    out
}

fn record_cells(record: &TripRecord, schema: &Schema) -> Vec<String> {
    let mut cells = vec![
        record.row.to_string(),
        record.start_time.clone(),
        record.end_time.clone(),
        record.trip_duration.to_string(),
        record.start_station.clone(),
        record.end_station.clone(),
        record.user_type.clone(),
    ];
    if schema.has_gender() {
        cells.push(record.gender.clone().unwrap_or_default());
    }
    if schema.has_birth_year() {
        cells.push(record.birth_year.map(|y| y.to_string()).unwrap_or_default());
    }
    cells
}

/// Render a page of raw trips as a pipe-separated table
pub fn render_page(page: &Page<'_>, schema: &Schema) -> String {
    let mut out = String::new();

    if page.rows.is_empty() {
        let _ = writeln!(out, "No more raw data to display.");
        return out;
    }

    let mut headers = vec![
        "Row",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if schema.has_gender() {
        headers.push("Gender");
    }
    if schema.has_birth_year() {
        headers.push("Birth Year");
    }

    let _ = writeln!(out, "{}", headers.join(" | "));
    let _ = writeln!(out, "{}", vec!["----"; headers.len()].join("-+-"));

    for record in page.rows {
        let _ = writeln!(out, "{}", record_cells(record, schema).join(" | "));
    }

    out
}
