// Shared test fixtures
// Author: Gabriel Demetrios Lafis

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use bikeshare_explorer::data::{Schema, TripRecord, TripTable};

/// Chicago-style file: pandas index column, gender and birth year present
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Customer,,
";

/// Washington-style file: no demographic columns, fractional durations
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
";

/// New York City-style file: one row with blank user type and demographics
pub const NEW_YORK_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0
4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Male,1981.0
2173887,2017-03-29 13:26:26,2017-03-29 13:48:31,1325,E 48 St & 3 Ave,Franklin St & W Broadway,,,
";

/// Three trips: two on Sunday 2017-01-01 (08:00, 09:00) and one on Wednesday 2017-02-01 (08:00)
pub fn three_trips() -> TripTable {
    TripTable::from_records(
        Schema::full(),
        vec![
            TripRecord::new("2017-01-01 08:00", "Canal St", "Clark St", 600.0, "Subscriber")
                .with_row(0)
                .with_gender("Male")
                .with_birth_year(1985),
            TripRecord::new("2017-01-01 09:00", "Lake St", "Clark St", 300.0, "Customer")
                .with_row(1)
                .with_gender("Female")
                .with_birth_year(1990),
            TripRecord::new("2017-02-01 08:00", "Canal St", "State St", 900.0, "Subscriber")
                .with_row(2)
                .with_gender("Female")
                .with_birth_year(1990),
        ],
    )
    .unwrap()
}

/// Seven trips on consecutive days, 2017-01-01 through 2017-01-07
pub fn seven_trips() -> TripTable {
    let records = (1..=7)
        .map(|day| {
            TripRecord::new(
                &format!("2017-01-{:02} 12:00:00", day),
                "Canal St",
                "Clark St",
                60.0 * day as f64,
                "Subscriber",
            )
            .with_row(day - 1)
        })
        .collect();

    TripTable::from_records(Schema::basic(), records).unwrap()
}

/// Write a file into a directory and return its path
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
