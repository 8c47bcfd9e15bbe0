// Bikeshare Explorer - Main executable
// Author: Gabriel Demetrios Lafis

use std::io;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use log::{debug, info};
use serde::Serialize;

use bikeshare_explorer::{
    cli::{
        analyze, render_duration_stats, render_station_stats, render_time_stats,
        render_user_stats, separator, Prompter, Session,
    },
    processing::{FilterSpec, TripStats},
    storage::FileStorage,
    utils::{init_logging_with, Config},
};

#[derive(Serialize)]
struct Report<'a> {
    filters: &'a FilterSpec,
    stats: &'a TripStats,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("Bikeshare Explorer")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Gabriel Demetrios Lafis")
        .about("Explore US bikeshare trip data")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Sets a custom config file (.json, .yaml or .yml)")
                .takes_value(true),
        )
        .arg(
            Arg::new("data-dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .help("Directory holding the city CSV files")
                .takes_value(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable coloured log level tags"),
        )
        .subcommand(Command::new("explore").about("Interactively explore a city's trips (default)"))
        .subcommand(
            Command::new("stats")
                .about("Print statistics for one city and filter, then exit")
                .arg(
                    Arg::new("city")
                        .long("city")
                        .value_name("CITY")
                        .help("City to analyse")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_name("MONTH")
                        .help("january..june, or all")
                        .takes_value(true)
                        .default_value("all"),
                )
                .arg(
                    Arg::new("day")
                        .long("day")
                        .value_name("DAY")
                        .help("monday..sunday, or all")
                        .takes_value(true)
                        .default_value("all"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the statistics as JSON"),
                ),
        )
        .get_matches();

    // Load configuration
    let mut config = match matches.value_of("config") {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Error loading config file {}", path))?,
        None => Config::default(),
    };

    if let Some(dir) = matches.value_of("data-dir") {
        config.data.dir = dir.to_string();
    }

    // Initialize logging
    let color = !matches.is_present("no-color");
    if let Err(err) = init_logging_with(config.log_level_filter(), color) {
        eprintln!("Error initializing logger: {}", err);
    }

    debug!("Using configuration: {:?}", config);

    let storage = FileStorage::new(&config.data.dir, config.registry());

    match matches.subcommand() {
        Some(("stats", sub)) => run_stats(&storage, sub),
        _ => run_explore(&storage, &config),
    }
}

fn run_explore(storage: &FileStorage, config: &Config) -> Result<()> {
    info!("Starting interactive session over {}", storage.base_dir().display());

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut session = Session::new(storage, prompter, config.display.page_size);

    session.run().context("Interactive session failed")
}

fn run_stats(storage: &FileStorage, matches: &ArgMatches) -> Result<()> {
    let spec = FilterSpec::parse(
        matches.value_of("city").unwrap_or_default(),
        matches.value_of("month").unwrap_or("all"),
        matches.value_of("day").unwrap_or("all"),
    )?;

    let stats = analyze(storage, &spec)
        .with_context(|| format!("Could not analyse trips for '{}'", spec.city))?;

    if matches.is_present("json") {
        let report = Report {
            filters: &spec,
            stats: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for section in [
            render_time_stats(&stats.time),
            render_station_stats(&stats.stations),
            render_duration_stats(&stats.duration),
            render_user_stats(&stats.users),
        ] {
            print!("{}", section);
            println!("{}", separator());
        }
    }

    Ok(())
}
