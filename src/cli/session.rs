// Interactive exploration session
// Author: Gabriel Demetrios Lafis

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{error, info};

use crate::processing::{
    duration_stats, station_stats, time_stats, user_stats, DayOfWeek, EnrichedTable, FilterSpec,
    Pipeline, RawPaginator, TripStats, SUPPORTED_MONTHS,
};
use crate::storage::TripSource;
use crate::utils::{AppError, AppResult};
use super::{
    render_duration_stats, render_page, render_station_stats, render_time_stats, render_user_stats,
    separator, Prompter,
};

/// Load, enrich, filter and aggregate in one call
pub fn analyze<S: TripSource + ?Sized>(source: &S, spec: &FilterSpec) -> AppResult<TripStats> {
    let filtered = filtered_table(source, spec)?;
    Ok(TripStats::compute(&filtered))
}

/// The filtered table a spec selects
pub fn filtered_table<S: TripSource + ?Sized>(
    source: &S,
    spec: &FilterSpec,
) -> AppResult<EnrichedTable> {
    let pipeline = Pipeline::from_spec(spec)?;
    let table = source.load(&spec.city)?;
    Ok(pipeline.execute(&table)?)
}

/// One user's dialogue: choose filters, read the report, browse raw rows, maybe restart
pub struct Session<'a, S: TripSource + ?Sized, R, W> {
    source: &'a S,
    prompter: Prompter<R, W>,
    page_size: usize,
}

impl<'a, S, R, W> Session<'a, S, R, W>
where
    S: TripSource + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(source: &'a S, prompter: Prompter<R, W>, page_size: usize) -> Self {
        Session {
            source,
            prompter,
            page_size,
        }
    }

    /// Run sessions until the user declines to restart or input ends
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            match self.run_once() {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    info!("Input closed, ending session");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Run one full pass. Returns whether the user asked to restart.
    pub fn run_once(&mut self) -> AppResult<bool> {
        let spec = self.get_filters()?;
        info!(
            "Exploring '{}' (month: {:?}, day: {:?})",
            spec.city, spec.month, spec.day
        );

        match self.report(&spec) {
            Ok(()) => {}
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => {
                error!("Could not analyse '{}': {}", spec.city, e);
                writeln!(self.prompter.output(), "Sorry, the data could not be analysed: {}", e)?;
            }
        }

        match self.raw_data_display(&spec.city) {
            Ok(()) => {}
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(e) => {
                error!("Could not page raw data for '{}': {}", spec.city, e);
                writeln!(self.prompter.output(), "Sorry, raw data is not available: {}", e)?;
            }
        }

        Ok(self
            .prompter
            .answered_yes("\nWould you like to restart? Enter \"Yes\" or \"No\".\n")?)
    }

    /// Ask for city, month and day
    pub fn get_filters(&mut self) -> AppResult<FilterSpec> {
        writeln!(self.prompter.output(), "Hi there! Let's explore some US bikeshare data!")?;

        let cities = self.source.cities();
        let city_choices: Vec<&str> = cities.iter().map(String::as_str).collect();
        let city = self.prompter.choose(
            &format!(
                "Please choose one of the {} cities ({}): ",
                cities.len(),
                cities.join(", ")
            ),
            &city_choices,
        )?;

        let mut month_choices = vec!["all"];
        month_choices.extend_from_slice(&SUPPORTED_MONTHS);
        let month = self.prompter.choose(
            "Would you like to filter by month?\n\
             If \"Yes\"...please type January, February, March, April, May or June.\n\
             If \"No\"....please type \"ALL\" for no filter.\n",
            &month_choices,
        )?;

        let day_names: Vec<String> = DayOfWeek::ALL.iter().map(|d| d.name().to_lowercase()).collect();
        let mut day_choices = vec!["all"];
        day_choices.extend(day_names.iter().map(String::as_str));
        let day = self.prompter.choose(
            "Would you like to filter by day?\n\
             If \"Yes\"...please type Monday, Tuesday, Wednesday, Thursday, Friday, Saturday or Sunday.\n\
             If \"No\"....please type \"ALL\" for no filter.\n",
            &day_choices,
        )?;

        writeln!(self.prompter.output(), "{}", separator())?;

        Ok(FilterSpec::parse(&city, &month, &day)?)
    }

    /// Print the four statistic groups, each with its timing
    pub fn report(&mut self, spec: &FilterSpec) -> AppResult<()> {
        let filtered = filtered_table(self.source, spec)?;

        self.section("Calculating The Most Frequent Times of Travel...", || {
            render_time_stats(&time_stats(&filtered))
        })?;
        self.section("Calculating The Most Popular Stations and Trip...", || {
            render_station_stats(&station_stats(&filtered))
        })?;
        self.section("Calculating Trip Duration...", || {
            render_duration_stats(&duration_stats(&filtered))
        })?;
        self.section("Calculating User Stats...", || {
            render_user_stats(&user_stats(&filtered))
        })?;

        Ok(())
    }

    fn section<F: FnOnce() -> String>(&mut self, title: &str, compute: F) -> io::Result<()> {
        let started = Instant::now();
        let body = compute();
        let elapsed = started.elapsed().as_secs_f64();

        let out = self.prompter.output();
        writeln!(out, "\n{}\n", title)?;
        write!(out, "{}", body)?;
        writeln!(out, "\nThis took {:.6} seconds.", elapsed)?;
        writeln!(out, "{}", separator())
    }

    /// Page through the unfiltered table while the user keeps asking
    pub fn raw_data_display(&mut self, city: &str) -> AppResult<()> {
        let table = self.source.load(city)?;
        let schema = table.schema;
        let mut paginator = RawPaginator::new(table, self.page_size)?;

        writeln!(self.prompter.output(), "\nRaw data is available to check... ")?;

        let prompt = format!(
            "\nWould you like to view {} rows of individual trip data? Enter \"Yes\" or \"No\".\n",
            self.page_size
        );

        while self.prompter.confirm(&prompt)? {
            let page = paginator.next_page();
            let rendered = render_page(&page, &schema);
            let exhausted = !page.has_more;
            write!(self.prompter.output(), "{}", rendered)?;

            if exhausted {
                writeln!(self.prompter.output(), "That was the last of the raw data.")?;
                break;
            }
        }

        Ok(())
    }

    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }
}
