use std::path::PathBuf;

use chrono::{NaiveDate, Utc};

use crate::error::Error;
use crate::model::DateRange;

const DATE_FORMAT: &str = "%d_%m_%Y";

// What a run of the program was asked to do, normalized from either argument
// shape.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub path: PathBuf,
    pub range: DateRange,
}

// Two supported shapes, decided by argument count:
//   <file> <days_before>           -> the window ending today
//   <file> <start> <end>           -> an explicit window, dates as dd_mm_yyyy
// Anything else is a usage error.
pub fn parse(args: &[String]) -> Result<Invocation, Error> {
    parse_with_today(args, Utc::now().date_naive())
}

// `today` is passed in so tests can pin the clock.
fn parse_with_today(args: &[String], today: NaiveDate) -> Result<Invocation, Error> {
    match args {
        [_, path, days_before] => Ok(Invocation {
            path: PathBuf::from(path),
            range: DateRange::last_days(parse_days_before(days_before)?, today),
        }),
        [_, path, start, end] => Ok(Invocation {
            path: PathBuf::from(path),
            range: parse_explicit_range(start, end)?,
        }),
        _ => Err(Error::Usage),
    }
}

fn parse_days_before(raw: &str) -> Result<u32, Error> {
    raw.parse().map_err(|_| {
        Error::Parse(format!(
            "The number of days must be a non-negative integer, got '{raw}'."
        ))
    })
}

fn parse_explicit_range(start: &str, end: &str) -> Result<DateRange, Error> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    DateRange::new(start, end).ok_or_else(|| {
        Error::Parse(format!(
            "Start date {start} is after end date {end}."
        ))
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| Error::Parse(format!("Invalid date '{raw}', expected dd_mm_yyyy.")))
}
