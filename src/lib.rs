use std::env;
use std::io::{self, Write};

pub mod cli;
pub mod error;
pub mod format;
pub mod model;
pub mod system;

pub use cli::Invocation;
pub use error::Error;

// From a high-level, this library takes a command-line invocation that points
// to an iCalendar file plus a date window, reads the events from the file,
// keeps the ones inside the window that were accepted by at least one
// attendee, and prints them as text blocks.

pub fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();
    let invocation = cli::parse(&args)?;

    run_aux(&invocation, &mut io::stdout())
}

// This is a more generic version of `run` which takes the already-parsed
// invocation and any writer, for ease of testing.
pub fn run_aux(invocation: &Invocation, output: &mut impl Write) -> Result<(), Error> {
    let events = format::ics::read_events(&invocation.path)?;
    let matching = system::filter::matching_events(events.into_iter(), invocation.range);
    format::report::write_events(matching, output)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::DateRange;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::fs;

    const CALENDAR: &str = concat!(
        "BEGIN:VCALENDAR\r\n",
        "VERSION:2.0\r\n",
        "BEGIN:VEVENT\r\n",
        "SUMMARY:Sprint review\r\n",
        "DTSTART:20230115T090000Z\r\n",
        "DTEND:20230115T100000Z\r\n",
        "ATTENDEE;PARTSTAT=ACCEPTED:mailto:alex@example.com\r\n",
        "END:VEVENT\r\n",
        "BEGIN:VEVENT\r\n",
        "SUMMARY:Board meeting\r\n",
        "DTSTART:20230115T130000Z\r\n",
        "ATTENDEE;PARTSTAT=DECLINED:mailto:alex@example.com\r\n",
        "END:VEVENT\r\n",
        "END:VCALENDAR\r\n",
    );

    fn invocation_for(path: &std::path::Path) -> Invocation {
        Invocation {
            path: path.to_path_buf(),
            range: DateRange::new(
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_run_aux() {
        let tmp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        fs::write(tmp_file.path(), CALENDAR).expect("Failed to write to temp file");

        let invocation = invocation_for(tmp_file.path());

        let mut output = Vec::new();
        run_aux(&invocation, &mut output).expect("Unexpected error");

        let output_str = String::from_utf8(output).expect("Not UTF-8");
        assert_eq!(
            concat!(
                "Summary: Sprint review\n",
                "Start: 15.01.2023 09:00\n",
                "End: 15.01.2023 10:00\n",
                "Location: -\n",
                "Description: -\n",
                "\n",
            ),
            output_str,
        );
    }

    #[test]
    fn test_run_aux_is_idempotent() {
        let tmp_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        fs::write(tmp_file.path(), CALENDAR).expect("Failed to write to temp file");

        let invocation = invocation_for(tmp_file.path());

        let mut first = Vec::new();
        let mut second = Vec::new();
        run_aux(&invocation, &mut first).expect("Unexpected error");
        run_aux(&invocation, &mut second).expect("Unexpected error");

        assert_eq!(first, second);
    }

    #[test]
    fn test_run_aux_missing_file() {
        let invocation = invocation_for(std::path::Path::new("/tmp/does-not-exist.ics"));

        let mut output = Vec::new();
        let result = run_aux(&invocation, &mut output);

        assert!(matches!(result, Err(Error::Read { .. })));
        assert!(output.is_empty());
    }
}
