use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use ical::parser::ical::component::IcalEvent;
use ical::property::Property;
use log::debug;

use crate::error::Error;
use crate::model::{Attendee, Event, ParticipationStatus};

// Reads every VEVENT from the iCalendar file at `path`, in file order. The
// actual format parsing is the ical crate's job; this module only maps its
// property soup onto our Event type.
pub fn read_events(path: &Path) -> Result<Vec<Event>, Error> {
    let file = File::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let events = events_from_reader(BufReader::new(file)).map_err(|message| Error::Format {
        path: path.to_path_buf(),
        message,
    })?;

    debug!("parsed {} events from {}", events.len(), path.display());
    Ok(events)
}

// Split out from `read_events` so tests and benches can parse from in-memory
// strings. A document with no VCALENDAR at all is an error; a calendar with
// no events is fine.
pub fn events_from_reader(reader: impl BufRead) -> Result<Vec<Event>, String> {
    let mut events = Vec::new();
    let mut saw_calendar = false;

    for calendar in ical::IcalParser::new(reader) {
        let calendar = calendar.map_err(|err| format!("ICS parse error: {err}"))?;
        saw_calendar = true;

        events.extend(calendar.events.iter().map(event_from_component));
    }

    if !saw_calendar {
        return Err(String::from("no VCALENDAR found"));
    }

    Ok(events)
}

fn event_from_component(component: &IcalEvent) -> Event {
    let mut event = Event {
        summary: String::new(),
        start: None,
        end: None,
        location: None,
        description: None,
        attendees: Vec::new(),
    };

    for property in &component.properties {
        match property.name.as_str() {
            "SUMMARY" => {
                event.summary = property.value.clone().unwrap_or_default();
            }
            "DTSTART" => {
                event.start = property.value.as_deref().and_then(parse_ical_timestamp);
            }
            "DTEND" => {
                event.end = property.value.as_deref().and_then(parse_ical_timestamp);
            }
            "LOCATION" => {
                event.location.clone_from(&property.value);
            }
            "DESCRIPTION" => {
                event.description.clone_from(&property.value);
            }
            "ATTENDEE" => {
                event.attendees.push(attendee_from_property(property));
            }
            _ => {}
        }
    }

    event
}

fn attendee_from_property(property: &Property) -> Attendee {
    let status = partstat_param(property)
        .map(ParticipationStatus::from_partstat)
        // no PARTSTAT means nobody confirmed anything
        .unwrap_or(ParticipationStatus::NeedsAction);

    Attendee {
        address: property.value.clone(),
        status,
    }
}

fn partstat_param(property: &Property) -> Option<&str> {
    property.params.as_ref()?.iter().find_map(|(name, values)| {
        if name == "PARTSTAT" {
            values.first().map(String::as_str)
        } else {
            None
        }
    })
}

// The two timestamp shapes we accept: a full date-time (optionally UTC-marked
// with a trailing Z) and a bare date, which counts as midnight. Naive times
// are taken as UTC. Anything else leaves the field unset, and an event
// without a start never matches the date window.
fn parse_ical_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let naive = value.strip_suffix('Z').unwrap_or(value);

    if let Ok(datetime) = NaiveDateTime::parse_from_str(naive, "%Y%m%dT%H%M%S") {
        return Some(datetime.and_utc());
    }

    NaiveDate::parse_from_str(naive, "%Y%m%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
