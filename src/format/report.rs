use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::model::Event;

const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M";
const MISSING_FIELD: &str = "-";

// Renders each event as a fixed five-line block followed by a blank line, in
// the order the iterator yields them. Absent optional fields print as "-" so
// every block has the same shape.
pub fn write_events(
    events: impl Iterator<Item = Event>,
    mut writer: impl Write,
) -> io::Result<()> {
    for event in events {
        writer.write_all(render_block(&event).as_bytes())?;
    }

    Ok(())
}

fn render_block(event: &Event) -> String {
    format!(
        "Summary: {}\nStart: {}\nEnd: {}\nLocation: {}\nDescription: {}\n\n",
        event.summary,
        render_timestamp(event.start),
        render_timestamp(event.end),
        render_optional(event.location.as_deref()),
        render_optional(event.description.as_deref()),
    )
}

fn render_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(timestamp) => timestamp.format(TIMESTAMP_FORMAT).to_string(),
        None => String::from(MISSING_FIELD),
    }
}

fn render_optional(field: Option<&str>) -> &str {
    field.unwrap_or(MISSING_FIELD)
}
