use log::debug;

use crate::model::{DateRange, Event};

// The one decision this program makes: an event is kept iff its start date
// falls inside the window (both ends inclusive) and someone accepted the
// invitation. Lazy and order-preserving; events without a start date never
// match.
pub fn matching_events(
    events: impl Iterator<Item = Event>,
    range: DateRange,
) -> impl Iterator<Item = Event> {
    events.filter(move |event| {
        let in_range = event
            .start
            .map(|start| range.contains(start.date_naive()))
            .unwrap_or(false);

        if !in_range {
            return false;
        }

        let accepted = event.has_accepted_attendee();
        if !accepted {
            debug!("dropping '{}': no accepted attendee", event.summary);
        }
        accepted
    })
}
