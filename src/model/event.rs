use chrono::{DateTime, Utc};

// One VEVENT as loaded from the input file. Everything except the summary is
// optional in practice; an event without a start date can exist here but will
// never pass the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub summary: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub attendees: Vec<Attendee>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    pub address: Option<String>,
    pub status: ParticipationStatus,
}

// PARTSTAT values we recognize. The match is deliberately byte-exact:
// "accepted" is not ACCEPTED, it ends up in Other and never passes the
// filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipationStatus {
    Accepted,
    Declined,
    Tentative,
    NeedsAction,
    Other(String),
}

impl ParticipationStatus {
    pub fn from_partstat(raw: &str) -> Self {
        match raw {
            "ACCEPTED" => Self::Accepted,
            "DECLINED" => Self::Declined,
            "TENTATIVE" => Self::Tentative,
            "NEEDS-ACTION" => Self::NeedsAction,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Event {
    // One accepted attendee is enough, no matter how the others answered.
    pub fn has_accepted_attendee(&self) -> bool {
        self.attendees
            .iter()
            .any(|attendee| attendee.status == ParticipationStatus::Accepted)
    }
}
