use chrono::{Duration, NaiveDate};

// An inclusive window of calendar dates. Both constructors uphold
// `start <= end`, so `contains` never has to care about an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start <= end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    // The window ending today and reaching `days_before` days back. Zero is a
    // valid count and yields the single-day range [today, today].
    pub fn last_days(days_before: u32, today: NaiveDate) -> Self {
        Self {
            start: today - Duration::days(i64::from(days_before)),
            end: today,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
