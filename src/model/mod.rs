pub mod date_range;
pub mod event;
pub use date_range::*;
pub use event::*;

// A quick overview of the modelling here: a run of the program turns the
// command line into one DateRange, turns the input file into a sequence of
// Events, and keeps the Events whose start date falls inside the range and
// that at least one Attendee has accepted. Events are read-only once loaded;
// nothing outlives the process.
