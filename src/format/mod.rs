pub mod ics;
pub mod report;
