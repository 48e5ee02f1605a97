//! Output file writers.

mod csv;

pub use csv::{write_records, write_rosters, write_schedules};
