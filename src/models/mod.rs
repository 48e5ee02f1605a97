//! Data models for the scraper.

mod config;
mod record;
mod roster;
mod schedule;
mod team;

pub use config::{Config, ExtractorKind, HttpConfig, OutputConfig};
pub use record::{RecordSplit, SeasonRecord};
pub use roster::RosterPlayer;
pub use schedule::{GameSite, ScheduledGame};
pub use team::{Season, Team};
