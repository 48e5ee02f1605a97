//! Scraping services, one per page region the pipeline reads.

mod records;
mod rosters;
mod runner;
mod schedules;
mod seasons;
mod teams;

pub use records::RecordScraper;
pub use rosters::RosterScraper;
pub use runner::{RunSummary, Runner, TeamOutputs};
pub use schedules::ScheduleScraper;
pub use seasons::SeasonResolver;
pub use teams::TeamDirectory;

use scraper::{ElementRef, Selector};

use crate::error::{AppError, Result};

pub(crate) fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Collected, trimmed text of an element.
pub(crate) fn cell_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
