//! Run orchestration: team directory → seasons → extractors → CSV files.

use std::path::Path;

use reqwest::blocking::Client;

use crate::error::{AppError, Result};
use crate::export;
use crate::models::{Config, ExtractorKind, RosterPlayer, ScheduledGame, SeasonRecord, Team};
use crate::services::{RecordScraper, RosterScraper, ScheduleScraper, SeasonResolver, TeamDirectory};
use crate::utils::fs::ensure_dir;

/// Summary of a full scrape run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub teams_total: usize,
    pub teams_failed: usize,
    pub record_rows: usize,
    pub schedule_rows: usize,
    pub roster_rows: usize,
}

/// Everything scraped for one team, staged in memory before any file is
/// written. A field is `None` when its extractor is not enabled.
#[derive(Debug, Default)]
pub struct TeamOutputs {
    pub records: Option<Vec<SeasonRecord>>,
    pub schedule: Option<Vec<ScheduledGame>>,
    pub roster: Option<Vec<RosterPlayer>>,
}

/// Drives the full pipeline over every discovered team.
pub struct Runner<'a> {
    client: &'a Client,
    config: &'a Config,
}

impl<'a> Runner<'a> {
    /// Create a new runner.
    pub fn new(client: &'a Client, config: &'a Config) -> Self {
        Self { client, config }
    }

    /// Scrape every team in the directory, or just the named one.
    ///
    /// A failure in one team is logged and counted; the run moves on to
    /// the next team.
    pub fn run(&self, team_filter: Option<&str>) -> Result<RunSummary> {
        let directory = TeamDirectory::new(self.client, &self.config.http);
        let mut teams = directory.fetch_all()?;
        log::info!("Discovered {} teams", teams.len());

        if let Some(filter) = team_filter {
            teams.retain(|t| t.name.eq_ignore_ascii_case(filter));
            if teams.is_empty() {
                return Err(AppError::config(format!(
                    "No team named '{filter}' in the directory"
                )));
            }
        }

        let mut summary = RunSummary {
            teams_total: teams.len(),
            ..RunSummary::default()
        };

        for team in &teams {
            match self.scrape_team(team) {
                Ok(outputs) => {
                    summary.record_rows += outputs.records.as_ref().map_or(0, |r| r.len());
                    summary.schedule_rows += outputs.schedule.as_ref().map_or(0, |r| r.len());
                    summary.roster_rows += outputs.roster.as_ref().map_or(0, |r| r.len());
                    log::info!("Done with {}", team.name);
                }
                Err(e) => {
                    summary.teams_failed += 1;
                    log::error!("Failed to scrape {}: {}", team.name, e);
                }
            }
        }

        Ok(summary)
    }

    /// Scrape one team and write its CSV files.
    ///
    /// All rows are collected first; files are only written once every
    /// enabled extractor has succeeded, so the team directory never holds
    /// a partial set of fresh files.
    fn scrape_team(&self, team: &Team) -> Result<TeamOutputs> {
        let team_dir = self.config.output.team_dir(&team.name);
        ensure_dir(&team_dir)?;

        let seasons = SeasonResolver::new(self.client, &self.config.http).resolve(team)?;
        log::debug!("{}: {} seasons", team.name, seasons.len());

        let mut outputs = TeamOutputs::default();
        for kind in &self.config.extractors {
            match kind {
                ExtractorKind::Records => {
                    let scraper = RecordScraper::new(self.client, &self.config.http);
                    outputs.records = Some(scraper.scrape(&seasons)?);
                }
                ExtractorKind::Schedules => {
                    let scraper = ScheduleScraper::new(self.client, &self.config.http);
                    outputs.schedule = Some(scraper.scrape(&seasons)?);
                }
                ExtractorKind::Rosters => {
                    let scraper = RosterScraper::new(self.client, &self.config.http);
                    outputs.roster = Some(scraper.scrape(&seasons)?);
                }
            }
        }

        Self::write_outputs(&team_dir, &outputs)?;
        Ok(outputs)
    }

    fn write_outputs(team_dir: &Path, outputs: &TeamOutputs) -> Result<()> {
        if let Some(records) = &outputs.records {
            export::write_records(&team_dir.join("records.csv"), records)?;
        }
        if let Some(schedule) = &outputs.schedule {
            export::write_schedules(&team_dir.join("schedules.csv"), schedule)?;
        }
        if let Some(roster) = &outputs.roster {
            export::write_rosters(&team_dir.join("rosters.csv"), roster)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordSplit;
    use tempfile::TempDir;

    #[test]
    fn test_write_outputs_skips_disabled_extractors() {
        let tmp = TempDir::new().unwrap();

        let outputs = TeamOutputs {
            records: Some(vec![SeasonRecord {
                season: "2018".to_string(),
                splits: vec![RecordSplit::from_tally("All Games".to_string(), "7-5").unwrap()],
            }]),
            schedule: None,
            roster: None,
        };
        Runner::write_outputs(tmp.path(), &outputs).unwrap();

        assert!(tmp.path().join("records.csv").exists());
        assert!(!tmp.path().join("schedules.csv").exists());
        assert!(!tmp.path().join("rosters.csv").exists());
    }
}
