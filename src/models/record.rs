//! Win/loss record model structures.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Win/loss figures for one named split (e.g. "All Games", "Home").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSplit {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub win_pct: f64,
}

impl RecordSplit {
    /// Build a split from the site's "W-L" tally cell.
    pub fn from_tally(name: String, tally: &str) -> Result<Self> {
        let (wins, losses) = tally
            .split_once('-')
            .ok_or_else(|| AppError::parse("record tally", format!("expected W-L, got '{tally}'")))?;
        let wins: u32 = wins
            .trim()
            .parse()
            .map_err(|_| AppError::parse("record tally", format!("non-numeric wins in '{tally}'")))?;
        let losses: u32 = losses
            .trim()
            .parse()
            .map_err(|_| AppError::parse("record tally", format!("non-numeric losses in '{tally}'")))?;

        Ok(Self {
            win_pct: Self::win_pct(wins, losses),
            name,
            wins,
            losses,
        })
    }

    /// Wins divided by losses (not games played), rounded to two decimals.
    /// Zero when losses is zero. This is the site's own definition and the
    /// output files depend on it.
    pub fn win_pct(wins: u32, losses: u32) -> f64 {
        if losses == 0 {
            return 0.0;
        }
        (wins as f64 / losses as f64 * 100.0).round() / 100.0
    }
}

/// All record splits for one season, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub season: String,
    pub splits: Vec<RecordSplit>,
}
