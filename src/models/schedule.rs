//! Schedule model structures.

use serde::{Deserialize, Serialize};

/// Where a game is played, from the opponent cell's prefix marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSite {
    Home,
    Away,
    Neutral,
}

impl GameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameSite::Home => "Home",
            GameSite::Away => "Away",
            GameSite::Neutral => "Neutral",
        }
    }
}

/// One row of a team's schedule table.
///
/// Games that have not been played yet have no result, score, time or
/// attendance; those fields stay `None` rather than being an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledGame {
    /// Zero-based position within the season's schedule table
    pub index: usize,
    pub year: i32,
    /// Full month name, e.g. "September"
    pub month: String,
    pub day: u32,
    /// Full weekday name, e.g. "Saturday"
    pub day_of_week: String,
    /// Raw date string as scraped, `MM/DD/YY`
    pub date: String,
    pub site: GameSite,
    /// Opponent's AP rank, when the opponent cell carries one
    pub opp_rank: Option<u32>,
    pub opponent: String,
    /// Result letter (W/L/T)
    pub result: Option<char>,
    pub pts_for: Option<i32>,
    pub pts_against: Option<i32>,
    pub pts_diff: Option<i32>,
    pub game_time_hh: Option<u32>,
    pub game_time_mm: Option<u32>,
    pub attendance: Option<u64>,
}

impl ScheduledGame {
    /// Row key: season year plus the zero-padded position in the table.
    pub fn game_id(&self) -> String {
        format!("{}_{:02}", self.year, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(year: i32, index: usize) -> ScheduledGame {
        ScheduledGame {
            index,
            year,
            month: "September".to_string(),
            day: 1,
            day_of_week: "Saturday".to_string(),
            date: "09/01/18".to_string(),
            site: GameSite::Home,
            opp_rank: None,
            opponent: "Akron".to_string(),
            result: None,
            pts_for: None,
            pts_against: None,
            pts_diff: None,
            game_time_hh: None,
            game_time_mm: None,
            attendance: None,
        }
    }

    #[test]
    fn test_game_id_zero_pads_index() {
        assert_eq!(game(2018, 0).game_id(), "2018_00");
        assert_eq!(game(2018, 11).game_id(), "2018_11");
    }
}
