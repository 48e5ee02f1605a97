//! Schedule extractor.
//!
//! Reads the game schedule table from each season page. Future games have
//! empty result/time/attendance cells; those fields come back as `None`.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::{GameSite, HttpConfig, ScheduledGame, Season};
use crate::services::{cell_text, parse_selector};
use crate::utils::http::{fetch_page_with_retry, pause};
use crate::utils::url;

/// Service for scraping per-season game schedules.
pub struct ScheduleScraper<'a> {
    client: &'a Client,
    http: &'a HttpConfig,
}

impl<'a> ScheduleScraper<'a> {
    /// Create a new schedule scraper.
    pub fn new(client: &'a Client, http: &'a HttpConfig) -> Self {
        Self { client, http }
    }

    /// Scrape the schedule table for every season, in document order.
    pub fn scrape(&self, seasons: &[Season]) -> Result<Vec<ScheduledGame>> {
        let mut games = Vec::new();
        for season in seasons {
            let page_url = url::absolutize(&self.http.base_url, &season.url);
            let document = fetch_page_with_retry(self.client, &page_url, self.http)?;

            games.extend(Self::parse_schedule_table(&document, &page_url)?);
            pause(self.http);
        }
        Ok(games)
    }

    /// Extract one game per data row, skipping the header and the
    /// trailing totals row.
    pub(crate) fn parse_schedule_table(document: &Html, page_url: &str) -> Result<Vec<ScheduledGame>> {
        let table_sel = parse_selector("table.team-schedule")?;
        let row_sel = parse_selector("tr")?;

        let table = document
            .select(&table_sel)
            .next()
            .ok_or_else(|| AppError::page_structure("table.team-schedule", page_url))?;

        let rows: Vec<ElementRef> = table.select(&row_sel).collect();
        if rows.len() < 2 {
            return Ok(Vec::new());
        }

        let mut games = Vec::new();
        for (index, row) in rows[1..rows.len() - 1].iter().enumerate() {
            games.push(Self::parse_game_row(*row, index)?);
        }
        Ok(games)
    }

    /// Parse a single schedule row.
    fn parse_game_row(row: ElementRef, index: usize) -> Result<ScheduledGame> {
        let date_sel = parse_selector("td.date")?;
        let opponent_sel = parse_selector("td.opponent")?;
        let result_sel = parse_selector("td.result")?;
        let cell_sel = parse_selector("td")?;

        let date_text = row
            .select(&date_sel)
            .next()
            .map(cell_text)
            .ok_or_else(|| AppError::parse("schedule row", "missing date cell"))?;
        let date = NaiveDate::parse_from_str(&date_text, "%m/%d/%y")
            .map_err(|e| AppError::parse("schedule date", format!("'{date_text}': {e}")))?;

        let opponent_text = row
            .select(&opponent_sel)
            .next()
            .map(cell_text)
            .ok_or_else(|| AppError::parse("schedule row", "missing opponent cell"))?;
        let (site, opponent_rest) = parse_site(&opponent_text);
        let opp_rank = parse_leading_rank(&opponent_rest);
        let opponent = strip_digits(&opponent_rest);

        let result_text = row
            .select(&result_sel)
            .next()
            .map(cell_text)
            .unwrap_or_default();
        let (result, pts_for, pts_against) = parse_result(&result_text)?;
        let pts_diff = match (pts_for, pts_against) {
            (Some(pf), Some(pa)) => Some(pf - pa),
            _ => None,
        };

        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        let time_text = cells.get(3).copied().map(cell_text).unwrap_or_default();
        let (game_time_hh, game_time_mm) = parse_game_time(&time_text)?;
        let attendance_text = cells.get(4).copied().map(cell_text).unwrap_or_default();
        let attendance = parse_attendance(&attendance_text)?;

        Ok(ScheduledGame {
            index,
            year: date.year(),
            month: date.format("%B").to_string(),
            day: date.day(),
            day_of_week: date.format("%A").to_string(),
            date: date_text,
            site,
            opp_rank,
            opponent,
            result,
            pts_for,
            pts_against,
            pts_diff,
            game_time_hh,
            game_time_mm,
            attendance,
        })
    }
}

/// `@` marks an away game, `+` a neutral site; anything else is home.
fn parse_site(opponent: &str) -> (GameSite, String) {
    if let Some(rest) = opponent.strip_prefix("@ ") {
        (GameSite::Away, rest.to_string())
    } else if let Some(rest) = opponent.strip_prefix("+ ") {
        (GameSite::Neutral, rest.to_string())
    } else {
        (GameSite::Home, opponent.to_string())
    }
}

/// A leading integer token is the opponent's AP rank. Anything that does
/// not parse as a number means "unranked", never an error.
fn parse_leading_rank(opponent: &str) -> Option<u32> {
    opponent
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
}

/// Remove every digit from the opponent text, leaving the clean name.
fn strip_digits(opponent: &str) -> String {
    let digit = Regex::new(r"\d").unwrap();
    digit.replace_all(opponent, "").trim().to_string()
}

/// Parse "<Letter> <A>-<B>". An empty cell is a game not yet played.
fn parse_result(score: &str) -> Result<(Option<char>, Option<i32>, Option<i32>)> {
    if score.is_empty() {
        return Ok((None, None, None));
    }

    let result = score.chars().next();
    let tally = score
        .split(' ')
        .nth(1)
        .ok_or_else(|| AppError::parse("game result", format!("no score in '{score}'")))?;
    let (pts_for, pts_against) = tally
        .split_once('-')
        .ok_or_else(|| AppError::parse("game result", format!("expected A-B in '{score}'")))?;

    let pts_for: i32 = pts_for
        .parse()
        .map_err(|_| AppError::parse("game result", format!("non-numeric points in '{score}'")))?;
    let pts_against: i32 = pts_against
        .parse()
        .map_err(|_| AppError::parse("game result", format!("non-numeric points in '{score}'")))?;

    Ok((result, Some(pts_for), Some(pts_against)))
}

/// Parse "HH:MM"; an empty cell means the kickoff time is not set.
fn parse_game_time(time: &str) -> Result<(Option<u32>, Option<u32>)> {
    if time.is_empty() {
        return Ok((None, None));
    }

    let (hh, rest) = time
        .split_once(':')
        .ok_or_else(|| AppError::parse("game time", format!("expected HH:MM, got '{time}'")))?;
    let hh: u32 = hh
        .trim()
        .parse()
        .map_err(|_| AppError::parse("game time", format!("non-numeric hour in '{time}'")))?;

    // Tolerate a trailing meridiem marker after the minutes.
    let mm_token = rest.split_whitespace().next().unwrap_or(rest);
    let mm: u32 = mm_token
        .parse()
        .map_err(|_| AppError::parse("game time", format!("non-numeric minute in '{time}'")))?;

    Ok((Some(hh), Some(mm)))
}

/// Parse an attendance figure, stripping thousands separators.
fn parse_attendance(attendance: &str) -> Result<Option<u64>> {
    if attendance.is_empty() {
        return Ok(None);
    }

    attendance
        .replace(',', "")
        .parse()
        .map(Some)
        .map_err(|_| AppError::parse("attendance", format!("non-numeric value '{attendance}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE_HTML: &str = r#"
        <html><body>
        <table class="team-schedule">
            <tr><th>Date</th><th>Opponent</th><th>Result</th><th>Time</th><th>Attendance</th></tr>
            <tr>
                <td class="date">09/01/18</td>
                <td class="opponent">Akron</td>
                <td class="result">W 21-10</td>
                <td>12:00</td>
                <td>58,212</td>
            </tr>
            <tr>
                <td class="date">09/08/18</td>
                <td class="opponent">@ 5 Georgia</td>
                <td class="result">L 17-41</td>
                <td>15:30</td>
                <td>92,746</td>
            </tr>
            <tr>
                <td class="date">11/24/18</td>
                <td class="opponent">+ Florida</td>
                <td class="result"></td>
                <td></td>
                <td></td>
            </tr>
            <tr><td>Totals</td><td></td><td></td><td></td><td></td></tr>
        </table>
        </body></html>
    "#;

    fn parse_fixture() -> Vec<ScheduledGame> {
        let document = Html::parse_document(SCHEDULE_HTML);
        ScheduleScraper::parse_schedule_table(&document, "http://test").unwrap()
    }

    #[test]
    fn test_three_data_rows_yield_three_games() {
        assert_eq!(parse_fixture().len(), 3);
    }

    #[test]
    fn test_played_home_game() {
        let games = parse_fixture();
        let game = &games[0];

        assert_eq!(game.game_id(), "2018_00");
        assert_eq!(game.year, 2018);
        assert_eq!(game.month, "September");
        assert_eq!(game.day, 1);
        assert_eq!(game.day_of_week, "Saturday");
        assert_eq!(game.site, GameSite::Home);
        assert_eq!(game.opp_rank, None);
        assert_eq!(game.opponent, "Akron");
        assert_eq!(game.result, Some('W'));
        assert_eq!(game.pts_for, Some(21));
        assert_eq!(game.pts_against, Some(10));
        assert_eq!(game.pts_diff, Some(11));
        assert_eq!(game.game_time_hh, Some(12));
        assert_eq!(game.game_time_mm, Some(0));
        assert_eq!(game.attendance, Some(58_212));
    }

    #[test]
    fn test_ranked_away_game_strips_rank_from_name() {
        let games = parse_fixture();
        let game = &games[1];

        assert_eq!(game.site, GameSite::Away);
        assert_eq!(game.opp_rank, Some(5));
        assert_eq!(game.opponent, "Georgia");
        assert_eq!(game.pts_diff, Some(-24));
    }

    #[test]
    fn test_future_neutral_game_has_null_score_fields() {
        let games = parse_fixture();
        let game = &games[2];

        assert_eq!(game.site, GameSite::Neutral);
        assert_eq!(game.opponent, "Florida");
        assert_eq!(game.result, None);
        assert_eq!(game.pts_for, None);
        assert_eq!(game.pts_against, None);
        assert_eq!(game.pts_diff, None);
        assert_eq!(game.game_time_hh, None);
        assert_eq!(game.game_time_mm, None);
        assert_eq!(game.attendance, None);
    }

    #[test]
    fn test_parse_site_markers() {
        assert_eq!(parse_site("Akron").0, GameSite::Home);
        assert_eq!(parse_site("@ Akron").0, GameSite::Away);
        assert_eq!(parse_site("+ Akron").0, GameSite::Neutral);
    }

    #[test]
    fn test_cleaned_opponent_has_no_digits() {
        let cleaned = strip_digits("23 Penn State");
        assert_eq!(cleaned, "Penn State");
        assert!(!cleaned.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_parse_result_empty_is_all_none() {
        assert_eq!(parse_result("").unwrap(), (None, None, None));
    }

    #[test]
    fn test_parse_result_splits_score() {
        assert_eq!(parse_result("W 34-27").unwrap(), (Some('W'), Some(34), Some(27)));
    }

    #[test]
    fn test_parse_game_time_tolerates_meridiem() {
        assert_eq!(parse_game_time("3:30 PM").unwrap(), (Some(3), Some(30)));
    }

    #[test]
    fn test_missing_table_is_error() {
        let document = Html::parse_document("<html><body></body></html>");
        let err = ScheduleScraper::parse_schedule_table(&document, "http://test").unwrap_err();
        assert!(matches!(err, AppError::PageStructure { .. }));
    }
}
