//! Roster extractor.
//!
//! Each season page has a sibling roster page; its table is keyed by a
//! header row (No, Name, Pos, Yr, Ht, Wt, Hometown, Last School).

use reqwest::blocking::Client;
use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};
use crate::models::{HttpConfig, RosterPlayer, Season};
use crate::services::{cell_text, parse_selector};
use crate::utils::http::{fetch_page_with_retry, pause};
use crate::utils::url;

/// Service for scraping per-season rosters.
pub struct RosterScraper<'a> {
    client: &'a Client,
    http: &'a HttpConfig,
}

impl<'a> RosterScraper<'a> {
    /// Create a new roster scraper.
    pub fn new(client: &'a Client, http: &'a HttpConfig) -> Self {
        Self { client, http }
    }

    /// Scrape the roster for every season.
    pub fn scrape(&self, seasons: &[Season]) -> Result<Vec<RosterPlayer>> {
        let mut players = Vec::new();
        for season in seasons {
            let roster_path = url::roster_page(&season.url);
            let page_url = url::absolutize(&self.http.base_url, &roster_path);
            let document = fetch_page_with_retry(self.client, &page_url, self.http)?;

            players.extend(Self::parse_roster_table(&document, &page_url, &season.label)?);
            pause(self.http);
        }
        Ok(players)
    }

    /// Extract one player per data row, using the first row as the header.
    pub(crate) fn parse_roster_table(
        document: &Html,
        page_url: &str,
        season: &str,
    ) -> Result<Vec<RosterPlayer>> {
        let table_sel = parse_selector("table.team-roster")?;
        let row_sel = parse_selector("tr")?;
        let cell_sel = parse_selector("td, th")?;

        let table = document
            .select(&table_sel)
            .next()
            .ok_or_else(|| AppError::page_structure("table.team-roster", page_url))?;

        let rows: Vec<ElementRef> = table.select(&row_sel).collect();
        let Some((header_row, data_rows)) = rows.split_first() else {
            return Err(AppError::parse("roster table", "no header row"));
        };

        let columns: Vec<String> = header_row.select(&cell_sel).map(cell_text).collect();
        let column = |name: &str| -> Result<usize> {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| AppError::parse("roster header", format!("missing '{name}' column")))
        };

        let number_idx = column("No")?;
        let name_idx = column("Name")?;
        let position_idx = column("Pos")?;
        let class_idx = column("Yr")?;
        let height_idx = column("Ht")?;
        let weight_idx = column("Wt")?;
        let hometown_idx = column("Hometown")?;
        let prev_school_idx = column("Last School")?;

        let mut players = Vec::new();
        for row in data_rows {
            let cells: Vec<String> = row.select(&cell_sel).map(cell_text).collect();
            if cells.len() < columns.len() {
                continue;
            }

            let (name_last, name_first) = split_name(&cells[name_idx]);
            let height = cells[height_idx].clone();
            let height_inches = height_inches(&height)?;
            let weight = parse_weight(&cells[weight_idx])?;
            let (city, state) = split_hometown(&cells[hometown_idx]);

            players.push(RosterPlayer {
                season: season.to_string(),
                name_last,
                name_first,
                number: cells[number_idx].clone(),
                position: cells[position_idx].clone(),
                class_year: cells[class_idx].clone(),
                height,
                height_inches,
                weight,
                city,
                state,
                prev_school: cells[prev_school_idx].clone(),
            });
        }

        Ok(players)
    }
}

/// Split a "Last, First" name. Suffixed names ("Smith, Jr., John") keep
/// the suffix with the last name.
pub(crate) fn split_name(name: &str) -> (String, String) {
    let tokens: Vec<&str> = name.split(", ").collect();
    match tokens.as_slice() {
        [] => (String::new(), String::new()),
        [only] => ((*only).to_string(), String::new()),
        [last, first] => ((*last).to_string(), (*first).to_string()),
        [last, suffix, first, ..] => (format!("{last} {suffix}"), (*first).to_string()),
    }
}

/// Height "F-I" in total inches. The site's `-` placeholder is absent
/// data, never zero.
pub(crate) fn height_inches(height: &str) -> Result<Option<u32>> {
    if height == "-" {
        return Ok(None);
    }

    let (feet, inches) = height
        .split_once('-')
        .ok_or_else(|| AppError::parse("height", format!("expected F-I, got '{height}'")))?;
    let feet: u32 = feet
        .trim()
        .parse()
        .map_err(|_| AppError::parse("height", format!("non-numeric feet in '{height}'")))?;
    let inches: u32 = inches
        .trim()
        .parse()
        .map_err(|_| AppError::parse("height", format!("non-numeric inches in '{height}'")))?;

    Ok(Some(feet * 12 + inches))
}

/// Weight in pounds, or `None` for the `-` placeholder.
pub(crate) fn parse_weight(weight: &str) -> Result<Option<u32>> {
    if weight == "-" {
        return Ok(None);
    }

    weight
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| AppError::parse("weight", format!("non-numeric value '{weight}'")))
}

/// City is the text before the first ", ". A hometown without that
/// separator (including the bare `-` placeholder) keeps the original
/// token in the state column.
pub(crate) fn split_hometown(hometown: &str) -> (String, String) {
    let mut parts = hometown.split(", ");
    let city = parts.next().unwrap_or("").to_string();
    let state = match parts.next() {
        Some(state) => state.to_string(),
        None => hometown.to_string(),
    };
    (city, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER_HTML: &str = r#"
        <html><body>
        <table class="team-roster">
            <tr>
                <th>No</th><th>Name</th><th>Pos</th><th>Yr</th><th>Ht</th>
                <th>Wt</th><th>Hometown</th><th>Last School</th>
            </tr>
            <tr>
                <td>12</td><td>Smith, John</td><td>QB</td><td>SR</td><td>6-2</td>
                <td>205</td><td>Austin, TX</td><td>Westlake HS</td>
            </tr>
            <tr>
                <td>55</td><td>Jones, Jr., Marcus</td><td>OL</td><td>FR</td><td>-</td>
                <td>-</td><td>-</td><td>-</td>
            </tr>
        </table>
        </body></html>
    "#;

    fn parse_fixture() -> Vec<RosterPlayer> {
        let document = Html::parse_document(ROSTER_HTML);
        RosterScraper::parse_roster_table(&document, "http://test", "2018").unwrap()
    }

    #[test]
    fn test_parse_roster_row() {
        let players = parse_fixture();
        assert_eq!(players.len(), 2);

        let player = &players[0];
        assert_eq!(player.season, "2018");
        assert_eq!(player.name_last, "Smith");
        assert_eq!(player.name_first, "John");
        assert_eq!(player.number, "12");
        assert_eq!(player.position, "QB");
        assert_eq!(player.class_year, "SR");
        assert_eq!(player.height, "6-2");
        assert_eq!(player.height_inches, Some(74));
        assert_eq!(player.weight, Some(205));
        assert_eq!(player.city, "Austin");
        assert_eq!(player.state, "TX");
        assert_eq!(player.prev_school, "Westlake HS");
    }

    #[test]
    fn test_placeholder_fields_are_absent_not_zero() {
        let players = parse_fixture();
        let player = &players[1];

        assert_eq!(player.name_last, "Jones Jr.");
        assert_eq!(player.name_first, "Marcus");
        assert_eq!(player.height_inches, None);
        assert_eq!(player.weight, None);
        assert_eq!(player.city, "-");
        assert_eq!(player.state, "-");
    }

    #[test]
    fn test_split_name_token_counts() {
        assert_eq!(split_name("Ofodile"), ("Ofodile".to_string(), String::new()));
        assert_eq!(
            split_name("Smith, John"),
            ("Smith".to_string(), "John".to_string())
        );
        assert_eq!(
            split_name("Smith, Jr., John"),
            ("Smith Jr.".to_string(), "John".to_string())
        );
    }

    #[test]
    fn test_height_inches() {
        assert_eq!(height_inches("6-2").unwrap(), Some(74));
        assert_eq!(height_inches("5-11").unwrap(), Some(71));
        assert_eq!(height_inches("-").unwrap(), None);
        assert!(height_inches("tall").is_err());
    }

    #[test]
    fn test_split_hometown_without_state_keeps_token() {
        assert_eq!(
            split_hometown("Austin, TX"),
            ("Austin".to_string(), "TX".to_string())
        );
        assert_eq!(
            split_hometown("Sydney"),
            ("Sydney".to_string(), "Sydney".to_string())
        );
        assert_eq!(split_hometown("-"), ("-".to_string(), "-".to_string()));
    }

    #[test]
    fn test_missing_table_is_error() {
        let document = Html::parse_document("<html><body></body></html>");
        let err = RosterScraper::parse_roster_table(&document, "http://test", "2018").unwrap_err();
        assert!(matches!(err, AppError::PageStructure { .. }));
    }
}
