//! Record extractor.
//!
//! Reads the win/loss record table from each season page.

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::{HttpConfig, RecordSplit, Season, SeasonRecord};
use crate::services::{cell_text, parse_selector};
use crate::utils::http::{fetch_page_with_retry, pause};
use crate::utils::url;

/// Service for scraping per-season win/loss records.
pub struct RecordScraper<'a> {
    client: &'a Client,
    http: &'a HttpConfig,
}

impl<'a> RecordScraper<'a> {
    /// Create a new record scraper.
    pub fn new(client: &'a Client, http: &'a HttpConfig) -> Self {
        Self { client, http }
    }

    /// Scrape the record table for every season.
    pub fn scrape(&self, seasons: &[Season]) -> Result<Vec<SeasonRecord>> {
        let mut records = Vec::new();
        for season in seasons {
            let page_url = url::absolutize(&self.http.base_url, &season.url);
            let document = fetch_page_with_retry(self.client, &page_url, self.http)?;

            let splits = Self::parse_record_table(&document, &page_url)?;
            records.push(SeasonRecord {
                season: season.label.clone(),
                splits,
            });
            pause(self.http);
        }
        Ok(records)
    }

    /// Extract every split row from the record table.
    pub(crate) fn parse_record_table(document: &Html, page_url: &str) -> Result<Vec<RecordSplit>> {
        let table_sel = parse_selector("table.team-record")?;
        let row_sel = parse_selector("tr")?;
        let name_sel = parse_selector("td.split-name")?;
        let cell_sel = parse_selector("td")?;

        let table = document
            .select(&table_sel)
            .next()
            .ok_or_else(|| AppError::page_structure("table.team-record", page_url))?;

        let mut splits = Vec::new();
        for row in table.select(&row_sel).skip(1) {
            let Some(name_cell) = row.select(&name_sel).next() else {
                continue;
            };
            let name = cell_text(name_cell);

            // Second cell holds the "W-L" tally.
            let tally = row
                .select(&cell_sel)
                .nth(1)
                .map(cell_text)
                .ok_or_else(|| AppError::parse("record row", format!("no tally cell for '{name}'")))?;

            splits.push(RecordSplit::from_tally(name, &tally)?);
        }

        Ok(splits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_HTML: &str = r#"
        <html><body>
        <table class="team-record">
            <tr><th>Split</th><th>Record</th></tr>
            <tr><td class="split-name">All Games</td><td>10-3</td></tr>
            <tr><td class="split-name">Home</td><td>6-0</td></tr>
            <tr><td class="split-name">Away</td><td>4-3</td></tr>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_record_table() {
        let document = Html::parse_document(RECORD_HTML);
        let splits = RecordScraper::parse_record_table(&document, "http://test").unwrap();

        assert_eq!(splits.len(), 3);
        assert_eq!(splits[0].name, "All Games");
        assert_eq!(splits[0].wins, 10);
        assert_eq!(splits[0].losses, 3);
        assert_eq!(splits[0].win_pct, 3.33);
    }

    #[test]
    fn test_parse_record_table_zero_losses_pct_is_zero() {
        let document = Html::parse_document(RECORD_HTML);
        let splits = RecordScraper::parse_record_table(&document, "http://test").unwrap();

        assert_eq!(splits[1].name, "Home");
        assert_eq!(splits[1].win_pct, 0.0);
    }

    #[test]
    fn test_parse_record_table_missing_table_is_error() {
        let document = Html::parse_document("<html><body></body></html>");
        let err = RecordScraper::parse_record_table(&document, "http://test").unwrap_err();
        assert!(matches!(err, AppError::PageStructure { .. }));
    }
}
