//! Season resolver.
//!
//! Reads the season selector on a team page and returns every year the
//! site keeps statistics for, including the current season the page
//! itself represents.

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::{HttpConfig, Season, Team};
use crate::services::{cell_text, parse_selector};
use crate::utils::http::fetch_page_with_retry;
use crate::utils::url;

/// Service for resolving a team's seasons.
pub struct SeasonResolver<'a> {
    client: &'a Client,
    http: &'a HttpConfig,
}

impl<'a> SeasonResolver<'a> {
    /// Create a new season resolver.
    pub fn new(client: &'a Client, http: &'a HttpConfig) -> Self {
        Self { client, http }
    }

    /// Fetch a team's page and resolve its season list.
    pub fn resolve(&self, team: &Team) -> Result<Vec<Season>> {
        let page_url = url::absolutize(&self.http.base_url, &team.path);
        let document = fetch_page_with_retry(self.client, &page_url, self.http)?;

        let mut seasons = Self::parse_seasons(&document, &page_url)?;
        Self::append_current_season(&mut seasons, &team.path);
        Ok(seasons)
    }

    /// Extract (year, path) pairs from the season selector region.
    ///
    /// The first entry is the currently selected season and is skipped;
    /// the caller already holds that page.
    pub(crate) fn parse_seasons(document: &Html, page_url: &str) -> Result<Vec<Season>> {
        let region_sel = parse_selector("div#seasons")?;
        let item_sel = parse_selector("li")?;
        let link_sel = parse_selector("a[href]")?;

        let region = document
            .select(&region_sel)
            .next()
            .ok_or_else(|| AppError::page_structure("div#seasons", page_url))?;

        let mut seasons: Vec<Season> = Vec::new();
        for item in region.select(&item_sel).skip(1) {
            let label = cell_text(item);
            let Some(link) = item.select(&link_sel).next() else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                continue;
            };

            push_or_replace(
                &mut seasons,
                Season {
                    label,
                    url: href.to_string(),
                },
            );
        }

        Ok(seasons)
    }

    /// The team page itself is the current season; the selector omits it.
    /// Keyed by the year segment of the team path.
    pub(crate) fn append_current_season(seasons: &mut Vec<Season>, team_path: &str) {
        if let Some(year) = url::leading_year_segment(team_path) {
            push_or_replace(
                seasons,
                Season {
                    label: year.to_string(),
                    url: team_path.to_string(),
                },
            );
        }
    }
}

/// Keeps season labels unique: a repeated label replaces the earlier URL.
fn push_or_replace(seasons: &mut Vec<Season>, season: Season) {
    match seasons.iter_mut().find(|s| s.label == season.label) {
        Some(existing) => existing.url = season.url,
        None => seasons.push(season),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAM_PAGE_HTML: &str = r#"
        <html><body>
        <div id="seasons">
            <ul>
                <li class="selected">2018</li>
                <li><a href="/2017/team/334/index.html">2017</a></li>
                <li><a href="/2016/team/334/index.html">2016</a></li>
            </ul>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_parse_seasons_skips_selected_entry() {
        let document = Html::parse_document(TEAM_PAGE_HTML);
        let seasons = SeasonResolver::parse_seasons(&document, "http://test").unwrap();

        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].label, "2017");
        assert_eq!(seasons[0].url, "/2017/team/334/index.html");
        assert_eq!(seasons[1].label, "2016");
    }

    #[test]
    fn test_parse_seasons_missing_region_is_error() {
        let document = Html::parse_document("<html><body></body></html>");
        let err = SeasonResolver::parse_seasons(&document, "http://test").unwrap_err();
        assert!(matches!(err, AppError::PageStructure { .. }));
    }

    #[test]
    fn test_append_current_season_uses_year_segment() {
        let mut seasons = vec![Season {
            label: "2017".to_string(),
            url: "/2017/team/334/index.html".to_string(),
        }];
        SeasonResolver::append_current_season(&mut seasons, "/2018/team/334/index.html");

        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[1].label, "2018");
        assert_eq!(seasons[1].url, "/2018/team/334/index.html");
    }

    #[test]
    fn test_append_current_season_replaces_duplicate_label() {
        let mut seasons = vec![Season {
            label: "2018".to_string(),
            url: "/2018/team/334/old.html".to_string(),
        }];
        SeasonResolver::append_current_season(&mut seasons, "/2018/team/334/index.html");

        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[0].url, "/2018/team/334/index.html");
    }
}
