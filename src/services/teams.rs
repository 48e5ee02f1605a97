//! Team directory resolver.
//!
//! Extracts the FBS team navigation list from the site's landing page.

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::{AppError, Result};
use crate::models::{HttpConfig, Team};
use crate::services::{cell_text, parse_selector};
use crate::utils::http::fetch_page_with_retry;

/// Service for resolving the site's team directory.
pub struct TeamDirectory<'a> {
    client: &'a Client,
    http: &'a HttpConfig,
}

impl<'a> TeamDirectory<'a> {
    /// Create a new team directory resolver.
    pub fn new(client: &'a Client, http: &'a HttpConfig) -> Self {
        Self { client, http }
    }

    /// Fetch the landing page and list every team in document order.
    ///
    /// A missing directory region is fatal for the whole run.
    pub fn fetch_all(&self) -> Result<Vec<Team>> {
        let document = fetch_page_with_retry(self.client, &self.http.base_url, self.http)?;
        Self::parse_directory(&document, &self.http.base_url)
    }

    /// Extract (name, path) pairs from the team navigation list.
    pub(crate) fn parse_directory(document: &Html, url: &str) -> Result<Vec<Team>> {
        let list_sel = parse_selector("ul.sub1")?;
        let item_sel = parse_selector("li.sub1")?;
        let link_sel = parse_selector("a[href]")?;

        let list = document
            .select(&list_sel)
            .next()
            .ok_or_else(|| AppError::page_structure("ul.sub1", url))?;

        let mut teams = Vec::new();
        for item in list.select(&item_sel) {
            let name = cell_text(item);
            let Some(link) = item.select(&link_sel).next() else {
                continue;
            };
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            if name.is_empty() {
                continue;
            }

            teams.push(Team {
                name,
                path: href.to_string(),
            });
        }

        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIRECTORY_HTML: &str = r#"
        <html><body>
        <ul class="sub1">
            <li class="sub1"><a href="/2018/team/5/index.html">Air Force</a></li>
            <li class="sub1"><a href="/2018/team/8/index.html">Akron</a></li>
            <li class="sub1"><a href="/2018/team/9/index.html">Alabama</a></li>
        </ul>
        </body></html>
    "#;

    #[test]
    fn test_parse_directory_lists_teams_in_order() {
        let document = Html::parse_document(DIRECTORY_HTML);
        let teams = TeamDirectory::parse_directory(&document, "http://test").unwrap();

        assert_eq!(teams.len(), 3);
        assert_eq!(teams[0].name, "Air Force");
        assert_eq!(teams[0].path, "/2018/team/5/index.html");
        assert_eq!(teams[2].name, "Alabama");
    }

    #[test]
    fn test_parse_directory_missing_region_is_error() {
        let document = Html::parse_document("<html><body><p>moved</p></body></html>");
        let err = TeamDirectory::parse_directory(&document, "http://test").unwrap_err();
        assert!(matches!(err, AppError::PageStructure { .. }));
    }
}
