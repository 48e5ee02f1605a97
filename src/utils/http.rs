//! HTTP client utilities.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::Result;
use crate::models::HttpConfig;

/// Create a configured HTTP client
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    Ok(Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?)
}

/// Fetch a page and return the HTML document.
///
/// Non-success statuses are errors; there is no retry at this level.
pub fn fetch_page(client: &Client, url: &str) -> Result<Html> {
    let response = client.get(url).send()?.error_for_status()?;
    let text = response.text()?;
    Ok(Html::parse_document(&text))
}

/// Fetch a page, retrying a bounded number of times on failure.
pub fn fetch_page_with_retry(client: &Client, url: &str, config: &HttpConfig) -> Result<Html> {
    let attempts = config.retries + 1;
    for attempt in 1..attempts {
        match fetch_page(client, url) {
            Ok(document) => return Ok(document),
            Err(e) => {
                log::warn!("Fetch failed for {} (attempt {}/{}): {}", url, attempt, attempts, e);
                thread::sleep(Duration::from_millis(config.request_delay_ms));
            }
        }
    }
    fetch_page(client, url)
}

/// Sleep for the configured inter-request delay.
pub fn pause(config: &HttpConfig) {
    if config.request_delay_ms > 0 {
        thread::sleep(Duration::from_millis(config.request_delay_ms));
    }
}
