//! URL helpers for the site's path scheme.

/// Join a site-relative path onto the base URL.
pub fn absolutize(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Derive a season's roster page from its listing page path.
///
/// The site names every season landing page `index.html`; the roster
/// lives next to it as `roster.html`.
pub fn roster_page(season_path: &str) -> String {
    let prefix = match season_path.find("index.html") {
        Some(idx) => &season_path[..idx],
        None => season_path,
    };
    format!("{}roster.html", prefix)
}

/// Year segment the site embeds as the first component of a team path,
/// e.g. `/2018/team/334/index.html` → `2018`.
pub fn leading_year_segment(path: &str) -> Option<&str> {
    path.split('/').nth(1).filter(|segment| !segment.is_empty())
}
