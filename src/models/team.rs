//! Team and season model structures.

use serde::{Deserialize, Serialize};

/// A team listed in the site's FBS directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Display name, also used as the team's output directory name
    pub name: String,

    /// Site-relative path of the team's current-season page
    pub path: String,
}

/// One season of statistics for a team.
///
/// Labels are unique within a team; the resolver replaces an existing
/// entry when it sees the same label again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    /// Year label, e.g. "2018"
    pub label: String,

    /// Site-relative path of the season's statistics page
    pub url: String,
}
