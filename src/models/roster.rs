//! Roster model structures.

use serde::{Deserialize, Serialize};

/// One player on a team's roster for one season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterPlayer {
    /// Season year the roster row belongs to
    pub season: String,
    /// Last name, including any suffix ("Smith Jr.")
    pub name_last: String,
    pub name_first: String,
    /// Jersey number as scraped; may be empty
    pub number: String,
    pub position: String,
    /// Class year, e.g. "SR"
    pub class_year: String,
    /// Raw height string as scraped, `F-I`
    pub height: String,
    /// Height normalized to inches; `None` when the site shows no height
    pub height_inches: Option<u32>,
    /// Weight in pounds; `None` when the site shows no weight
    pub weight: Option<u32>,
    pub city: String,
    /// State portion of the hometown. When the hometown has no
    /// comma-separated state, this carries the original token unchanged.
    pub state: String,
    pub prev_school: String,
}
