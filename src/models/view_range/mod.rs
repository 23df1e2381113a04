// View range module
// Window granularities offered by the timeline controls

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many days the timeline shows at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewRange {
    #[serde(rename = "1week")]
    Week,
    #[default]
    #[serde(rename = "2weeks")]
    TwoWeeks,
    #[serde(rename = "1month")]
    Month,
}

impl ViewRange {
    pub const ALL: [ViewRange; 3] = [ViewRange::Week, ViewRange::TwoWeeks, ViewRange::Month];

    pub fn day_count(self) -> u32 {
        match self {
            ViewRange::Week => 7,
            ViewRange::TwoWeeks => 14,
            ViewRange::Month => 30,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ViewRange::Week => "1week",
            ViewRange::TwoWeeks => "2weeks",
            ViewRange::Month => "1month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewRange::Week => "1 week",
            ViewRange::TwoWeeks => "2 weeks",
            ViewRange::Month => "1 month",
        }
    }
}

impl fmt::Display for ViewRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewRange::ALL
            .into_iter()
            .find(|range| range.key() == s.trim())
            .ok_or_else(|| format!("Unknown view range '{}' (expected 1week, 2weeks or 1month)", s))
    }
}

/// Navigation step for the previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

impl NavDirection {
    pub fn sign(self) -> i64 {
        match self {
            NavDirection::Previous => -1,
            NavDirection::Next => 1,
        }
    }
}
