// Settings module
// User-tunable timeline configuration, persisted as TOML

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::view_range::ViewRange;

pub const DEFAULT_MIN_DAY_WIDTH: f32 = 60.0;
pub const DEFAULT_ROW_HEIGHT: f32 = 60.0;
pub const DEFAULT_ROW_PADDING: f32 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    pub view_range: ViewRange,
    pub anchor_date: NaiveDate,
    /// Lower bound for a day column when fitting the grid width.
    pub min_day_width: f32,
    pub row_height: f32,
    pub row_padding: f32,
    /// Colour tags handed out to imported items in order.
    pub palette: Vec<String>,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            view_range: ViewRange::default(),
            anchor_date: NaiveDate::from_ymd_opt(2021, 1, 15).unwrap_or_default(),
            min_day_width: DEFAULT_MIN_DAY_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            row_padding: DEFAULT_ROW_PADDING,
            palette: default_palette(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("row_padding cannot be negative (got {0})")]
    NegativePadding(f32),
    #[error("palette must contain at least one colour")]
    EmptyPalette,
}

impl TimelineSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("min_day_width", self.min_day_width),
            ("row_height", self.row_height),
        ] {
            if !(value > 0.0) {
                return Err(SettingsError::NonPositive { field, value });
            }
        }

        if self.row_padding < 0.0 {
            return Err(SettingsError::NegativePadding(self.row_padding));
        }

        if self.palette.is_empty() {
            return Err(SettingsError::EmptyPalette);
        }

        Ok(())
    }

    /// Colour for the `index`-th imported item, cycling through the palette.
    pub fn color_for_index(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return "";
        }
        &self.palette[index % self.palette.len()]
    }
}

pub fn default_palette() -> Vec<String> {
    [
        "#DBEAFE", "#DCFCE7", "#E9D5FF", "#FED7AA", "#FEF9C3", "#FCE7F3", "#E0E7FF", "#FEE2E2",
        "#3B82F6", "#22C55E",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}
