// Date window
// Anchor date plus a fixed day count; navigation moves by whole windows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::view_range::{NavDirection, ViewRange};
use crate::utils::date::{add_days, is_weekend, parse_iso_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub anchor: NaiveDate,
    /// Always > 0. Windows built from a `ViewRange` are 7, 14 or 30.
    pub day_count: u32,
}

impl DateWindow {
    /// Window of `day_count` days starting at `anchor`. `day_count` must be
    /// positive; a zero count yields an empty window.
    pub fn new(anchor: NaiveDate, day_count: u32) -> Self {
        Self { anchor, day_count }
    }

    pub fn for_range(anchor: NaiveDate, range: ViewRange) -> Self {
        Self::new(anchor, range.day_count())
    }

    /// Consecutive dates from the anchor, exactly `day_count` of them.
    /// Empty when the window would run past the last representable date.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        if self.last_date().is_none() {
            return Vec::new();
        }
        self.anchor
            .iter_days()
            .take(self.day_count as usize)
            .collect()
    }

    pub fn first_date(&self) -> NaiveDate {
        self.anchor
    }

    /// Last visible date, `None` for an empty window or one that runs off
    /// the end of the calendar.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.day_count
            .checked_sub(1)
            .and_then(|offset| add_days(self.anchor, i64::from(offset)))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.last_date() {
            Some(last) => date >= self.anchor && date <= last,
            None => false,
        }
    }

    /// Move the anchor one whole window in `direction`.
    ///
    /// `None` when the shifted window would not fit inside the calendar.
    pub fn shift(&self, direction: NavDirection) -> Option<Self> {
        let offset = direction.sign() * i64::from(self.day_count);
        let shifted = add_days(self.anchor, offset)
            .map(|anchor| Self::new(anchor, self.day_count))
            .filter(|window| window.day_count == 0 || window.last_date().is_some());

        match &shifted {
            Some(window) => log::debug!(
                "Shifted window {:?}: {} -> {}",
                direction,
                self.anchor,
                window.anchor
            ),
            None => log::warn!(
                "Cannot shift window {:?} from {}: out of calendar range",
                direction,
                self.anchor
            ),
        }
        shifted
    }

    /// Same anchor, new granularity.
    pub fn with_view_range(&self, range: ViewRange) -> Self {
        Self::for_range(self.anchor, range)
    }

    /// Resolve a drop-target string to the visible date it names.
    ///
    /// Returns `None` when the string does not parse or the day is outside
    /// the window, so a stale or off-grid target is never guessed at.
    pub fn resolve_date(&self, target: &str) -> Option<NaiveDate> {
        let parsed = match parse_iso_date(target) {
            Ok(date) => date,
            Err(err) => {
                log::debug!("Ignoring drop target: {err}");
                return None;
            }
        };
        self.contains(parsed).then_some(parsed)
    }

    /// Header cells for the visible dates. `today` is supplied by the caller.
    pub fn day_columns(&self, today: NaiveDate) -> Vec<DayColumn> {
        self.visible_dates()
            .into_iter()
            .map(|date| DayColumn {
                date,
                weekday: date.format("%a").to_string(),
                is_weekend: is_weekend(date),
                is_today: date == today,
            })
            .collect()
    }
}

/// One header cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayColumn {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon".
    pub weekday: String,
    pub is_weekend: bool,
    pub is_today: bool,
}

/// Width of one day column when `grid_width_px` is split across the window,
/// never narrower than `min_day_width`. Rounded down to whole pixels.
pub fn fit_day_width(grid_width_px: f32, day_count: u32, min_day_width: f32) -> f32 {
    if day_count == 0 {
        return min_day_width.floor();
    }
    (grid_width_px / day_count as f32).max(min_day_width).floor()
}
