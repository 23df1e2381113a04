use chrono::NaiveDate;

use crate::models::event::Event;
use crate::utils::date::days_between;

/// Horizontal placement of one bar inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub left_px: f32,
    pub width_px: f32,
    pub truncated_start: bool,
    pub truncated_end: bool,
    pub visible: bool,
}

/// Project `event` onto a window beginning at `window_start`.
///
/// An event that began before the window is clipped to the left edge and
/// flagged `truncated_start`; one running past `window_end` is cut at that
/// day and flagged `truncated_end`. Widths count days inclusively. Without a `window_end` the bar is never cut on the right. Events that
/// finish before the window, or start after its end, come back with
/// `visible == false` and zero extent.
pub fn project(
    event: &Event,
    window_start: NaiveDate,
    window_end: Option<NaiveDate>,
    day_width_px: f32,
) -> Geometry {
    let after_window = window_end.is_some_and(|end| event.start > end);
    if window_start > event.end || after_window {
        return Geometry::default();
    }

    let truncated_start = event.start < window_start;
    let effective_start = if truncated_start {
        window_start
    } else {
        event.start
    };

    let (effective_end, truncated_end) = match window_end {
        Some(end) if event.end > end => (end, true),
        _ => (event.end, false),
    };

    let left_days = days_between(window_start, effective_start);
    let span_days = days_between(effective_start, effective_end) + 1;

    Geometry {
        left_px: left_days as f32 * day_width_px,
        width_px: span_days as f32 * day_width_px,
        truncated_start,
        truncated_end,
        visible: true,
    }
}

/// Top edge of a bar in `lane`.
pub fn lane_top(lane: usize, row_height: f32, row_padding: f32) -> f32 {
    lane as f32 * row_height + row_padding
}

/// Height needed to stack `lane_count` lanes.
pub fn lanes_height(lane_count: usize, row_height: f32) -> f32 {
    lane_count as f32 * row_height
}
