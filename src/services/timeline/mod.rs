// Timeline layout pipeline
// filter_visible -> assign_lanes -> project, recomputed on every call

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::settings::TimelineSettings;
use crate::services::geometry::{lane_top, lanes_height, project, Geometry};
use crate::services::lanes::assign_lanes;
use crate::services::window::{fit_day_width, DateWindow};

/// Presentation constants the layout needs from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub day_width: f32,
    pub row_height: f32,
    pub row_padding: f32,
}

impl LayoutMetrics {
    /// Metrics for a grid `grid_width_px` wide, using the settings' minimum
    /// day width and row sizes.
    pub fn fit(settings: &TimelineSettings, window: &DateWindow, grid_width_px: f32) -> Self {
        Self {
            day_width: fit_day_width(grid_width_px, window.day_count, settings.min_day_width),
            row_height: settings.row_height,
            row_padding: settings.row_padding,
        }
    }
}

/// A positioned, lane-annotated bar.
#[derive(Debug, Clone, PartialEq)]
pub struct EventBar {
    pub event: Event,
    pub lane: usize,
    pub geometry: Geometry,
    pub top_px: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub window: DateWindow,
    pub dates: Vec<NaiveDate>,
    pub bars: Vec<EventBar>,
    pub lane_count: usize,
    pub height_px: f32,
}

/// Events with at least one day inside the window.
pub fn filter_visible(events: &[Event], window: &DateWindow) -> Vec<Event> {
    let Some(last) = window.last_date() else {
        return Vec::new();
    };
    events
        .iter()
        .filter(|event| event.overlaps(window.first_date(), last))
        .cloned()
        .collect()
}

/// Lay out `events` for `window`.
pub fn build_layout(events: &[Event], window: &DateWindow, metrics: LayoutMetrics) -> TimelineLayout {
    let visible = filter_visible(events, window);
    let assignment = assign_lanes(&visible);
    let window_end = window.last_date();

    let bars: Vec<EventBar> = assignment
        .events
        .into_iter()
        .map(|event| {
            let lane = event.lane.unwrap_or_default();
            let geometry = project(&event, window.first_date(), window_end, metrics.day_width);
            EventBar {
                lane,
                geometry,
                top_px: lane_top(lane, metrics.row_height, metrics.row_padding),
                event,
            }
        })
        .collect();

    log::debug!(
        "Laid out {}/{} events in {} lanes for {} (+{} days)",
        bars.len(),
        events.len(),
        assignment.lane_count,
        window.anchor,
        window.day_count
    );

    TimelineLayout {
        window: *window,
        dates: window.visible_dates(),
        height_px: lanes_height(assignment.lane_count, metrics.row_height),
        lane_count: assignment.lane_count,
        bars,
    }
}
