use chrono::NaiveDate;

use crate::models::event::Event;
use crate::services::window::DateWindow;
use crate::utils::date::add_days;

/// Interval an event would occupy after being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reschedule {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Range highlighted while a bar hovers over the grid.
pub type DropPreview = Reschedule;

/// New interval for `event_id` when dropped on `target`.
///
/// `None` if the id is unknown, `target` is not one of the window's visible
/// dates, or the moved end would fall past the calendar. The returned
/// interval keeps the event's duration.
pub fn compute_reschedule(
    events: &[Event],
    event_id: i64,
    target: &str,
    window: &DateWindow,
) -> Option<Reschedule> {
    let Some(event) = events.iter().find(|event| event.id == event_id) else {
        log::debug!("Drop references unknown event {event_id}");
        return None;
    };

    let target_date = window.resolve_date(target)?;
    let reschedule = reschedule_to(event, target_date);
    if reschedule.is_none() {
        log::warn!("Event {event_id} cannot move to {target_date}: end out of calendar range");
    }
    reschedule
}

/// Move `event` so it starts on `target`, preserving its duration.
pub fn reschedule_to(event: &Event, target: NaiveDate) -> Option<Reschedule> {
    Some(Reschedule {
        start: target,
        end: add_days(target, event.duration_days())?,
    })
}

/// Inclusive membership test used to shade candidate drop cells.
pub fn is_date_within_range(date: NaiveDate, range_start: NaiveDate, range_end: NaiveDate) -> bool {
    date >= range_start && date <= range_end
}

/// Preview for a drag-over notification. A drag that is not over any cell
/// clears the preview.
pub fn drop_preview(
    events: &[Event],
    event_id: i64,
    hovered: Option<&str>,
    window: &DateWindow,
) -> Option<DropPreview> {
    hovered.and_then(|target| compute_reschedule(events, event_id, target, window))
}

/// Whether a grid cell falls inside the current hover preview.
pub fn is_in_preview(date: NaiveDate, preview: Option<&DropPreview>) -> bool {
    preview.is_some_and(|range| is_date_within_range(date, range.start, range.end))
}

/// Snapshot with `event_id` moved to `reschedule`. Other events are cloned
/// unchanged; an unknown id yields an identical snapshot.
pub fn apply_reschedule(events: &[Event], event_id: i64, reschedule: Reschedule) -> Vec<Event> {
    events
        .iter()
        .map(|event| {
            if event.id == event_id {
                log::info!(
                    "Rescheduled event {} '{}' from {}..{} to {}..{}",
                    event.id,
                    event.title,
                    event.start,
                    event.end,
                    reschedule.start,
                    reschedule.end
                );
                event.with_interval(reschedule.start, reschedule.end)
            } else {
                event.clone()
            }
        })
        .collect()
}

/// Handle a completed drop: resolve, then apply. `None` means the drop was
/// rejected and the snapshot should stay as it is.
pub fn drop_event(
    events: &[Event],
    event_id: i64,
    target: &str,
    window: &DateWindow,
) -> Option<Vec<Event>> {
    let reschedule = compute_reschedule(events, event_id, target, window)?;
    Some(apply_reschedule(events, event_id, reschedule))
}

/// Snapshot with the title of `event_id` replaced.
///
/// The title is trimmed; blank or unchanged titles leave the snapshot as is.
pub fn rename_event(events: &[Event], event_id: i64, title: &str) -> Vec<Event> {
    let title = title.trim();
    events
        .iter()
        .map(|event| {
            if event.id == event_id && !title.is_empty() && title != event.title {
                Event {
                    title: title.to_string(),
                    ..event.clone()
                }
            } else {
                event.clone()
            }
        })
        .collect()
}
