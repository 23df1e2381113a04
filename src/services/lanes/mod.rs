// Lane assignment
// Greedy packing of overlapping bars into the fewest horizontal lanes

use chrono::{Datelike, NaiveDate};

use crate::models::event::Event;

/// Lane-annotated copy of an event list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaneAssignment {
    /// Events in start-date order, each with `lane` set.
    pub events: Vec<Event>,
    pub lane_count: usize,
}

/// Soonest day a lane frees up, plus who is holding it.
#[derive(Debug, Clone, Copy)]
struct Lane {
    end: NaiveDate,
    occupant_id: i64,
}

/// Assign every event a lane index, opening as few lanes as the overlap allows.
///
/// Each event goes into the first lane whose occupant ended strictly before
/// the event starts. Scanning in start order keeps the lane count equal to
/// the largest number of events sharing one day.
///
/// The input is not modified. Events sharing a start date keep their input
/// order. Intervals with `end < start` are a caller error and are not checked.
pub fn assign_lanes(events: &[Event]) -> LaneAssignment {
    if events.is_empty() {
        return LaneAssignment::default();
    }

    let mut sorted: Vec<Event> = events.to_vec();
    // stable: equal start dates keep their relative input order
    sorted.sort_by_key(|event| event.start);

    let mut lanes: Vec<Lane> = Vec::new();

    for event in sorted.iter_mut() {
        let occupied = Lane {
            end: event.end,
            occupant_id: event.id,
        };

        let index = match find_available_lane(&lanes, event.start) {
            Some(index) => {
                log::trace!(
                    "Event {} takes lane {} after event {}",
                    event.id,
                    index,
                    lanes[index].occupant_id
                );
                lanes[index] = occupied;
                index
            }
            None => {
                lanes.push(occupied);
                lanes.len() - 1
            }
        };
        event.lane = Some(index);
    }

    log::debug!(
        "Assigned {} events to {} lanes",
        sorted.len(),
        lanes.len()
    );

    LaneAssignment {
        events: sorted,
        lane_count: lanes.len(),
    }
}

fn find_available_lane(lanes: &[Lane], start: NaiveDate) -> Option<usize> {
    lanes.iter().position(|lane| lane.end < start)
}

/// Largest number of events covering one day, found by sweeping start/end
/// boundaries. Used to check lane counts.
pub fn max_overlap(events: &[Event]) -> usize {
    // day numbers instead of dates so the day after `NaiveDate::MAX` exists
    let day = |date: NaiveDate| i64::from(date.num_days_from_ce());

    let mut boundaries: Vec<(i64, i32)> = Vec::with_capacity(events.len() * 2);
    for event in events {
        boundaries.push((day(event.start), 1));
        // an event still occupies its end day; it leaves the day after
        boundaries.push((day(event.end) + 1, -1));
    }
    // departures sort before arrivals on the same day
    boundaries.sort();

    let mut current = 0i32;
    let mut peak = 0i32;
    for (_, delta) in boundaries {
        current += delta;
        peak = peak.max(current);
    }
    peak as usize
}
