// Property-based tests for lane packing, rescheduling and geometry
// Random event sets are generated as day offsets from a fixed base date

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_timeline::models::event::Event;
use rust_timeline::services::geometry::project;
use rust_timeline::services::lanes::{assign_lanes, max_overlap};
use rust_timeline::services::reschedule::compute_reschedule;
use rust_timeline::services::window::DateWindow;
use rust_timeline::utils::date::format_iso_date;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0i64..90, 0i64..20), 0..40).prop_map(|spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(index, (offset, length))| {
                let start = base() + Duration::days(offset);
                Event::new(index as i64, "Generated", start, start + Duration::days(length), "")
                    .unwrap()
            })
            .collect()
    })
}

proptest! {
    /// Property: two events in the same lane never share a day
    #[test]
    fn prop_no_overlap_within_lane(events in arb_events()) {
        let result = assign_lanes(&events);
        for a in &result.events {
            for b in &result.events {
                if a.id != b.id && a.lane == b.lane {
                    prop_assert!(a.end < b.start || b.end < a.start);
                }
            }
        }
    }

    /// Property: lane count equals the peak number of events on one day
    #[test]
    fn prop_lane_count_is_minimal(events in arb_events()) {
        let result = assign_lanes(&events);
        prop_assert_eq!(result.lane_count, max_overlap(&events));
    }

    /// Property: every input event comes back exactly once with a lane below the count
    #[test]
    fn prop_every_event_assigned_once(events in arb_events()) {
        let result = assign_lanes(&events);
        prop_assert_eq!(result.events.len(), events.len());

        let mut ids: Vec<i64> = result.events.iter().map(|e| e.id).collect();
        ids.sort();
        let expected: Vec<i64> = (0..events.len() as i64).collect();
        prop_assert_eq!(ids, expected);

        for event in &result.events {
            prop_assert!(event.lane.unwrap() < result.lane_count);
        }
        prop_assert!(result.events.windows(2).all(|pair| pair[0].start <= pair[1].start));
    }

    /// Property: a reschedule never changes an event's duration
    #[test]
    fn prop_reschedule_preserves_duration(
        events in arb_events().prop_filter("need an event", |e| !e.is_empty()),
        pick in any::<prop::sample::Index>(),
        target_offset in 0i64..30,
    ) {
        let event = &events[pick.index(events.len())];
        let window = DateWindow::new(base(), 30);
        let target = format_iso_date(base() + Duration::days(target_offset));

        let moved = compute_reschedule(&events, event.id, &target, &window).unwrap();
        prop_assert_eq!(moved.end - moved.start, event.end - event.start);
        prop_assert_eq!(format_iso_date(moved.start), target);
    }

    /// Property: projecting twice gives identical geometry, and truncation implies clipping
    #[test]
    fn prop_geometry_is_deterministic(
        offset in 0i64..60,
        length in 0i64..30,
        window_offset in 0i64..60,
        day_count in 1i64..31,
        day_width in 1.0f32..120.0,
    ) {
        let start = base() + Duration::days(offset);
        let event = Event::new(1, "Bar", start, start + Duration::days(length), "").unwrap();
        let window_start = base() + Duration::days(window_offset);
        let window_end = window_start + Duration::days(day_count - 1);

        let first = project(&event, window_start, Some(window_end), day_width);
        let second = project(&event, window_start, Some(window_end), day_width);
        prop_assert_eq!(first, second);

        if first.visible && event.start < window_start {
            prop_assert!(first.truncated_start);
            prop_assert_eq!(first.left_px, 0.0);
        }
        if first.visible && event.end > window_end {
            prop_assert!(first.truncated_end);
            prop_assert!(first.left_px + first.width_px <= day_count as f32 * day_width + 0.01 * day_width);
        }
    }
}
