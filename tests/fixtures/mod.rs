// Test fixtures - reusable test data
// Provides consistent events and windows across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_timeline::models::event::Event;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
    }

    pub fn feb(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 2, day).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn event(id: i64, start: NaiveDate, end: NaiveDate) -> Event {
        Event::new(id, format!("Event {id}"), start, end, "#3B82F6").unwrap()
    }

    /// Overlapping pair: shares 01-16 and 01-17
    pub fn overlapping_pair() -> Vec<Event> {
        vec![
            event(1, dates::jan(15), dates::jan(17)),
            event(2, dates::jan(16), dates::jan(18)),
        ]
    }

    /// Back-to-back pair: second starts the day after the first ends
    pub fn adjacent_pair() -> Vec<Event> {
        vec![
            event(1, dates::jan(10), dates::jan(12)),
            event(2, dates::jan(13), dates::jan(15)),
        ]
    }

    /// The sample project plan the demo timeline ships with
    pub fn project_plan() -> Vec<Event> {
        vec![
            event(1, dates::jan(14), dates::jan(22)),
            event(2, dates::jan(12), dates::jan(14)),
            event(3, dates::feb(1), dates::feb(15)),
            event(4, dates::jan(3), dates::jan(5)),
            event(5, dates::jan(17), dates::jan(28)),
            event(6, dates::jan(20), dates::jan(20)),
            event(7, dates::jan(25), dates::feb(2)),
        ]
    }
}
