// Event module
// Day-granular timeline event model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::{days_between, parse_iso_date, DateParseError};

/// A date-ranged bar on the timeline.
///
/// `start` and `end` are both inclusive. `lane` is only populated on the
/// copies returned by lane assignment; the host's own snapshot keeps `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lane: Option<usize>,
}

/// Reasons an event cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("Event {0} is required")]
    MissingField(&'static str),
    #[error(transparent)]
    InvalidDate(#[from] DateParseError),
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use rust_timeline::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2021, 1, 15).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2021, 1, 17).unwrap();
    /// let event = Event::new(1, "Kickoff", start, end, "#3B82F6").unwrap();
    /// assert_eq!(event.duration_days(), 2);
    /// ```
    pub fn new(
        id: i64,
        title: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        color: impl Into<String>,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id,
            title: title.into(),
            start,
            end,
            color: color.into(),
            lane: None,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Only the interval is checked; titles may be blank.
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.end < self.start {
            return Err(EventValidationError::EndBeforeStart {
                start: self.start,
                end: self.end,
            });
        }

        Ok(())
    }

    /// Days from start to end; a single-day event has duration 0.
    pub fn duration_days(&self) -> i64 {
        days_between(self.start, self.end)
    }

    /// Number of day cells the bar spans.
    pub fn span_days(&self) -> i64 {
        self.duration_days() + 1
    }

    /// Inclusive overlap test on whole days.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.end >= start && self.start <= end
    }

    pub fn with_interval(&self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }
}

/// Builder for creating events with optional fields
#[derive(Debug, Default)]
pub struct EventBuilder {
    id: Option<i64>,
    title: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    color: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDate) -> Self {
        self.end = Some(end);
        self
    }

    /// Single-day event
    pub fn on(self, date: NaiveDate) -> Self {
        self.start(date).end(date)
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn build(self) -> Result<Event, EventValidationError> {
        let id = self.id.ok_or(EventValidationError::MissingField("id"))?;
        let title = self.title.ok_or(EventValidationError::MissingField("title"))?;
        let start = self.start.ok_or(EventValidationError::MissingField("start date"))?;
        let end = self.end.ok_or(EventValidationError::MissingField("end date"))?;

        Event::new(id, title, start, end, self.color.unwrap_or_default())
    }
}

/// Raw timeline record as it arrives from the host, dates as `yyyy-MM-dd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: i64,
    pub name: String,
    pub start: String,
    pub end: String,
}

impl TimelineItem {
    pub fn into_event(self, color: impl Into<String>) -> Result<Event, EventValidationError> {
        let start = parse_iso_date(&self.start)?;
        let end = parse_iso_date(&self.end)?;
        Event::new(self.id, self.name, start, end, color)
    }
}
