//! Game-day calendar
//!
//! Schedule lookups are keyed by calendar date. The calendar either follows
//! the local clock or is pinned to a fixed day for replays and tests.

use chrono::{Duration, Local, NaiveDate};

/// Supplies "today" and "yesterday" for schedule queries
#[derive(Debug, Clone, Copy, Default)]
pub struct GameCalendar {
    fixed: Option<NaiveDate>,
}

impl GameCalendar {
    /// Calendar that follows the local clock
    pub fn live() -> Self {
        Self { fixed: None }
    }

    /// Calendar pinned to one day
    pub fn fixed(day: NaiveDate) -> Self {
        Self { fixed: Some(day) }
    }

    pub fn today(&self) -> NaiveDate {
        self.fixed.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn yesterday(&self) -> NaiveDate {
        self.today() - Duration::days(1)
    }
}

/// Format a date the way the schedule endpoint expects it
pub fn schedule_date(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
