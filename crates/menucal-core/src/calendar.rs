#![forbid(unsafe_code)]

//! Calendar collaborator interface and day-grid read model.
//!
//! The month grid, lunar/holiday annotations, and event storage live
//! outside this workspace; controllers only issue navigation commands and
//! read the grid model. The types here are the contract, not an
//! implementation.

use bitflags::bitflags;

/// Commands the presentation layer issues to the calendar collaborator.
///
/// Implementations mutate the represented month/day; the controllers never
/// do date arithmetic themselves.
pub trait CalendarCommands {
    /// Reset the represented day to today. Issued before the popover opens
    /// so it always opens on the current day.
    fn reset_to_current_day(&self);

    /// Navigate the grid to the given year and month (1-12).
    ///
    /// Callers validate the month range before delegating; implementations
    /// may clamp or ignore out-of-range input.
    fn navigate_to_month(&self, year: i32, month: u8);

    /// Navigate one month back.
    fn navigate_previous_month(&self);

    /// Navigate one month forward.
    fn navigate_next_month(&self);
}

/// A calendar date, split into the components the date fields edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    /// 1-12.
    pub month: u8,
    /// 1-31.
    pub day: u8,
}

impl CalendarDate {
    /// Create a date from components. No range validation; this is a plain
    /// value carrier for the collaborator's dates.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

bitflags! {
    /// Per-cell flags in the day grid.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DayFlags: u8 {
        /// The cell represents today.
        const TODAY = 0b0001;
        /// The cell belongs to the displayed month (vs. leading/trailing
        /// days of adjacent months).
        const CURRENT_MONTH = 0b0010;
        /// The cell sits in the week-number column.
        const WEEK_NUMBER_ROW = 0b0100;
    }
}

/// Holiday/workday override for a day, from the collaborator's tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HolidayOverride {
    /// No override; the weekday decides.
    #[default]
    None,
    /// Statutory holiday (rest day).
    Holiday,
    /// Compensated working day.
    Workday,
}

/// One cell of the month grid, as read from the calendar collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: CalendarDate,
    pub flags: DayFlags,
    pub holiday: HolidayOverride,
    /// Lunar date or solar-term annotation line, already formatted.
    pub annotation: String,
    /// Events scheduled on this day.
    pub events: Vec<DayEvent>,
}

/// An event in the selected day's schedule. Also the payload handed to the
/// event-editor window.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEvent {
    /// Stable identity within the event store.
    pub id: u64,
    pub title: String,
    /// Start/end as minutes since midnight; all-day events span 0..=1439.
    pub start_minute: u16,
    pub end_minute: u16,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_flags_combine() {
        let flags = DayFlags::TODAY | DayFlags::CURRENT_MONTH;
        assert!(flags.contains(DayFlags::TODAY));
        assert!(!flags.contains(DayFlags::WEEK_NUMBER_ROW));
    }

    #[test]
    fn holiday_override_defaults_to_none() {
        assert_eq!(HolidayOverride::default(), HolidayOverride::None);
    }
}
