//! Plain date/time value edited by the picker components.
//!
//! ## Usage
//!
//! Hold the current selection in host state and fold [`FieldEdit`]s into it.
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: i64 = 86_400;

/// A calendar date and wall-clock time with no timezone attached.
///
/// The picker performs no calendar validation: the day field is whatever the
/// day column supplied (1-31), regardless of month length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickerDateTime {
    /// Full calendar year.
    pub year: i32,
    /// Month of the year, 1-based (1 = January).
    pub month: u8,
    /// Day of the month, 1-based.
    pub day: u8,
    /// Hour of the day (0-23).
    pub hour: u8,
    /// Minute of the hour (0-59).
    pub minute: u8,
}

/// A single-field update produced by one picker column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    /// Replace the day of the month.
    Day(u8),
    /// Replace the month (1-based).
    Month(u8),
    /// Replace the full year.
    Year(i32),
    /// Replace the hour.
    Hour(u8),
    /// Replace the minute.
    Minute(u8),
}

impl PickerDateTime {
    /// Creates a value from explicit date and time fields.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Midnight on January 1st of the given year.
    ///
    /// Used as the fallback selection when the host supplies no value.
    pub fn start_of_year(year: i32) -> Self {
        Self::new(year, 1, 1, 0, 0)
    }

    /// Returns a copy with a single field replaced.
    ///
    /// This is the whole edit model of the picker: the host owns the
    /// authoritative value, every column edit folds into it through this
    /// reducer, and the result is handed back via `on_change`.
    pub fn with_edit(self, edit: FieldEdit) -> Self {
        let mut next = self;
        match edit {
            FieldEdit::Day(day) => next.day = day,
            FieldEdit::Month(month) => next.month = month,
            FieldEdit::Year(year) => next.year = year,
            FieldEdit::Hour(hour) => next.hour = hour,
            FieldEdit::Minute(minute) => next.minute = minute,
        }
        next
    }
}

/// Returns the current calendar year in UTC.
pub fn current_year() -> i32 {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let days = duration.as_secs() as i64 / SECONDS_PER_DAY;
    civil_from_days(days).0
}

/// Converts days since 1970-01-01 into a (year, month, day) civil date.
///
/// Standard era-based conversion over 400-year cycles.
fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };
    (year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_replaces_only_its_field() {
        let date = PickerDateTime::new(2024, 5, 10, 0, 0);
        let edited = date.with_edit(FieldEdit::Day(20));
        assert_eq!(edited, PickerDateTime::new(2024, 5, 20, 0, 0));

        let edited = edited.with_edit(FieldEdit::Month(12));
        assert_eq!(edited, PickerDateTime::new(2024, 12, 20, 0, 0));

        let edited = edited.with_edit(FieldEdit::Year(1999));
        assert_eq!(edited, PickerDateTime::new(1999, 12, 20, 0, 0));
    }

    #[test]
    fn time_edits_leave_date_untouched() {
        let date = PickerDateTime::new(2024, 5, 10, 8, 30);
        let edited = date
            .with_edit(FieldEdit::Hour(23))
            .with_edit(FieldEdit::Minute(59));
        assert_eq!(edited, PickerDateTime::new(2024, 5, 10, 23, 59));
    }

    #[test]
    fn start_of_year_is_midnight_january_first() {
        let date = PickerDateTime::start_of_year(1924);
        assert_eq!(date, PickerDateTime::new(1924, 1, 1, 0, 0));
    }

    #[test]
    fn civil_conversion_matches_known_dates() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(10_957), (2000, 1, 1));
        assert_eq!(civil_from_days(11_017), (2000, 3, 1));
        assert_eq!(civil_from_days(19_723), (2024, 1, 1));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
    }

    #[test]
    fn current_year_is_plausible() {
        let year = current_year();
        assert!(year >= 2024);
    }
}
