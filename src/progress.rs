//! Year-progress date math under a fixed civil-time offset.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Utc};

/// Fixed civil offset used for "today": UTC+05:30.
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Progress through the calendar year containing a reference date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct YearProgress {
    /// Civil date the progress was computed for.
    pub date: NaiveDate,
    pub year: i32,
    /// 1-based ordinal of `date` within `year`.
    pub day_of_year: u32,
    /// 365 or 366.
    pub total_days: u32,
    pub days_left: u32,
    /// `round(day_of_year / total_days * 100)`, 0..=100.
    pub percent: u32,
}

impl YearProgress {
    /// Progress for the civil date of `now` shifted by [`IST_OFFSET_SECS`].
    pub fn at(now: DateTime<Utc>) -> Self {
        Self::at_offset(now, ist_offset())
    }

    /// Progress for the civil date of `now` under an arbitrary fixed offset.
    pub fn at_offset(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self::for_date(now.with_timezone(&offset).date_naive())
    }

    /// Progress for the current system clock.
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    /// Progress for a civil date.
    pub fn for_date(date: NaiveDate) -> Self {
        let year = date.year();
        let start = date.with_ordinal(1).unwrap_or(date);
        let total_days = match NaiveDate::from_ymd_opt(year.saturating_add(1), 1, 1) {
            Some(end) => (end - start).num_days() as u32,
            // Past chrono's last representable year; fall back to the calendar rule.
            None => days_in_year(year),
        };
        let day_of_year = (date - start).num_days() as u32 + 1;

        Self {
            date,
            year,
            day_of_year,
            total_days,
            days_left: total_days - day_of_year,
            percent: percent_of(day_of_year, total_days),
        }
    }

    /// Whether this is the last day of the year.
    pub fn is_last_day(&self) -> bool {
        self.days_left == 0
    }
}

/// Proleptic Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

pub(crate) fn percent_of(day_of_year: u32, total_days: u32) -> u32 {
    if total_days == 0 {
        return 0;
    }
    (f64::from(day_of_year) / f64::from(total_days) * 100.0).round() as u32
}

pub(crate) fn ist_offset() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

#[cfg(test)]
#[path = "../tests/unit/progress/year.rs"]
mod tests;
