// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Derived range accessors: start/end of day, month, and year, the paired
//! `(start, end)` tuples, and the month-length helper.
//!
//! All accessors return new values and never mutate the receiver.  An
//! "end" is the last representable instant of the span, one microsecond
//! before the next span begins.

use crate::date::Date;
use chrono::{Datelike, Months, NaiveDate, NaiveTime};

fn last_instant_of_day() -> NaiveTime {
    NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).expect("23:59:59.999999 is a valid time")
}

impl Date {
    /// Same calendar date, time set to `00:00:00.000000`.
    pub fn start_of_day(&self) -> Date {
        Date::from(self.date())
    }

    /// Same calendar date, time set to `23:59:59.999999`.
    pub fn end_of_day(&self) -> Date {
        Date::from(self.date().and_time(last_instant_of_day()))
    }

    /// First instant of the current month.
    pub fn start_of_month(&self) -> Date {
        let first = NaiveDate::from_ymd_opt(self.year(), self.month(), 1)
            .expect("the first of the current month is always a valid date");
        Date::from(first)
    }

    /// Last instant of the current month.
    pub fn end_of_month(&self) -> Date {
        let last = NaiveDate::from_ymd_opt(self.year(), self.month(), self.days_in_month())
            .expect("the last day of the current month is always a valid date");
        Date::from(last.and_time(last_instant_of_day()))
    }

    /// First instant of the current year.
    pub fn start_of_year(&self) -> Date {
        let first = NaiveDate::from_ymd_opt(self.year(), 1, 1)
            .expect("January 1st of the current year is always a valid date");
        Date::from(first)
    }

    /// Last instant of the current year.
    pub fn end_of_year(&self) -> Date {
        let last = NaiveDate::from_ymd_opt(self.year(), 12, 31)
            .expect("December 31st of the current year is always a valid date");
        Date::from(last.and_time(last_instant_of_day()))
    }

    /// `(start_of_day, end_of_day)`.
    pub fn day_tuple(&self) -> (Date, Date) {
        (self.start_of_day(), self.end_of_day())
    }

    /// `(start_of_month, end_of_month)`.
    pub fn month_tuple(&self) -> (Date, Date) {
        (self.start_of_month(), self.end_of_month())
    }

    /// `(start_of_year, end_of_year)`.
    pub fn year_tuple(&self) -> (Date, Date) {
        (self.start_of_year(), self.end_of_year())
    }

    /// Number of days in the current month, leap-year aware.
    ///
    /// Computed as first-of-next-month minus one day, so variable month
    /// lengths come straight from the calendar arithmetic.
    pub fn days_in_month(&self) -> u32 {
        let first = NaiveDate::from_ymd_opt(self.year(), self.month(), 1)
            .expect("the first of the current month is always a valid date");
        match first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
        {
            Some(last) => last.day(),
            // December of the last supported year has no next month, but
            // December always has 31 days.
            None => 31,
        }
    }
}
