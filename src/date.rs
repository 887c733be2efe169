// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`Date`] value type: construction, field access, delta-based
//! mutation, conversions, and comparison.
//!
//! A `Date` wraps a single canonical instant (a civil date-time with
//! microsecond precision) and rewrites it through every accessor.  Field
//! setters apply the *difference* between the requested and current value
//! as a calendar shift, so out-of-range inputs roll neighbouring fields
//! instead of being rejected — see the crate-level docs for the full
//! contract.

use crate::error::DateError;
use crate::input::{from_components, from_epoch_f64, Ago, DateInput};
use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike,
};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A civil (time-zone-naive) date-time value with writable fields.
///
/// Ordering, equality, and hashing are defined purely by the wrapped
/// instant; the type is `Copy`, so derived accessors hand out fresh values
/// while setters mutate the receiver in place.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub(crate) instant: NaiveDateTime,
}

impl Date {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from any legal [`DateInput`] shape.
    ///
    /// ```
    /// use civildate::Date;
    ///
    /// let from_ts = Date::new(1_234_567_890)?;
    /// let from_components = Date::new([2009, 2, 13, 23, 31, 30])?;
    /// assert_eq!(from_ts, from_components);
    /// # Ok::<(), civildate::DateError>(())
    /// ```
    pub fn new(input: impl Into<DateInput>) -> Result<Self, DateError> {
        Ok(Self {
            instant: input.into().resolve()?,
        })
    }

    /// Create from an input shape, then rewind by the given [`Ago`]
    /// offsets (years, months, days, hours, minutes, seconds — in that
    /// order; the first two are calendar-aware).
    pub fn new_ago(input: impl Into<DateInput>, ago: Ago) -> Result<Self, DateError> {
        let mut date = Self::new(input)?;
        date.shift_months(-(i64::from(ago.years) * 12))?;
        date.shift_months(-i64::from(ago.months))?;
        date.shift(span(ago.days.wrapping_neg(), "days", Duration::try_days)?)?;
        date.shift(span(ago.hours.wrapping_neg(), "hours", Duration::try_hours)?)?;
        date.shift(span(ago.minutes.wrapping_neg(), "minutes", Duration::try_minutes)?)?;
        date.shift(span(ago.seconds.wrapping_neg(), "seconds", Duration::try_seconds)?)?;
        Ok(date)
    }

    /// The current local wall-clock date-time.
    pub fn now() -> Self {
        Self {
            instant: Local::now().naive_local(),
        }
    }

    /// Create from whole epoch seconds (UTC-naive).
    pub fn from_timestamp(secs: i64) -> Result<Self, DateError> {
        DateTime::from_timestamp(secs, 0)
            .map(|dt| Self {
                instant: dt.naive_utc(),
            })
            .ok_or_else(|| {
                DateError::OutOfRange(format!(
                    "timestamp {secs} is outside the supported calendar range"
                ))
            })
    }

    /// Create from fractional epoch seconds; the fraction becomes
    /// microseconds.
    pub fn from_timestamp_f64(secs: f64) -> Result<Self, DateError> {
        Ok(Self {
            instant: from_epoch_f64(secs)?,
        })
    }

    // ── field accessors (read) ────────────────────────────────────────

    /// Calendar year.
    #[inline]
    pub fn year(&self) -> i32 {
        self.instant.year()
    }

    /// Calendar month, 1–12.
    #[inline]
    pub fn month(&self) -> u32 {
        self.instant.month()
    }

    /// Week of the year: whole 7-day blocks since January 1st, 0-based.
    #[inline]
    pub fn week(&self) -> u32 {
        self.instant.ordinal0() / 7
    }

    /// Day of the month, 1-based.
    #[inline]
    pub fn day(&self) -> u32 {
        self.instant.day()
    }

    /// Hour, 0–23.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    /// Minute, 0–59.
    #[inline]
    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    /// Second, 0–59.
    #[inline]
    pub fn second(&self) -> u32 {
        self.instant.second()
    }

    /// Microsecond, 0–999 999.
    #[inline]
    pub fn microsecond(&self) -> u32 {
        self.instant.nanosecond() / 1_000
    }

    // ── field accessors (write) ───────────────────────────────────────

    /// Replace the year component directly.
    ///
    /// February 29th mapped into a non-leap target year clamps back to
    /// February 28th.
    pub fn set_year(&mut self, year: i32) -> Result<(), DateError> {
        let replaced = match self.instant.with_year(year) {
            Some(dt) => dt,
            // Feb 29 is the only in-range date that can vanish when the
            // year changes.
            None => NaiveDate::from_ymd_opt(year, 2, 28)
                .map(|d| d.and_time(self.instant.time()))
                .ok_or_else(|| {
                    DateError::OutOfRange(format!(
                        "year {year} is outside the supported calendar range"
                    ))
                })?,
        };
        self.instant = replaced;
        Ok(())
    }

    /// Shift by `(month − current month)` calendar months.
    ///
    /// Values outside 1–12 roll the year; a short target month clamps the
    /// day-of-month to its last day (2009-01-31 with `set_month(2)` lands
    /// on 2009-02-28).
    pub fn set_month(&mut self, month: i64) -> Result<(), DateError> {
        self.shift_months(month - i64::from(self.month()))
    }

    /// Shift by `(week − current week)` whole weeks; the day-of-week is
    /// preserved since the shift is a multiple of 7 days.
    pub fn set_week(&mut self, week: i64) -> Result<(), DateError> {
        let delta = week - i64::from(self.week());
        self.shift(span(delta, "weeks", Duration::try_weeks)?)
    }

    /// Shift by `(day − current day)` days; values beyond the current
    /// month's length roll into subsequent months, values ≤ 0 roll
    /// backwards.
    ///
    /// To land on the literal last day of the month without risking a
    /// rollover, use [`end_of_month`](Self::end_of_month) or
    /// [`days_in_month`](Self::days_in_month) instead of this setter.
    pub fn set_day(&mut self, day: i64) -> Result<(), DateError> {
        let delta = day - i64::from(self.day());
        self.shift(span(delta, "days", Duration::try_days)?)
    }

    /// Shift by `(hour − current hour)` hours; rolls the day boundary.
    pub fn set_hour(&mut self, hour: i64) -> Result<(), DateError> {
        let delta = hour - i64::from(self.hour());
        self.shift(span(delta, "hours", Duration::try_hours)?)
    }

    /// Shift by `(minute − current minute)` minutes; rolls the hour.
    pub fn set_minute(&mut self, minute: i64) -> Result<(), DateError> {
        let delta = minute - i64::from(self.minute());
        self.shift(span(delta, "minutes", Duration::try_minutes)?)
    }

    /// Shift by `(second − current second)` seconds; rolls the minute.
    pub fn set_second(&mut self, second: i64) -> Result<(), DateError> {
        let delta = second - i64::from(self.second());
        self.shift(span(delta, "seconds", Duration::try_seconds)?)
    }

    /// Shift by `(microsecond − current microsecond)` microseconds; rolls
    /// the second.
    pub fn set_microsecond(&mut self, microsecond: i64) -> Result<(), DateError> {
        let delta = microsecond - i64::from(self.microsecond());
        self.shift(Duration::microseconds(delta))
    }

    // ── whole-portion accessors ───────────────────────────────────────

    /// The date portion.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.instant.date()
    }

    /// Replace the date portion, keeping the time-of-day.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.instant = date.and_time(self.instant.time());
    }

    /// The time-of-day portion.
    #[inline]
    pub fn time(&self) -> NaiveTime {
        self.instant.time()
    }

    /// Replace the time-of-day portion, keeping the date.
    pub fn set_time(&mut self, time: NaiveTime) {
        self.instant = self.instant.date().and_time(time);
    }

    /// The full civil date-time.
    #[inline]
    pub fn datetime(&self) -> NaiveDateTime {
        self.instant
    }

    /// Replace the full civil date-time.
    pub fn set_datetime(&mut self, dt: NaiveDateTime) {
        self.instant = dt;
    }

    /// Broken-down components mirroring a `struct tm`-style 9-tuple:
    /// `(year, month, day, hour, minute, second, weekday [Mon = 0],
    /// day-of-year [1-based], −1)`.
    pub fn components(&self) -> [i64; 9] {
        [
            i64::from(self.year()),
            i64::from(self.month()),
            i64::from(self.day()),
            i64::from(self.hour()),
            i64::from(self.minute()),
            i64::from(self.second()),
            i64::from(self.instant.weekday().num_days_from_monday()),
            i64::from(self.instant.ordinal()),
            -1,
        ]
    }

    /// Replace the instant from broken-down components via an epoch-seconds
    /// round trip.
    ///
    /// The round trip is whole-seconds only: sub-second precision is
    /// dropped here on purpose, even when a seventh (microsecond)
    /// component is supplied.  Use [`set_time`](Self::set_time) or
    /// [`set_microsecond`](Self::set_microsecond) to keep microseconds.
    pub fn set_components(&mut self, components: &[i64]) -> Result<(), DateError> {
        let resolved = from_components(components)?;
        self.instant = from_epoch_f64(resolved.and_utc().timestamp() as f64)?;
        Ok(())
    }

    // ── timestamp conversion ──────────────────────────────────────────

    /// Epoch seconds (UTC-naive), truncated towards negative infinity.
    ///
    /// Instants beyond [`MAX`](crate::MAX) return `MAX`'s timestamp
    /// instead of overflowing a host timestamp range.  There is no
    /// symmetric clamp at [`MIN`](crate::MIN): pre-epoch instants yield
    /// negative timestamps.
    pub fn timestamp(&self) -> i64 {
        if self.instant > crate::MAX.instant {
            return crate::MAX.instant.and_utc().timestamp();
        }
        self.instant.and_utc().timestamp()
    }

    /// Replace the instant from whole epoch seconds.
    pub fn set_timestamp(&mut self, secs: i64) -> Result<(), DateError> {
        self.instant = Self::from_timestamp(secs)?.instant;
        Ok(())
    }

    /// Replace the instant from fractional epoch seconds.
    pub fn set_timestamp_f64(&mut self, secs: f64) -> Result<(), DateError> {
        self.instant = from_epoch_f64(secs)?;
        Ok(())
    }

    // ── boolean queries ───────────────────────────────────────────────

    /// Whether the date portion equals today's local date.  Re-reads the
    /// host clock on every call.
    pub fn is_today(&self) -> bool {
        self.instant.date() == Local::now().date_naive()
    }

    /// Whether the date portion (ignoring time) is after today's local
    /// date.
    pub fn is_future_date(&self) -> bool {
        self.instant.date() > Local::now().date_naive()
    }

    /// Whether the date portion (ignoring time) is before today's local
    /// date.
    pub fn is_past_date(&self) -> bool {
        self.instant.date() < Local::now().date_naive()
    }

    // ── internal shifting ─────────────────────────────────────────────

    pub(crate) fn shift(&mut self, delta: Duration) -> Result<(), DateError> {
        let shifted = self.instant.checked_add_signed(delta).ok_or_else(|| {
            DateError::OutOfRange(format!(
                "shifting by {delta} leaves the supported calendar range"
            ))
        })?;
        self.instant = shifted;
        Ok(())
    }

    pub(crate) fn shift_months(&mut self, delta: i64) -> Result<(), DateError> {
        let magnitude = u32::try_from(delta.unsigned_abs()).map_err(|_| {
            DateError::OutOfRange(format!("{delta} months exceeds the supported calendar range"))
        })?;
        let months = Months::new(magnitude);
        let shifted = if delta >= 0 {
            self.instant.checked_add_months(months)
        } else {
            self.instant.checked_sub_months(months)
        }
        .ok_or_else(|| {
            DateError::OutOfRange(format!(
                "shifting by {delta} months leaves the supported calendar range"
            ))
        })?;
        self.instant = shifted;
        Ok(())
    }
}

fn span(
    amount: i64,
    unit: &'static str,
    build: fn(i64) -> Option<Duration>,
) -> Result<Duration, DateError> {
    build(amount).ok_or_else(|| {
        DateError::OutOfRange(format!("{amount} {unit} exceeds the supported duration range"))
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self {
            instant: date.and_time(NaiveTime::MIN),
        }
    }
}

impl From<NaiveDateTime> for Date {
    fn from(dt: NaiveDateTime) -> Self {
        Self { instant: dt }
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────
//
// Operators delegate to chrono's `NaiveDateTime` arithmetic and share its
// panic-on-overflow semantics; fallible shifting goes through the setters.

impl Add<Duration> for Date {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        Self {
            instant: self.instant + rhs,
        }
    }
}

impl AddAssign<Duration> for Date {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        self.instant += rhs;
    }
}

impl Sub<Duration> for Date {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        Self {
            instant: self.instant - rhs,
        }
    }
}

impl SubAssign<Duration> for Date {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        self.instant -= rhs;
    }
}

impl Sub for Date {
    type Output = Duration;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.instant - rhs.instant
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────
//
// A `Date` serialises as fractional epoch seconds (UTC-naive), microsecond
// precision preserved in the fraction.  No MAX clamp is applied here; the
// clamp belongs to the `timestamp` accessor alone.

#[cfg(feature = "serde")]
impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.instant.and_utc().timestamp_micros() as f64 / 1e6)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Date::from_timestamp_f64(secs).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn date(components: [i64; 6]) -> Date {
        Date::new(components).expect("valid test components")
    }

    #[test]
    fn timestamp_roundtrip() {
        for ts in [1, 123_456, 1_234_567_890, 2_145_916_799] {
            assert_eq!(Date::from_timestamp(ts).unwrap().timestamp(), ts);
        }
    }

    #[test]
    fn construction_dispatch_agrees_across_shapes() {
        let from_ts = Date::new(1_234_567_890).unwrap();
        let from_comps = Date::new([2009, 2, 13, 23, 31, 30]).unwrap();
        let from_dt = Date::new(from_comps.datetime()).unwrap();
        assert_eq!(from_ts, from_comps);
        assert_eq!(from_ts, from_dt);

        let mut replaced = Date::now();
        replaced.set_datetime(from_ts.datetime());
        assert_eq!(replaced, from_ts);
    }

    #[test]
    fn date_only_construction_defaults_to_midnight() {
        let d = Date::new(NaiveDate::from_ymd_opt(2009, 10, 2).unwrap()).unwrap();
        assert_eq!((d.hour(), d.minute(), d.second()), (0, 0, 0));
        assert_eq!(d.day(), 2);
    }

    #[test]
    fn ago_offsets_apply_in_order() {
        let base = NaiveDate::from_ymd_opt(2009, 3, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let d = Date::new_ago(
            base,
            Ago {
                months: 1,
                days: 2,
                hours: 3,
                ..Ago::default()
            },
        )
        .unwrap();
        // Mar 31 − 1 month clamps to Feb 28, then −2 days, −3 hours.
        assert_eq!(d.strftime("%Y-%m-%d %H:%M:%S"), "2009-02-26 09:00:00");
    }

    #[test]
    fn negative_ago_shifts_forward() {
        let d = Date::new_ago((), Ago { days: -1, ..Ago::default() }).unwrap();
        assert!(d.is_future_date());
        assert!(!Date::now().is_future_date());
    }

    #[test]
    fn set_year_directly_replaces() {
        let mut d = date([2009, 2, 14, 0, 31, 30]);
        d.set_year(1984).unwrap();
        assert_eq!(d.strftime("%Y-%m-%d %H:%M:%S"), "1984-02-14 00:31:30");
    }

    #[test]
    fn set_year_clamps_leap_day() {
        let mut d = date([2008, 2, 29, 6, 0, 0]);
        d.set_year(2009).unwrap();
        assert_eq!(d.strftime("%Y-%m-%d %H:%M:%S"), "2009-02-28 06:00:00");
    }

    #[test]
    fn set_month_shifts_by_delta() {
        let mut d = date([2009, 2, 14, 0, 31, 30]);
        d.set_month(6).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2009, 6, 14));
        d.set_month(3).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2009, 3, 14));
    }

    #[test]
    fn set_month_beyond_twelve_rolls_the_year() {
        let mut d = date([2009, 6, 15, 0, 0, 0]);
        d.set_month(13).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2010, 1, 15));
        d.set_month(0).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2009, 12, 15));
    }

    #[test]
    fn set_month_into_short_month_clamps_day() {
        // chrono's month arithmetic clamps the day to the target month's
        // length rather than overflowing into March.
        let mut d = date([2009, 1, 31, 0, 0, 0]);
        d.set_month(2).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2009, 2, 28));
    }

    #[test]
    fn set_week_preserves_weekday() {
        let mut d = date([2009, 2, 14, 0, 31, 30]);
        let weekday = d.datetime().weekday();
        d.set_week(12).unwrap();
        assert_eq!(d.week(), 12);
        assert_eq!(d.datetime().weekday(), weekday);
    }

    #[test]
    fn set_day_at_current_value_is_a_noop() {
        let mut d = date([2009, 1, 31, 8, 30, 0]);
        d.set_day(31).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2009, 1, 31));
    }

    #[test]
    fn set_day_beyond_month_length_rolls_over() {
        let mut d = date([2009, 1, 31, 0, 0, 0]);
        d.set_day(35).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2009, 2, 4));

        let mut d = date([2009, 3, 15, 0, 0, 0]);
        d.set_day(0).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2009, 2, 28));
    }

    #[test]
    fn time_setters_roll_boundaries() {
        let mut d = date([2009, 2, 14, 0, 0, 0]);
        d.set_hour(26).unwrap();
        assert_eq!((d.day(), d.hour()), (15, 2));
        d.set_minute(61).unwrap();
        assert_eq!((d.hour(), d.minute()), (3, 1));
        d.set_second(-1).unwrap();
        assert_eq!((d.minute(), d.second()), (0, 59));
        d.set_microsecond(1_000_001).unwrap();
        assert_eq!(d.microsecond(), 1);
        assert_eq!(d.second(), 0);
    }

    #[test]
    fn set_date_and_set_time_are_idempotent() {
        let mut d = date([2009, 2, 14, 11, 17, 36]);
        let before = d;
        d.set_date(d.date());
        d.set_time(d.time());
        assert_eq!(d, before);
    }

    #[test]
    fn set_date_keeps_time_and_set_time_keeps_date() {
        let mut d = date([2009, 2, 14, 0, 31, 30]);
        d.set_date(NaiveDate::from_ymd_opt(2004, 1, 12).unwrap());
        assert_eq!(d.strftime("%Y-%m-%d %H:%M:%S"), "2004-01-12 00:31:30");
        d.set_time(NaiveTime::from_hms_opt(11, 2, 45).unwrap());
        assert_eq!(d.strftime("%Y-%m-%d %H:%M:%S"), "2004-01-12 11:02:45");
    }

    #[test]
    fn set_components_drops_subsecond_precision() {
        let mut d = date([2009, 2, 14, 0, 31, 30]);
        d.set_microsecond(500_000).unwrap();
        assert_eq!(d.microsecond(), 500_000);
        // Even with an explicit microsecond component, the epoch-seconds
        // round trip truncates to whole seconds.
        d.set_components(&[2009, 2, 14, 0, 31, 30, 250]).unwrap();
        assert_eq!(d.microsecond(), 0);
        assert_eq!(d.second(), 30);
    }

    #[test]
    fn components_mirror_broken_down_shape() {
        let d = date([2009, 2, 14, 0, 31, 30]);
        // 2009-02-14 is a Saturday (weekday 5 from Monday), year-day 45.
        assert_eq!(d.components(), [2009, 2, 14, 0, 31, 30, 5, 45, -1]);
    }

    #[test]
    fn timestamp_clamps_at_max_only() {
        let far_future = date([2100, 1, 1, 0, 0, 0]);
        assert_eq!(far_future.timestamp(), crate::MAX.timestamp());

        // Asymmetric on purpose: no lower clamp at MIN.
        let pre_epoch = date([1969, 12, 31, 0, 0, 0]);
        assert_eq!(pre_epoch.timestamp(), -86_400);
    }

    #[test]
    fn set_timestamp_replaces_instant() {
        let mut d = Date::now();
        d.set_timestamp(1_234_567_890).unwrap();
        assert_eq!(d.strftime("%Y-%m-%d %H:%M:%S"), "2009-02-13 23:31:30");
        d.set_timestamp_f64(0.5).unwrap();
        assert_eq!(d.microsecond(), 500_000);
    }

    #[test]
    fn ordering_follows_the_instant() {
        let a = Date::from_timestamp(1_234).unwrap();
        let b = Date::from_timestamp(12_345).unwrap();
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a, Date::from_timestamp(1_234).unwrap());
    }

    #[test]
    fn duration_addition_returns_a_new_value() {
        let d = Date::from_timestamp(1_234_567_890).unwrap();
        let later = d + Duration::days(2);
        assert_eq!(later.strftime("%Y-%m-%d"), "2009-02-15");
        assert_eq!(d.strftime("%Y-%m-%d"), "2009-02-13");
        assert_eq!(later - d, Duration::days(2));
    }

    #[test]
    fn in_place_duration_addition_mutates() {
        let mut d = date([2004, 1, 12, 0, 0, 0]);
        d += Duration::days(10);
        assert_eq!((d.month(), d.day()), (1, 22));
        d -= Duration::hours(1);
        assert_eq!((d.day(), d.hour()), (21, 23));
    }

    #[test]
    fn far_shift_reports_out_of_range() {
        let mut d = date([2009, 1, 1, 0, 0, 0]);
        let err = d.set_day(i64::MAX / 4).unwrap_err();
        assert!(matches!(err, DateError::OutOfRange(_)));
    }

    #[test]
    fn compound_mutation_composes() {
        // Move back three months, then to day 1 of the resulting month.
        let mut d = date([2009, 5, 20, 9, 0, 0]);
        d.set_month(i64::from(d.month()) - 3).unwrap();
        d.set_day(1).unwrap();
        assert_eq!(d.strftime("%Y-%m-%d %H:%M:%S"), "2009-02-01 09:00:00");
    }

    #[test]
    fn past_date_query() {
        assert!(Date::from_timestamp(12_345).unwrap().is_past_date());
        assert!(Date::now().is_today());
        assert!(!Date::now().is_past_date());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip_keeps_microseconds() {
        let mut d = date([2009, 2, 14, 0, 31, 30]);
        d.set_microsecond(250_000).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
