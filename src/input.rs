// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Constructor input resolution.
//!
//! [`DateInput`] is an explicit tagged union over every shape a [`Date`]
//! can be built from; [`Ago`] carries the optional backward offsets a
//! constructor may apply once the base instant is resolved.

use crate::error::DateError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// The legal primary inputs to [`Date::new`](crate::Date::new).
///
/// Each variant resolves to a concrete civil date-time; resolution never
/// leaves an unnormalized value behind (a `Components` list with
/// `month = 13` or `day = 32` is rejected, not carried).
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// The current local wall-clock date-time, read at resolution time.
    Now,
    /// Epoch seconds, UTC-naive. The fractional part becomes microseconds.
    Timestamp(f64),
    /// 3–9 broken-down components `(year, month, day[, hour, minute,
    /// second, microsecond, …])`. Missing trailing fields default to zero;
    /// the eighth and ninth slots (weekday / year-day of a full 9-tuple)
    /// are accepted and ignored.
    Components(Vec<i64>),
    /// A date-only value, combined with midnight.
    DateOnly(NaiveDate),
    /// A full civil date-time, used as-is.
    DateTime(NaiveDateTime),
}

impl DateInput {
    pub(crate) fn resolve(self) -> Result<NaiveDateTime, DateError> {
        match self {
            DateInput::Now => Ok(Local::now().naive_local()),
            DateInput::Timestamp(secs) => from_epoch_f64(secs),
            DateInput::Components(items) => from_components(&items),
            DateInput::DateOnly(date) => Ok(date.and_time(NaiveTime::MIN)),
            DateInput::DateTime(dt) => Ok(dt),
        }
    }
}

impl From<()> for DateInput {
    fn from(_: ()) -> Self {
        DateInput::Now
    }
}

impl From<i64> for DateInput {
    fn from(secs: i64) -> Self {
        DateInput::Timestamp(secs as f64)
    }
}

impl From<f64> for DateInput {
    fn from(secs: f64) -> Self {
        DateInput::Timestamp(secs)
    }
}

impl From<&[i64]> for DateInput {
    fn from(items: &[i64]) -> Self {
        DateInput::Components(items.to_vec())
    }
}

impl<const N: usize> From<[i64; N]> for DateInput {
    fn from(items: [i64; N]) -> Self {
        DateInput::Components(items.to_vec())
    }
}

impl From<Vec<i64>> for DateInput {
    fn from(items: Vec<i64>) -> Self {
        DateInput::Components(items)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::DateOnly(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

/// Named backward offsets applied after the base instant resolves.
///
/// Applied in declaration order: years, months, days, hours, minutes,
/// seconds. Years and months shift calendar-aware (variable month
/// lengths); the rest are plain durations. Negative values shift forward:
///
/// ```
/// use civildate::{Ago, Date};
///
/// let tomorrow = Date::new_ago((), Ago { days: -1, ..Ago::default() })?;
/// assert!(tomorrow.is_future_date());
/// # Ok::<(), civildate::DateError>(())
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ago {
    pub years: i32,
    pub months: i32,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

// ── Resolution helpers ────────────────────────────────────────────────────

pub(crate) fn from_epoch_f64(secs: f64) -> Result<NaiveDateTime, DateError> {
    if !secs.is_finite() {
        return Err(DateError::InvalidArgument(format!(
            "timestamp must be finite, got {secs}"
        )));
    }
    let whole = secs.floor();
    let mut base = whole as i64;
    let mut micros = ((secs - whole) * 1e6).round() as u32;
    if micros >= 1_000_000 {
        base += 1;
        micros = 0;
    }
    DateTime::from_timestamp(base, micros * 1_000)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| {
            DateError::OutOfRange(format!(
                "timestamp {secs} is outside the supported calendar range"
            ))
        })
}

pub(crate) fn from_components(items: &[i64]) -> Result<NaiveDateTime, DateError> {
    if !(3..=9).contains(&items.len()) {
        return Err(DateError::InvalidArgument(format!(
            "expected 3 to 9 date/time components, got {} ({items:?})",
            items.len()
        )));
    }

    let mut fields = [0i64; 7];
    let used = items.len().min(7);
    fields[..used].copy_from_slice(&items[..used]);
    let [year, month, day, hour, minute, second, micro] = fields;

    let invalid =
        || DateError::InvalidArgument(format!("components {items:?} are not a valid date-time"));

    let year = i32::try_from(year).map_err(|_| invalid())?;
    let date = NaiveDate::from_ymd_opt(
        year,
        u32::try_from(month).map_err(|_| invalid())?,
        u32::try_from(day).map_err(|_| invalid())?,
    )
    .ok_or_else(invalid)?;

    date.and_hms_micro_opt(
        u32::try_from(hour).map_err(|_| invalid())?,
        u32::try_from(minute).map_err(|_| invalid())?,
        u32::try_from(second).map_err(|_| invalid())?,
        u32::try_from(micro).map_err(|_| invalid())?,
    )
    .ok_or_else(invalid)
}
