// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil Date/Time Module
//!
//! This module provides a single mutable value type, [`Date`], that unifies
//! the usual instant-in-time representations — epoch timestamp, calendar
//! date, wall-clock time, and broken-down components — behind one set of
//! read/write accessors.
//!
//! # Core types
//!
//! - [`Date`] — a civil (time-zone-naive) date-time with microsecond
//!   precision and writable calendar fields.
//! - [`DateInput`] — tagged union over the legal constructor inputs.
//! - [`Ago`] — named backward offsets applied at construction.
//! - [`DateError`] — error type for construction and field mutation.
//!
//! # Field mutation contract
//!
//! Every field setter re-expresses the requested change as a *delta*
//! against the current instant, so side effects on neighbouring fields
//! follow calendar semantics rather than naive replacement:
//!
//! | Setter | Shift applied |
//! |--------|---------------|
//! | [`Date::set_month`] | `(v − month)` calendar months |
//! | [`Date::set_week`] | `(v − week)` whole weeks |
//! | [`Date::set_day`] | `(v − day)` days |
//! | [`Date::set_hour`] | `(v − hour)` hours |
//! | [`Date::set_minute`] | `(v − minute)` minutes |
//! | [`Date::set_second`] | `(v − second)` seconds |
//! | [`Date::set_microsecond`] | `(v − microsecond)` microseconds |
//!
//! Out-of-range inputs are therefore legal and roll the next-larger field:
//! `set_day(35)` in January lands in February, `set_month(13)` advances a
//! year. Compound mutations compose predictably — "move back three months,
//! then go to day 1" means exactly that.
//!
//! # Epoch convention
//!
//! Epoch-seconds conversions are UTC-naive in both directions, so a
//! timestamp round trip is exact and independent of the host time zone.
//! "Now" (default construction and the `is_*` queries) reads the host
//! clock as local wall-clock time.
//!
//! # Example
//!
//! ```
//! use civildate::Date;
//!
//! let mut d = Date::from_timestamp(1_234_567_890)?;
//! assert_eq!(d.strftime("%Y-%m-%d, %H:%M:%S"), "2009-02-13, 23:31:30");
//!
//! d.set_day(d.day() as i64 + 10)?;
//! assert_eq!(d.friendly(), "23 Feb 2009");
//! assert_eq!(d.sql(), "'2009-02-23 23:31:30'");
//! # Ok::<(), civildate::DateError>(())
//! ```

mod date;
mod error;
mod format;
mod input;
mod ranges;

use std::sync::LazyLock;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use date::Date;
pub use error::DateError;
pub use input::{Ago, DateInput};

// ── Sentinels ─────────────────────────────────────────────────────────────

/// Earliest sentinel value: the Unix epoch, 1970-01-01 00:00:00.
///
/// Read-only after first touch. [`Date::timestamp`] does *not* clamp
/// against this lower bound; only [`MAX`] is clamped.
pub static MIN: LazyLock<Date> = LazyLock::new(|| {
    Date::from_timestamp(0).expect("the Unix epoch is a representable instant")
});

/// Latest sentinel value: 2038-01-01 00:00:00 (timestamp 2 145 916 800).
///
/// Chosen to stay inside the smallest timestamp range found on real hosts.
/// [`Date::timestamp`] substitutes this sentinel's timestamp for any
/// instant beyond it.
pub static MAX: LazyLock<Date> = LazyLock::new(|| {
    Date::from_timestamp(2_145_916_800).expect("2038-01-01 is a representable instant")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_timestamps() {
        assert_eq!(MIN.timestamp(), 0);
        assert_eq!(MAX.timestamp(), 2_145_916_800);
        assert_eq!(MAX.year(), 2038);
        assert_eq!((MAX.month(), MAX.day()), (1, 1));
        assert!(*MIN < *MAX);
    }
}
