// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! String views of a [`Date`]: strftime-style patterns, the friendly and
//! fancy human-readable forms, and single-quoted SQL literals.

use crate::date::Date;
use std::fmt;

/// English ordinal suffix for a day-of-month.
///
/// `st` for 1, 21, 31; `nd` for 2; `rd` for 3; `th` otherwise (including
/// 22 and 23, matching the long-standing output of this format).
fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

impl Date {
    /// Render with a chrono percent-directive pattern.
    ///
    /// The pattern must only use directives chrono's formatter knows;
    /// unknown directives make the render fail at display time.
    ///
    /// ```
    /// use civildate::Date;
    ///
    /// let d = Date::from_timestamp(1_234_567_890)?;
    /// assert_eq!(d.strftime("%Y-%m-%d, %H:%M:%S"), "2009-02-13, 23:31:30");
    /// # Ok::<(), civildate::DateError>(())
    /// ```
    pub fn strftime(&self, format: &str) -> String {
        self.datetime().format(format).to_string()
    }

    /// Render with the default pattern, `"%d %b %Y"`.
    pub fn format_default(&self) -> String {
        self.strftime("%d %b %Y")
    }

    /// Friendly form: `14 Feb 2009`.
    pub fn friendly(&self) -> String {
        self.strftime("%d %b %Y")
    }

    /// Fancy form for invoices and forms: `February 14th, 2009`.
    ///
    /// The day keeps `%d` zero-padding, so the 5th renders as `05th`.
    pub fn fancy(&self) -> String {
        self.render_fancy(true)
    }

    /// [`fancy`](Self::fancy) without the trailing `, year`.
    pub fn fancy_no_year(&self) -> String {
        self.render_fancy(false)
    }

    fn render_fancy(&self, display_year: bool) -> String {
        let mut out = format!(
            "{}{}",
            self.datetime().format("%B %d"),
            ordinal_suffix(self.day())
        );
        if display_year {
            out.push_str(&format!(", {}", self.datetime().format("%Y")));
        }
        out
    }

    /// Single-quoted SQL date literal: `'2009-02-14'`.
    ///
    /// The crate guarantees the literal shape only; splicing into a
    /// statement is the caller's responsibility.
    pub fn sql_date(&self) -> String {
        self.strftime("'%Y-%m-%d'")
    }

    /// Single-quoted SQL time literal: `'00:31:30'`.
    pub fn sql_time(&self) -> String {
        self.strftime("'%H:%M:%S'")
    }

    /// Single-quoted SQL date-time literal: `'2009-02-14 00:31:30'`.
    pub fn sql(&self) -> String {
        self.strftime("'%Y-%m-%d %H:%M:%S'")
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date({})", self.datetime().format("%Y-%m-%d, %H:%M:%S"))
    }
}
