// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

/// Errors surfaced by [`Date`](crate::Date) construction and mutation.
///
/// All errors are returned synchronously at the offending call; the only
/// silently substituted value in the whole crate is the documented
/// [`MAX`](crate::MAX) clamp of [`Date::timestamp`](crate::Date::timestamp).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Constructor input of an unsupported shape, or with component values
    /// that do not form a valid civil date-time.
    #[error("invalid date input: {0}")]
    InvalidArgument(String),

    /// Arithmetic or conversion left the supported calendar range.
    #[error("date out of range: {0}")]
    OutOfRange(String),
}
