//! Error types for serialdate-rs.
//!
//! Every invariant violation in the workspace is a range violation of some
//! named field — a year outside the supported calendar, a month code that is
//! not 1–12, a serial number before the epoch.  A single structured error
//! variant carries the field name, the rejected value, and the accepted
//! bounds, so callers never have to parse a message to find out what was
//! wrong.

use thiserror::Error;

/// The top-level error type used throughout serialdate-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field fell outside its accepted range.
    #[error("{field} ({value}) out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending field (e.g. `"year"`, `"serial"`).
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// The smallest accepted value.
        min: i64,
        /// The largest accepted value.
        max: i64,
    },
}

impl Error {
    /// Construct an [`Error::OutOfRange`] for the given field and bounds.
    pub fn out_of_range(
        field: &'static str,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Error::OutOfRange {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Shorthand `Result` type used throughout serialdate-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field_and_bounds() {
        let err = Error::out_of_range("month", 13, 1, 12);
        assert_eq!(err.to_string(), "month (13) out of range [1, 12]");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            Error::out_of_range("year", 1899, 1900, 9999),
            Error::OutOfRange {
                field: "year",
                value: 1899,
                min: 1900,
                max: 9999,
            }
        );
    }
}
