//! # serialdate
//!
//! A serial-number calendar date and financial day-count library.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `sd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! serialdate = "0.1"
//! ```
//!
//! ```rust
//! use serialdate::time::{Date, Weekday};
//!
//! let date = Date::from_ymd(2001, 11, 9).expect("valid date");
//! assert_eq!(date.weekday(), Weekday::Friday);
//!
//! let next_monday = date.following_day_of_week(Weekday::Monday).expect("in range");
//! assert_eq!(next_monday, Date::from_ymd(2001, 11, 12).expect("valid date"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use sd_core as core;

/// Date, weekday, day-count, and annual-rule types.
pub use sd_time as time;
