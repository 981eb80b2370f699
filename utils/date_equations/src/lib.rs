//! # Date Equations
//!
//! Date Equations is a library focused on implementing
//! small, highly performant calendar calculations. Currently,
//! the implementation is informed by the work done by
//! Cassio Neri and Lorenz Schneider on applying Euclidean
//! affine functions to calendar algorithms.
//!
//! ``` rust
//! use date_equations::gregorian;
//!
//! let date = gregorian::ymd_from_day_number(0);
//! assert_eq!(date, (1, 1, 1));
//!
//! let day_number = gregorian::day_number_from_ymd(1970, 1, 1);
//! assert_eq!(day_number, 719_162);
//! ```
#![no_std]

pub mod gregorian;
