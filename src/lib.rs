//! Calendar-aware age and dates difference formatting.
//!
//! ```
//! use chrono::NaiveDate;
//!
//! let dob = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let on = NaiveDate::from_ymd_opt(2003, 3, 16).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! assert_eq!(person::age_on(dob, on, "%Y %M %D").unwrap(), "3 years 2 months 15 days");
//! ```

pub mod age;
pub mod datediff;
pub mod error;
pub mod logging;
pub mod name;

pub use age::{age, age_on, is_adult, is_adult_on};
pub use datediff::{Diff, FormatSpec};
pub use error::{Error, Result};
pub use name::{full_name, full_name_default, full_name_default_format_fn, full_name_format_fn};
