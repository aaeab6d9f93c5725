//! Column-scoped normalizers.
//!
//! - **date**: four-format date reconciliation to calendar dates
//! - **phone**: international `+` prefixed phone numbers per country
//! - **weight**: free-text weights to kilograms
//!
//! Each has a single-value function and a table pass over one column. A
//! value that cannot be normalized becomes null; the table pass returns how
//! many values did.

pub mod date;
pub mod phone;
pub mod weight;

pub use date::{DateFormat, clean_dates, normalize_date, normalize_dates};
pub use phone::{clean_phone_numbers, normalize_phone};
pub use weight::{WeightUnit, convert_product_weights, normalize_weight};
