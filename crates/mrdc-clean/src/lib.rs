//! Data cleaning core for retail extracts.
//!
//! Raw tables arrive from a relational source, PDF documents, a REST API and
//! object storage with inconsistent formats and a handful of known-bad
//! values. This crate turns them into warehouse-ready tables:
//!
//! - **filters**: null-drop and group-frequency outlier-drop over a whole table
//! - **normalization**: date, phone number and weight column normalizers
//! - **corrections**: declarative literal rewrites per entity
//! - **entities**: one cleaning pipeline per business entity
//!
//! # Example
//!
//! ```ignore
//! use mrdc_clean::{clean_entity, CleaningOptions};
//! use mrdc_model::EntityKind;
//!
//! let cleaned = clean_entity(EntityKind::Users, raw_users, &CleaningOptions::default())?;
//! sink.write(&cleaned, EntityKind::Users.default_destination())?;
//! ```
//!
//! # Design Principles
//!
//! - **Whole tables**: group-frequency filtering needs the complete table
//! - **Free functions**: no cleaner holds state or depends on another
//! - **Tolerant values**: a malformed date, weight or phone number becomes
//!   null for that field; only a missing column is an error

mod error;
mod options;

pub mod corrections;
pub mod entities;
pub mod filters;
pub mod normalization;
pub mod values;

pub use error::{CleanError, Result};
pub use options::{
    CleaningOptions, DEFAULT_CARD_LENGTH_MIN_GROUP, DEFAULT_CATEGORY_MIN_GROUP,
    DEFAULT_NULL_SENTINEL,
};

pub use corrections::{ValueCorrection, apply_corrections, corrections_for};
pub use entities::{
    clean_card_data, clean_entity, clean_event_data, clean_order_data, clean_product_data,
    clean_store_data, clean_user_data,
};
pub use filters::{clean_null_values, filter_by_group_frequency};
pub use normalization::{
    DateFormat, clean_dates, clean_phone_numbers, convert_product_weights, normalize_date,
    normalize_phone, normalize_weight,
};
