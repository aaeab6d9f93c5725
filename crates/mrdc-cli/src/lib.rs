//! CLI library components for the retail data cleaner.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
