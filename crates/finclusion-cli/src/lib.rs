//! CLI library components for the financial inclusion predictor.

pub mod answers;
pub mod config;
pub mod logging;
pub mod report;
