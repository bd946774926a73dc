//! Deterministic sell-suitability scoring and ranking for advisor books of
//! business.

pub mod accounts;
pub mod config;
pub mod history;
pub mod output;
pub mod scoring;
