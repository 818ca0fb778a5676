//! # Analysis Module
//!
//! Aggregate statistics over a recorded event list.
//!
//! ## Submodules
//!
//! - `summary` - Per-type counts, xG / xA totals, pass completion

pub mod summary;

pub use summary::EventSummary;
