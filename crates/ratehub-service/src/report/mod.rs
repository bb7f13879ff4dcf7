//! Aggregate reporting for the admin dashboard.

pub mod stats;

pub use stats::StatsService;
