//! Aggregation and selection over the hackwall message list.
//!
//! Computes the deterministic message of the day, per-date and per-author
//! summary counts, chart series, and text reports. Everything here is a
//! pure, synchronous fold over a read-only slice.

pub mod aggregations;
pub mod daily;
pub mod palette;
pub mod reports;

pub use aggregations::{aggregate, AuthorCount, DateCount, StatsSnapshot};
pub use daily::{day_key, pick_daily, DailyPick};
pub use reports::ChartSeries;
