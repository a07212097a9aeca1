//! sl-history: bounded latency time series for the live chart.

pub mod tracker;

pub use tracker::{HISTORY_CAPACITY, HistorySample, HistoryTracker};
