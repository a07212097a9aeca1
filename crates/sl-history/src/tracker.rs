//! Bounded, time-ordered buffer of aggregate latency samples.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Most samples kept; the oldest is evicted past this.
pub const HISTORY_CAPACITY: usize = 20;

/// One point on the live chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    /// RFC 3339 timestamp of run completion.
    pub timestamp: String,
    /// Aggregate latency of that run, milliseconds.
    pub latency: f64,
}

/// Fixed-capacity FIFO of latency samples, oldest first.
///
/// Created empty at process start and only ever appended to, once per
/// successful run, in completion order. There is no clear operation.
#[derive(Debug, Clone, Default)]
pub struct HistoryTracker {
    buffer: VecDeque<HistorySample>,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self {
            buffer: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Append a sample stamped now, evicting the oldest past capacity.
    ///
    /// Called exactly once per successful run, after reconciliation;
    /// never on failure.
    pub fn record(&mut self, latency: f64) {
        self.record_at(chrono::Utc::now().to_rfc3339(), latency);
    }

    // Timestamp injection kept separate so tests are deterministic.
    fn record_at(&mut self, timestamp: String, latency: f64) {
        self.buffer.push_back(HistorySample { timestamp, latency });
        if self.buffer.len() > HISTORY_CAPACITY {
            self.buffer.pop_front();
        }
    }

    /// Samples oldest-first.
    pub fn samples(&self) -> impl Iterator<Item = &HistorySample> {
        self.buffer.iter()
    }

    /// The most recent sample, if any run has completed.
    pub fn latest(&self) -> Option<&HistorySample> {
        self.buffer.back()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
