//! Thread-safe statistics tracking for parallel runs

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Thread-safe statistics for a minify run
///
/// File counts use `AtomicU32`; byte totals need `AtomicU64` since a large
/// site easily exceeds 4 GiB of markup summed over all files.
#[derive(Debug, Default)]
pub struct RunStats {
    files: AtomicU32,
    failed: AtomicU32,
    bytes_before: AtomicU64,
    bytes_after: AtomicU64,
}

/// Plain copy of [`RunStats`] taken after a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Files minified successfully
    pub files: usize,
    /// Files that failed
    pub failed: usize,
    /// Total size of minified files before the run
    pub bytes_before: u64,
    /// Total size of minified files after the run
    pub bytes_after: u64,
}

impl StatsSnapshot {
    /// Bytes removed across all minified files
    pub fn saved(&self) -> u64 {
        self.bytes_before.saturating_sub(self.bytes_after)
    }

    /// Files attempted
    pub fn total(&self) -> usize {
        self.files + self.failed
    }
}

impl RunStats {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one minified file
    pub fn record_file(&self, bytes_before: usize, bytes_after: usize) {
        self.files.fetch_add(1, Ordering::Relaxed);
        self.bytes_before
            .fetch_add(bytes_before as u64, Ordering::Relaxed);
        self.bytes_after.fetch_add(bytes_after as u64, Ordering::Relaxed);
    }

    /// Record one failed file
    pub fn inc_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Files minified so far
    pub fn files(&self) -> usize {
        self.files.load(Ordering::Relaxed) as usize
    }

    /// Files failed so far
    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::Relaxed) as usize
    }

    /// Create a snapshot of current stats
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            files: self.files(),
            failed: self.failed(),
            bytes_before: self.bytes_before.load(Ordering::Relaxed),
            bytes_after: self.bytes_after.load(Ordering::Relaxed),
        }
    }
}
